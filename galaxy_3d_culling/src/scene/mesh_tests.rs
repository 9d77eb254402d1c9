use super::*;

#[test]
fn test_mesh_new() {
    let mesh = Mesh::new("quad", vec![
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
    ]);

    assert_eq!(mesh.name(), "quad");
    assert_eq!(mesh.vertex_count(), 4);
    assert!(!mesh.is_empty());
    assert_eq!(mesh.vertices()[2], Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_mesh_bounds_cached() {
    let mesh = Mesh::new("tri", vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, -1.0),
        Vec3::new(0.0, 3.0, 1.0),
    ]);

    assert_eq!(mesh.bounds(), Some(AABB::new(
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(2.0, 3.0, 1.0),
    )));
}

#[test]
fn test_empty_mesh_has_no_bounds() {
    let mesh = Mesh::new("empty", Vec::new());

    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.bounds(), None);
}
