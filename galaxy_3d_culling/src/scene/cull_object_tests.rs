use super::*;

fn create_test_mesh() -> Arc<Mesh> {
    Arc::new(Mesh::new("cube", vec![
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ]))
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_new_object_is_visible_and_renderable() {
    let object = CullObject::new("obj", Mat4::IDENTITY, Some(create_test_mesh()));

    assert_eq!(object.flags(), ObjectFlags::VISIBLE | ObjectFlags::RENDERABLE);
    assert!(object.is_visible());
    assert!(object.is_renderable());
}

#[test]
fn test_set_visible_only_touches_visible_bit() {
    let mut object = CullObject::new("obj", Mat4::IDENTITY, None);

    object.set_visible(false);
    assert!(!object.is_visible());
    assert!(object.flags().contains(ObjectFlags::RENDERABLE));

    object.set_visible(true);
    assert!(object.is_visible());
}

#[test]
fn test_set_renderable() {
    let mut object = CullObject::new("obj", Mat4::IDENTITY, None);

    object.set_renderable(false);
    assert!(!object.is_renderable());
    assert!(object.is_visible());
}

#[test]
fn test_set_flags() {
    let mut object = CullObject::new("obj", Mat4::IDENTITY, None);

    object.set_flags(ObjectFlags::empty());
    assert!(!object.is_visible());
    assert!(!object.is_renderable());
}

// ============================================================================
// CullCandidate
// ============================================================================

#[test]
fn test_candidate_without_mesh() {
    let object = CullObject::new("empty", Mat4::IDENTITY, None);

    assert_eq!(object.name(), "empty");
    assert!(!object.has_geometry());
    assert_eq!(object.local_vertices(), None);
    assert_eq!(object.local_bounds(), None);
}

#[test]
fn test_candidate_with_mesh() {
    let mesh = create_test_mesh();
    let object = CullObject::new("cube", Mat4::IDENTITY, Some(mesh.clone()));

    assert!(object.has_geometry());
    assert_eq!(object.local_vertices().map(<[Vec3]>::len), Some(2));
    assert_eq!(object.local_bounds(), mesh.bounds());
}

#[test]
fn test_shared_mesh() {
    let mesh = create_test_mesh();
    let a = CullObject::new("a", Mat4::IDENTITY, Some(mesh.clone()));
    let b = CullObject::new("b", Mat4::from_translation(Vec3::X), Some(mesh.clone()));

    assert_eq!(Arc::strong_count(&mesh), 3);
    assert!(Arc::ptr_eq(a.mesh().unwrap(), b.mesh().unwrap()));
}

#[test]
fn test_set_mesh_and_matrix() {
    let mut object = CullObject::new("obj", Mat4::IDENTITY, None);
    let matrix = Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0));

    object.set_mesh(Some(create_test_mesh()));
    object.set_world_matrix(matrix);

    assert!(object.has_geometry());
    assert_eq!(object.world_matrix(), matrix);
}

#[test]
fn test_boxed_candidate_forwards() {
    let mut boxed: Box<dyn CullCandidate> =
        Box::new(CullObject::new("boxed", Mat4::IDENTITY, Some(create_test_mesh())));

    assert_eq!(boxed.name(), "boxed");
    assert!(boxed.has_geometry());
    boxed.set_visible(false);
}
