use glam::Vec3;
use crate::config::CullingConfig;
use crate::error::Error;
use super::*;

fn create_test_camera() -> Camera {
    Camera::new(Vec3::ZERO, 60.0, 1.0, 1.0, 100.0)
}

fn create_rotated_camera() -> Camera {
    Camera::look_at(
        Vec3::new(10.0, 5.0, -20.0),
        Vec3::new(-3.0, 1.0, 4.0),
        Vec3::Y,
        70.0, 16.0 / 9.0, 0.5, 250.0,
    ).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_builder_default_epsilon() {
    assert_eq!(FrustumBuilder::new().normal_epsilon(), CullingConfig::DEFAULT_NORMAL_EPSILON);
    assert_eq!(FrustumBuilder::default(), FrustumBuilder::new());
}

#[test]
fn test_builder_from_config() {
    let config = CullingConfig::default().with_normal_epsilon(1e-4);
    assert_eq!(FrustumBuilder::from_config(&config).normal_epsilon(), 1e-4);
}

// ============================================================================
// Corners
// ============================================================================

#[test]
fn test_near_corners() {
    let corners = FrustumBuilder::corners(&create_test_camera());
    let half = (30.0_f32).to_radians().tan();

    let top_right = corners.near[FrustumCorners::TOP_RIGHT];
    assert!((top_right - Vec3::new(half, half, 1.0)).length() < 1e-6);

    let bottom_left = corners.near[FrustumCorners::BOTTOM_LEFT];
    assert!((bottom_left - Vec3::new(-half, -half, 1.0)).length() < 1e-6);
}

#[test]
fn test_far_corners_use_perspective_extents() {
    let camera = Camera::new(Vec3::ZERO, 60.0, 2.0, 1.0, 100.0);
    let corners = FrustumBuilder::corners(&camera);

    for i in 0..4 {
        let near = corners.near[i];
        let far = corners.far[i];
        assert!((far.x - near.x * 100.0).abs() < 1e-3);
        assert!((far.y - near.y * 100.0).abs() < 1e-3);
        assert_eq!(far.z, 100.0);
    }

    // Aspect ratio widens the frustum horizontally
    let top_right = corners.near[FrustumCorners::TOP_RIGHT];
    assert!((top_right.x - top_right.y * 2.0).abs() < 1e-6);
}

// ============================================================================
// build
// ============================================================================

#[test]
fn test_build_is_deterministic() {
    let builder = FrustumBuilder::new();
    let camera = create_rotated_camera();

    let first = builder.build(&camera).unwrap();
    let second = builder.build(&camera).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_build_orients_all_planes_towards_centroid() {
    let frustum = FrustumBuilder::new().build(&create_rotated_camera()).unwrap();

    for (face, distance) in FrustumFace::ALL.iter().zip(frustum.signed_distances(frustum.centroid())) {
        assert!(distance >= 0.0, "{} plane faces away from the centroid", face);
    }
}

#[test]
fn test_build_rotated_camera_classification() {
    let camera = create_rotated_camera();
    let frustum = FrustumBuilder::new().build(&camera).unwrap();

    let ahead = camera.position() + camera.forward() * 30.0;
    assert!(frustum.contains_point(ahead));

    let behind = camera.position() - camera.forward() * 30.0;
    assert!(!frustum.contains_point(behind));

    let beyond_far = camera.position() + camera.forward() * 251.0;
    assert!(!frustum.contains_point(beyond_far));

    let far_to_the_right = ahead + camera.right() * 1000.0;
    assert!(!frustum.contains_point(far_to_the_right));
}

#[test]
fn test_side_planes_pass_through_camera_position() {
    let camera = create_rotated_camera();
    let frustum = FrustumBuilder::new().build(&camera).unwrap();

    for face in [FrustumFace::Left, FrustumFace::Right, FrustumFace::Bottom, FrustumFace::Top] {
        let distance = frustum.plane(face).signed_distance(camera.position());
        assert!(distance.abs() < 1e-3, "{} plane misses the apex by {}", face, distance);
    }
}

#[test]
fn test_build_keeps_corners() {
    let camera = create_test_camera();
    let frustum = FrustumBuilder::new().build(&camera).unwrap();

    assert_eq!(*frustum.corners(), FrustumBuilder::corners(&camera));
}

// ============================================================================
// Invalid cameras
// ============================================================================

#[test]
fn test_build_zero_fov_is_configuration_error() {
    let mut camera = create_test_camera();
    camera.set_fov_y_degrees(0.0);

    let result = FrustumBuilder::new().build(&camera);
    assert!(matches!(result, Err(Error::ConfigurationError(_))));
}

#[test]
fn test_build_near_not_less_than_far_is_configuration_error() {
    let mut camera = create_test_camera();

    camera.set_clip_planes(100.0, 100.0);
    assert!(matches!(FrustumBuilder::new().build(&camera), Err(Error::ConfigurationError(_))));

    camera.set_clip_planes(200.0, 100.0);
    assert!(matches!(FrustumBuilder::new().build(&camera), Err(Error::ConfigurationError(_))));
}

#[test]
fn test_build_negative_aspect_is_configuration_error() {
    let mut camera = create_test_camera();
    camera.set_aspect_ratio(-1.0);

    assert!(FrustumBuilder::new().build(&camera).is_err());
}

#[test]
fn test_build_vanishing_fov_is_degenerate() {
    let mut camera = create_test_camera();
    camera.set_fov_y_degrees(1e-5);

    let result = FrustumBuilder::new().build(&camera);
    match result {
        // Side planes collapse onto the view axis first
        Err(err @ Error::DegenerateNormal { face: FrustumFace::Left, .. }) => assert!(err.is_configuration()),
        other => panic!("expected DegenerateNormal, got {:?}", other),
    }
}

#[test]
fn test_build_small_near_distance() {
    for near in [0.0005, 0.0008, 0.01] {
        let camera = Camera::new(Vec3::ZERO, 60.0, 1.0, near, 100.0);
        let frustum = FrustumBuilder::new().build(&camera).unwrap();

        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, 50.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, near * 0.5)));
    }
}

#[test]
fn test_build_narrow_fov() {
    let camera = Camera::new(Vec3::ZERO, 0.5, 1.0, 0.1, 1000.0);
    let frustum = FrustumBuilder::new().build(&camera).unwrap();

    // Half-extent at z = 500 is about 2.18
    assert!(frustum.contains_point(Vec3::new(0.0, 0.0, 500.0)));
    assert!(frustum.contains_point(Vec3::new(2.0, 0.0, 500.0)));
    assert!(!frustum.contains_point(Vec3::new(3.0, 0.0, 500.0)));
}

#[test]
fn test_build_near_and_far_normals_follow_view_direction() {
    let camera = create_rotated_camera();
    let frustum = FrustumBuilder::new().build(&camera).unwrap();

    assert_eq!(frustum.plane(FrustumFace::Near).normal(), camera.forward());
    assert_eq!(frustum.plane(FrustumFace::Far).normal(), -camera.forward());
}

#[test]
fn test_build_respects_normal_epsilon() {
    let builder = FrustumBuilder::new().with_normal_epsilon(1e9);

    let result = builder.build(&create_test_camera());
    assert!(matches!(result, Err(Error::DegenerateNormal { face: FrustumFace::Left, .. })));
}
