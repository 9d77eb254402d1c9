/// Derives the six frustum planes from camera parameters.
///
/// Corner policy: far half-extents are the near half-extents scaled by
/// `far / near`, giving a true perspective frustum whose side planes pass
/// through the camera position.
///
/// Each side plane is built from three corners and then oriented so the
/// frustum centroid lies on its positive side. The winding of the
/// corner triples therefore does not matter. The near and far planes use
/// the view direction as normal and pass through their face centers.

use glam::Vec3;
use crate::config::CullingConfig;
use crate::error::Result;
use crate::engine_error;
use crate::engine_trace;
use super::camera::Camera;
use super::frustum::{Frustum, FrustumCorners, FrustumFace, Plane};

/// Stateless builder: the same camera always yields the same frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumBuilder {
    normal_epsilon: f32,
}

impl FrustumBuilder {
    /// Create a builder with the default normal epsilon.
    pub fn new() -> Self {
        Self {
            normal_epsilon: CullingConfig::DEFAULT_NORMAL_EPSILON,
        }
    }

    /// Create a builder from a culling config.
    pub fn from_config(config: &CullingConfig) -> Self {
        Self::new().with_normal_epsilon(config.normal_epsilon)
    }

    /// Override the minimum accepted edge-angle sine.
    pub fn with_normal_epsilon(mut self, normal_epsilon: f32) -> Self {
        self.normal_epsilon = normal_epsilon;
        self
    }

    pub fn normal_epsilon(&self) -> f32 {
        self.normal_epsilon
    }

    /// Compute the eight frustum corners of a camera.
    ///
    /// Does not validate the camera; `build()` does.
    pub fn corners(camera: &Camera) -> FrustumCorners {
        let near = camera.near();
        let far = camera.far();

        let near_half_height = (camera.fov_y_degrees() * 0.5).to_radians().tan() * near;
        let near_half_width = near_half_height * camera.aspect_ratio();
        let far_scale = far / near;

        let near_center = camera.position() + camera.forward() * near;
        let far_center = camera.position() + camera.forward() * far;

        let quad = |center: Vec3, half_width: f32, half_height: f32| {
            let up = camera.up() * half_height;
            let right = camera.right() * half_width;
            [
                center + up - right, // top-left
                center + up + right, // top-right
                center - up + right, // bottom-right
                center - up - right, // bottom-left
            ]
        };

        FrustumCorners {
            near: quad(near_center, near_half_width, near_half_height),
            far: quad(far_center, near_half_width * far_scale, near_half_height * far_scale),
        }
    }

    /// Build the frustum for this frame.
    ///
    /// # Errors
    ///
    /// - `ConfigurationError` if the camera fails `Camera::validate()`
    /// - `DegenerateNormal` if a plane collapses below the normal epsilon
    ///   (e.g. a vanishingly small FOV)
    pub fn build(&self, camera: &Camera) -> Result<Frustum> {
        camera.validate()?;

        let corners = Self::corners(camera);
        let centroid = camera.position()
            + camera.forward() * ((camera.far() - camera.near()) * 0.5 + camera.near());

        const TL: usize = FrustumCorners::TOP_LEFT;
        const TR: usize = FrustumCorners::TOP_RIGHT;
        const BR: usize = FrustumCorners::BOTTOM_RIGHT;
        const BL: usize = FrustumCorners::BOTTOM_LEFT;
        let n = corners.near;
        let f = corners.far;

        let epsilon = self.normal_epsilon;
        let oriented_plane = |face: FrustumFace, [a, b, c]: [Vec3; 3]| -> Result<Plane> {
            let plane = Plane::from_points(face, a, b, c, epsilon).map_err(|err| {
                engine_error!("galaxy3d::FrustumBuilder", "Cannot build {} plane: {}", face, err);
                err
            })?;
            Ok(plane.oriented_towards(centroid))
        };

        // Near and far are anchored at their face centers so that the
        // view-axis points on them have a signed distance of exactly zero
        let near_center = camera.position() + camera.forward() * camera.near();
        let far_center = camera.position() + camera.forward() * camera.far();

        // Side planes: three non-collinear corners each, in plane index order
        let planes = [
            oriented_plane(FrustumFace::Left, [n[BL], f[TL], f[BL]])?,
            oriented_plane(FrustumFace::Right, [n[TR], f[TR], f[BR]])?,
            oriented_plane(FrustumFace::Bottom, [n[BL], f[BR], f[BL]])?,
            oriented_plane(FrustumFace::Top, [n[TR], f[TR], f[TL]])?,
            Plane::from_normal_point(camera.forward(), near_center).oriented_towards(centroid),
            Plane::from_normal_point(-camera.forward(), far_center).oriented_towards(centroid),
        ];

        engine_trace!("galaxy3d::FrustumBuilder",
            "Built frustum at {} looking {} (fov {}, aspect {}, near {}, far {})",
            camera.position(), camera.forward(), camera.fov_y_degrees(),
            camera.aspect_ratio(), camera.near(), camera.far());

        Ok(Frustum::from_parts(planes, corners, centroid))
    }
}

impl Default for FrustumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frustum_builder_tests.rs"]
mod tests;
