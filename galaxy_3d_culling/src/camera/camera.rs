/// Camera — passive container for the parameters a frustum is built from.
///
/// The Camera computes nothing per frame. The caller (free-look controller,
/// animation, ...) moves it; `FrustumBuilder` reads it once per frame.
///
/// Basis convention: with an identity rotation the camera looks down +Z,
/// with +Y up and +X right (`right = up × forward`).

use glam::{Quat, Vec3};
use crate::error::Result;
use crate::engine_bail;

/// Tolerance for the orthonormal basis check in `validate()`.
const BASIS_TOLERANCE: f32 = 1e-3;

/// Camera parameters read by `FrustumBuilder`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    fov_y_degrees: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Create a camera at `position` looking down +Z.
    ///
    /// Parameters are stored as given; call `validate()` (or let the
    /// builder do it) before relying on them.
    pub fn new(position: Vec3, fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            forward: Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
            fov_y_degrees,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Create a camera oriented by a rotation (applied to +Z / +Y / +X).
    pub fn from_rotation(
        position: Vec3,
        rotation: Quat,
        fov_y_degrees: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let mut camera = Self::new(position, fov_y_degrees, aspect_ratio, near, far);
        camera.set_rotation(rotation);
        camera
    }

    /// Create a camera at `position` looking at `target`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `target == position` or if the
    /// view direction is parallel to `world_up`.
    pub fn look_at(
        position: Vec3,
        target: Vec3,
        world_up: Vec3,
        fov_y_degrees: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        let Some(forward) = (target - position).try_normalize() else {
            engine_bail!("galaxy3d::Camera", "look_at target coincides with position {}", position);
        };
        let Some(right) = world_up.cross(forward).try_normalize() else {
            engine_bail!("galaxy3d::Camera",
                "look_at direction {} is parallel to up vector {}", forward, world_up);
        };
        let up = forward.cross(right);

        let mut camera = Self::new(position, fov_y_degrees, aspect_ratio, near, far);
        camera.forward = forward;
        camera.up = up;
        camera.right = right;
        Ok(camera)
    }

    /// Aspect ratio (width / height) of a screen or render target.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either dimension is zero.
    pub fn aspect_from_screen(width: u32, height: u32) -> Result<f32> {
        if width == 0 || height == 0 {
            engine_bail!("galaxy3d::Camera", "Invalid screen size {}x{}", width, height);
        }
        Ok(width as f32 / height as f32)
    }

    /// Check every parameter the frustum depends on.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - any value is NaN or infinite
    /// - the vertical FOV is outside (0, 180) degrees
    /// - the aspect ratio is not positive
    /// - near or far is not positive, or near >= far
    /// - forward/up/right is not an orthonormal basis
    pub fn validate(&self) -> Result<()> {
        let scalars = [self.fov_y_degrees, self.aspect_ratio, self.near, self.far];
        let vectors = [self.position, self.forward, self.up, self.right];
        if scalars.iter().any(|s| !s.is_finite()) || vectors.iter().any(|v| !v.is_finite()) {
            engine_bail!("galaxy3d::Camera", "Camera parameters contain NaN or infinity");
        }

        if self.fov_y_degrees <= 0.0 || self.fov_y_degrees >= 180.0 {
            engine_bail!("galaxy3d::Camera",
                "Vertical FOV must be in (0, 180) degrees, got {}", self.fov_y_degrees);
        }
        if self.aspect_ratio <= 0.0 {
            engine_bail!("galaxy3d::Camera",
                "Aspect ratio must be positive, got {}", self.aspect_ratio);
        }
        if self.near <= 0.0 || self.far <= 0.0 {
            engine_bail!("galaxy3d::Camera",
                "Clip distances must be positive (near = {}, far = {})", self.near, self.far);
        }
        if self.near >= self.far {
            engine_bail!("galaxy3d::Camera",
                "Near clip ({}) must be less than far clip ({})", self.near, self.far);
        }

        for (name, axis) in [("forward", self.forward), ("up", self.up), ("right", self.right)] {
            if (axis.length() - 1.0).abs() > BASIS_TOLERANCE {
                engine_bail!("galaxy3d::Camera",
                    "Basis vector {} is not unit length ({})", name, axis.length());
            }
        }
        let skew = self.forward.dot(self.up).abs()
            .max(self.forward.dot(self.right).abs())
            .max(self.up.dot(self.right).abs());
        if skew > BASIS_TOLERANCE {
            engine_bail!("galaxy3d::Camera", "Camera basis is not orthogonal (max |dot| = {})", skew);
        }

        Ok(())
    }

    // ===== GETTERS =====

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// View direction (unit).
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Up direction (unit).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Right direction (unit).
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Vertical field of view in degrees.
    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    /// Width / height.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Near clip distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    // ===== SETTERS =====

    /// Set the world-space position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the basis directly. The vectors are stored as given.
    pub fn set_basis(&mut self, forward: Vec3, up: Vec3, right: Vec3) {
        self.forward = forward;
        self.up = up;
        self.right = right;
    }

    /// Set the basis from a rotation applied to +Z / +Y / +X.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.forward = rotation * Vec3::Z;
        self.up = rotation * Vec3::Y;
        self.right = rotation * Vec3::X;
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov_y_degrees(&mut self, fov_y_degrees: f32) {
        self.fov_y_degrees = fov_y_degrees;
    }

    /// Set the aspect ratio (width / height).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Set the near and far clip distances.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
