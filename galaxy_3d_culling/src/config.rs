//! Culling configuration
//!
//! Passed by value to `FrustumCuller`. Nothing here is global: two cullers
//! with different configs can run side by side.

/// How a candidate is tested against the frustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullPolicy {
    /// Bounding-box corners first, then every mesh vertex if a corner passed.
    ///
    /// A rotated or thin object whose box corners all fall outside is
    /// hidden even if some of its vertices are inside (false negative).
    #[default]
    TwoStage,

    /// Test every mesh vertex directly, skipping the box stage.
    MeshOnly,
}

/// What a frame does when the camera parameters are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidCameraPolicy {
    /// Classify against the last frustum that built successfully.
    /// Falls back to `HideAll` until a first valid frustum exists.
    #[default]
    ReuseLastValid,

    /// Mark every candidate not visible for that frame.
    HideAll,
}

/// Tuning for `FrustumBuilder` and `FrustumCuller`.
#[derive(Debug, Clone, PartialEq)]
pub struct CullingConfig {
    /// Candidate test strategy
    pub policy: CullPolicy,
    /// Behaviour when the frustum cannot be built
    pub invalid_camera: InvalidCameraPolicy,
    /// Minimum sine of the angle between the two edges a frustum plane is built from
    pub normal_epsilon: f32,
    /// Candidate count from which `cull_parallel` fans out across threads
    pub parallel_threshold: usize,
}

impl CullingConfig {
    pub const DEFAULT_NORMAL_EPSILON: f32 = 1e-6;
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

    pub fn with_policy(mut self, policy: CullPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_invalid_camera(mut self, invalid_camera: InvalidCameraPolicy) -> Self {
        self.invalid_camera = invalid_camera;
        self
    }

    pub fn with_normal_epsilon(mut self, normal_epsilon: f32) -> Self {
        self.normal_epsilon = normal_epsilon;
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            policy: CullPolicy::default(),
            invalid_camera: InvalidCameraPolicy::default(),
            normal_epsilon: Self::DEFAULT_NORMAL_EPSILON,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
