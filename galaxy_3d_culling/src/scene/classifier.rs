/// Decides whether one candidate is inside a frustum.
///
/// A candidate is visible when at least one of its world-space points is
/// inside all six planes. With `CullPolicy::TwoStage` the eight corners
/// of its local bounding box are tested first and the full vertex set is
/// only walked if a corner passed.

use std::fmt;
use glam::{Mat4, Vec3};
use crate::camera::Frustum;
use crate::config::CullPolicy;
use crate::error::{Error, Result};
use super::aabb::AABB;
use super::candidate::CullCandidate;

/// Per-candidate result of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullOutcome {
    /// At least one mesh vertex is inside the frustum
    Visible,
    /// No bounding-box corner is inside (mesh stage skipped)
    CulledByBounds,
    /// A box corner passed but no mesh vertex is inside
    CulledByMesh,
    /// Candidate has no mesh data
    MissingGeometry,
    /// Candidate has no renderer
    NotRenderable,
    /// Candidate mesh has zero vertices
    EmptyMesh,
    /// No valid frustum was available this frame
    NoFrustum,
}

impl CullOutcome {
    pub const ALL: [CullOutcome; 7] = [
        CullOutcome::Visible,
        CullOutcome::CulledByBounds,
        CullOutcome::CulledByMesh,
        CullOutcome::MissingGeometry,
        CullOutcome::NotRenderable,
        CullOutcome::EmptyMesh,
        CullOutcome::NoFrustum,
    ];

    /// Value written to the render-enable flag.
    pub fn is_visible(self) -> bool {
        self == CullOutcome::Visible
    }

    /// True for the skip-with-warning data anomalies.
    pub fn is_anomaly(self) -> bool {
        matches!(
            self,
            CullOutcome::MissingGeometry | CullOutcome::NotRenderable | CullOutcome::EmptyMesh
        )
    }
}

impl fmt::Display for CullOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CullOutcome::Visible => "visible",
            CullOutcome::CulledByBounds => "culled by bounding box",
            CullOutcome::CulledByMesh => "culled by mesh",
            CullOutcome::MissingGeometry => "missing geometry",
            CullOutcome::NotRenderable => "not renderable",
            CullOutcome::EmptyMesh => "empty mesh",
            CullOutcome::NoFrustum => "no frustum",
        };
        f.write_str(text)
    }
}

/// Stateless per-candidate classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityClassifier {
    policy: CullPolicy,
}

impl VisibilityClassifier {
    pub fn new(policy: CullPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CullPolicy {
        self.policy
    }

    /// Classify a candidate against a frustum. Never fails: missing data
    /// maps to an anomaly outcome, which is never visible.
    pub fn classify<C: CullCandidate + ?Sized>(&self, frustum: &Frustum, candidate: &C) -> CullOutcome {
        if !candidate.is_renderable() {
            return CullOutcome::NotRenderable;
        }
        if !candidate.has_geometry() {
            return CullOutcome::MissingGeometry;
        }
        let Some(vertices) = candidate.local_vertices() else {
            return CullOutcome::MissingGeometry;
        };
        if vertices.is_empty() {
            return CullOutcome::EmptyMesh;
        }

        let world = candidate.world_matrix();

        if self.policy == CullPolicy::TwoStage {
            let bounds = candidate.local_bounds().unwrap_or(AABB::ZERO);
            if !Self::bounds_stage(frustum, &bounds, &world) {
                return CullOutcome::CulledByBounds;
            }
        }

        if Self::mesh_stage(frustum, vertices, &world) {
            CullOutcome::Visible
        } else {
            CullOutcome::CulledByMesh
        }
    }

    /// Strict variant: anomalies are returned as errors.
    ///
    /// # Errors
    ///
    /// Returns `MissingGeometry` if the candidate has no mesh, an empty
    /// mesh, or no renderer.
    pub fn try_classify<C: CullCandidate + ?Sized>(&self, frustum: &Frustum, candidate: &C) -> Result<bool> {
        let outcome = self.classify(frustum, candidate);
        if outcome.is_anomaly() {
            return Err(Error::MissingGeometry(format!("'{}': {}", candidate.name(), outcome)));
        }
        Ok(outcome.is_visible())
    }

    /// Any of the eight world-space box corners inside the frustum.
    pub fn bounds_stage(frustum: &Frustum, bounds: &AABB, world: &Mat4) -> bool {
        frustum.contains_any(bounds.transformed_corners(world))
    }

    /// Any world-space mesh vertex inside the frustum.
    pub fn mesh_stage(frustum: &Frustum, vertices: &[Vec3], world: &Mat4) -> bool {
        frustum.contains_any(vertices.iter().map(|v| world.transform_point3(*v)))
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
