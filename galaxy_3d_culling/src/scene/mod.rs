//! Scene module
//!
//! Cull candidates, the reference object registry, and the per-frame
//! visibility pass (bounding-box stage, then mesh stage).

mod aabb;
mod mesh;
mod candidate;
mod cull_object;
mod scene;
mod classifier;
mod culler;

pub use aabb::AABB;
pub use mesh::Mesh;
pub use candidate::CullCandidate;
pub use cull_object::{CullObject, ObjectFlags};
pub use scene::{Scene, CullObjectKey};
pub use classifier::{VisibilityClassifier, CullOutcome};
pub use culler::{FrustumCuller, CullReport, FrustumSource};
