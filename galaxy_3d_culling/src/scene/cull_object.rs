/// Reference implementation of `CullCandidate`.
///
/// Mirrors a scene object with an optional mesh and a renderer flag set.
/// Mesh data is shared (`Arc`) so many objects can instance one mesh.

use std::sync::Arc;
use bitflags::bitflags;
use glam::{Mat4, Vec3};
use super::aabb::AABB;
use super::candidate::CullCandidate;
use super::mesh::Mesh;

bitflags! {
    /// Per-object render flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u32 {
        /// Render-enable flag written by the culler
        const VISIBLE    = 1 << 0;
        /// Object has a renderer attached
        const RENDERABLE = 1 << 1;
    }
}

/// A named object with a world transform, optional mesh, and flags.
#[derive(Debug, Clone)]
pub struct CullObject {
    name: String,
    world_matrix: Mat4,
    mesh: Option<Arc<Mesh>>,
    flags: ObjectFlags,
}

impl CullObject {
    /// Create a renderable object. It starts visible until the first cull pass.
    pub fn new(name: impl Into<String>, world_matrix: Mat4, mesh: Option<Arc<Mesh>>) -> Self {
        Self {
            name: name.into(),
            world_matrix,
            mesh,
            flags: ObjectFlags::VISIBLE | ObjectFlags::RENDERABLE,
        }
    }

    pub fn mesh(&self) -> Option<&Arc<Mesh>> {
        self.mesh.as_ref()
    }

    pub fn set_mesh(&mut self, mesh: Option<Arc<Mesh>>) {
        self.mesh = mesh;
    }

    pub fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }

    pub fn flags(&self) -> ObjectFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: ObjectFlags) {
        self.flags = flags;
    }

    /// Attach or detach the renderer.
    pub fn set_renderable(&mut self, renderable: bool) {
        self.flags.set(ObjectFlags::RENDERABLE, renderable);
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(ObjectFlags::VISIBLE)
    }
}

impl CullCandidate for CullObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn world_matrix(&self) -> Mat4 {
        self.world_matrix
    }

    fn local_vertices(&self) -> Option<&[Vec3]> {
        self.mesh.as_deref().map(Mesh::vertices)
    }

    fn local_bounds(&self) -> Option<AABB> {
        self.mesh.as_deref().and_then(Mesh::bounds)
    }

    fn is_renderable(&self) -> bool {
        self.flags.contains(ObjectFlags::RENDERABLE)
    }

    fn set_visible(&mut self, visible: bool) {
        self.flags.set(ObjectFlags::VISIBLE, visible);
    }
}

#[cfg(test)]
#[path = "cull_object_tests.rs"]
mod tests;
