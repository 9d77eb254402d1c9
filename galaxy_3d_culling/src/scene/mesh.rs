/// Local-space vertex positions of a cull candidate.
///
/// Only positions matter for culling. The local bounding box is computed
/// once at construction since the vertex data is immutable afterwards.

use glam::Vec3;
use super::aabb::AABB;

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    bounds: Option<AABB>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>) -> Self {
        let bounds = AABB::from_points(&vertices);
        Self {
            name: name.into(),
            vertices,
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local-space vertex positions.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Local-space bounding box, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<AABB> {
        self.bounds
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
