/// Cull candidate capability.
///
/// The host scene graph exposes each renderable object through this trait.
/// The culler only reads geometry and transforms, and writes a single
/// visibility flag per candidate per frame.

use glam::{Mat4, Vec3};
use super::aabb::AABB;

/// An object that can be frustum culled.
///
/// Objects without geometry report it through `local_vertices()`
/// returning `None` rather than through a null mesh reference.
pub trait CullCandidate {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Local-to-world transform.
    fn world_matrix(&self) -> Mat4;

    /// Local-space mesh vertex positions, `None` if the object has no mesh.
    fn local_vertices(&self) -> Option<&[Vec3]>;

    /// Local-space bounding box of the mesh.
    ///
    /// Defaults to the box around `local_vertices()`. Implementations
    /// with immutable meshes may return a cached box instead.
    fn local_bounds(&self) -> Option<AABB> {
        self.local_vertices().and_then(AABB::from_points)
    }

    /// Whether mesh data is available at all.
    fn has_geometry(&self) -> bool {
        self.local_vertices().is_some()
    }

    /// Whether the object has something to render (a renderer component).
    /// Non-renderable objects are skipped like objects without geometry.
    fn is_renderable(&self) -> bool {
        true
    }

    /// Write the render-enable flag.
    fn set_visible(&mut self, visible: bool);
}

impl<T: CullCandidate + ?Sized> CullCandidate for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn world_matrix(&self) -> Mat4 {
        (**self).world_matrix()
    }

    fn local_vertices(&self) -> Option<&[Vec3]> {
        (**self).local_vertices()
    }

    fn local_bounds(&self) -> Option<AABB> {
        (**self).local_bounds()
    }

    fn has_geometry(&self) -> bool {
        (**self).has_geometry()
    }

    fn is_renderable(&self) -> bool {
        (**self).is_renderable()
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible)
    }
}

impl<T: CullCandidate + ?Sized> CullCandidate for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn world_matrix(&self) -> Mat4 {
        (**self).world_matrix()
    }

    fn local_vertices(&self) -> Option<&[Vec3]> {
        (**self).local_vertices()
    }

    fn local_bounds(&self) -> Option<AABB> {
        (**self).local_bounds()
    }

    fn has_geometry(&self) -> bool {
        (**self).has_geometry()
    }

    fn is_renderable(&self) -> bool {
        (**self).is_renderable()
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible)
    }
}
