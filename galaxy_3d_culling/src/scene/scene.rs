/// Scene — registry of CullObjects with stable keys.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys, plus a name
/// index for lookups by name. A culling pass visits objects in slot order.

use std::sync::Arc;
use glam::Mat4;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::engine_error;
use super::candidate::CullCandidate;
use super::cull_object::CullObject;
use super::culler::{CullReport, FrustumCuller};
use super::mesh::Mesh;

new_key_type! {
    /// Stable key for a CullObject within a Scene.
    ///
    /// Keys remain valid even after other objects are removed.
    /// A key becomes invalid only when its own object is removed.
    pub struct CullObjectKey;
}

/// A set of cullable objects.
#[derive(Default)]
pub struct Scene {
    objects: SlotMap<CullObjectKey, CullObject>,
    names: FxHashMap<String, CullObjectKey>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object and add it to the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if an object with the same name already exists.
    pub fn create_object(
        &mut self,
        name: &str,
        world_matrix: Mat4,
        mesh: Option<Arc<Mesh>>,
    ) -> Result<CullObjectKey> {
        self.insert_object(CullObject::new(name, world_matrix, mesh))
    }

    /// Add an existing object to the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if an object with the same name already exists.
    pub fn insert_object(&mut self, object: CullObject) -> Result<CullObjectKey> {
        if self.names.contains_key(object.name()) {
            engine_error!("galaxy3d::Scene", "Object '{}' already exists", object.name());
            return Err(Error::InvalidResource(format!("Object '{}' already exists", object.name())));
        }

        let name = object.name().to_string();
        let key = self.objects.insert(object);
        self.names.insert(name, key);
        Ok(key)
    }

    /// Remove an object. Returns None if the key is invalid.
    pub fn remove_object(&mut self, key: CullObjectKey) -> Option<CullObject> {
        let object = self.objects.remove(key)?;
        self.names.remove(object.name());
        Some(object)
    }

    /// Get an object by key
    pub fn object(&self, key: CullObjectKey) -> Option<&CullObject> {
        self.objects.get(key)
    }

    /// Get a mutable object by key
    pub fn object_mut(&mut self, key: CullObjectKey) -> Option<&mut CullObject> {
        self.objects.get_mut(key)
    }

    /// Look up an object key by name
    pub fn find(&self, name: &str) -> Option<CullObjectKey> {
        self.names.get(name).copied()
    }

    /// Set the world matrix of an object. Returns false if key is invalid.
    pub fn set_world_matrix(&mut self, key: CullObjectKey, matrix: Mat4) -> bool {
        match self.objects.get_mut(key) {
            Some(object) => {
                object.set_world_matrix(matrix);
                true
            }
            None => false,
        }
    }

    /// Number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over all object keys, in culling order.
    pub fn keys(&self) -> impl Iterator<Item = CullObjectKey> + '_ {
        self.objects.keys()
    }

    /// Iterate over all objects with their keys, in culling order.
    pub fn objects(&self) -> impl Iterator<Item = (CullObjectKey, &CullObject)> + '_ {
        self.objects.iter()
    }

    /// Keys of the objects whose VISIBLE flag is set.
    pub fn visible_keys(&self) -> Vec<CullObjectKey> {
        self.objects.iter()
            .filter(|(_, object)| object.is_visible())
            .map(|(key, _)| key)
            .collect()
    }

    /// Run a culling pass over every object.
    ///
    /// Report indices follow `keys()` order.
    pub fn cull(&mut self, culler: &mut FrustumCuller, camera: &Camera) -> CullReport {
        culler.cull(camera, self.objects.values_mut())
    }

    /// Run a culling pass over every object on the rayon pool.
    pub fn cull_parallel(&mut self, culler: &mut FrustumCuller, camera: &Camera) -> CullReport {
        let mut objects: Vec<&mut CullObject> = self.objects.values_mut().collect();
        culler.cull_parallel(camera, &mut objects)
    }

    /// Remove all objects
    pub fn clear(&mut self) {
        self.objects.clear();
        self.names.clear();
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
