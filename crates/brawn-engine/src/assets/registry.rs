use std::collections::HashMap;

use crate::api::types::ImageHandle;
use crate::assets::error::AssetError;
use crate::assets::manifest::AssetManifest;

/// Registry of named images, built from an AssetManifest.
/// Injected into item construction so image lookups never go through global state.
pub struct ImageRegistry {
    images: HashMap<String, ImageHandle>,
    paths: Vec<String>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
            paths: Vec::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut reg = Self::new();
        for desc in &manifest.images {
            reg.insert(&desc.id, desc.path());
        }
        reg
    }

    /// Parse a JSON manifest and build a registry from it.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest = AssetManifest::from_json(json)?;
        Ok(Self::from_manifest(&manifest))
    }

    /// Register an image. Re-registering an id keeps its original handle.
    pub fn insert(&mut self, id: &str, path: &str) -> ImageHandle {
        if let Some(handle) = self.images.get(id) {
            return *handle;
        }
        let handle = ImageHandle(self.paths.len() as u32);
        self.paths.push(path.to_string());
        self.images.insert(id.to_string(), handle);
        handle
    }

    /// Look up an image by id. Returns None if not found.
    pub fn get(&self, id: &str) -> Option<ImageHandle> {
        self.images.get(id).copied()
    }

    /// Look up an image by id, treating a miss as a configuration error.
    pub fn resolve(&self, id: &str) -> Result<ImageHandle, AssetError> {
        self.get(id)
            .ok_or_else(|| AssetError::UnknownImage(id.to_string()))
    }

    /// Path of a registered image, for backends that load the pixels.
    pub fn path(&self, handle: ImageHandle) -> Option<&str> {
        self.paths.get(handle.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for ImageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
