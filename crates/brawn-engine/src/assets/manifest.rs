use serde::{Deserialize, Serialize};

/// Asset manifest describing every image a game may load.
/// Loaded from a JSON file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Images in handle order: the first entry gets `ImageHandle(0)`.
    pub images: Vec<ImageDescriptor>,
}

/// Describes a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Identifier game code loads the image by (e.g., "head.png").
    pub id: String,
    /// Relative path to the image file. Defaults to the id.
    #[serde(default)]
    pub path: Option<String>,
}

impl ImageDescriptor {
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.id)
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
