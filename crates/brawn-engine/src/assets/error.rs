use std::fmt;

/// Failures while resolving game assets.
///
/// These are configuration errors: a game surfaces them at load time
/// instead of continuing with a stale or missing image.
#[derive(Debug)]
pub enum AssetError {
    /// An image id that is not in the registry.
    UnknownImage(String),
    /// The manifest JSON could not be parsed.
    Manifest(serde_json::Error),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::UnknownImage(id) => write!(f, "unknown image id: {id}"),
            AssetError::Manifest(err) => write!(f, "invalid asset manifest: {err}"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::UnknownImage(_) => None,
            AssetError::Manifest(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for AssetError {
    fn from(err: serde_json::Error) -> Self {
        AssetError::Manifest(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_image_message_names_id() {
        let err = AssetError::UnknownImage("body_x.png".into());
        assert_eq!(err.to_string(), "unknown image id: body_x.png");
    }

    #[test]
    fn manifest_error_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AssetError::from(json_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
