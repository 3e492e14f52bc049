use crate::shared::error::UsageError;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Directory marker for assets that can be loaded by name at runtime
pub const DEFAULT_RESOURCES_MARKER: &str = "Resources";

/// NewType wrapper for an asset identifier (a project-relative path)
///
/// Identity is exact string equality. No normalization of separators or case
/// is performed, the host database is the authority on spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
    pub fn new(path: impl Into<String>) -> Result<Self, UsageError> {
        let path = path.into();
        if path.is_empty() {
            return Err(UsageError::Validation {
                message: "Asset path cannot be empty".to_string(),
            });
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name of the asset: the final path component.
    pub fn file_name(&self) -> &str {
        match self.0.rfind(|c: char| c == '/' || c == '\\') {
            Some(index) => &self.0[index + 1..],
            None => &self.0,
        }
    }

    /// Whether the asset lives below a `<marker>` directory at any depth.
    pub fn is_in_resources(&self, marker: &str) -> bool {
        self.0.contains(&format!("/{}/", marker))
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for AssetPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AssetPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
