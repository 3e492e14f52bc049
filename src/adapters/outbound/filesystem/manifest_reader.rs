use crate::shared::error::UsageError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Dependency manifest exported from the host's asset database
///
/// TOML:
/// ```toml
/// [[asset]]
/// path = "Assets/Materials/Wood.mat"
/// dependencies = ["Assets/Textures/Wood.png"]
/// ```
///
/// JSON:
/// ```json
/// {"assets": [{"path": "Assets/Materials/Wood.mat", "dependencies": ["Assets/Textures/Wood.png"]}]}
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AssetManifest {
    #[serde(default, rename = "asset", alias = "assets")]
    pub assets: Vec<ManifestEntry>,
}

/// One asset of the manifest and its direct dependencies
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ManifestFormat::Json,
            _ => ManifestFormat::Toml,
        }
    }
}

/// ManifestReader adapter for loading dependency manifests from disk
pub struct ManifestReader;

impl ManifestReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses a manifest; the format follows the file extension
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The manifest is a symlink, not a regular file, or too large
    /// - The content is not a valid manifest
    pub fn read_manifest(&self, path: &Path) -> Result<AssetManifest> {
        if !path.exists() {
            return Err(UsageError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "Export the asset dependency manifest from your editor, or point to it with --manifest".to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;

        let parsed = match ManifestFormat::detect(path) {
            ManifestFormat::Toml => Self::parse_toml(&content),
            ManifestFormat::Json => Self::parse_json(&content),
        };

        let manifest = parsed.map_err(|details| UsageError::ManifestParseError {
            path: path.to_path_buf(),
            details,
        })?;

        tracing::debug!(
            path = %path.display(),
            assets = manifest.assets.len(),
            "Loaded dependency manifest"
        );
        Ok(manifest)
    }

    pub fn parse_toml(content: &str) -> std::result::Result<AssetManifest, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn parse_json(content: &str) -> std::result::Result<AssetManifest, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "dependency manifest").map_err(|e| {
            UsageError::SecurityError {
                path: path.to_path_buf(),
                reason: e.to_string(),
                hint: "Point --manifest at a regular file inside the project".to_string(),
            }
        })?;

        let metadata = fs::metadata(path).map_err(|e| UsageError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            UsageError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for ManifestReader {
    fn default() -> Self {
        Self::new()
    }
}
