use super::AssetPath;

/// InvolvedAsset value object: one row of a usage search result
///
/// Pairs an asset with the user's selection state. The selection flag is
/// session-only and never feeds back into the dependency index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvolvedAsset {
    path: AssetPath,
    is_checked: bool,
}

impl InvolvedAsset {
    pub fn new(path: AssetPath) -> Self {
        Self {
            path,
            is_checked: false,
        }
    }

    pub fn path(&self) -> &AssetPath {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        self.path.file_name()
    }

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
    }

    pub fn is_in_resources(&self, marker: &str) -> bool {
        self.path.is_in_resources(marker)
    }
}
