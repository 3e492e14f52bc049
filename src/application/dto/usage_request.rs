use serde::Serialize;

/// How far a usage search follows the dependant relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Every asset that depends on the target directly or indirectly
    Transitive,
    /// Only assets that reference the target directly
    Direct,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Transitive => write!(f, "transitive"),
            SearchMode::Direct => write!(f, "direct"),
        }
    }
}

/// UsageRequest - Internal request DTO for the find-usages use case
#[derive(Debug, Clone)]
pub struct UsageRequest {
    /// Asset paths to search usages of, in the order given
    pub assets: Vec<String>,
    /// Transitive closure or direct dependants only
    pub mode: SearchMode,
    /// Delete every asset found (transitive mode only)
    pub delete: bool,
}

impl UsageRequest {
    pub fn new(assets: Vec<String>, mode: SearchMode, delete: bool) -> Self {
        Self {
            assets,
            mode,
            delete,
        }
    }
}
