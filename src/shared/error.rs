use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to tell a bad invocation apart from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Search (and any requested deletion) completed
    Success = 0,
    /// Application error (unknown asset, manifest error, deletion failure, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency lookups and asset housekeeping.
///
/// `UnknownAsset` is the one callers are expected to match on: it marks a
/// lookup against an identifier the dependency index has never seen (or has
/// since forgotten because the asset was deleted).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Unknown asset: {path}\n\n💡 Hint: The asset is not part of the asset database (it may have been deleted or renamed)")]
    UnknownAsset { path: String },

    #[error("Failed to delete asset: {path}\nDetails: {details}\n\n💡 Hint: The dependency index was left unchanged for this asset")]
    DeletionFailed { path: String, details: String },

    #[error("Dependency manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is valid TOML or JSON")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for value objects and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl UsageError {
    pub fn unknown_asset(path: impl Into<String>) -> Self {
        UsageError::UnknownAsset { path: path.into() }
    }

    pub fn is_unknown_asset(&self) -> bool {
        matches!(self, UsageError::UnknownAsset { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_unknown_asset_display() {
        let error = UsageError::unknown_asset("Assets/Missing.prefab");
        let display = format!("{}", error);
        assert!(display.contains("Unknown asset"));
        assert!(display.contains("Assets/Missing.prefab"));
        assert!(display.contains("💡 Hint:"));
        assert!(error.is_unknown_asset());
    }

    #[test]
    fn test_deletion_failed_display() {
        let error = UsageError::DeletionFailed {
            path: "Assets/Wood.mat".to_string(),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to delete asset"));
        assert!(display.contains("Assets/Wood.mat"));
        assert!(display.contains("Permission denied"));
        assert!(!error.is_unknown_asset());
    }

    #[test]
    fn test_manifest_parse_error_display() {
        let error = UsageError::ManifestParseError {
            path: PathBuf::from("/test/asset-dependencies.toml"),
            details: "expected `=`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse dependency manifest"));
        assert!(display.contains("/test/asset-dependencies.toml"));
        assert!(display.contains("expected `=`"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = UsageError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("Directory does not exist"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_security_error_display() {
        let error = UsageError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_unknown_asset_survives_anyhow_conversion() {
        let err: anyhow::Error = UsageError::unknown_asset("Z").into();
        let usage_error = err.downcast_ref::<UsageError>().unwrap();
        assert!(usage_error.is_unknown_asset());
    }
}
