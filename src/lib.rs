//! what-uses-this - reverse dependency lookups for project assets
//!
//! Given an asset, this library finds every other asset that uses it, directly
//! or through any chain of references, and can delete the whole set together.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_tracking`): Reverse dependency index and closure search
//! - **Application Layer** (`application`): Usage session, use cases and read models
//! - **Ports** (`ports`): Interface definitions for the host asset database and output
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use what_uses_this::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let database = ManifestAssetDatabase::load(
//!     Path::new("asset-dependencies.toml"),
//!     PathBuf::from("."),
//! )?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let mut use_case = FindUsagesUseCase::new(UsageSession::new(database, progress_reporter));
//!
//! // Execute
//! let request = UsageRequest::new(
//!     vec!["Assets/Textures/Wood.png".to_string()],
//!     SearchMode::Transitive,
//!     false,
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = UsageReadModelBuilder::build(&response, DEFAULT_RESOURCES_MARKER);
//! println!("{}", TextFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_tracking;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, ManifestAssetDatabase, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{
        DeletionReport, OutputFormat, SearchMode, UsageRequest, UsageResponse, UsageSection,
    };
    pub use crate::application::read_models::{UsageReadModel, UsageReadModelBuilder};
    pub use crate::application::session::UsageSession;
    pub use crate::application::use_cases::FindUsagesUseCase;
    pub use crate::dependency_tracking::domain::{
        AssetPath, DependencyIndex, InvolvedAsset, DEFAULT_RESOURCES_MARKER,
    };
    pub use crate::dependency_tracking::services::ClosureFinder;
    pub use crate::ports::outbound::{
        AssetDatabase, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::UsageError;
    pub use crate::shared::Result;
}
