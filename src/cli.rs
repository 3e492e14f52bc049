use clap::Parser;
use std::path::PathBuf;

use what_uses_this::application::dto::{OutputFormat, SearchMode};

/// Find every asset that uses a given asset, directly or indirectly
#[derive(Parser, Debug)]
#[command(name = "what-uses-this")]
#[command(version)]
#[command(
    about = "Find every asset that uses a given asset, directly or indirectly",
    long_about = None
)]
pub struct Args {
    /// Asset paths to search for, as listed in the dependency manifest
    #[arg(required = true, value_name = "ASSET")]
    pub assets: Vec<String>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Dependency manifest (defaults to <PROJECT>/asset-dependencies.toml)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Output format: text, markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only list assets that reference the given assets directly
    #[arg(long, conflicts_with = "delete")]
    pub direct: bool,

    /// Delete the given assets and everything that uses them
    #[arg(long)]
    pub delete: bool,

    /// With --delete, report what would be deleted without touching files
    #[arg(long, requires = "delete")]
    pub dry_run: bool,

    /// Path to a config file (defaults to <PROJECT>/what-uses-this.config.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn search_mode(&self) -> SearchMode {
        if self.direct {
            SearchMode::Direct
        } else {
            SearchMode::Transitive
        }
    }
}
