mod cli;

use cli::Args;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use what_uses_this::adapters::outbound::console::StderrProgressReporter;
use what_uses_this::adapters::outbound::filesystem::ManifestAssetDatabase;
use what_uses_this::application::dto::{OutputFormat, UsageRequest};
use what_uses_this::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use what_uses_this::application::read_models::UsageReadModelBuilder;
use what_uses_this::application::session::UsageSession;
use what_uses_this::application::use_cases::FindUsagesUseCase;
use what_uses_this::config::{self, ConfigFile};
use what_uses_this::dependency_tracking::domain::DEFAULT_RESOURCES_MARKER;
use what_uses_this::shared::error::{ExitCode, UsageError};
use what_uses_this::shared::Result;

const DEFAULT_MANIFEST: &str = "asset-dependencies.toml";

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Log filter used when `RUST_LOG` is not set
fn default_log_filter(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "what_uses_this=debug",
        (false, true) => "what_uses_this=error",
        (false, false) => "what_uses_this=warn",
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = default_log_filter(verbose, quiet);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Settings merged from the command line, the config file and defaults
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    manifest_path: PathBuf,
    resources_marker: String,
}

impl Settings {
    /// Command-line options win over the config file
    fn resolve(args: &Args, config: &ConfigFile, project_path: &Path) -> Result<Self> {
        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        let manifest_path = match (&args.manifest, &config.manifest) {
            (Some(manifest), _) => manifest.clone(),
            (None, Some(manifest)) => project_path.join(manifest),
            (None, None) => project_path.join(DEFAULT_MANIFEST),
        };

        let resources_marker = config
            .resources_marker
            .clone()
            .unwrap_or_else(|| DEFAULT_RESOURCES_MARKER.to_string());

        Ok(Self {
            format,
            manifest_path,
            resources_marker,
        })
    }
}

fn run(args: Args) -> Result<()> {
    let project_path = args.project.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?;
    let settings = Settings::resolve(&args, &config, &project_path)?;
    tracing::debug!(?settings, "Resolved settings");

    let database = ManifestAssetDatabase::load(&settings.manifest_path, project_path)?
        .with_dry_run(args.dry_run);
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let session = UsageSession::new(database, progress_reporter)
        .with_resources_marker(settings.resources_marker.as_str());
    let mut use_case = FindUsagesUseCase::new(session);

    let request = UsageRequest::new(args.assets.clone(), args.search_mode(), args.delete);
    let response = use_case.execute(request)?;

    let read_model = UsageReadModelBuilder::build(&response, &settings.resources_marker);
    let formatter = if args.output.is_some() {
        FormatterFactory::create_plain(settings.format)
    } else {
        FormatterFactory::create(settings.format)
    };
    let formatted_output = formatter.format(&read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    if response.has_deletion_failures() {
        anyhow::bail!("Some assets could not be deleted; see the report above");
    }

    Ok(())
}

fn load_config(args: &Args, project_path: &Path) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        let config = config::load_config_from_path(path)?;
        if !args.quiet {
            eprintln!("📄 Loaded config from: {}", path.display());
        }
        return Ok(config);
    }

    match config::discover_config(project_path)? {
        Some(config) => {
            if !args.quiet {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    project_path.join(config::CONFIG_FILENAME).display()
                );
            }
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(UsageError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Project root is where deletions happen; refuse to follow a link out of it
    let metadata = std::fs::symlink_metadata(path).map_err(|e| UsageError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(UsageError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(UsageError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
