mod cli;

use cli::Args;
use std::path::{Path, PathBuf};
use std::process;
use sw360_graph::adapters::outbound::console::StderrProgressReporter;
use sw360_graph::adapters::outbound::filesystem::SnapshotTransport;
use sw360_graph::application::dto::OutputFormat;
use sw360_graph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sw360_graph::application::use_cases::CheckProjectUseCase;
use sw360_graph::config::{self, ConfigFile};
use sw360_graph::shared::error::{CheckError, ExitCode};
use sw360_graph::shared::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }
            eprintln!();

            let code = match e.downcast_ref::<CheckError>() {
                Some(CheckError::Validation { .. }) => ExitCode::InvalidArguments,
                _ => ExitCode::ApplicationError,
            };
            process::exit(code.as_i32());
        }
    }
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug)]
struct Settings {
    snapshot_dir: PathBuf,
    format: OutputFormat,
    check_sources: bool,
    fail_on_open: bool,
    color: bool,
}

impl Settings {
    fn merge(args: &Args, config: &ConfigFile) -> Result<Self> {
        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };
        Ok(Self {
            snapshot_dir: args
                .snapshot
                .clone()
                .or_else(|| config.snapshot_dir.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            format,
            check_sources: args.check_sources || config.check_sources.unwrap_or(false),
            fail_on_open: args.fail_on_open || config.fail_on_open.unwrap_or(false),
            // Never write escape codes into files
            color: !args.no_color && args.output.is_none() && config.color.unwrap_or(true),
        })
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => match config::discover_config(&std::env::current_dir()?)? {
            Some(found) => {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
                found
            }
            None => ConfigFile::default(),
        },
    };
    let settings = Settings::merge(&args, &config)?;
    tracing::debug!(?settings, "effective settings");

    validate_snapshot_dir(&settings.snapshot_dir)?;

    let request = args
        .project_request()
        .ok_or_else(|| CheckError::Validation {
            message: "either --id or --name with --version must be given".to_string(),
        })?
        .with_check_sources(settings.check_sources);

    // Create adapters (Dependency Injection)
    let transport = SnapshotTransport::new(settings.snapshot_dir.clone());
    let progress_reporter = StderrProgressReporter::new();

    let mut use_case = CheckProjectUseCase::new(transport, progress_reporter);
    let status = use_case.execute(&request)?;

    eprintln!("{}", settings.format.progress_message());
    let formatter = FormatterFactory::create(settings.format, settings.color);
    let report = formatter.format(&status)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&report)?;

    if settings.fail_on_open && status.has_open_releases() {
        eprintln!(
            "⚠️  {} release(s) still in OPEN clearing state",
            status.open_releases().count()
        );
        return Ok(ExitCode::OpenClearingFound);
    }
    Ok(ExitCode::Success)
}

fn validate_snapshot_dir(path: &Path) -> Result<()> {
    let not_found = |suggestion: &str| CheckError::SnapshotNotFound {
        path: path.to_path_buf(),
        suggestion: suggestion.to_string(),
    };

    // Security check: Reject symbolic links for the snapshot root
    let metadata = std::fs::symlink_metadata(path).map_err(|_| {
        not_found("Pass the snapshot directory with --snapshot or set snapshot_dir in the config file.")
    })?;
    if metadata.is_symlink() {
        return Err(not_found(
            "Security: the snapshot directory is a symbolic link. Pass the real directory instead.",
        )
        .into());
    }
    if !metadata.is_dir() {
        return Err(not_found("The snapshot path must be a directory, not a file.").into());
    }
    Ok(())
}
