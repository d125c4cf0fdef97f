//! CLI entrypoint for response-foreach
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use foreach_application::{
    RunResponseForEachInput, RunResponseForEachUseCase, SessionProgressNotifier,
};
use foreach_domain::OutputFormat;
use foreach_infrastructure::{
    ConfigLoader, FileConfig, JsonlTranscriptLogger, ParticipantConfig, make_contactables,
    read_input, write_output,
};
use foreach_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    let Some(dir) = cli.dir.clone() else {
        bail!("Session directory is required. Usage: response-foreach <DIR>");
    };

    info!("Starting response-foreach in {}", dir.display());

    let input = read_input(&dir)?;
    let settings = config.session_settings();

    let Some(max_time) = settings.resolve_max_time(cli.max_time, input.max_time) else {
        bail!(
            "No max time configured. Set \"max_time\" in {}/input.json, pass --max-time, \
             or set session.max_time_ms in the config file",
            dir.display()
        );
    };

    let poll = input.to_poll(max_time);
    let participants = input.participants_config.len();
    if participants == 0 {
        warn!("No participants configured; the session will end when the time runs out");
    }

    // === Dependency Injection ===
    let contactables = make_contactables(&input.participants_config)?;

    let mut use_case = RunResponseForEachUseCase::new();
    let transcript = transcript_path(&cli, &config).and_then(|path| {
        match JsonlTranscriptLogger::open(&path) {
            Ok(logger) => Some(Arc::new(logger)),
            Err(e) => {
                warn!(
                    "Cannot write transcript to {}: {}; continuing without",
                    path.display(),
                    e
                );
                None
            }
        }
    });
    if let Some(logger) = &transcript {
        info!("Writing transcript to {}", logger.path().display());
        use_case = use_case.with_transcript_logger(logger.clone());
    }

    let run_input = RunResponseForEachInput::new(poll.clone(), contactables);

    // A terminal participant shares the screen, so no redrawing bar then
    let result = if cli.quiet || !config.output.progress {
        use_case.execute(run_input).await
    } else {
        let has_terminal = input
            .participants_config
            .iter()
            .any(|p| matches!(p, ParticipantConfig::Cli { .. }));
        let progress: Box<dyn SessionProgressNotifier> = if has_terminal {
            Box::new(SimpleProgress)
        } else {
            Box::new(ProgressReporter::new())
        };
        use_case
            .execute_with_progress(run_input, progress.as_ref())
            .await
    };

    if result.is_timeout() {
        warn!(
            "Max time reached with {}/{} responses",
            result.responses.len(),
            poll.expected_responses(participants)
        );
    }

    let output_path = write_output(&dir, &result.responses)?;
    info!(
        "Wrote {} responses to {}",
        result.responses.len(),
        output_path.display()
    );
    if let Some(logger) = &transcript {
        info!(
            "Transcript has {} events in {}",
            logger.lines_written(),
            logger.path().display()
        );
    }

    let format = cli.output.map(OutputFormat::from).unwrap_or(config.output_format());
    match format {
        OutputFormat::Summary => {
            println!("{}", ConsoleFormatter::format(&result, &poll, participants))
        }
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&result)),
        OutputFormat::None => {}
    }

    // Let participants read the final announcement before the process exits
    tokio::time::sleep(settings.exit_grace).await;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate()?;
    Ok(config)
}

fn transcript_path(cli: &Cli, config: &FileConfig) -> Option<PathBuf> {
    cli.transcript
        .clone()
        .or_else(|| config.logging.transcript.as_ref().map(PathBuf::from))
}
