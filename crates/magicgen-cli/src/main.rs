mod args;
mod errors;
mod logging;
mod settings;
mod validate;

use std::process::ExitCode;

use clap::Parser;
use magicgen_generate::GenerationEngine;
use tracing::{Level, error, info};

use args::Cli;
use errors::{CliError, CliResult};
use settings::load_settings;
use validate::validate_arguments;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.log_format, cli.log_file.as_deref()) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, cli.log_file.is_some());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli.config.as_deref())?;
    let config = validate_arguments(cli, &settings)?;

    let engine = GenerationEngine::new(config.options);
    let summary = engine.run(&config.schema)?;

    info!(
        event = "run_finished",
        mode = ?summary.mode,
        files = summary.files.len(),
        records = summary.records_generated,
        workers = summary.workers_used,
        duration_ms = summary.duration_ms
    );
    Ok(())
}

fn report(err: &CliError, logs_to_file: bool) {
    let field = match err {
        CliError::Schema(schema_err) => schema_err.key().unwrap_or_default(),
        _ => "",
    };
    let hint = err.hint();
    match &hint {
        Some(hint) => error!(error = %err, field, hint = %hint, "run failed"),
        None => error!(error = %err, field, "run failed"),
    }

    // The log line above may be filtered out or written to a file.
    if logs_to_file || !tracing::enabled!(Level::ERROR) {
        eprintln!("error: {err}");
        if let Some(hint) = hint {
            eprintln!("hint: {hint}");
        }
    }
}
