use std::path::{Path, PathBuf};

use magicgen_core::{ValidatedSchema, load_schema_source, validate_schema};
use magicgen_generate::{FilePrefix, GenerateOptions};
use tracing::{info, warn};

use crate::args::Cli;
use crate::errors::{CliError, CliResult};
use crate::settings::Settings;

/// Fully validated run configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub options: GenerateOptions,
    pub schema: ValidatedSchema,
}

/// Merge command line flags over `settings` and validate every value.
pub fn validate_arguments(cli: &Cli, settings: &Settings) -> CliResult<RunConfig> {
    let path = cli
        .path_to_save_files
        .as_deref()
        .unwrap_or(&settings.path_to_save_files);
    let output_dir = resolve_output_dir(path)?;
    info!(path = %output_dir.display(), "path_to_save_files is valid");

    let files_count = validate_files_count(cli.files_count.unwrap_or(settings.files_count))?;
    info!(files_count, "files_count is valid");

    let data_lines = validate_data_lines(cli.data_lines.unwrap_or(settings.data_lines))?;
    info!(data_lines, "data_lines is valid");

    let file_prefix = match cli.file_prefix.as_deref() {
        Some(value) => value
            .parse::<FilePrefix>()
            .map_err(|message| CliError::invalid("file-prefix", message))?,
        None => settings.file_prefix,
    };

    let file_name = cli
        .file_name
        .clone()
        .unwrap_or_else(|| settings.file_name.clone());
    if file_name.trim().is_empty() {
        return Err(CliError::invalid("file-name", "file name must not be empty"));
    }

    let source = load_schema_source(&cli.data_schema)?;
    let schema = validate_schema(&source)?;
    info!(fields = schema.fields.len(), "data_schema is valid");

    let workers = validate_multiprocessing(
        cli.multiprocessing.unwrap_or(settings.multiprocessing),
        num_cpus::get(),
    )?;
    info!(workers, "multiprocessing is valid");

    Ok(RunConfig {
        options: GenerateOptions {
            output_dir,
            file_name,
            file_prefix,
            files_count,
            data_lines,
            clear_path: cli.clear_path || settings.clear_path,
            workers,
            seed: cli.seed,
        },
        schema,
    })
}

/// Absolute, existing, writable directory.
pub fn resolve_output_dir(input: &str) -> CliResult<PathBuf> {
    const NAME: &str = "path-to-save-files";

    if input.is_empty() {
        return Err(CliError::invalid(NAME, "path is required"));
    }

    let cwd = std::env::current_dir()
        .map_err(|err| CliError::invalid(NAME, format!("cannot read current directory: {err}")))?;
    let path = if input == "." {
        cwd
    } else if Path::new(input).is_absolute() {
        PathBuf::from(input)
    } else {
        cwd.join(input)
    };

    if !path.exists() {
        return Err(CliError::invalid(
            NAME,
            format!("path does not exist: {}", path.display()),
        ));
    }
    if !path.is_dir() {
        return Err(CliError::invalid(
            NAME,
            format!("path exists but is not a directory: {}", path.display()),
        ));
    }
    if let Err(err) = check_writable(&path) {
        return Err(CliError::invalid(
            NAME,
            format!("no write permission for directory: {} ({err})", path.display()),
        ));
    }

    Ok(path)
}

/// Create and remove a uniquely named file in `dir` as this process.
fn check_writable(dir: &Path) -> std::io::Result<()> {
    let marker = dir.join(format!(".magicgen-write-check-{}", uuid::Uuid::new_v4()));
    std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&marker)?;
    std::fs::remove_file(&marker)
}

pub fn validate_files_count(value: i64) -> CliResult<u64> {
    u64::try_from(value).map_err(|_| {
        CliError::invalid(
            "files-count",
            format!("files count can't be a negative number: {value}"),
        )
    })
}

pub fn validate_data_lines(value: i64) -> CliResult<u64> {
    if value <= 0 {
        return Err(CliError::invalid(
            "data-lines",
            format!("data lines can't be a negative number or zero: {value}"),
        ));
    }
    Ok(value as u64)
}

/// Worker count clamped to `cpu_count`.
pub fn validate_multiprocessing(value: i64, cpu_count: usize) -> CliResult<usize> {
    let requested = usize::try_from(value).map_err(|_| {
        CliError::invalid(
            "multiprocessing",
            format!("multiprocessing can't be a negative number: {value}"),
        )
    })?;

    if requested > cpu_count {
        warn!(
            requested,
            cpu_count, "multiprocessing is greater than CPU count, using CPU count instead"
        );
        return Ok(cpu_count);
    }
    Ok(requested)
}
