use std::path::PathBuf;

use magicgen_core::{SchemaError, SourceError};
use magicgen_generate::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid argument --{name}: {message}")]
    InvalidArgument { name: &'static str, message: String },
    #[error("configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
    #[error("failed to read configuration '{}': {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in '{}': {source}", path.display())]
    ConfigDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("schema source error: {0}")]
    Source(#[from] SourceError),
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Remediation hint shown next to the error, when one applies.
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::InvalidArgument { .. } => {
                Some("check --help for more information about expected values".to_string())
            }
            CliError::ConfigNotFound(_) => {
                Some("pass an existing file to --config or omit the flag".to_string())
            }
            CliError::ConfigDecode { .. } => {
                Some("see magicgen.toml in the repository for the expected keys".to_string())
            }
            CliError::Source(err) => Some(err.hint().to_string()),
            CliError::Schema(err) => Some(err.hint()),
            CliError::ConfigIo { .. } | CliError::Generation(_) | CliError::Logging(_) => None,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
