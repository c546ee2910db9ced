use std::path::{MAIN_SEPARATOR, Path};

use serde_json::Value;
use tracing::info;

use crate::error::SourceError;

/// Resolve the schema argument into JSON.
///
/// An existing file is read and parsed. Input that looks like a path
/// (ends in `.json` or contains a separator) but does not exist is an
/// error. Anything else is parsed as inline JSON.
pub fn load_schema_source(input: &str) -> Result<Value, SourceError> {
    let path = Path::new(input);
    if path.is_file() {
        let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value = serde_json::from_str(&contents).map_err(|source| {
            SourceError::InvalidJson {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(path = %path.display(), "schema loaded from file");
        return Ok(value);
    }

    if looks_like_path(input) {
        let cwd = std::env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
            cwd,
        });
    }

    let value = serde_json::from_str(input).map_err(SourceError::InvalidInline)?;
    info!("schema parsed from command line input");
    Ok(value)
}

fn looks_like_path(input: &str) -> bool {
    input.ends_with(".json") || input.contains(MAIN_SEPARATOR)
}
