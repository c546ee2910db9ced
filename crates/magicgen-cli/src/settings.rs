use std::path::{Path, PathBuf};

use magicgen_generate::FilePrefix;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{CliError, CliResult};

/// Defaults file looked up in the current directory.
pub const DEFAULT_SETTINGS_FILE: &str = "magicgen.toml";

/// Defaults applied before command line overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub path_to_save_files: String,
    pub files_count: i64,
    pub file_name: String,
    pub file_prefix: FilePrefix,
    pub data_lines: i64,
    pub clear_path: bool,
    pub multiprocessing: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path_to_save_files: "./output".to_string(),
            files_count: 1,
            file_name: "data".to_string(),
            file_prefix: FilePrefix::Count,
            data_lines: 10,
            clear_path: false,
            multiprocessing: 1,
        }
    }
}

/// Load settings from `explicit`, else `magicgen.toml` if present, else
/// built-in defaults.
pub fn load_settings(explicit: Option<&Path>) -> CliResult<Settings> {
    match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::ConfigNotFound(path.to_path_buf()));
            }
            read_settings(path)
        }
        None => {
            let path = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if path.is_file() {
                read_settings(&path)
            } else {
                info!("no {DEFAULT_SETTINGS_FILE} found, using built-in defaults");
                Ok(Settings::default())
            }
        }
    }
}

fn read_settings(path: &Path) -> CliResult<Settings> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(path, &content)?;
    info!(path = %path.display(), "default configuration loaded");
    Ok(settings)
}

fn parse_settings(path: &Path, content: &str) -> CliResult<Settings> {
    toml::from_str(content).map_err(|source| CliError::ConfigDecode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let settings = parse_settings(
            Path::new("test.toml"),
            "files_count = 5\nfile_prefix = \"uuid\"\n",
        )
        .expect("parse settings");
        assert_eq!(settings.files_count, 5);
        assert_eq!(settings.file_prefix, FilePrefix::Uuid);
        assert_eq!(settings.file_name, "data");
        assert_eq!(settings.data_lines, 10);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_settings(Path::new("test.toml"), "threads = 4\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigDecode { .. }));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_settings(Some(Path::new("definitely_missing_magicgen.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound(_)));
    }

    #[test]
    fn repository_defaults_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../magicgen.toml");
        let settings = load_settings(Some(&path)).expect("repository magicgen.toml");
        assert_eq!(settings, Settings::default());
    }
}
