use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{GenerationError, GenerationResult};

/// Delete every `{base}*.json` entry directly under `dir`.
///
/// Symlinks are removed, not followed. A matching directory cannot be
/// deleted as a file, so it fails the cleanup like any other deletion
/// error. The first failed deletion aborts the cleanup.
pub fn clear_existing_files(dir: &Path, base: &str) -> GenerationResult<usize> {
    let matches = matching_files(dir, base)?;
    if matches.is_empty() {
        info!(pattern = %format!("{base}*.json"), "no existing files to clear");
        return Ok(0);
    }

    info!(
        count = matches.len(),
        pattern = %format!("{base}*.json"),
        "clearing existing files"
    );
    for path in &matches {
        std::fs::remove_file(path).map_err(|source| GenerationError::Cleanup {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "deleted file");
    }
    info!(count = matches.len(), "existing files cleared");
    Ok(matches.len())
}

fn matching_files(dir: &Path, base: &str) -> GenerationResult<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(base) && name.ends_with(".json") {
            matches.push(entry.path());
        }
    }
    matches.sort();
    Ok(matches)
}
