use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::naming::FilePrefix;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Existing, writable directory receiving output files.
    pub output_dir: PathBuf,
    /// Base name shared by every output file.
    pub file_name: String,
    /// Suffix strategy when more than one file is generated.
    pub file_prefix: FilePrefix,
    /// Number of files; zero prints records to the console instead.
    pub files_count: u64,
    /// Records per file (or printed to the console).
    pub data_lines: u64,
    /// Delete `{file_name}*.json` in `output_dir` before generating.
    pub clear_path: bool,
    /// Parallel workers; zero or one generates sequentially.
    pub workers: usize,
    /// Seed for reproducible values; entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_name: "data".to_string(),
            file_prefix: FilePrefix::Count,
            files_count: 1,
            data_lines: 10,
            clear_path: false,
            workers: 1,
            seed: None,
        }
    }
}

/// Output path chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    Console,
    SingleProcess,
    MultiProcess,
}

/// File written by a worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrittenFile {
    pub index: u64,
    pub path: PathBuf,
    pub records: u64,
    pub bytes: u64,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub mode: OutputMode,
    pub files_cleared: usize,
    pub files: Vec<WrittenFile>,
    pub records_generated: u64,
    pub workers_used: usize,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationSummary {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            files_cleared: 0,
            files: Vec::new(),
            records_generated: 0,
            workers_used: 0,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_file(&mut self, file: WrittenFile) {
        self.records_generated += file.records;
        self.bytes_written += file.bytes;
        self.files.push(file);
    }
}
