use std::path::PathBuf;

use clap::{Parser, ValueEnum};

const SCHEMA_HELP: &str = "JSON schema, given as a path to a JSON file (e.g. ./schema.json) or \
inline (e.g. '{\"name\": \"str:rand\", \"age\": \"int:rand(1, 100)\", \"type\": \"str:['client','partner']\"}'). \
Every value follows type:instruction. Supported types: str, int, timestamp. \
Instructions: rand, rand(from, to), a list of values, a fixed value, or empty.";

#[derive(Parser, Debug)]
#[command(
    name = "magicgen",
    version,
    about = "A console utility for generating test data based on a data schema"
)]
pub struct Cli {
    /// Directory where files are saved ('.' for the current directory).
    #[arg(long, alias = "path_to_save_files", value_name = "PATH")]
    pub path_to_save_files: Option<String>,
    /// How many JSON files to generate; 0 prints records to the console.
    #[arg(long, alias = "files_count", value_name = "N", allow_negative_numbers = true)]
    pub files_count: Option<i64>,
    /// Base file name; a single file is saved as <file_name>.json.
    #[arg(long, alias = "file_name", value_name = "NAME")]
    pub file_name: Option<String>,
    /// File name suffix used when more than one file is generated.
    #[arg(
        long,
        alias = "file_prefix",
        value_name = "PREFIX",
        value_parser = ["count", "random", "uuid", "default"]
    )]
    pub file_prefix: Option<String>,
    #[arg(long, alias = "data_schema", value_name = "SCHEMA", help = SCHEMA_HELP)]
    pub data_schema: String,
    /// Records per file.
    #[arg(long, alias = "data_lines", value_name = "N", allow_negative_numbers = true)]
    pub data_lines: Option<i64>,
    /// Delete files matching <file_name>*.json in the output directory first.
    #[arg(long, alias = "clear_path")]
    pub clear_path: bool,
    /// Number of parallel workers sharing files_count; 0 or 1 runs sequentially.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub multiprocessing: Option<i64>,
    /// Defaults file (falls back to ./magicgen.toml when present).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Seed for reproducible values (timestamps always use the clock).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
