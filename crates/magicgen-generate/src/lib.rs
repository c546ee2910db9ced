//! Record generation engine for magicgen.
//!
//! This crate turns a validated schema into records and writes them to the
//! console or to JSON files, optionally spreading files across a worker
//! pool.

pub mod distribute;
pub mod engine;
pub mod errors;
pub mod model;
pub mod naming;
pub mod output;
pub mod pool;
pub mod random;
pub mod record;
pub mod value;
pub mod worker;

pub use distribute::distribute;
pub use engine::GenerationEngine;
pub use errors::{GenerationError, GenerationResult};
pub use model::{GenerateOptions, GenerationSummary, OutputMode, WrittenFile};
pub use naming::{FilePrefix, name_file};
pub use random::{Clock, RandomSource, RngSource, SystemClock};
pub use record::{Record, generate_batch, generate_record};
pub use value::{GeneratedValue, generate_value};
