pub mod cleanup;
pub mod json;

pub use cleanup::clear_existing_files;
pub use json::{print_records, write_records_file};
