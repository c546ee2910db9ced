use std::path::PathBuf;

use magicgen_core::ValidatedSchema;
use tracing::debug;

use crate::errors::GenerationResult;
use crate::model::{GenerateOptions, WrittenFile};
use crate::naming::{FilePrefix, name_file};
use crate::output::write_records_file;
use crate::random::{Clock, RandomSource};
use crate::record::generate_batch;

/// Output parameters every worker receives a copy of.
#[derive(Debug, Clone)]
pub struct FileJob {
    pub output_dir: PathBuf,
    pub file_name: String,
    pub file_prefix: FilePrefix,
    pub files_count: u64,
    pub data_lines: u64,
}

impl From<&GenerateOptions> for FileJob {
    fn from(options: &GenerateOptions) -> Self {
        Self {
            output_dir: options.output_dir.clone(),
            file_name: options.file_name.clone(),
            file_prefix: options.file_prefix,
            files_count: options.files_count,
            data_lines: options.data_lines,
        }
    }
}

/// Generate and write the file at 1-based `index`.
pub fn write_file<R, C>(
    job: &FileJob,
    schema: &ValidatedSchema,
    index: u64,
    rng: &mut R,
    clock: &C,
) -> GenerationResult<WrittenFile>
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    let records = generate_batch(schema, job.data_lines, rng, clock);
    let name = name_file(&job.file_name, job.file_prefix, job.files_count, index, rng);
    let path = job.output_dir.join(name);
    let bytes = write_records_file(&path, &records)?;

    debug!(index, path = %path.display(), records = records.len(), bytes, "file written");

    Ok(WrittenFile {
        index,
        path,
        records: records.len() as u64,
        bytes,
    })
}

/// Write every file in `indices`, stopping at the first failure.
pub fn write_files<R, C>(
    job: &FileJob,
    schema: &ValidatedSchema,
    indices: &[u64],
    rng: &mut R,
    clock: &C,
) -> GenerationResult<Vec<WrittenFile>>
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    indices
        .iter()
        .map(|&index| write_file(job, schema, index, rng, clock))
        .collect()
}
