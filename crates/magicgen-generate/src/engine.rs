use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use magicgen_core::ValidatedSchema;
use tracing::{info, warn};

use crate::distribute::distribute;
use crate::errors::{GenerationError, GenerationResult};
use crate::model::{GenerateOptions, GenerationSummary, OutputMode};
use crate::naming::FilePrefix;
use crate::output::{clear_existing_files, print_records};
use crate::pool::{WorkerPool, WorkerTask};
use crate::random::{RngSource, SystemClock};
use crate::record::generate_batch;
use crate::worker::{FileJob, write_file};

/// Entry point for generating records from a validated schema.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Output path this engine will take.
    pub fn mode(&self) -> OutputMode {
        if self.options.files_count == 0 {
            OutputMode::Console
        } else if self.options.workers <= 1 {
            OutputMode::SingleProcess
        } else {
            OutputMode::MultiProcess
        }
    }

    /// Run, printing console-mode records to stdout.
    pub fn run(&self, schema: &ValidatedSchema) -> GenerationResult<GenerationSummary> {
        let stdout = std::io::stdout();
        let mut console = stdout.lock();
        self.run_with_console(schema, &mut console)
    }

    /// Run, printing console-mode records to `console`.
    pub fn run_with_console<W: Write>(
        &self,
        schema: &ValidatedSchema,
        console: &mut W,
    ) -> GenerationResult<GenerationSummary> {
        let start = Instant::now();
        self.check_options()?;

        let mode = self.mode();
        let mut summary = GenerationSummary::new(mode);

        info!(
            mode = ?mode,
            files = self.options.files_count,
            lines = self.options.data_lines,
            workers = self.options.workers,
            fields = schema.fields.len(),
            "generation started"
        );

        if self.options.clear_path {
            summary.files_cleared =
                clear_existing_files(&self.options.output_dir, &self.options.file_name)?;
        }

        match mode {
            OutputMode::Console => self.run_console(schema, console, &mut summary)?,
            OutputMode::SingleProcess => self.run_single(schema, &mut summary)?,
            OutputMode::MultiProcess => self.run_parallel(schema, &mut summary)?,
        }

        summary.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            mode = ?mode,
            files = summary.files.len(),
            records = summary.records_generated,
            workers = summary.workers_used,
            bytes_written = summary.bytes_written,
            duration_ms = summary.duration_ms,
            "generation completed"
        );
        Ok(summary)
    }

    fn check_options(&self) -> GenerationResult<()> {
        if self.options.data_lines == 0 {
            return Err(GenerationError::InvalidOptions(
                "data_lines must be at least 1".to_string(),
            ));
        }
        if self.options.files_count > 0 && self.options.file_name.is_empty() {
            return Err(GenerationError::InvalidOptions(
                "file_name must not be empty".to_string(),
            ));
        }
        if self.options.files_count > 1 && self.options.file_prefix == FilePrefix::Count {
            warn!(
                file_name = %self.options.file_name,
                "count prefix names files without a .json extension"
            );
        }
        Ok(())
    }

    fn run_console<W: Write>(
        &self,
        schema: &ValidatedSchema,
        console: &mut W,
        summary: &mut GenerationSummary,
    ) -> GenerationResult<()> {
        info!("printing generated data to console (files_count = 0)");
        let mut rng = RngSource::for_worker(self.options.seed, 0);
        let records = generate_batch(schema, self.options.data_lines, &mut rng, &SystemClock);
        print_records(console, &records)?;
        summary.records_generated = records.len() as u64;
        summary.workers_used = 1;
        Ok(())
    }

    fn run_single(
        &self,
        schema: &ValidatedSchema,
        summary: &mut GenerationSummary,
    ) -> GenerationResult<()> {
        info!("using single process for file generation");
        let job = FileJob::from(&self.options);
        let mut rng = RngSource::for_worker(self.options.seed, 0);
        for index in 1..=self.options.files_count {
            let file = write_file(&job, schema, index, &mut rng, &SystemClock)?;
            info!(path = %file.path.display(), records = file.records, "saved records");
            summary.record_file(file);
        }
        summary.workers_used = 1;
        Ok(())
    }

    fn run_parallel(
        &self,
        schema: &ValidatedSchema,
        summary: &mut GenerationSummary,
    ) -> GenerationResult<()> {
        let buckets = distribute(self.options.files_count, self.options.workers);
        let tasks = WorkerTask::from_buckets(buckets);
        let pool = WorkerPool::new(tasks.len())?;
        info!(workers = pool.size(), "using worker pool for file generation");

        let files = pool.run(
            tasks,
            Arc::new(schema.clone()),
            Arc::new(FileJob::from(&self.options)),
            self.options.seed,
        )?;
        for file in files {
            summary.record_file(file);
        }
        summary.workers_used = pool.size();
        Ok(())
    }
}
