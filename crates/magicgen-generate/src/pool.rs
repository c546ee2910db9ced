//! Fixed-size worker pool for parallel file generation.
//!
//! Each task owns its bucket of file indices and its own random source.
//! Workers share only read-only data; the pool join is the single
//! synchronization point.

use std::sync::Arc;

use magicgen_core::ValidatedSchema;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::errors::{GenerationError, GenerationResult};
use crate::model::WrittenFile;
use crate::random::{RngSource, SystemClock};
use crate::worker::{FileJob, write_files};

/// Bucket of file indices assigned to one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerTask {
    pub worker: usize,
    pub indices: Vec<u64>,
}

impl WorkerTask {
    /// One task per non-empty bucket, numbered by bucket position.
    pub fn from_buckets(buckets: Vec<Vec<u64>>) -> Vec<Self> {
        buckets
            .into_iter()
            .enumerate()
            .filter(|(_, indices)| !indices.is_empty())
            .map(|(worker, indices)| Self { worker, indices })
            .collect()
    }
}

/// Pool sized to the number of tasks it will run.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    size: usize,
}

impl WorkerPool {
    pub fn new(size: usize) -> GenerationResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(size.max(1))
            .thread_name(|index| format!("magicgen-worker-{index}"))
            .build()
            .map_err(|err| GenerationError::WorkerPool(err.to_string()))?;
        Ok(Self { pool, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Run every task to completion, then fail with the first worker error.
    pub fn run(
        &self,
        tasks: Vec<WorkerTask>,
        schema: Arc<ValidatedSchema>,
        job: Arc<FileJob>,
        seed: Option<u64>,
    ) -> GenerationResult<Vec<WrittenFile>> {
        let outcomes: Vec<(usize, GenerationResult<Vec<WrittenFile>>)> = self.pool.install(|| {
            tasks
                .into_par_iter()
                .map(|task| {
                    let schema = Arc::clone(&schema);
                    let job = Arc::clone(&job);
                    let mut rng = RngSource::for_worker(seed, task.worker);
                    info!(worker = task.worker, files = task.indices.len(), "worker started");
                    let outcome = write_files(&job, &schema, &task.indices, &mut rng, &SystemClock);
                    (task.worker, outcome)
                })
                .collect()
        });

        let mut written = Vec::new();
        let mut first_error = None;
        for (worker, outcome) in outcomes {
            match outcome {
                Ok(files) => written.extend(files),
                Err(err) => {
                    warn!(worker, error = %err, "worker failed");
                    if first_error.is_none() {
                        first_error = Some(GenerationError::Worker {
                            worker,
                            source: Box::new(err),
                        });
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                written.sort_by_key(|file| file.index);
                Ok(written)
            }
        }
    }
}
