use crate::error::{CompressionError, Result};
use crate::processing::{compress_one, generate_output_path, CompressionResult};
use crate::utils::{calculate_compression_ratio, is_image_file};
use crate::validation::{validate_inputs, validate_output_dir, validate_quality};
use crossbeam_channel::{unbounded, Receiver};
use glob::glob;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Everything one batch run needs. Quality is fixed for the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionRequest {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub quality: u8,
}

impl CompressionRequest {
    /// Builds a request after checking the batch preconditions: at least one
    /// input, an existing output directory and a quality in 1..=100.
    pub fn new(inputs: Vec<PathBuf>, output_dir: Option<PathBuf>, quality: u8) -> Result<Self> {
        validate_inputs(&inputs)?;
        let output_dir = validate_output_dir(output_dir.as_deref())?;
        let quality = validate_quality(quality)?;

        Ok(Self {
            inputs,
            output_dir,
            quality,
        })
    }
}

/// Aggregate statistics over a batch. Sizes only count successful files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub successful: usize,
    pub failed: usize,
    pub total_original_size: u64,
    pub total_compressed_size: u64,
}

impl BatchSummary {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a CompressionResult>,
    {
        let mut summary = Self::default();
        for result in results {
            summary.record(result);
        }
        summary
    }

    pub fn record(&mut self, result: &CompressionResult) {
        match result.stats() {
            Some(stats) => {
                self.successful += 1;
                self.total_original_size += stats.original_size;
                self.total_compressed_size += stats.compressed_size;
            }
            None => self.failed += 1,
        }
    }

    pub fn total_files(&self) -> usize {
        self.successful + self.failed
    }

    /// Overall percentage reduction; 0 when nothing was compressed.
    pub fn ratio(&self) -> f64 {
        calculate_compression_ratio(self.total_original_size, self.total_compressed_size)
    }
}

/// Compresses every input in order and returns one result per input plus
/// the summary. A failing file never stops the batch.
pub fn compress_batch(request: &CompressionRequest) -> (Vec<CompressionResult>, BatchSummary) {
    compress_batch_with(request, |_| {})
}

/// Same as [`compress_batch`], calling `on_result` as soon as each file is
/// done so a caller can show progress while the batch runs.
pub fn compress_batch_with<F>(
    request: &CompressionRequest,
    mut on_result: F,
) -> (Vec<CompressionResult>, BatchSummary)
where
    F: FnMut(&CompressionResult),
{
    info!(
        files = request.inputs.len(),
        output = %request.output_dir.display(),
        quality = request.quality,
        "starting batch compression"
    );

    let mut results = Vec::with_capacity(request.inputs.len());
    let mut summary = BatchSummary::default();
    let mut written_outputs: HashSet<PathBuf> = HashSet::new();

    for input_path in &request.inputs {
        // Colliding output names overwrite each other; last write wins.
        let output_path = generate_output_path(input_path, &request.output_dir).ok();
        if let Some(output_path) = output_path.filter(|p| written_outputs.contains(p)) {
            warn!(
                input = %input_path.display(),
                output = %output_path.display(),
                "overwriting output written by an earlier input in this batch"
            );
        }

        let result = compress_one(input_path, &request.output_dir, request.quality);
        if let Some(stats) = result.stats() {
            written_outputs.insert(stats.output_path.clone());
        }
        summary.record(&result);
        on_result(&result);
        results.push(result);
    }

    info!(
        successful = summary.successful,
        failed = summary.failed,
        ratio = summary.ratio(),
        "batch compression complete"
    );

    (results, summary)
}

/// Progress message sent from a background batch.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    File(CompressionResult),
    Finished(BatchSummary),
}

/// A batch running on its own thread. Events arrive in input order and the
/// last one is always [`BatchEvent::Finished`].
pub struct BatchHandle {
    events: Receiver<BatchEvent>,
    worker: JoinHandle<BatchSummary>,
}

impl BatchHandle {
    pub fn events(&self) -> &Receiver<BatchEvent> {
        &self.events
    }

    /// Waits for the worker to finish and returns the summary.
    pub fn join(self) -> Result<BatchSummary> {
        self.worker
            .join()
            .map_err(|_| CompressionError::WorkerPanicked)
    }
}

/// Moves the sequential batch loop onto one worker thread. Files are still
/// processed one at a time; only the caller is freed up.
pub fn spawn_batch(request: CompressionRequest) -> BatchHandle {
    let (sender, events) = unbounded();

    let worker = thread::spawn(move || {
        let (_, summary) = compress_batch_with(&request, |result| {
            // Receiver may be gone; the batch still runs to completion.
            let _ = sender.send(BatchEvent::File(result.clone()));
        });
        let _ = sender.send(BatchEvent::Finished(summary));
        summary
    });

    BatchHandle { events, worker }
}

/// Resolves user-supplied inputs into an ordered list of files.
///
/// Directories are walked recursively and glob patterns expanded, keeping
/// files with a supported image extension. Anything else is passed through
/// as an explicit file so that a missing file shows up as a per-file failure.
pub fn collect_image_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!(error = %e, "skipping unreadable directory entry");
                        continue;
                    }
                };
                let path = entry.path();
                if path.is_file() && is_image_file(path) {
                    image_files.push(entry.into_path());
                }
            }
        } else if !input.exists() && is_glob_pattern(input) {
            for entry in glob(&input.to_string_lossy())? {
                match entry {
                    Ok(path) if path.is_file() && is_image_file(&path) => image_files.push(path),
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "skipping unreadable glob match"),
                }
            }
        } else {
            image_files.push(input.clone());
        }
    }

    debug!(count = image_files.len(), "resolved input files");
    Ok(image_files)
}

fn is_glob_pattern(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .any(|c| matches!(c, '*' | '?' | '['))
}
