//! Sequential batch recompression
//!
//! Files are processed one at a time in discovery order. A failing file is
//! logged and recorded, then the loop moves on to the next one.

use std::path::PathBuf;

use tracing::{error, info};

use crate::config::BatchConfig;
use crate::discover::{discover_files, filter_by_prefixes};
use crate::error::{CodecError, Error};
use crate::textures::{recompress_file, PngOptions, TextureKind};

/// A file that could not be recompressed
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: CodecError,
}

/// Outcome of a batch run
#[derive(Debug)]
pub struct BatchReport {
    pub kind: TextureKind,
    /// Files matching the kind's suffix
    pub discovered: usize,
    /// Files left after the prefix filter
    pub selected: usize,
    /// Files recompressed and written
    pub processed: usize,
    /// Files listed but not touched (dry run)
    pub skipped: usize,
    /// Per-file failures, in processing order
    pub failures: Vec<FileFailure>,
    /// Total size of processed files before recompression
    pub bytes_before: u64,
    /// Total size of processed files after recompression
    pub bytes_after: u64,
}

impl BatchReport {
    fn new(kind: TextureKind, discovered: usize, selected: usize) -> Self {
        Self {
            kind,
            discovered,
            selected,
            processed: 0,
            skipped: 0,
            failures: Vec::new(),
            bytes_before: 0,
            bytes_after: 0,
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Bytes saved over all processed files, negative if they grew
    pub fn bytes_saved(&self) -> i64 {
        self.bytes_before as i64 - self.bytes_after as i64
    }
}

/// Discover, filter and recompress every texture described by `config`
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, Error> {
    config.validate()?;

    let options = PngOptions::for_kind(config.kind);
    let suffix = config.kind.suffix();

    let discovered = discover_files(&config.root, config.kind)?;
    let discovered_count = discovered.len();
    let files = filter_by_prefixes(discovered, &config.prefixes, &suffix);

    let mut report = BatchReport::new(config.kind, discovered_count, files.len());

    if files.is_empty() {
        info!(
            "No {} textures match prefixes {:?} ({} found)",
            config.kind, config.prefixes, discovered_count
        );
        return Ok(report);
    }

    let total = files.len();
    for (i, path) in files.iter().enumerate() {
        info!("Processing [{}/{}]: {}", i + 1, total, path.display());

        if config.dry_run {
            report.skipped += 1;
            continue;
        }

        match recompress_file(path, &options) {
            Ok(stats) => {
                info!(
                    "  {} -> {} bytes ({} saved)",
                    stats.input_bytes,
                    stats.output_bytes,
                    stats.saved()
                );
                report.processed += 1;
                report.bytes_before += stats.input_bytes;
                report.bytes_after += stats.output_bytes;
            }
            Err(e) => {
                error!("Error processing {}: {}", path.display(), e);
                report.failures.push(FileFailure {
                    path: path.clone(),
                    error: e,
                });
            }
        }
    }

    info!(
        "Done ({}): {} processed, {} failed, {} skipped, {} bytes saved",
        report.kind,
        report.processed,
        report.failed(),
        report.skipped,
        report.bytes_saved()
    );

    Ok(report)
}
