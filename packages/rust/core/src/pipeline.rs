//! End-to-end `build` pipeline: level → collect → assemble → write.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument};

use lootbuilder_shared::{LootBuilderError, Result, naming};

use crate::assembler;
use crate::collector;

/// Configuration for the [`build_table`] pipeline.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Raid level identifier naming the output file.
    pub level: String,
    /// Directory holding the pool fragment files.
    pub pools_dir: PathBuf,
    /// Directory the assembled loot table is written into.
    pub output_dir: PathBuf,
    /// Require every fragment to parse as a JSON object before assembly.
    pub check: bool,
}

/// Result of the [`build_table`] pipeline.
#[derive(Debug)]
pub struct BuildResult {
    /// Path of the written loot table.
    pub output_path: PathBuf,
    /// Number of pools in the assembled document.
    pub pool_count: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when a fragment has been read.
    fn fragment_read(&self, path: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &BuildResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn fragment_read(&self, _path: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &BuildResult) {}
}

/// Run the full `build` pipeline.
///
/// 1. Resolve the output path from the level
/// 2. Collect `.json` fragments from the pools directory
/// 3. Re-indent and join them into the loot table document
/// 4. Write the document (overwriting any previous one)
#[instrument(skip_all, fields(level = %config.level))]
pub fn build_table(config: &BuildConfig, progress: &dyn ProgressReporter) -> Result<BuildResult> {
    let start = Instant::now();

    // Reject bad levels before touching the filesystem
    let output_path = naming::output_path(&config.output_dir, &config.level)?;

    progress.phase("Fetching .json files");
    let fragments = collector::collect_fragments(&config.pools_dir)?;

    progress.phase("Creating content of loot table");
    let total = fragments.len();
    let mut texts = Vec::with_capacity(total);

    for (i, path) in fragments.iter().enumerate() {
        let content =
            std::fs::read_to_string(path).map_err(|e| LootBuilderError::io(path, e))?;

        if config.check {
            assembler::check_fragment(path, &content)?;
        }

        progress.fragment_read(&path.display().to_string(), i + 1, total);
        texts.push(content);
    }

    let document = assembler::assemble(&texts);

    progress.phase("Creating output file");
    std::fs::write(&output_path, &document)
        .map_err(|e| LootBuilderError::io(&output_path, e))?;

    info!(
        path = %output_path.display(),
        pools = total,
        "loot table written"
    );

    let result = BuildResult {
        output_path,
        pool_count: total,
        elapsed: start.elapsed(),
    };
    progress.done(&result);
    Ok(result)
}
