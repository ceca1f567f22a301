use crate::cache::EntryCache;
use crate::error::SyncError;
use crate::section::{process_section, SectionTally};
use crate::storage;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, instrument};
use watchlist_config::RunPaths;
use watchlist_models::{WatchlistInput, WatchlistOutput};
use watchlist_sources::{CatalogSource, MetadataClient};

#[derive(Debug, Clone, Serialize)]
pub struct SyncOptions {
    /// Reuse entries from the previous output instead of fetching them again.
    pub use_cache: bool,
    /// Write indented JSON.
    pub pretty: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            pretty: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub last_updated: DateTime<Utc>,
    pub cache_size: usize,
    pub to_watch: SectionTally,
    pub completed: SectionTally,
    pub dropped: SectionTally,
    #[serde(skip)]
    pub duration: Duration,
}

impl RunReport {
    pub fn total(&self) -> SectionTally {
        let mut total = SectionTally::default();
        total.merge(&self.to_watch);
        total.merge(&self.completed);
        total.merge(&self.dropped);
        total
    }
}

/// Sections of one processed watchlist plus their tallies.
pub struct ProcessedWatchlist {
    pub output: WatchlistOutput,
    pub to_watch: SectionTally,
    pub completed: SectionTally,
    pub dropped: SectionTally,
}

pub struct WatchlistOrchestrator<S> {
    metadata: MetadataClient<S>,
    options: SyncOptions,
}

impl<S: CatalogSource> WatchlistOrchestrator<S> {
    pub fn new(metadata: MetadataClient<S>, options: SyncOptions) -> Self {
        Self { metadata, options }
    }

    pub fn metadata(&self) -> &MetadataClient<S> {
        &self.metadata
    }

    /// Load, enrich and write. Fails only on input or output file errors.
    pub async fn run(&self, paths: &RunPaths) -> Result<RunReport, SyncError> {
        let input = storage::load_input(paths.input_file())?;
        self.run_with_input(paths, &input).await
    }

    /// Enrich an already loaded input and write it to `paths.output_file()`.
    #[instrument(skip_all, fields(output = %paths.output_file().display()))]
    pub async fn run_with_input(&self, paths: &RunPaths, input: &WatchlistInput) -> Result<RunReport, SyncError> {
        let start = Instant::now();

        let cache = if self.options.use_cache {
            storage::load_previous_output(paths.output_file())
                .map(|previous| EntryCache::from_output(&previous))
                .unwrap_or_default()
        } else {
            info!("Cache disabled, every entry will be fetched from {}", self.metadata.source().source_name());
            EntryCache::empty()
        };
        info!("Cache pool holds {} entries", cache.len());

        let processed = self.process(input, &cache).await;
        storage::save_output(paths.output_file(), &processed.output, self.options.pretty)?;

        let report = RunReport {
            output_path: paths.output_file().to_path_buf(),
            last_updated: processed.output.last_updated,
            cache_size: cache.len(),
            to_watch: processed.to_watch,
            completed: processed.completed,
            dropped: processed.dropped,
            duration: start.elapsed(),
        };
        let total = report.total();
        info!(
            reused = total.reused,
            fetched = total.fetched,
            skipped = total.skipped,
            "Wrote {} in {:.2}s",
            report.output_path.display(),
            report.duration.as_secs_f64()
        );
        Ok(report)
    }

    /// Enrich every section. "Watching" and "Plan to Watch" land in `to_watch`, in that order.
    pub async fn process(&self, input: &WatchlistInput, cache: &EntryCache) -> ProcessedWatchlist {
        let completed = process_section(&self.metadata, cache, "Completed", &input.completed).await;
        let dropped = process_section(&self.metadata, cache, "Dropped", &input.dropped).await;
        let watching = process_section(&self.metadata, cache, "Watching", &input.watching).await;
        let plan_to_watch = process_section(&self.metadata, cache, "Plan to Watch", &input.plan_to_watch).await;

        let mut to_watch_tally = watching.tally;
        to_watch_tally.merge(&plan_to_watch.tally);

        let mut to_watch = watching.entries;
        to_watch.extend(plan_to_watch.entries);

        let output = WatchlistOutput {
            last_updated: Utc::now(),
            to_watch,
            completed: completed.entries,
            dropped: dropped.entries,
        };

        ProcessedWatchlist {
            output,
            to_watch: to_watch_tally,
            completed: completed.tally,
            dropped: dropped.tally,
        }
    }
}
