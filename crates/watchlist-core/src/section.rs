use crate::cache::EntryCache;
use serde::Serialize;
use tracing::{debug, info, warn};
use watchlist_models::{InputEntry, OutputEntry};
use watchlist_sources::{CatalogSource, MetadataClient};

/// Per-section counters, reported once the section is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionTally {
    pub reused: usize,
    pub fetched: usize,
    pub skipped: usize,
}

impl SectionTally {
    pub fn merge(&mut self, other: &SectionTally) {
        self.reused += other.reused;
        self.fetched += other.fetched;
        self.skipped += other.skipped;
    }

    pub fn written(&self) -> usize {
        self.reused + self.fetched
    }
}

#[derive(Debug, Default)]
pub struct SectionResult {
    pub entries: Vec<OutputEntry>,
    pub tally: SectionTally,
}

/// Resolve every entry of one watchlist section, in input order.
///
/// Cache hits are copied verbatim; misses go to the catalog. Entries the catalog
/// cannot resolve are logged and left out. `link` always comes from `inputs`.
pub async fn process_section<S: CatalogSource>(
    metadata: &MetadataClient<S>,
    cache: &EntryCache,
    section: &str,
    inputs: &[InputEntry],
) -> SectionResult {
    let mut result = SectionResult {
        entries: Vec::with_capacity(inputs.len()),
        tally: SectionTally::default(),
    };

    for input in inputs {
        let resolved = match cache.get(input.mal_id) {
            Some(cached) => {
                debug!(section, mal_id = input.mal_id, "Reusing cached entry");
                result.tally.reused += 1;
                cached.clone()
            }
            None => match metadata.create_entry(input.mal_id).await {
                Some(entry) => {
                    debug!(section, mal_id = input.mal_id, "Fetched entry from catalog");
                    result.tally.fetched += 1;
                    entry
                }
                None => {
                    warn!(
                        section,
                        mal_id = input.mal_id,
                        name = %input.name,
                        "Failed to process entry {} \"{}\", skipping",
                        input.mal_id,
                        input.name
                    );
                    result.tally.skipped += 1;
                    continue;
                }
            },
        };

        result.entries.push(OutputEntry {
            link: input.link.clone(),
            ..resolved
        });
    }

    info!(
        section,
        total = inputs.len(),
        reused = result.tally.reused,
        fetched = result.tally.fetched,
        skipped = result.tally.skipped,
        "Processed section {}",
        section
    );

    result
}
