use std::collections::HashMap;
use watchlist_models::{OutputEntry, WatchlistOutput};

/// Previously enriched entries keyed by MAL id. Built once per run, read-only afterwards.
///
/// When an id appears more than once in the previous output, the first occurrence in
/// completed, dropped, to-watch order wins.
#[derive(Debug, Default)]
pub struct EntryCache {
    by_mal_id: HashMap<u64, OutputEntry>,
}

impl EntryCache {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a OutputEntry>) -> Self {
        let mut by_mal_id = HashMap::new();
        for entry in entries {
            by_mal_id.entry(entry.mal_id).or_insert_with(|| entry.clone());
        }
        Self { by_mal_id }
    }

    pub fn from_output(output: &WatchlistOutput) -> Self {
        Self::from_entries(output.entries())
    }

    pub fn get(&self, mal_id: u64) -> Option<&OutputEntry> {
        self.by_mal_id.get(&mal_id)
    }

    pub fn len(&self) -> usize {
        self.by_mal_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_mal_id.is_empty()
    }
}
