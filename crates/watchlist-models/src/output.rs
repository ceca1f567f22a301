use chrono::{DateTime, Utc};
use crate::de::null_as_empty;
use serde::{Deserialize, Serialize};

/// Watchlist entry enriched with catalog metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name_en: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name_jp: String,
    pub mal_id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
}

/// Processed watchlist. "Watching" and "Plan to Watch" share the `ToWatch` bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlistOutput {
    #[serde(rename = "LastUpdated")]
    pub last_updated: DateTime<Utc>,
    #[serde(rename = "ToWatch", default)]
    pub to_watch: Vec<OutputEntry>,
    #[serde(rename = "Completed", default)]
    pub completed: Vec<OutputEntry>,
    #[serde(rename = "Dropped", default)]
    pub dropped: Vec<OutputEntry>,
}

impl WatchlistOutput {
    pub fn new(last_updated: DateTime<Utc>) -> Self {
        Self {
            last_updated,
            to_watch: Vec::new(),
            completed: Vec::new(),
            dropped: Vec::new(),
        }
    }

    /// All entries in cache-pool order: completed, dropped, then to-watch.
    pub fn entries(&self) -> impl Iterator<Item = &OutputEntry> {
        self.completed
            .iter()
            .chain(self.dropped.iter())
            .chain(self.to_watch.iter())
    }

    pub fn total_entries(&self) -> usize {
        self.to_watch.len() + self.completed.len() + self.dropped.len()
    }
}
