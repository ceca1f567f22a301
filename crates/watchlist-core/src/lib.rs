pub mod cache;
pub mod error;
pub mod section;
pub mod storage;
pub mod sync;

#[cfg(test)]
mod test_support;

pub use cache::EntryCache;
pub use error::SyncError;
pub use section::{process_section, SectionResult, SectionTally};
pub use sync::{RunReport, SyncOptions, WatchlistOrchestrator};
