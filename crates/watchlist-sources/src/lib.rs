pub mod details;
pub mod error;
pub mod mal;
pub mod metadata;
pub mod retry;
pub mod traits;

pub use details::AnimeDetails;
pub use error::SourceError;
pub use mal::MalClient;
pub use metadata::MetadataClient;
pub use retry::{retry, RetryOutcome, RetryPolicy, DEFAULT_MAX_ATTEMPTS};
pub use traits::CatalogSource;
