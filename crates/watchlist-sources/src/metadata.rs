use crate::retry::{retry, RetryPolicy};
use crate::traits::CatalogSource;
use tracing::{trace, warn};
use watchlist_models::OutputEntry;

/// Turns bare identifiers into enriched entries, retrying each lookup per `RetryPolicy`.
pub struct MetadataClient<S> {
    source: S,
    policy: RetryPolicy,
}

impl<S: CatalogSource> MetadataClient<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch metadata for `mal_id`. Returns `None` once every attempt has failed;
    /// the final failure is logged here. The returned entry has an empty `link`.
    pub async fn create_entry(&self, mal_id: u64) -> Option<OutputEntry> {
        let source_name = self.source.source_name();
        let outcome = retry(
            &self.policy,
            move |attempt| {
                trace!(mal_id, attempt, "Requesting anime details from {}", source_name);
                self.source.get_anime_details(mal_id)
            },
            |error, attempts| {
                warn!(
                    mal_id,
                    attempts,
                    error = %error,
                    "Failed to create entry for id {} from {}",
                    mal_id,
                    source_name
                );
            },
        )
        .await;

        outcome.into_result().ok().map(|details| details.into_entry(mal_id))
    }
}
