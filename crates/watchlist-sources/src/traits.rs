use async_trait::async_trait;
use crate::details::AnimeDetails;
use crate::error::SourceError;

/// Remote anime catalog. One call is one attempt; retrying is the caller's concern.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn source_name(&self) -> &str;

    async fn get_anime_details(&self, mal_id: u64) -> Result<AnimeDetails, SourceError>;
}
