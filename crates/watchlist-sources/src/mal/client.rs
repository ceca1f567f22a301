use crate::details::AnimeDetails;
use crate::error::SourceError;
use crate::mal::api;
use crate::traits::CatalogSource;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::sync::Arc;

pub fn create_mal_client() -> Client {
    Client::builder()
        .user_agent(concat!("watchlist-sync/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// MyAnimeList client authenticated with a static client id. No OAuth, no token refresh.
#[derive(Clone)]
pub struct MalClient {
    client: Arc<Client>,
    client_id: String,
    api_base: String,
}

impl MalClient {
    pub fn new(client_id: String) -> Self {
        Self {
            client: Arc::new(create_mal_client()),
            client_id,
            api_base: api::API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

impl fmt::Debug for MalClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MalClient")
            .field("api_base", &self.api_base)
            .field("client_id", &"***")
            .finish()
    }
}

#[async_trait]
impl CatalogSource for MalClient {
    fn source_name(&self) -> &str {
        "myanimelist"
    }

    async fn get_anime_details(&self, mal_id: u64) -> Result<AnimeDetails, SourceError> {
        api::get_anime_details(&self.client, &self.api_base, &self.client_id, mal_id).await
    }
}
