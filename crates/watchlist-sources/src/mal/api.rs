use crate::details::AnimeDetails;
use crate::error::SourceError;
use reqwest::Client;
use tracing::trace;

// MyAnimeList API v2 base URL
pub const API_BASE: &str = "https://api.myanimelist.net/v2";
pub const DETAIL_FIELDS: &str = "title,main_picture,alternative_titles";
pub const CLIENT_ID_HEADER: &str = "X-MAL-CLIENT-ID";

pub fn anime_details_url(api_base: &str, mal_id: u64) -> String {
    format!(
        "{}/anime/{}?fields={}",
        api_base.trim_end_matches('/'),
        mal_id,
        DETAIL_FIELDS
    )
}

/// Fetch title and picture details for one anime. Single attempt.
pub async fn get_anime_details(
    client: &Client,
    api_base: &str,
    client_id: &str,
    mal_id: u64,
) -> Result<AnimeDetails, SourceError> {
    let url = anime_details_url(api_base, mal_id);
    trace!("GET {}", url);

    let response = client
        .get(&url)
        .header(CLIENT_ID_HEADER, client_id)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::Status {
            mal_id,
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    parse_anime_details(mal_id, &body)
}

pub fn parse_anime_details(mal_id: u64, body: &str) -> Result<AnimeDetails, SourceError> {
    serde_json::from_str(body).map_err(|source| SourceError::Parse { mal_id, source })
}
