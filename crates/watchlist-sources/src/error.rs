use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog returned {status} for anime {mal_id}: {body}")]
    Status { mal_id: u64, status: u16, body: String },

    #[error("Malformed catalog response for anime {mal_id}: {source}")]
    Parse {
        mal_id: u64,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
