use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Credentials file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read credentials from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse credentials from {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Credentials file {} has an empty MALClientId", .0.display())]
    MissingClientId(PathBuf),
}

/// Static MyAnimeList API credentials. Only the client id is needed for public anime details.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MalCredentials {
    #[serde(rename = "MALClientId", default)]
    pub client_id: String,
}

pub struct CredentialStore {
    path: PathBuf,
    credentials: MalCredentials,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            credentials: MalCredentials::default(),
        }
    }

    /// Load credentials. Unlike the optional previous output, a missing file is an error.
    pub fn load(&mut self) -> Result<(), CredentialsError> {
        if !self.path.exists() {
            return Err(CredentialsError::NotFound(self.path.clone()));
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| CredentialsError::Read {
            path: self.path.clone(),
            source,
        })?;
        let credentials: MalCredentials =
            serde_json::from_str(&content).map_err(|source| CredentialsError::Parse {
                path: self.path.clone(),
                source,
            })?;
        if credentials.client_id.trim().is_empty() {
            return Err(CredentialsError::MissingClientId(self.path.clone()));
        }
        debug!("Loaded MAL credentials from {}", self.path.display());
        self.credentials = credentials;
        Ok(())
    }

    pub fn get_mal_client_id(&self) -> Option<&str> {
        let id = self.credentials.client_id.as_str();
        (!id.is_empty()).then_some(id)
    }
}
