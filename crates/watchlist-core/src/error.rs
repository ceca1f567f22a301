use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_INPUT_FAILURE: i32 = -1;
pub const EXIT_OUTPUT_FAILURE: i32 = -2;

/// Run-level failures. Per-entry catalog failures never surface here.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Input watchlist not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read input watchlist {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input watchlist {}: {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write processed watchlist {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::InputNotFound(_) | SyncError::InputRead { .. } | SyncError::InputParse { .. } => {
                EXIT_INPUT_FAILURE
            }
            SyncError::OutputWrite { .. } => EXIT_OUTPUT_FAILURE,
        }
    }
}
