use crate::error::SyncError;
use std::path::Path;
use tracing::{debug, info, warn};
use watchlist_models::{WatchlistInput, WatchlistOutput};

pub fn load_input(path: &Path) -> Result<WatchlistInput, SyncError> {
    if !path.exists() {
        return Err(SyncError::InputNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| SyncError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let input: WatchlistInput = serde_json::from_str(&content).map_err(|source| SyncError::InputParse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Loaded input watchlist {} ({} entries)",
        path.display(),
        input.total_entries()
    );
    Ok(input)
}

/// Load the output of an earlier run. A missing or unreadable file just means
/// there is nothing to reuse; it is overwritten at the end of the run.
pub fn load_previous_output(path: &Path) -> Option<WatchlistOutput> {
    if !path.exists() {
        debug!("No previous output at {}", path.display());
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<WatchlistOutput>(&content) {
            Ok(output) => {
                info!(
                    "Loaded previous output {} ({} entries, last updated {})",
                    path.display(),
                    output.total_entries(),
                    output.last_updated
                );
                Some(output)
            }
            Err(e) => {
                warn!(
                    "Previous output {} could not be parsed: {}. Fetching every entry.",
                    path.display(),
                    e
                );
                None
            }
        },
        Err(e) => {
            warn!("Failed to read previous output {}: {}", path.display(), e);
            None
        }
    }
}

pub fn save_output(path: &Path, output: &WatchlistOutput, pretty: bool) -> Result<(), SyncError> {
    let write_err = |source| SyncError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let json = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    }
    .map_err(|e| write_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    std::fs::write(path, json).map_err(write_err)?;
    debug!("Output saved: {} ({} entries)", path.display(), output.total_entries());
    Ok(())
}
