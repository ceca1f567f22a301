use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_FILE: &str = "WatchlistRaw.json";
pub const DEFAULT_OUTPUT_FILE: &str = "WatchlistProcessed.json";
pub const DEFAULT_CREDENTIALS_FILE: &str = "Credentials.json";

/// Files touched by a single run. Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    input: PathBuf,
    output: PathBuf,
    credentials: PathBuf,
}

impl RunPaths {
    pub fn new(input: Option<PathBuf>, output: Option<PathBuf>, credentials: Option<PathBuf>) -> Self {
        Self {
            input: input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE)),
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            credentials: credentials.unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_FILE)),
        }
    }

    pub fn input_file(&self) -> &Path {
        &self.input
    }

    /// Written at the end of the run; read at the start as the previous output.
    pub fn output_file(&self) -> &Path {
        &self.output
    }

    pub fn credentials_file(&self) -> &Path {
        &self.credentials
    }
}

impl Default for RunPaths {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}
