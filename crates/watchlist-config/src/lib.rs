pub mod credentials;
pub mod paths;

pub use credentials::{CredentialStore, CredentialsError, MalCredentials};
pub use paths::{RunPaths, DEFAULT_CREDENTIALS_FILE, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
