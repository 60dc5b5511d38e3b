use std::path::PathBuf;
use thiserror::Error;

/// Why the user catalog could not be produced.
///
/// Every variant is fatal for a single pipeline run; none of them is retried.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned status {status}: {message}")]
    Response { status: u16, message: String },

    #[error("malformed user collection: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("User catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("'{query}' matches several users: {}", matches.join("; "))]
    AmbiguousSelection { query: String, matches: Vec<String> },
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
