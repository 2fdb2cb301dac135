use folio_shared::JoinError;
use thiserror::Error;

/// A failed remote read. Never retried automatically.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure of a whole page load. A page either loads completely or not at all.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Join(#[from] JoinError),

    /// The view that asked for the data went away before it arrived.
    #[error("Load cancelled")]
    Cancelled,
}

impl LoadError {
    /// Page-level message shown to the user, e.g. `Failed to fetch albums: ...`.
    pub fn page_message(&self, resource: &str) -> String {
        format!("Failed to fetch {resource}: {self}")
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }
}
