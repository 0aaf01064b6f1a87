//! Error types for the ScreenScraper client.

use std::path::PathBuf;

use retroscrape_fingerprint::FingerprintError;

/// Errors from the ScreenScraper client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported platform: {0}")]
    InvalidPlatform(String),

    /// The service answered but has no matching game.
    #[error("game not found")]
    NotFound,

    #[error("API quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("API closed: {0}")]
    ServiceClosed(String),

    #[error("API error: {0}")]
    Remote(String),

    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error(transparent)]
    FileUnreadable(#[from] FingerprintError),

    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the failure happened at the HTTP layer (timeout, connection,
    /// non-2xx status) rather than in the service's answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::HttpStatus { .. })
    }

    /// Maps the text of a `header.erreur` field to a typed error.
    pub(crate) fn from_service_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("quota") {
            Error::QuotaExceeded(message.to_string())
        } else if lower.contains("fermé") || lower.contains("closed") {
            Error::ServiceClosed(message.to_string())
        } else {
            Error::Remote(message.to_string())
        }
    }
}
