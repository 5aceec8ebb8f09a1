//! Error handling for fixture sources

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The fixture does not exist at the requested path.
    #[error("Fixture not found: {0}")]
    NotFound(String),

    /// Reading the fixture from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The fixture was fetched but is not the expected JSON shape.
    #[error("Malformed fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL or a fixture path could not be turned into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl SourceError {
    pub async fn from_response(response: reqwest::Response) -> SourceError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        SourceError::Http { status, message }
    }

    /// Whether the error only means "this fixture does not exist".
    pub fn is_missing(&self) -> bool {
        match self {
            SourceError::NotFound(_) => true,
            SourceError::Http { status, .. } => *status == 404,
            _ => false,
        }
    }
}
