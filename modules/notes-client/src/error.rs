use notes_types::{ApiError, SummarizeResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or an undecodable response body
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL cannot carry a note path
    #[error("invalid notes API URL: {0}")]
    InvalidUrl(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

impl ClientError {
    /// Build a status error from a raw response body.
    ///
    /// The backend reports validation errors as `{"error": ...}` and
    /// summarizer failures as `{"summary": ...}`; anything else is kept raw.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = if let Ok(e) = serde_json::from_str::<ApiError>(body) {
            e.error
        } else if let Ok(s) = serde_json::from_str::<SummarizeResponse>(body) {
            s.summary
        } else {
            body.trim().to_string()
        };

        ClientError::Status { status, message }
    }
}
