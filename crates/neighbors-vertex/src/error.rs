use neighbors_core::error::NeighborsError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum VertexError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Vertex AI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Vertex AI format error: {0}")]
    Format(String),

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<VertexError> for NeighborsError {
    fn from(value: VertexError) -> Self {
        NeighborsError::Backend(Box::new(value))
    }
}
