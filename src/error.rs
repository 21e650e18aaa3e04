use thiserror::Error;

/// Errors from reading a corpus or writing scores.
/// Scoring itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode CBOR: {0}")]
    Cbor(#[from] serde_cbor::Error),

    #[error("unknown output format: {0} (expected text, json or cbor)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
