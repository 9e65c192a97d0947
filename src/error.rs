//! Error taxonomy for the classification pipeline.
//!
//! Every stage of the request pipeline reports one of these kinds; the HTTP
//! boundary (`server::error`) owns the single mapping from kind to status
//! code and JSON body. No error is retried or recovered into a degraded
//! success.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The multipart request carried no `image` field.
    #[error("No image uploaded")]
    MissingInput,

    /// The uploaded bytes are not a supported image encoding.
    #[error("{0}")]
    Decode(String),

    /// The scoring model failed to load at startup; sticky until restart.
    #[error("Model not loaded")]
    ModelUnavailable,

    #[error("{0}")]
    Inference(String),

    /// The probability vector was empty or contained NaN.
    #[error("{0}")]
    InvalidPrediction(String),

    /// The text-to-audio collaborator errored.
    #[error("{0}")]
    Synthesis(String),

    /// The audio artifact could not be written to the storage root.
    #[error("{0}")]
    StorageWrite(String),
}

impl ClassifyError {
    /// True for failures caused by the request itself rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ClassifyError::MissingInput | ClassifyError::Decode(_))
    }
}
