//! HTTP mapping for the pipeline error taxonomy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::error::ClassifyError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new<S: Into<String>>(message: S) -> ErrorBody {
        ErrorBody {
            error: message.into(),
        }
    }
}

/// The single translation layer from error kind to status code and JSON
/// body. Client-side failures (missing field, undecodable image) map to 400,
/// everything else to 500; the human-readable message always travels in the
/// body.
impl IntoResponse for ClassifyError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let message = self.to_string();
        warn!("Classification request failed ({}): {}", status, message);

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
