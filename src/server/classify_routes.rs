//! The classification endpoint.

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::classify::{preprocess, resolve};
use crate::error::ClassifyError;

use super::state::ServerState;

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub label: String,
    pub confidence: u8,
    pub audio: String,
}

/// POST /classify - classify one uploaded image and synthesize its advisory.
///
/// Runs the full pipeline for a single request: multipart extraction,
/// decode/resize, inference, arg-max resolution, advisory synthesis. No
/// stage is retried; the only side effect on the success path is the single
/// audio artifact write, which completes before the response is built.
pub async fn classify(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassifyResponse>, ClassifyError> {
    // A non-multipart body cannot carry the image field.
    let mut multipart = multipart.map_err(|_| ClassifyError::MissingInput)?;

    let mut image_bytes: Option<Vec<u8>> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|err| ClassifyError::Decode(err.to_string()))?;
            image_bytes = Some(bytes.to_vec());
            break;
        }
    }
    let image_bytes = image_bytes.ok_or(ClassifyError::MissingInput)?;
    debug!("Image received ({} bytes)", image_bytes.len());

    // Decode, resize and score off the async executor; all three are
    // CPU-bound.
    let adapter = state.inference.clone();
    let prediction = tokio::task::spawn_blocking(move || {
        let tensor = preprocess::image_to_tensor(&image_bytes)?;
        let probabilities = adapter.score(tensor)?;
        resolve(&probabilities)
    })
    .await
    .map_err(|err| ClassifyError::Inference(err.to_string()))??;

    let label = state.catalog.resolve(prediction.class_index).to_string();
    info!(
        "Predicted {:?} (class {}, confidence {:.2})",
        label, prediction.class_index, prediction.confidence
    );

    let artifact = state.synthesizer.synthesize(&label).await?;

    Ok(Json(ClassifyResponse {
        label,
        confidence: prediction.confidence_percent(),
        audio: format!("/audio/{}", artifact.filename),
    }))
}
