//! The artifact retrieval endpoint.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::{fs::File, io::BufReader};
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::advisory::AUDIO_MIME_TYPE;

use super::{error::ErrorBody, ServerConfig};

const STREAM_BUFFER_SIZE: usize = 4096 * 16;

fn file_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("File not found")),
    )
        .into_response()
}

/// Filenames are opaque tokens inside the storage root; anything that could
/// escape it is treated as absent rather than traversed.
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}

/// GET /audio/{filename} - stream a previously generated advisory artifact.
pub async fn get_audio(
    State(config): State<ServerConfig>,
    Path(filename): Path<String>,
) -> Response {
    if !is_safe_filename(&filename) {
        debug!("Rejecting unsafe audio filename: {:?}", filename);
        return file_not_found();
    }

    let path = config.audio_dir.join(&filename);
    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(_) => return file_not_found(),
    };

    let reader = BufReader::with_capacity(STREAM_BUFFER_SIZE, file);
    let stream = ReaderStream::with_capacity(reader, STREAM_BUFFER_SIZE);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, AUDIO_MIME_TYPE)
        .body(Body::from_stream(stream))
        .unwrap()
}
