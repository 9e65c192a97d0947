use anyhow::Result;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, State},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use super::{
    audio_routes::get_audio,
    classify_routes::classify,
    log_requests,
    state::{GuardedInferenceAdapter, GuardedLabelCatalog, GuardedSynthesizer, ServerState},
    ServerConfig,
};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub model_loaded: bool,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_loaded: state.inference.is_loaded(),
    };
    Json(stats)
}

pub fn make_app(
    config: ServerConfig,
    catalog: GuardedLabelCatalog,
    inference: GuardedInferenceAdapter,
    synthesizer: GuardedSynthesizer,
) -> Router {
    let max_upload_bytes = config.max_upload_bytes;
    let state = ServerState::new(config, catalog, inference, synthesizer);

    let classify_routes: Router = Router::new()
        .route("/classify", post(classify))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state.clone());

    let audio_routes: Router = Router::new()
        .route("/audio/{filename}", get(get_audio))
        .with_state(state.clone());

    Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .merge(classify_routes)
        .merge(audio_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    config: ServerConfig,
    catalog: GuardedLabelCatalog,
    inference: GuardedInferenceAdapter,
    synthesizer: GuardedSynthesizer,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, catalog, inference, synthesizer);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on port {}", port);

    Ok(axum::serve(listener, app).await?)
}
