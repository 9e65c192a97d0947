//! Test server lifecycle management.
//!
//! Each test gets an isolated server with fake collaborators and its own
//! temporary audio storage directory. The server shuts down gracefully when
//! the handle is dropped.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;

use sign_advisory_server::advisory::{AdvisorySynthesizer, SpeechEngine};
use sign_advisory_server::catalog::LabelCatalog;
use sign_advisory_server::classify::{InferenceAdapter, Scorer};
use sign_advisory_server::server::{make_app, RequestsLoggingLevel, ServerConfig};

use super::constants::{SERVER_READY_POLL_INTERVAL_MS, SERVER_READY_TIMEOUT_MS};
use super::fixtures::{FakeSpeechEngine, StopSignScorer};

pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The audio storage root the server writes artifacts to.
    pub audio_dir: PathBuf,

    _audio_tempdir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server on a random port with the happy-path fakes: a scorer
    /// that predicts "Stop" and a speech engine that returns canned bytes.
    pub async fn spawn() -> Self {
        Self::spawn_with(Some(Box::new(StopSignScorer)), Box::new(FakeSpeechEngine)).await
    }

    /// Spawns a server whose model failed to load.
    pub async fn spawn_model_unavailable() -> Self {
        Self::spawn_with(None, Box::new(FakeSpeechEngine)).await
    }

    /// Spawns a server with explicit collaborators. `None` for the scorer
    /// models a startup load failure.
    pub async fn spawn_with(
        scorer: Option<Box<dyn Scorer>>,
        speech_engine: Box<dyn SpeechEngine>,
    ) -> Self {
        let audio_tempdir = TempDir::new().expect("Failed to create audio tempdir");
        let audio_dir = audio_tempdir.path().to_path_buf();

        let inference = Arc::new(match scorer {
            Some(scorer) => InferenceAdapter::new(scorer),
            None => InferenceAdapter::unavailable(),
        });
        let synthesizer = Arc::new(AdvisorySynthesizer::new(speech_engine, audio_dir.clone()));

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            audio_dir: audio_dir.clone(),
            ..Default::default()
        };

        let app = make_app(
            config,
            Arc::new(LabelCatalog::gtsrb()),
            inference,
            synthesizer,
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            audio_dir,
            _audio_tempdir: audio_tempdir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the stats endpoint.
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => {
                    return;
                }
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
