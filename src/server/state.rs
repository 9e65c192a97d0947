use axum::extract::FromRef;

use std::sync::Arc;
use std::time::Instant;

use crate::advisory::AdvisorySynthesizer;
use crate::catalog::LabelCatalog;
use crate::classify::InferenceAdapter;

use super::ServerConfig;

pub type GuardedLabelCatalog = Arc<LabelCatalog>;
pub type GuardedInferenceAdapter = Arc<InferenceAdapter>;
pub type GuardedSynthesizer = Arc<AdvisorySynthesizer>;

/// Process-wide state shared by every request handler. All members are
/// immutable after startup; the inference adapter and synthesizer are safe
/// for concurrent use.
#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: GuardedLabelCatalog,
    pub inference: GuardedInferenceAdapter,
    pub synthesizer: GuardedSynthesizer,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        catalog: GuardedLabelCatalog,
        inference: GuardedInferenceAdapter,
        synthesizer: GuardedSynthesizer,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
            inference,
            synthesizer,
        }
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

impl FromRef<ServerState> for GuardedLabelCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for GuardedInferenceAdapter {
    fn from_ref(input: &ServerState) -> Self {
        input.inference.clone()
    }
}

impl FromRef<ServerState> for GuardedSynthesizer {
    fn from_ref(input: &ServerState) -> Self {
        input.synthesizer.clone()
    }
}
