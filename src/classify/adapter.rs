//! Process-wide inference state.

use super::{ImageTensor, Scorer};
use crate::error::ClassifyError;

/// Wraps the scoring model loaded at startup.
///
/// The adapter is constructed exactly once and injected into the request
/// handler; if model loading failed it stays `unavailable` and every
/// inference call reports `ModelUnavailable` instead of loading lazily.
/// Input shape is not validated here beyond what the scorer itself enforces.
pub struct InferenceAdapter {
    scorer: Option<Box<dyn Scorer>>,
}

impl InferenceAdapter {
    pub fn new(scorer: Box<dyn Scorer>) -> InferenceAdapter {
        InferenceAdapter {
            scorer: Some(scorer),
        }
    }

    pub fn unavailable() -> InferenceAdapter {
        InferenceAdapter { scorer: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.scorer.is_some()
    }

    pub fn score(&self, input: ImageTensor) -> Result<Vec<f32>, ClassifyError> {
        let scorer = self.scorer.as_ref().ok_or(ClassifyError::ModelUnavailable)?;
        scorer
            .score(input)
            .map_err(|err| ClassifyError::Inference(err.to_string()))
    }
}
