//! The black-box scoring function behind the inference adapter.

use std::path::Path;

use anyhow::Result;
use tract_onnx::prelude::*;

use super::{ImageTensor, MODEL_INPUT_HEIGHT, MODEL_INPUT_WIDTH};

/// Narrow interface over the neural-network inference engine: a pure
/// function from an input tensor to a probability vector. Implementations
/// must be safe for concurrent use; one instance is shared across requests.
pub trait Scorer: Send + Sync {
    fn score(&self, input: ImageTensor) -> Result<Vec<f32>>;
}

/// Production scorer running an ONNX model with tract.
pub struct TractScorer {
    model: TypedRunnableModel<TypedModel>,
}

impl TractScorer {
    /// Loads and optimizes the model once. Called at startup only; a failure
    /// here leaves the inference adapter unavailable for the process
    /// lifetime.
    pub fn load(path: &Path) -> Result<TractScorer> {
        let model = tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(
                    f32::datum_type(),
                    tvec!(
                        1,
                        MODEL_INPUT_HEIGHT as usize,
                        MODEL_INPUT_WIDTH as usize,
                        3
                    ),
                ),
            )?
            .into_optimized()?
            .into_runnable()?;
        Ok(TractScorer { model })
    }
}

impl Scorer for TractScorer {
    fn score(&self, input: ImageTensor) -> Result<Vec<f32>> {
        let outputs = self.model.run(tvec!(input.into_tensor().into()))?;
        let probabilities = outputs[0].to_array_view::<f32>()?;
        Ok(probabilities.iter().copied().collect())
    }
}
