//! Image classification pipeline: preprocessing, inference and prediction
//! resolution.

pub mod adapter;
pub mod prediction;
pub mod preprocess;
pub mod scorer;

pub use adapter::InferenceAdapter;
pub use prediction::{resolve, Prediction};
pub use preprocess::{image_to_tensor, MODEL_INPUT_HEIGHT, MODEL_INPUT_WIDTH};
pub use scorer::{Scorer, TractScorer};

/// Model input: one RGB image as an NHWC f32 array with batch dimension 1.
pub type ImageTensor = tract_onnx::prelude::tract_ndarray::Array4<f32>;
