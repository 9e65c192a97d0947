//! Prediction resolution from a probability vector.

use crate::error::ClassifyError;

/// Arg-max outcome of one inference run. `confidence` is the maximum
/// probability itself, not renormalized; keep the raw float for numeric
/// logic and use [`Prediction::confidence_percent`] for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class_index: usize,
    pub confidence: f32,
}

impl Prediction {
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }
}

/// Picks the arg-max class. Ties resolve to the lowest index (first-max
/// scan). An empty or NaN-containing vector is malformed input.
pub fn resolve(probabilities: &[f32]) -> Result<Prediction, ClassifyError> {
    if probabilities.is_empty() {
        return Err(ClassifyError::InvalidPrediction(
            "empty probability vector".to_string(),
        ));
    }
    if probabilities.iter().any(|p| p.is_nan()) {
        return Err(ClassifyError::InvalidPrediction(
            "probability vector contains NaN".to_string(),
        ));
    }

    let mut class_index = 0;
    let mut confidence = probabilities[0];
    for (index, &probability) in probabilities.iter().enumerate().skip(1) {
        if probability > confidence {
            class_index = index;
            confidence = probability;
        }
    }

    Ok(Prediction {
        class_index,
        confidence,
    })
}
