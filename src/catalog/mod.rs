//! Fixed label catalog for the traffic sign classifier.
//!
//! The catalog is a closed, ordered mapping from model class index to a
//! human-readable sign description. It is loaded once at process start and
//! never mutated; indices outside the catalog resolve to a sentinel label
//! instead of failing.

/// Fallback label for class indices the catalog does not know about.
pub const UNKNOWN_SIGN: &str = "Unknown Sign";

/// The 41 GTSRB sign classes, ordered by model output index.
const GTSRB_LABELS: [&str; 41] = [
    "Speed limit (20km/h)",
    "Speed limit (30km/h)",
    "Speed limit (50km/h)",
    "Speed limit (60km/h)",
    "Speed limit (70km/h)",
    "Speed limit (80km/h)",
    "End of speed limit (80km/h)",
    "No passing",
    "No passing veh over 3.5 tons",
    "Right-of-way at intersection",
    "Priority road",
    "Yield",
    "Stop",
    "No vehicles",
    "Veh > 3.5 tons prohibited",
    "No entry",
    "General caution",
    "Dangerous curve left",
    "Dangerous curve right",
    "Double curve",
    "Bumpy road",
    "Slippery road",
    "Road narrows on the right",
    "Road work",
    "Traffic signals",
    "Pedestrians",
    "Children crossing",
    "Bicycles crossing",
    "Beware of ice/snow",
    "Wild animals crossing",
    "End speed + passing limits",
    "Turn right ahead",
    "Turn left ahead",
    "Ahead only",
    "Go straight or right",
    "Go straight or left",
    "Keep right",
    "Keep left",
    "Roundabout mandatory",
    "End of no passing",
    "End no passing veh > 3.5 tons",
];

pub struct LabelCatalog {
    labels: &'static [&'static str],
}

impl LabelCatalog {
    pub fn gtsrb() -> LabelCatalog {
        LabelCatalog {
            labels: &GTSRB_LABELS,
        }
    }

    /// Resolves a class index to its label, or the sentinel for indices
    /// outside the catalog. Never fails.
    pub fn resolve(&self, index: usize) -> &str {
        self.labels.get(index).copied().unwrap_or(UNKNOWN_SIGN)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
