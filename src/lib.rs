//! Sign Advisory Server Library
//!
//! Classifies uploaded traffic sign images and serves spoken advisories
//! generated for each prediction. The library exposes the internal modules
//! for testing and potential reuse.

pub mod advisory;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod server;

// Re-export commonly used types for convenience
pub use advisory::{AdvisorySynthesizer, SpeechEngine};
pub use catalog::LabelCatalog;
pub use classify::{InferenceAdapter, Scorer};
pub use error::ClassifyError;
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
