pub mod audio_routes;
pub mod classify_routes;
pub mod config;
pub mod error;
mod http_layers;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ErrorBody;
pub use http_layers::{log_requests, RequestsLoggingLevel};
pub use server::{make_app, run_server};
