use std::path::PathBuf;

use super::RequestsLoggingLevel;

#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub requests_logging_level: RequestsLoggingLevel,
    /// Storage root for generated advisory audio artifacts.
    pub audio_dir: PathBuf,
    /// Upper bound on the multipart upload body.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 5000,
            requests_logging_level: RequestsLoggingLevel::Path,
            audio_dir: PathBuf::from("audio_outputs"),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}
