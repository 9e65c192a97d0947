use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sign_advisory_server::advisory::{AdvisorySynthesizer, GoogleTranslateTts};
use sign_advisory_server::catalog::LabelCatalog;
use sign_advisory_server::classify::{InferenceAdapter, TractScorer};
use sign_advisory_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the ONNX traffic sign classifier model.
    #[clap(value_parser = parse_path)]
    pub model_path: PathBuf,

    /// Directory where generated advisory audio files are stored.
    #[clap(long, default_value = "audio_outputs", value_parser = parse_path)]
    pub audio_dir: PathBuf,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 5000)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum size of an uploaded image in megabytes.
    #[clap(long, default_value_t = 10)]
    pub max_upload_mb: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    std::fs::create_dir_all(&cli_args.audio_dir).with_context(|| {
        format!(
            "Failed to create audio directory {:?}",
            cli_args.audio_dir
        )
    })?;

    let catalog = Arc::new(LabelCatalog::gtsrb());

    info!("Loading model from {:?}...", cli_args.model_path);
    let inference = Arc::new(match TractScorer::load(&cli_args.model_path) {
        Ok(scorer) => {
            info!("Model loaded successfully.");
            InferenceAdapter::new(Box::new(scorer))
        }
        Err(err) => {
            // The process keeps serving; /classify reports the model as
            // unavailable until a restart.
            error!("Error loading model: {:#}", err);
            InferenceAdapter::unavailable()
        }
    });

    let synthesizer = Arc::new(AdvisorySynthesizer::new(
        Box::new(GoogleTranslateTts::new()),
        cli_args.audio_dir.clone(),
    ));

    let config = ServerConfig {
        port: cli_args.port,
        requests_logging_level: cli_args.logging_level,
        audio_dir: cli_args.audio_dir,
        max_upload_bytes: cli_args.max_upload_mb * 1024 * 1024,
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(config, catalog, inference, synthesizer).await
}
