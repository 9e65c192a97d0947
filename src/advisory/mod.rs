//! Advisory audio synthesis and artifact storage.
//!
//! Builds the spoken advisory phrase for a predicted label, invokes the
//! text-to-audio collaborator and persists the result under the artifact
//! storage root. An artifact is only ever referenced in a response after its
//! write is durably flushed.

pub mod speech;

pub use speech::{GoogleTranslateTts, SpeechEngine};

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ClassifyError;

pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

const ADVISORY_LANG: &str = "en";

/// A generated audio file under the storage root. Created once per
/// successful classification, never mutated.
#[derive(Debug, Clone)]
pub struct AdvisoryAudioArtifact {
    pub filename: String,
    pub path: PathBuf,
}

pub struct AdvisorySynthesizer {
    engine: Box<dyn SpeechEngine>,
    storage_dir: PathBuf,
}

impl AdvisorySynthesizer {
    pub fn new(engine: Box<dyn SpeechEngine>, storage_dir: PathBuf) -> AdvisorySynthesizer {
        AdvisorySynthesizer {
            engine,
            storage_dir,
        }
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn advisory_text(label: &str) -> String {
        format!("Be alert, {} ahead.", label)
    }

    /// Timestamp plus a v4 UUID, so filenames never collide even for
    /// requests landing in the same second.
    fn next_filename() -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        format!("output_{}_{}.mp3", timestamp, Uuid::new_v4().simple())
    }

    /// Generates the advisory audio for `label` and writes it to storage.
    ///
    /// The artifact is written to a temp file in the storage directory and
    /// renamed into place after an fsync, so a failed synthesis or write
    /// never leaves a partial file at a name a response could reference.
    pub async fn synthesize(&self, label: &str) -> Result<AdvisoryAudioArtifact, ClassifyError> {
        let text = Self::advisory_text(label);
        debug!("Synthesizing advisory: {:?}", text);

        let audio = self
            .engine
            .synthesize(&text, ADVISORY_LANG)
            .await
            .map_err(|err| ClassifyError::Synthesis(err.to_string()))?;

        let filename = Self::next_filename();
        let path = self.storage_dir.join(&filename);

        let storage_dir = self.storage_dir.clone();
        let final_path = path.clone();
        tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&storage_dir)?;
            tmp.write_all(&audio)?;
            tmp.flush()?;
            tmp.as_file().sync_all()?;
            tmp.persist(&final_path)?;
            Ok(())
        })
        .await
        .map_err(|err| ClassifyError::StorageWrite(err.to_string()))?
        .map_err(|err| ClassifyError::StorageWrite(err.to_string()))?;

        info!("Audio saved: {}", path.display());
        Ok(AdvisoryAudioArtifact { filename, path })
    }
}
