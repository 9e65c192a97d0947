//! The black-box text-to-audio collaborator.

use anyhow::{bail, Result};
use async_trait::async_trait;

/// Narrow interface over the speech synthesis engine: UTF-8 text plus a
/// language code in, encoded audio bytes out.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>>;
}

const GOOGLE_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Production engine fetching MP3 speech from the Google Translate TTS
/// endpoint, the same service the reference deployment used.
pub struct GoogleTranslateTts {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslateTts {
    pub fn new() -> GoogleTranslateTts {
        GoogleTranslateTts {
            client: reqwest::Client::new(),
            endpoint: GOOGLE_TTS_ENDPOINT.to_string(),
        }
    }

}

impl Default for GoogleTranslateTts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechEngine for GoogleTranslateTts {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("speech endpoint returned {}", response.status());
        }

        Ok(response.bytes().await?.to_vec())
    }
}
