//! HTTP client for end-to-end tests.
//!
//! When routes or request formats change, update only this file.

use reqwest::multipart::{Form, Part};
use reqwest::Response;
use std::time::Duration;

use super::constants::REQUEST_TIMEOUT_SECS;

pub struct TestClient {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// POST /classify with the image bytes in the standard `image` field.
    pub async fn classify(&self, image_bytes: Vec<u8>) -> Response {
        self.classify_with_field("image", image_bytes).await
    }

    /// POST /classify with an arbitrary multipart field name.
    pub async fn classify_with_field(&self, field_name: &str, bytes: Vec<u8>) -> Response {
        let part = Part::bytes(bytes).file_name("sign.png");
        let form = Form::new().part(field_name.to_string(), part);

        self.client
            .post(format!("{}/classify", self.base_url))
            .multipart(form)
            .send()
            .await
            .expect("classify request failed")
    }

    /// POST /classify with a multipart form carrying no fields at all.
    pub async fn classify_empty_form(&self) -> Response {
        self.client
            .post(format!("{}/classify", self.base_url))
            .multipart(Form::new())
            .send()
            .await
            .expect("classify request failed")
    }

    /// GET /audio/{filename}.
    pub async fn get_audio(&self, filename: &str) -> Response {
        self.get_path(&format!("/audio/{}", filename)).await
    }

    /// GET an arbitrary path, left unescaped for traversal tests.
    pub async fn get_path(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("request failed")
    }
}
