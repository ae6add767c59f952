//! HTTP client for end-to-end tests
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Body of a successful `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    pub keywords: Vec<String>,
    pub vibe: String,
    pub video_url: String,
    pub audio_url: String,
}

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
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

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// POST /generate with an arbitrary JSON body
    pub async fn generate_raw(&self, body: Value) -> Response {
        self.client
            .post(format!("{}/generate", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Generate request failed")
    }

    /// POST /generate with `{"prompt": prompt}`
    pub async fn generate(&self, prompt: &str) -> Response {
        self.generate_raw(json!({ "prompt": prompt })).await
    }

    /// POST /generate, asserting a 200 and decoding the body
    pub async fn generate_ok(&self, prompt: &str) -> GenerateResponse {
        let response = self.generate(prompt).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response
            .json()
            .await
            .expect("Failed to decode generate response")
    }
}
