//! HTTP seam between the refiner and the text-generation provider.

use anyhow::{Context, Result};

const GENERATE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sends a prompt to the provider and returns the generated text.
///
/// Implementations may fail freely; the refiner above this seam owns the
/// fallback-to-original contract.
pub trait RefineTransport {
    fn generate(&self, api_key: &str, model: &str, prompt: &str) -> Result<String>;
}

/// Blocking client for the Gemini `generateContent` REST endpoint.
///
/// No client-side timeout is configured; the call relies on the underlying
/// connection's behavior.
pub struct GeminiTransport {
    client: reqwest::blocking::Client,
}

impl GeminiTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for GeminiTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RefineTransport for GeminiTransport {
    fn generate(&self, api_key: &str, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{GENERATE_ENDPOINT}/models/{model}:generateContent?key={api_key}");
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .context("Failed to reach the text-generation provider")?
            .error_for_status()
            .context("Text-generation provider returned an error status")?;
        let payload: serde_json::Value = response
            .json()
            .context("Failed to parse the provider response")?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .context("Provider response did not contain generated text")?;
        Ok(text.to_string())
    }
}
