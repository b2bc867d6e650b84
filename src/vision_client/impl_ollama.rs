use crate::vision_client::interface::{VisionClient, VisionError};
use crate::vision_client::prompt::{classification_prompt, QUALITY_PROMPT};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const KEEP_ALIVE: &str = "5m";

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub keep_alive: &'a str,
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    pub response: String,
}

pub struct VisionClientOllama {
    client: reqwest::blocking::Client,
    generate_url: String,
    model: String,
}

impl VisionClientOllama {
    pub fn new(endpoint: &str, model: &str, timeout: Duration) -> Result<Self, VisionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            generate_url: format!("{}/api/generate", normalize_endpoint(endpoint)?),
            model: model.to_string(),
        })
    }

    fn generate(&self, prompt: &str, frame: &[u8]) -> Result<String, VisionError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            keep_alive: KEEP_ALIVE,
            images: vec![general_purpose::STANDARD.encode(frame)],
        };

        let response: GenerateResponse = self
            .client
            .post(&self.generate_url)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.response)
    }
}

impl VisionClient for VisionClientOllama {
    fn query_quality(&self, frame: &[u8]) -> Result<String, VisionError> {
        self.generate(QUALITY_PROMPT, frame)
    }

    fn query_classification(&self, frame: &[u8], region: &str) -> Result<String, VisionError> {
        self.generate(&classification_prompt(region), frame)
    }
}

/// Accepts `host:port` as well as full URLs, the way `OLLAMA_HOST` is usually set.
pub(crate) fn normalize_endpoint(endpoint: &str) -> Result<String, VisionError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(VisionError::Protocol(
            "Ollama endpoint cannot be empty".to_string(),
        ));
    }

    let with_scheme = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };

    Ok(with_scheme.trim_end_matches('/').to_string())
}
