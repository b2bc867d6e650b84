use crate::vision_client::interface::{VisionClient, VisionError};
use crate::vision_client::prompt::{classification_prompt, QUALITY_PROMPT};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

pub struct VisionClientOpenAi {
    client: reqwest::blocking::Client,
    completions_url: String,
    api_key: Option<String>,
    model: String,
}

impl VisionClientOpenAi {
    pub fn new(
        endpoint: &str,
        api_key: Option<&str>,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, VisionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            completions_url: format!("{}/chat/completions", endpoint.trim().trim_end_matches('/')),
            api_key: api_key.filter(|key| !key.is_empty()).map(str::to_string),
            model: model.to_string(),
        })
    }

    fn complete(&self, prompt: &str, frame: &[u8]) -> Result<String, VisionError> {
        let request = build_request(&self.model, prompt, frame);

        let mut builder = self.client.post(&self.completions_url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response: ChatResponse = builder.send()?.error_for_status()?.json()?;
        first_choice_text(response)
    }
}

impl VisionClient for VisionClientOpenAi {
    fn query_quality(&self, frame: &[u8]) -> Result<String, VisionError> {
        self.complete(QUALITY_PROMPT, frame)
    }

    fn query_classification(&self, frame: &[u8], region: &str) -> Result<String, VisionError> {
        self.complete(&classification_prompt(region), frame)
    }
}

pub(crate) fn build_request<'a>(model: &'a str, prompt: &'a str, frame: &[u8]) -> ChatRequest<'a> {
    let url = format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(frame)
    );

    ChatRequest {
        model,
        messages: vec![ChatMessage {
            role: "user",
            content: vec![
                ContentPart::Text { text: prompt },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url },
                },
            ],
        }],
    }
}

pub(crate) fn first_choice_text(response: ChatResponse) -> Result<String, VisionError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| VisionError::Protocol("no response from OpenAI endpoint".to_string()))
}
