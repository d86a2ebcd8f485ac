use crate::ai::gateway::{GatewayError, GatewayResult};
use crate::catalog::SYSTEM_INSTRUCTION;
use crate::config::Config;
use crate::input::InlineImage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

use super::{model_endpoint, truncate_body};

/// Chat client for Gemini `generateContent`.
///
/// Holds the accumulated conversation: every successful turn appends the user
/// turn and the model reply, so later turns carry the full history.
pub struct GeminiChat {
    http: Client,
    endpoint: String,
    api_key: String,
    temperature: f32,
    history: Mutex<Vec<Content>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SystemInstruction<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: &'a [Content],
    generation_config: GenerationConfig,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl Content {
    /// A user turn; the image, when present, travels as inline data after the text.
    /// An empty text part is dropped when an image carries the turn.
    pub fn user(text: &str, image: Option<&InlineImage>) -> Self {
        let mut parts = Vec::with_capacity(2);
        if !text.is_empty() || image.is_none() {
            parts.push(Part {
                text: Some(text.to_string()),
                ..Part::default()
            });
        }
        if let Some(image) = image {
            parts.push(Part {
                inline_data: Some(InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.payload().to_string(),
                }),
                ..Part::default()
            });
        }
        Self {
            role: "user".to_string(),
            parts,
        }
    }

    pub fn model(text: &str) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part {
                text: Some(text.to_string()),
                ..Part::default()
            }],
        }
    }
}

impl GeminiChat {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            endpoint: model_endpoint(&config.api_base, &config.chat_model, "generateContent"),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Number of turns (user and model) the conversation has accumulated.
    pub fn history_len(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub async fn send(&self, text: &str, image: Option<&InlineImage>) -> GatewayResult<String> {
        let turn = Content::user(text, image);
        let mut contents = self
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        contents.push(turn.clone());

        let request = build_request(&contents, self.temperature);
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Service {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let reply = parse_reply(&body)?;
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        history.push(turn);
        history.push(Content::model(&reply));
        Ok(reply)
    }
}

fn build_request(contents: &[Content], temperature: f32) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        system_instruction: SystemInstruction {
            parts: [TextPart {
                text: SYSTEM_INSTRUCTION,
            }],
        },
        contents,
        generation_config: GenerationConfig { temperature },
    }
}

/// Concatenates the text parts of the first candidate, skipping thought parts.
pub fn parse_reply(body: &str) -> GatewayResult<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.thought.unwrap_or(false))
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(GatewayError::Empty("reply text"))
    } else {
        Ok(text)
    }
}
