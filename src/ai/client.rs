use crate::config::{Config, ConfigError};
use crate::input::InlineImage;
use async_trait::async_trait;
use reqwest::Client;

use super::gateway::{AssistantGateway, FALLBACK_REPLY};
use super::providers::{GeminiChat, ImagenClient};

/// Gateway over the hosted Gemini chat and Imagen preview services.
pub struct GeminiGateway {
    chat: GeminiChat,
    imagen: ImagenClient,
}

impl GeminiGateway {
    pub fn new(config: &Config) -> Self {
        let http = Client::new();
        Self {
            chat: GeminiChat::new(http.clone(), config),
            imagen: ImagenClient::new(http, config),
        }
    }

    /// Create the gateway from environment configuration
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::from_env()?;
        tracing::info!(
            chat_model = %config.chat_model,
            image_model = %config.image_model,
            "assistant gateway configured"
        );
        Ok(Self::new(&config))
    }

    pub fn chat(&self) -> &GeminiChat {
        &self.chat
    }

    pub fn imagen(&self) -> &ImagenClient {
        &self.imagen
    }
}

#[async_trait]
impl AssistantGateway for GeminiGateway {
    async fn converse(&self, text: &str, image: Option<&InlineImage>) -> String {
        match self.chat.send(text, image).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(error = %err, endpoint = self.chat.endpoint(), "chat turn failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn preview_image(&self, prompt: &str) -> Option<InlineImage> {
        match self.imagen.generate(prompt).await {
            Ok(image) => Some(image),
            Err(err) => {
                tracing::warn!(error = %err, endpoint = self.imagen.endpoint(), "preview generation failed");
                None
            }
        }
    }
}
