use crate::ai::gateway::{GatewayError, GatewayResult};
use crate::config::Config;
use crate::input::InlineImage;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::{model_endpoint, truncate_body};

pub const PREVIEW_IMAGE_COUNT: u32 = 1;
pub const PREVIEW_ASPECT_RATIO: &str = "1:1";
pub const PREVIEW_MIME: &str = "image/jpeg";

/// Stateless client for Imagen `predict`.
pub struct ImagenClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: &'static str,
    output_mime_type: &'static str,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: [PredictInstance<'a>; 1],
    parameters: PredictParameters,
}

impl ImagenClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            endpoint: model_endpoint(&config.api_base, &config.image_model, "predict"),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn generate(&self, prompt: &str) -> GatewayResult<InlineImage> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(prompt))
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
        parse_prediction(&body)
    }
}

fn build_request(prompt: &str) -> PredictRequest<'_> {
    PredictRequest {
        instances: [PredictInstance { prompt }],
        parameters: PredictParameters {
            sample_count: PREVIEW_IMAGE_COUNT,
            aspect_ratio: PREVIEW_ASPECT_RATIO,
            output_mime_type: PREVIEW_MIME,
        },
    }
}

/// First image of a `predict` response. Accepts the flat
/// `bytesBase64Encoded` shape and the nested `image.imageBytes` one.
pub fn parse_prediction(body: &str) -> GatewayResult<InlineImage> {
    let payload: Value = serde_json::from_str(body)?;
    let predictions = payload
        .get("predictions")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    for row in predictions {
        let Some(obj) = row.as_object() else {
            continue;
        };
        let nested = obj
            .get("image")
            .or_else(|| obj.get("generatedImage"))
            .and_then(Value::as_object);
        let encoded = obj
            .get("bytesBase64Encoded")
            .and_then(Value::as_str)
            .or_else(|| {
                nested
                    .and_then(|image| image.get("imageBytes"))
                    .and_then(Value::as_str)
            })
            .filter(|data| !data.is_empty());
        if let Some(data) = encoded {
            let mime = obj
                .get("mimeType")
                .and_then(Value::as_str)
                .unwrap_or(PREVIEW_MIME);
            return Ok(InlineImage::new(mime, data));
        }
    }

    Err(GatewayError::Empty("preview image"))
}
