pub mod gemini;
pub mod imagen;

pub use gemini::GeminiChat;
pub use imagen::ImagenClient;

const MAX_ERROR_BODY: usize = 512;

/// `{api_base}/models/{model}:{method}`, tolerating a `models/` prefix on the model name.
pub fn model_endpoint(api_base: &str, model: &str, method: &str) -> String {
    let trimmed = model.trim();
    let model_path = if trimmed.starts_with("models/") {
        trimmed.to_string()
    } else {
        format!("models/{trimmed}")
    };
    format!(
        "{}/{}:{}",
        api_base.trim_end_matches('/'),
        model_path,
        method
    )
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
