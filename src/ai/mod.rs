/// AI module for Prompt Studio
///
/// This module isolates the hosted model services behind one trait so the
/// session orchestrator never sees a provider's wire shape.
///
/// # Architecture
///
/// - `gateway` - The `AssistantGateway` trait, fallback text and preview heuristic
/// - `client` - `GeminiGateway`, the adapter used by the app
/// - `providers` - REST clients for Gemini chat and Imagen previews
///
/// # Usage
///
/// ```rust,no_run
/// use prompt_studio::ai::{AssistantGateway, GeminiGateway};
///
/// # async fn example() -> Result<(), prompt_studio::config::ConfigError> {
/// let gateway = GeminiGateway::from_env()?;
/// let reply = gateway.converse("A mythical dragon in a cave", None).await;
/// # Ok(())
/// # }
/// ```
mod client;
mod gateway;
pub mod providers;

// Re-export main types
pub use client::GeminiGateway;
pub use gateway::{
    AssistantGateway, FALLBACK_REPLY, GatewayError, GatewayResult, wants_preview,
};
