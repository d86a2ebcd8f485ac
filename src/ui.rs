use crate::ai::GeminiGateway;
use crate::config::ConfigError;
use crate::session::Session;
use crate::theme::STUDIO_CSS;
use crate::views::shared::GatewayHandle;
use crate::views::{ChatView, WizardSidebar};
use dioxus::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> Element {
    let gateway = use_hook(|| GeminiGateway::from_env().map(|g| GatewayHandle(Arc::new(g))));

    let body = match gateway {
        Ok(gateway) => rsx! { Studio { gateway } },
        Err(err) => {
            tracing::error!(error = %err, "studio cannot start");
            rsx! { ConfigErrorScreen { error: err } }
        }
    };

    rsx! {
        style { dangerous_inner_html: "{STUDIO_CSS}" }
        {body}
    }
}

#[component]
fn Studio(gateway: GatewayHandle) -> Element {
    use_context_provider(|| gateway);
    let session = use_signal(Session::new);

    rsx! {
        div { class: "studio",
            WizardSidebar { session }
            ChatView { session }
        }
    }
}

#[component]
fn ConfigErrorScreen(error: ConfigError) -> Element {
    rsx! {
        div { class: "config-error",
            div { class: "config-error-card",
                h2 { "配置错误 (Configuration Error)" }
                p { "{error}" }
            }
        }
    }
}
