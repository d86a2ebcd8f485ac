use crate::input;
use crate::render::{EntryBody, PREVIEW_CAPTION, RenderedMessage, THINKING_LABEL, render_transcript};
use crate::session::Session;
use crate::views::shared::{GatewayHandle, send_draft, send_preview_request};
use dioxus::events::Key;
use dioxus::prelude::*;

const FOOTNOTE: &str = "AI 可能会犯错，请核对生成结果。| 由 Gemini 驱动";

#[component]
pub fn ChatView(session: Signal<Session>) -> Element {
    let mut session = session;
    let gateway = use_context::<GatewayHandle>();

    let (entries, busy, draft, placeholder, attachment) = {
        let current = session.read();
        (
            render_transcript(current.transcript()),
            current.awaiting_response(),
            current.draft().to_string(),
            current.input_placeholder(),
            current.pending_image().map(|image| image.data_uri()),
        )
    };
    let can_send = session.read().can_submit(&draft, attachment.is_some());
    let show_preview = input::offers_preview(&draft);

    let key_gateway = gateway.clone();
    let send_gateway = gateway.clone();
    let preview_gateway = gateway;

    rsx! {
        div { class: "chat",
            div { id: "chat-list", class: "chat-list",
                for entry in entries.iter() {
                    MessageBubble { key: "{entry.id}", entry: entry.clone() }
                }
            }

            div { class: "composer",
                if let Some(src) = attachment {
                    div { class: "attachment",
                        img { src: "{src}", alt: "Preview" }
                        button {
                            class: "attachment-remove", r#type: "button",
                            onclick: move |_| session.with_mut(|s| s.clear_attached_image()),
                            "×"
                        }
                        div { "反向模式" }
                    }
                }

                div { class: "composer-bar",
                    label { class: "upload-btn", title: "上传图片进行分析",
                        "📎"
                        input {
                            r#type: "file", accept: "image/*",
                            onchange: move |evt: FormEvent| {
                                spawn(async move {
                                    let Some(files) = evt.files() else {
                                        return;
                                    };
                                    let Some(name) = files.files().into_iter().next() else {
                                        return;
                                    };
                                    match files.read_file(&name).await {
                                        Some(bytes) => session.with_mut(|s| s.attach_file(&name, &bytes)),
                                        None => tracing::warn!(file = %name, "could not read picked file"),
                                    }
                                });
                            },
                        }
                    }
                    textarea {
                        rows: "1", placeholder: "{placeholder}",
                        value: "{draft}",
                        oninput: move |ev| session.with_mut(|s| s.set_draft(ev.value())),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                send_draft(session, key_gateway.clone());
                            }
                        },
                    }
                    if show_preview {
                        button {
                            class: "preview-btn", r#type: "button", title: "生成预览图",
                            disabled: busy,
                            onclick: move |_| send_preview_request(session, preview_gateway.clone()),
                            "🪄 预览"
                        }
                    }
                    button {
                        class: "send-btn", r#type: "button",
                        disabled: !can_send,
                        onclick: move |_| send_draft(session, send_gateway.clone()),
                        "Send"
                    }
                }
                div { class: "composer-note", "{FOOTNOTE}" }
            }
        }
    }
}

#[component]
fn MessageBubble(entry: RenderedMessage) -> Element {
    let side = if entry.is_user() { "user" } else { "assistant" };
    let copy_payload = entry.source.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
        });
    };
    let show_copy = !entry.is_user() && !entry.source.trim().is_empty();

    let body = match &entry.body {
        EntryBody::Thinking => rsx! {
            div { class: "thinking", "{THINKING_LABEL}" }
        },
        EntryBody::Content {
            html,
            attached_image,
            generated_image,
        } => rsx! {
            if let Some(src) = attached_image {
                img { src: "{src}", alt: "Uploaded context" }
            }
            if let Some(src) = generated_image {
                div { class: "preview-frame",
                    div { class: "preview-caption", "{PREVIEW_CAPTION}" }
                    img { src: "{src}", alt: "Generated preview" }
                }
            }
            if !html.is_empty() {
                div { class: "md", dangerous_inner_html: "{html}" }
            }
        },
    };

    rsx! {
        div { class: "message-row {side}",
            div {
                div { class: "bubble {side}", {body} }
                div { class: "message-meta",
                    if let Some(ts) = entry.timestamp.clone() {
                        span { class: "message-timestamp", "{ts}" }
                    }
                    if show_copy {
                        button { class: "action-btn", title: "Copy markdown", onclick: on_copy, "Copy" }
                    }
                }
            }
        }
    }
}
