use crate::catalog::{self, QuickOption, Step, StepStatus};
use crate::session::Session;
use crate::views::shared::{GatewayHandle, dispatch_turn};
use dioxus::prelude::*;

#[component]
pub fn WizardSidebar(session: Signal<Session>) -> Element {
    let (current, busy) = {
        let s = session.read();
        (s.current_step(), s.awaiting_response())
    };
    let steps = catalog::progress(current);
    let panel = catalog::active_config(current);
    let step_badge = format!("Step {}/{}", current.index() + 1, Step::GUIDED.len());

    rsx! {
        aside { class: "wizard",
            div { class: "wizard-header",
                h1 { "视觉工坊" }
                span { "Visual Prompt Studio" }
            }
            div { class: "wizard-body",
                div { class: "wizard-section-title", "进度 (Progress)" }
                for (step, status) in steps {
                    StepRow { key: "{step:?}", step, status }
                }

                if let Some(config) = panel {
                    div { class: "wizard-options",
                        div { class: "wizard-options-head",
                            div { class: "wizard-section-title", "快速选项" }
                            span { class: "step-badge", "{step_badge}" }
                        }
                        p { class: "wizard-description", "{config.description}" }
                        for option in config.options.iter().copied() {
                            QuickOptionButton {
                                key: "{option.value}",
                                session,
                                option,
                                disabled: busy,
                            }
                        }
                    }
                }
            }
            div { class: "wizard-footer", "Powered by Gemini & Imagen" }
        }
    }
}

#[component]
fn StepRow(step: Step, status: StepStatus) -> Element {
    let (class, marker) = match status {
        StepStatus::Completed => ("wizard-step completed", "✓"),
        StepStatus::Active => ("wizard-step active", "●"),
        StepStatus::Upcoming => ("wizard-step", "○"),
    };
    let title = step.config().title;
    rsx! {
        div { class: "{class}",
            span { class: "step-marker", "{marker}" }
            span { "{title}" }
        }
    }
}

#[component]
fn QuickOptionButton(session: Signal<Session>, option: QuickOption, disabled: bool) -> Element {
    let gateway = use_context::<GatewayHandle>();
    rsx! {
        button {
            class: "quick-option", r#type: "button",
            disabled,
            onclick: move |_| dispatch_turn(session, gateway.clone(), option.value.to_string(), None),
            span { class: "icon", "{option.icon}" }
            span { "{option.label}" }
        }
    }
}
