//! Full-page panels for the non-populated states.

use dioxus::prelude::*;

use crate::t;

/// Command that fills the row store; shown verbatim when there is nothing to display.
pub const INGEST_COMMAND: &str = "python -m bernalytics.main --write-to-db";

#[component]
pub fn LoadingPanel() -> Element {
    rsx! {
        div { class: "state-panel state-panel--loading", role: "status",
            div { class: "state-panel__spinner", aria_hidden: "true" }
            p { class: "state-panel__message", {t!("loading-message")} }
        }
    }
}

/// Shows the load failure verbatim with a retry control.
#[component]
pub fn ErrorPanel(message: String, on_retry: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "state-panel state-panel--error", role: "alert",
            div { class: "state-panel__box",
                h2 { class: "state-panel__title", {t!("error-title")} }
                p { class: "state-panel__message", "{message}" }
                button {
                    class: "state-panel__button",
                    r#type: "button",
                    onclick: move |evt| on_retry.call(evt),
                    {t!("error-retry")}
                }
            }
        }
    }
}

#[component]
pub fn EmptyPanel() -> Element {
    rsx! {
        div { class: "state-panel state-panel--empty",
            p { class: "state-panel__title", {t!("empty-title")} }
            p { class: "state-panel__message", {t!("empty-guidance")} }
            code { class: "state-panel__command", "{INGEST_COMMAND}" }
        }
    }
}
