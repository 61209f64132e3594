use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Skeleton};

/// Placeholder shown while a section is fetching.
#[component]
pub fn LoadingPanel(#[props(default = "Cargando datos...".to_string())] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-status", "data-state": "loading", role: "status",
            Skeleton { class: "seira-status-line" }
            Skeleton { class: "seira-status-line seira-status-line-short" }
            p { class: "seira-status-text", "{label}" }
        }
    }
}

/// Inline failure message with an optional retry button.
#[component]
pub fn ErrorPanel(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ErrorBody { message, on_retry }
    }
}

#[component]
pub fn ErrorBody(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "seira-status", "data-state": "error", role: "alert",
            p { class: "seira-status-title", "Error" }
            p { class: "seira-status-text", "{message}" }
            if let Some(handler) = on_retry {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| handler.call(()),
                    "Reintentar"
                }
            }
        }
    }
}

#[component]
pub fn EmptyPanel(message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-status", "data-state": "empty",
            p { class: "seira-status-text", "{message}" }
        }
    }
}
