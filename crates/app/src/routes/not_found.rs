use dioxus::prelude::*;
use shared_types::AppError;

use crate::routes::Route;

/// 404 page for paths outside the dashboard layout.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Página no encontrada" }
                p { class: "not-found-message",
                    "La ruta "
                    code { "{path}" }
                    " no existe."
                }
                Link { to: Route::Home {},
                    class: "not-found-link",
                    "Volver al dashboard"
                }
            }
        }
    }
}

/// Placeholder shown inside the layout for an unknown or unreachable section.
#[component]
pub fn SectionUnavailable(id: String) -> Element {
    let error = AppError::unknown_section(&id);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "section-unavailable", "data-kind": "{error.kind}",
            h3 { "Sección no disponible" }
            p { "{error.message}" }
            Link { to: Route::Home {},
                class: "not-found-link",
                "Volver al dashboard"
            }
        }
    }
}
