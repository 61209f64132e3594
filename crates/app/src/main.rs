use client::config::client_config;
use client::ApiClient;
use dioxus::prelude::*;

mod auth;
pub mod capability_gate;
pub mod format_helpers;
mod loading;
mod routes;
use auth::{use_auth, AuthState};
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

/// Hook to access the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[component]
fn App() -> Element {
    let api = use_hook(|| ApiClient::from_config(client_config()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        document::Title { "{client_config().app.name}" }
        match api {
            Ok(api) => rsx! { Shell { api } },
            Err(err) => rsx! {
                div { class: "fatal-page",
                    h1 { "No se pudo iniciar la aplicación" }
                    p { "{err}" }
                }
            },
        }
    }
}

/// Owns the app-wide context once the API client exists.
#[component]
fn Shell(api: ApiClient) -> Element {
    use_context_provider(|| api);
    use_context_provider(AuthState::new);
    let auth = use_auth();

    // The view router follows every session change, including forced expiry
    // from a loader while the layout is not mounted.
    use_effect(move || {
        let session = auth.session.read();
        let mut router = auth.router;
        router.write().sync_session(&session);
    });

    rsx! {
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
