use crate::auth::use_auth;
use crate::routes::Route;
use crate::use_api;
use client::DashboardApi;
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};

/// Login page. Accepts a username or an email plus password.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Home {});
    }

    // Set when the previous session ended on a 401.
    let notice = auth.session.read().notice().map(str::to_string);
    let app_name = &client::config::client_config().app.name;

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            let request = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            if request.username.is_empty() || request.password.is_empty() {
                error_msg.set(Some("Ingresa usuario y contraseña".to_string()));
                return;
            }
            loading.set(true);
            error_msg.set(None);

            match api.login(&request).await {
                Ok(user) => {
                    auth.sign_in(user);
                    navigator().replace(Route::Home {});
                }
                Err(err) => {
                    tracing::info!(kind = %err.kind, "login rejected");
                    error_msg.set(Some(err.message));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                h1 { class: "auth-brand-name", "{app_name}" }
                p { class: "auth-brand-tag", "Sistema de Evaluación Inteligente" }
            }

            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Iniciar sesión" }
                    CardDescription { "Ingresa tus credenciales para acceder al panel" }
                }

                CardContent {
                    if let Some(message) = notice {
                        div { class: "auth-notice", role: "status", "{message}" }
                    }

                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Usuario o email",
                            placeholder: "admin",
                            value: username(),
                            autofocus: true,
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        Input {
                            label: "Contraseña",
                            input_type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Iniciando sesión..." } else { "Iniciar sesión" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-footer-text", "Acceso restringido al personal autorizado" }
                }
            }
        }
    }
}
