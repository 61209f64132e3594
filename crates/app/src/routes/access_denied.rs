use crate::auth::use_auth;
use crate::routes::LogoutDialog;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Shown to signed-in users whose role has no dashboard access.
/// The only way out is logging out.
#[component]
pub fn AccessDenied() -> Element {
    let auth = use_auth();
    let mut router = auth.router;
    let user = auth.current_user();
    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
    let role = user
        .as_ref()
        .and_then(|u| u.role)
        .map(|r| r.label())
        .unwrap_or("Sin rol");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./access_denied.css") }

        div { class: "denied-page",
            Card { class: "denied-card",
                CardHeader {
                    div { class: "denied-icon",
                        Icon::<LdShield> { icon: LdShield, width: 40, height: 40 }
                    }
                    CardTitle { "Acceso denegado" }
                    CardDescription { "Tu rol no tiene permisos para ver el panel de análisis." }
                }
                CardContent {
                    dl { class: "denied-details",
                        dt { "Usuario" }
                        dd { "{username}" }
                        dt { "Rol" }
                        dd { "{role}" }
                    }
                    p { class: "denied-hint", "Contacta al administrador si necesitas acceso." }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| router.write().request_logout(),
                        "Cerrar sesión"
                    }
                }
            }
        }

        LogoutDialog {}
    }
}
