pub mod access_denied;
pub mod analysis;
pub mod dashboard;
pub mod docs;
pub mod login;
pub mod metrics;
pub mod not_found;
pub mod recommendations;
pub mod reports;
pub mod users;

use crate::auth::{use_auth, use_sidebar_sections};
use crate::capability_gate::CapabilityGate;
use crate::use_api;
use client::{DashboardApi, View};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdClock, LdFileText, LdLayoutDashboard, LdSearch, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::SectionId;
use shared_ui::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant,
};

use access_denied::AccessDenied;
use login::Login;
use not_found::{NotFound, SectionUnavailable};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/:section")]
    SectionView { section: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// URL for a section. The dashboard lives at the root.
pub fn section_route(id: SectionId) -> Route {
    match id {
        SectionId::Dashboard => Route::Home {},
        other => Route::SectionView {
            section: other.as_str().to_string(),
        },
    }
}

/// Section id requested by the current URL.
fn requested_section(route: &Route) -> String {
    match route {
        Route::SectionView { section } => section.clone(),
        _ => SectionId::Dashboard.as_str().to_string(),
    }
}

/// Auth guard layout: resolves the session once, then redirects to /login
/// while signed out.
#[component]
fn AuthGuard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut session = auth.session;
    let mut router = auth.router;
    let route: Route = use_route();
    // The URL the app was opened on decides the first section.
    let landing = use_hook(|| requested_section(&route));

    let _resolve = use_resource(move || {
        let api = api.clone();
        let landing = landing.clone();
        async move {
            if !session.peek().is_resolving() {
                return;
            }
            router.write().set_landing(&landing);
            let user = match api.current_user().await {
                Ok(user) => user,
                Err(err) => {
                    tracing::warn!(error = %err, "session check failed");
                    None
                }
            };
            session.write().resolve(user);
        }
    });

    let resolving = session.read().is_resolving();
    let signed_in = session.read().is_authenticated();

    if resolving {
        rsx! {
            div { class: "auth-guard-loading",
                p { "Cargando..." }
            }
        }
    } else if signed_in {
        rsx! { Outlet::<Route> {} }
    } else {
        navigator().replace(Route::Login {});
        rsx! {
            div { class: "auth-guard-loading",
                p { "Redirigiendo al inicio de sesión..." }
            }
        }
    }
}

fn section_icon(id: SectionId) -> Element {
    match id {
        SectionId::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        SectionId::Analytics => rsx! { Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 } },
        SectionId::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        SectionId::Tickets => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
        SectionId::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        SectionId::Docs => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
    }
}

/// Main app layout with sidebar and header.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let mut router = auth.router;
    let sections = use_sidebar_sections();

    // Wait for the router to leave the signed-out state before following the URL.
    let entered = use_memo(move || !matches!(auth.router.read().view(), View::SignedOut));
    let requested = requested_section(&route);
    use_effect(use_reactive((&requested,), move |(requested,)| {
        if !entered() {
            return;
        }
        let role = auth.session.peek().user().and_then(|u| u.role);
        let current = router.peek();
        let showing = SectionId::parse(&requested) == Some(current.active())
            && matches!(current.view(), View::Loading(_) | View::Section(_));
        drop(current);
        if !showing {
            router.write().set_active_section(role, &requested);
        }
    }));

    let view = router.read().view().clone();
    if view == View::AccessDenied {
        return rsx! { AccessDenied {} };
    }

    let active = router.read().active();
    let loading = matches!(view, View::Loading(_));
    let header_label = match &view {
        View::NotFound(_) => "Sección no disponible",
        _ => active.section().label,
    };
    let user = auth.current_user();
    let username = user.as_ref().map(|u| u.display_label().to_string()).unwrap_or_default();
    let initial = user.as_ref().map(|u| u.initial()).unwrap_or_default();
    let role_label = user
        .as_ref()
        .and_then(|u| u.role)
        .map(|r| r.label())
        .unwrap_or("Sin rol");
    let app_name = &client::config::client_config().app.name;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "{app_name}" }
                    span { class: "sidebar-brand-tag", "Análisis de tickets" }
                }
                nav { class: "sidebar-menu",
                    for section in sections {
                        Link {
                            key: "{section.id}",
                            to: section_route(section.id),
                            class: if section.id == active { "sidebar-item active" } else { "sidebar-item" },
                            {section_icon(section.id)}
                            span { "{section.label}" }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        span { class: "sidebar-avatar", "{initial}" }
                        div { class: "sidebar-user-text",
                            span { class: "sidebar-user-name", "{username}" }
                            Badge { variant: BadgeVariant::Secondary, "{role_label}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| router.write().request_logout(),
                        "Cerrar sesión"
                    }
                }
            }

            div { class: "app-main",
                header { class: "app-header",
                    h2 { class: "app-header-title", "{header_label}" }
                    div { class: "app-header-spacer" }
                    Button {
                        variant: ButtonVariant::Outline,
                        busy: loading,
                        onclick: move |_| router.write().refresh(),
                        "Actualizar"
                    }
                }
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }

        LogoutDialog {}
    }
}

/// Confirmation before ending the session. Used by the layout and the
/// access-denied screen.
#[component]
pub fn LogoutDialog() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut router = auth.router;
    let mut session = auth.session;
    let open = router.read().logout_pending();

    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |open: bool| {
                if !open {
                    router.write().cancel_logout();
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "Cerrar sesión" }
                AlertDialogDescription { "¿Seguro que deseas salir del panel?" }
                AlertDialogActions {
                    AlertDialogCancel { "Cancelar" }
                    AlertDialogAction {
                        on_click: move |_: MouseEvent| {
                            let api = api.clone();
                            spawn(async move {
                                if let Err(err) = api.logout().await {
                                    tracing::warn!(error = %err, "logout request failed");
                                }
                                router.write().confirm_logout(&mut session.write());
                                tracing::info!("signed out");
                            });
                        },
                        "Cerrar sesión"
                    }
                }
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { SectionHost {} }
}

#[component]
fn SectionView(section: String) -> Element {
    tracing::trace!(section = %section, "section route");
    rsx! { SectionHost {} }
}

/// Renders whatever the view router says is active.
#[component]
fn SectionHost() -> Element {
    let auth = use_auth();
    let view = auth.router.read().view().clone();

    match view {
        View::Loading(id) | View::Section(id) => rsx! {
            CapabilityGate {
                required: id.section().required,
                fallback: rsx! { SectionUnavailable { id: id.as_str().to_string() } },
                ActiveSection { id }
            }
        },
        View::NotFound(id) => rsx! { SectionUnavailable { id } },
        View::SignedOut | View::AccessDenied => rsx! {},
    }
}

#[component]
fn ActiveSection(id: SectionId) -> Element {
    match id {
        SectionId::Dashboard => rsx! { dashboard::DashboardSection {} },
        SectionId::Analytics => rsx! { analysis::AnalysisSection {} },
        SectionId::Reports => rsx! { reports::ReportsSection {} },
        SectionId::Tickets => rsx! { metrics::MetricsSection {} },
        SectionId::Users => rsx! { users::UsersSection {} },
        SectionId::Docs => rsx! { docs::DocsSection {} },
    }
}
