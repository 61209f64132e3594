use crate::auth::{use_auth, AuthState};
use crate::loading::use_section_data;
use crate::use_api;
use client::{DashboardApi, LoadStatus};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUsers;
use dioxus_free_icons::Icon;
use shared_types::{
    AppError, CreateUserRequest, Role, RoleFilter, SectionId, UpdateUserRequest, User, WireValue,
    ALL_ROLES,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    DialogContent, DialogDescription, DialogFooter, DialogRoot, DialogTitle, ErrorPanel,
    FormSelect, Input, LoadingPanel, PageActions, PageHeader, PageSubtitle, PageTitle,
    ToastOptions,
};
use std::collections::HashMap;

/// Map a role to its badge variant.
fn role_badge_variant(role: Option<Role>) -> BadgeVariant {
    match role {
        Some(Role::Admin) => BadgeVariant::Primary,
        Some(Role::Analyst) => BadgeVariant::Secondary,
        Some(Role::Operator) => BadgeVariant::Success,
        Some(Role::Client) | None => BadgeVariant::Outline,
    }
}

fn role_display(role: Option<Role>) -> &'static str {
    role.map(|r| r.label()).unwrap_or("Sin rol")
}

/// A 401 from an admin action ends the session like any loader would.
fn report_failure(mut auth: AuthState, err: &AppError) -> Option<String> {
    if err.is_session_expired() {
        tracing::warn!("session expired during user administration");
        auth.session.write().expire();
        None
    } else {
        Some(err.message.clone())
    }
}

/// Empty create-user form; new users default to operador.
fn blank_form() -> CreateUserRequest {
    CreateUserRequest {
        username: String::new(),
        email: String::new(),
        password: String::new(),
        role: Role::Operator,
    }
}

/// User administration (admin only).
#[component]
pub fn UsersSection() -> Element {
    let state = use_section_data::<Vec<User>>(SectionId::Users);
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let mut router = auth.router;

    let mut role_filter = use_signal(RoleFilter::default);
    let mut show_create = use_signal(|| false);
    let mut editing: Signal<Option<User>> = use_signal(|| None);

    let snapshot = state.read().clone();

    let toggle_api = api.clone();
    let toggle_active = move |user: User| {
        let api = toggle_api.clone();
        spawn(async move {
            let request = UpdateUserRequest::active(!user.active);
            match api.update_user(user.id, &request).await {
                Ok(_) => {
                    let verb = if user.active { "desactivado" } else { "activado" };
                    toast.success(format!("Usuario {verb} exitosamente"), ToastOptions::new());
                    router.write().refresh();
                }
                Err(err) => {
                    if let Some(message) = report_failure(auth, &err) {
                        toast.error(message, ToastOptions::new());
                    }
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./users.css") }

        PageHeader {
            div {
                PageTitle { "Gestión de usuarios" }
                PageSubtitle { "Administra usuarios y permisos del sistema" }
            }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| show_create.set(true),
                    Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                    "Crear usuario"
                }
            }
        }

        match snapshot.status {
            LoadStatus::Loading => rsx! { LoadingPanel { label: "Cargando usuarios..." } },
            LoadStatus::Error => rsx! {
                ErrorPanel {
                    message: snapshot.error_message.clone().unwrap_or_default(),
                    on_retry: move |_| router.write().refresh(),
                }
            },
            LoadStatus::Ready => {
                let visible: Vec<User> = role_filter().apply(&snapshot.data).into_iter().cloned().collect();
                let total = snapshot.data.len();
                rsx! {
                    Card { class: "users-filter",
                        CardContent {
                            FormSelect {
                                label: "Filtrar por rol",
                                value: match role_filter() {
                                    RoleFilter::All => "ALL".to_string(),
                                    RoleFilter::Only(role) => role.as_wire().to_string(),
                                },
                                onchange: move |evt: FormEvent| role_filter.set(RoleFilter::from_select(&evt.value())),
                                option { value: "ALL", "Todos" }
                                for role in ALL_ROLES {
                                    option { value: role.as_wire(), "{role.label()}" }
                                }
                            }
                        }
                    }

                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Usuario" }
                            DataTableColumn { "Email" }
                            DataTableColumn { "Rol" }
                            DataTableColumn { "Estado" }
                            DataTableColumn { "Acciones" }
                        }
                        DataTableBody {
                            for user in visible.iter().cloned() {
                                {
                                    let edit_user = user.clone();
                                    let toggle_user = user.clone();
                                    let toggle_active = toggle_active.clone();
                                    rsx! {
                                        DataTableRow { key: "{user.id}", muted: !user.active,
                                            DataTableCell {
                                                div { class: "user-cell",
                                                    span { class: "user-avatar", "{user.initial()}" }
                                                    span { class: "user-name", "{user.username}" }
                                                }
                                            }
                                            DataTableCell { "{user.email}" }
                                            DataTableCell {
                                                Badge { variant: role_badge_variant(user.role), "{role_display(user.role)}" }
                                            }
                                            DataTableCell {
                                                if user.active {
                                                    Badge { variant: BadgeVariant::Success, "Activo" }
                                                } else {
                                                    Badge { variant: BadgeVariant::Destructive, "Inactivo" }
                                                }
                                            }
                                            DataTableCell {
                                                div { class: "user-actions",
                                                    Button {
                                                        variant: ButtonVariant::Outline,
                                                        onclick: move |_| editing.set(Some(edit_user.clone())),
                                                        "Editar rol"
                                                    }
                                                    Button {
                                                        variant: if user.active { ButtonVariant::Destructive } else { ButtonVariant::Secondary },
                                                        onclick: move |_| toggle_active(toggle_user.clone()),
                                                        if user.active { "Desactivar" } else { "Activar" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    p { class: "users-count", "Mostrando {visible.len()} de {total} usuarios" }
                }
            }
        }

        CreateUserDialog { open: show_create }
        EditRoleDialog { editing }
    }
}

/// Create-user form. Validates locally, then posts.
#[component]
fn CreateUserDialog(open: Signal<bool>) -> Element {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let mut open = open;
    let mut router = auth.router;

    let mut form = use_signal(blank_form);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut close = move || {
        open.set(false);
        form.set(blank_form());
        field_errors.set(HashMap::new());
        form_error.set(None);
    };

    let handle_save = move |_: MouseEvent| {
        let api = api.clone();
        let request = form();
        spawn(async move {
            saving.set(true);
            field_errors.set(HashMap::new());
            form_error.set(None);
            match api.create_user(&request).await {
                Ok(response) => {
                    let message = response
                        .message
                        .unwrap_or_else(|| "Usuario creado exitosamente".to_string());
                    toast.success(message, ToastOptions::new());
                    close();
                    router.write().refresh();
                }
                Err(err) if !err.field_errors.is_empty() => {
                    field_errors.set(err.field_errors.clone());
                    form_error.set(Some(err.message));
                }
                Err(err) => {
                    form_error.set(report_failure(auth, &err));
                }
            }
            saving.set(false);
        });
    };

    let current = form();
    let errors = field_errors();

    rsx! {
        DialogRoot {
            open: open(),
            on_open_change: move |is_open: bool| {
                if !is_open {
                    close();
                }
            },
            DialogContent {
                DialogTitle { "Crear usuario" }
                DialogDescription { "El usuario podrá iniciar sesión de inmediato." }

                if let Some(err) = form_error() {
                    div { class: "users-form-error", role: "alert", "{err}" }
                }

                div { class: "users-form",
                    Input {
                        label: "Usuario",
                        value: current.username.clone(),
                        error: errors.get("username").cloned(),
                        on_input: move |e: FormEvent| form.write().username = e.value(),
                    }
                    Input {
                        label: "Email",
                        input_type: "email",
                        value: current.email.clone(),
                        error: errors.get("email").cloned(),
                        on_input: move |e: FormEvent| form.write().email = e.value(),
                    }
                    Input {
                        label: "Contraseña",
                        input_type: "password",
                        placeholder: "Mínimo 8 caracteres",
                        value: current.password.clone(),
                        error: errors.get("password").cloned(),
                        on_input: move |e: FormEvent| form.write().password = e.value(),
                    }
                    FormSelect {
                        label: "Rol",
                        value: current.role.as_wire().to_string(),
                        onchange: move |evt: FormEvent| {
                            if let Some(role) = Role::from_wire(&evt.value()) {
                                form.write().role = role;
                            }
                        },
                        for role in ALL_ROLES {
                            option { value: role.as_wire(), "{role.label()}" }
                        }
                    }
                }

                DialogFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| close(),
                        "Cancelar"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        busy: saving(),
                        onclick: handle_save,
                        "Crear"
                    }
                }
            }
        }
    }
}

/// Role editor for an existing user.
#[component]
fn EditRoleDialog(editing: Signal<Option<User>>) -> Element {
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();
    let mut editing = editing;
    let mut router = auth.router;

    let mut selected = use_signal(|| Role::Operator);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Seed the select whenever a different user is opened.
    use_effect(move || {
        if let Some(user) = editing.read().as_ref() {
            selected.set(user.role.unwrap_or(Role::Operator));
            form_error.set(None);
        }
    });

    let user = editing();
    let open = user.is_some();
    let username = user.as_ref().map(|u| u.username.clone()).unwrap_or_default();

    let handle_save = move |_: MouseEvent| {
        let api = api.clone();
        let Some(user) = editing.peek().clone() else {
            return;
        };
        let role = selected();
        spawn(async move {
            saving.set(true);
            match api.update_user(user.id, &UpdateUserRequest::role(role)).await {
                Ok(_) => {
                    toast.success(
                        format!("Rol de {} actualizado a {}", user.username, role.label()),
                        ToastOptions::new(),
                    );
                    editing.set(None);
                    router.write().refresh();
                }
                Err(err) => form_error.set(report_failure(auth, &err)),
            }
            saving.set(false);
        });
    };

    rsx! {
        DialogRoot {
            open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    editing.set(None);
                }
            },
            DialogContent {
                DialogTitle { "Editar rol" }
                DialogDescription { "Cambia el rol de {username}." }

                if let Some(err) = form_error() {
                    div { class: "users-form-error", role: "alert", "{err}" }
                }

                FormSelect {
                    label: "Rol",
                    value: selected().as_wire().to_string(),
                    onchange: move |evt: FormEvent| {
                        if let Some(role) = Role::from_wire(&evt.value()) {
                            selected.set(role);
                        }
                    },
                    for role in ALL_ROLES {
                        option { value: role.as_wire(), "{role.label()}" }
                    }
                }

                DialogFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| editing.set(None),
                        "Cancelar"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        busy: saving(),
                        onclick: handle_save,
                        "Guardar"
                    }
                }
            }
        }
    }
}
