use client::{load, DashboardApi, LoadState, LoadStatus, Session};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CreateUserRequest, Role, RoleFilter, UpdateUserRequest, User};
use std::cell::RefCell;
use std::rc::Rc;

use crate::common;

const USERS_PATH: &str = "/api/auth/admin/users";

fn new_user(username: &str, password: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: format!("{username}@seira.test"),
        password: password.to_string(),
        role: Role::Operator,
    }
}

#[tokio::test]
async fn test_admin_lists_users() {
    let backend = common::spawn_backend().await;
    backend.sign_in_as("admin", "Admin123").await;

    let users = backend.client.list_users().await.unwrap();
    assert_eq!(users.len(), 4);

    let analysts: Vec<_> = RoleFilter::Only(Role::Analyst)
        .apply(&users)
        .iter()
        .map(|u| u.username.clone())
        .collect();
    assert_eq!(analysts, vec!["analista".to_string()]);
}

#[tokio::test]
async fn test_non_admin_is_forbidden() {
    let backend = common::spawn_backend().await;
    backend.sign_in_as("analista", "Analista123").await;

    let err = backend.client.list_users().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Acceso denegado");
}

#[tokio::test]
async fn test_user_list_loader_expires_session_on_401() {
    let backend = common::spawn_backend().await;
    let admin = backend.sign_in_as("admin", "Admin123").await;
    let mut session = Session::new();
    session.sign_in(admin);
    let session = Rc::new(RefCell::new(session));
    backend.client.logout().await.unwrap();

    let state = Rc::new(RefCell::new(LoadState::<Vec<User>>::default()));
    let status = load(&backend.client, &session, &state).await;

    assert_eq!(status, LoadStatus::Error);
    assert!(!session.borrow().is_authenticated());
}

#[tokio::test]
async fn test_create_user_then_list() {
    let backend = common::spawn_backend().await;
    backend.sign_in_as("admin", "Admin123").await;

    let response = backend
        .client
        .create_user(&new_user("soporte", "Soporte123"))
        .await
        .unwrap();
    assert_eq!(response.message.as_deref(), Some("Usuario creado exitosamente"));

    let users = backend.client.list_users().await.unwrap();
    let created = users.iter().find(|u| u.username == "soporte").unwrap();
    assert_eq!(created.role, Some(Role::Operator));
    assert!(created.active);
}

#[tokio::test]
async fn test_duplicate_user_shows_backend_message() {
    let backend = common::spawn_backend().await;
    backend.sign_in_as("admin", "Admin123").await;

    let err = backend
        .client
        .create_user(&new_user("analista", "Analista999"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Validation);
    assert_eq!(err.status, Some(409));
    assert_eq!(err.message, "Usuario o email ya existe");
}

#[tokio::test]
async fn test_weak_password_is_rejected_before_sending() {
    let backend = common::spawn_backend().await;
    backend.sign_in_as("admin", "Admin123").await;
    let before = backend.request_count(USERS_PATH).await;

    let err = backend
        .client
        .create_user(&new_user("debil", "debil"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert!(err.field_errors.contains_key("password"));
    assert_eq!(backend.request_count(USERS_PATH).await, before);
}

#[tokio::test]
async fn test_update_role_and_toggle_active() {
    let backend = common::spawn_backend().await;
    backend.sign_in_as("admin", "Admin123").await;

    backend
        .client
        .update_user(3, &UpdateUserRequest::role(Role::Analyst))
        .await
        .unwrap();
    backend
        .client
        .update_user(3, &UpdateUserRequest::active(false))
        .await
        .unwrap();

    let users = backend.client.list_users().await.unwrap();
    let updated = users.iter().find(|u| u.id == 3).unwrap();
    assert_eq!(updated.role, Some(Role::Analyst));
    assert!(!updated.active);
}

#[tokio::test]
async fn test_update_unknown_user_is_not_found() {
    let backend = common::spawn_backend().await;
    backend.sign_in_as("admin", "Admin123").await;

    let err = backend
        .client
        .update_user(999, &UpdateUserRequest::active(true))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Usuario no encontrado");
}
