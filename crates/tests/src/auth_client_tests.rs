use client::DashboardApi;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, Role};

use crate::common;

fn credentials(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_me_without_session_is_none() {
    let backend = common::spawn_backend().await;

    let user = backend.client.current_user().await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_login_returns_user_and_keeps_session() {
    let backend = common::spawn_backend().await;

    let user = backend.sign_in_as("analista", "Analista123").await;
    assert_eq!(user.username, "analista");
    assert_eq!(user.role, Some(Role::Analyst));
    assert!(user.active);

    let me = backend.client.current_user().await.unwrap();
    assert_eq!(me.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_login_accepts_email() {
    let backend = common::spawn_backend().await;

    let user = backend
        .client
        .login(&credentials("operador@seira.test", "Operador123"))
        .await
        .unwrap();
    assert_eq!(user.role, Some(Role::Operator));
}

#[tokio::test]
async fn test_bad_credentials_are_a_validation_error() {
    let backend = common::spawn_backend().await;

    let err = backend
        .client
        .login(&credentials("admin", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Validation);
    assert_eq!(err.message, "Usuario o contraseña incorrectos");
    assert!(!err.is_session_expired());
}

#[tokio::test]
async fn test_deactivated_user_is_forbidden() {
    let backend = common::spawn_backend().await;
    backend.state.lock().await.accounts[2].activo = false;

    let err = backend
        .client
        .login(&credentials("operador", "Operador123"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Usuario desactivado. Contacta al administrador");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let backend = common::spawn_backend().await;
    backend.sign_in_as("admin", "Admin123").await;

    backend.client.logout().await.unwrap();

    assert!(backend.client.current_user().await.unwrap().is_none());
    assert_eq!(backend.request_count("/api/auth/logout").await, 1);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let api = client::ApiClient::new("http://127.0.0.1:1").unwrap();

    let err = api.current_user().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}

#[tokio::test]
async fn test_client_role_still_signs_in() {
    let backend = common::spawn_backend().await;

    let user = backend.sign_in_as("cliente", "Cliente123").await;
    assert_eq!(user.role, Some(Role::Client));
    let mut router = client::ViewRouter::new();
    router.set_landing("dashboard");
    assert_eq!(router.mount(Some(&user)), &client::View::AccessDenied);
}
