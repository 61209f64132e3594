use client::{load, DashboardData, LoadState, LoadStatus, Session, ViewRouter, View};
use pretty_assertions::assert_eq;
use shared_types::{
    top_by_iar, AppErrorKind, LevelFilter, MetricRecord, Priority, RecommendationFilter,
    RecommendationRecord, GENERIC_ERROR_MESSAGE, SESSION_EXPIRED_MESSAGE,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

use crate::common::{self, Canned};

fn session_for(user: shared_types::User) -> Rc<RefCell<Session>> {
    let mut session = Session::new();
    session.resolve(Some(user));
    Rc::new(RefCell::new(session))
}

#[tokio::test]
async fn test_dashboard_loads_summary_and_recommendations() {
    let backend = common::spawn_backend().await;
    let user = backend.sign_in_as("operador", "Operador123").await;
    let session = session_for(user);
    let state = Rc::new(RefCell::new(LoadState::<DashboardData>::default()));

    let status = load(&backend.client, &session, &state).await;

    assert_eq!(status, LoadStatus::Ready);
    let state = state.borrow();
    let summary = state.data.summary.clone().unwrap();
    assert_eq!(summary.total_tickets, 1500);
    assert_eq!(summary.highly_recommended_categories, 4);
    assert_eq!(state.data.recommendations.len(), 2);
    assert!(state.data.recommendations[1].suggested_actions.is_empty());
}

#[tokio::test]
async fn test_dashboard_decodes_integer_priorities() {
    let backend = common::spawn_backend().await;
    let user = backend.sign_in_as("admin", "Admin123").await;
    let session = session_for(user);
    let state = Rc::new(RefCell::new(LoadState::<DashboardData>::default()));

    assert_eq!(load(&backend.client, &session, &state).await, LoadStatus::Ready);

    let state = state.borrow();
    assert_eq!(state.data.recommendations[0].priority, Some(Priority::High));
    assert_eq!(state.data.recommendations[1].priority, Some(Priority::Low));
}

#[tokio::test]
async fn test_reports_load_rows_with_null_counts() {
    let backend = common::spawn_backend().await;
    let user = backend.sign_in_as("analista", "Analista123").await;
    let session = session_for(user);
    let state = Rc::new(RefCell::new(LoadState::<Vec<RecommendationRecord>>::default()));

    let status = load(&backend.client, &session, &state).await;

    assert_eq!(status, LoadStatus::Ready);
    let state = state.borrow();
    assert_eq!(state.data.len(), 2);
    assert_eq!(state.data[0].total_tickets, 500);
    assert_eq!(state.data[1].total_tickets, 0);
    assert_eq!(state.data[1].category, "legal_dispute");
}

#[tokio::test]
async fn test_metrics_load_with_null_counts() {
    let backend = common::spawn_backend().await;
    let user = backend.sign_in_as("analista", "Analista123").await;
    let session = session_for(user);
    let state = Rc::new(RefCell::new(LoadState::<Vec<MetricRecord>>::default()));

    assert_eq!(load(&backend.client, &session, &state).await, LoadStatus::Ready);

    let state = state.borrow();
    assert_eq!(state.data[0].urgency_critical, 0);
    assert_eq!(state.data[0].urgency_total(), 490);
    assert_eq!(state.data[0].sentiment_total(), 200);
    assert!(!state.data[0].is_anomaly);
}

#[tokio::test]
async fn test_expired_session_forces_logout() {
    let backend = common::spawn_backend().await;
    let user = backend.sign_in_as("analista", "Analista123").await;
    let session = session_for(user);
    let mut router = ViewRouter::new();
    router.mount(session.borrow().user());
    router.set_active_section(session.borrow().user().and_then(|u| u.role), "reports");

    // Server-side session dropped (e.g. expired cookie).
    backend.state.lock().await.session = None;

    let state = Rc::new(RefCell::new(LoadState::<Vec<RecommendationRecord>>::default()));
    let status = load(&backend.client, &session, &state).await;

    assert_eq!(status, LoadStatus::Error);
    assert_eq!(state.borrow().error_message.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    assert!(!session.borrow().is_authenticated());
    router.sync_session(&session.borrow());
    assert_eq!(router.view(), &View::SignedOut);
}

#[tokio::test]
async fn test_null_and_empty_object_lists_are_empty() {
    let backend = common::spawn_backend().await;
    let user = backend.sign_in_as("admin", "Admin123").await;
    let session = session_for(user);

    backend.set_metrics(Canned::Json(json!(null))).await;
    let metrics = Rc::new(RefCell::new(LoadState::<Vec<MetricRecord>>::default()));
    assert_eq!(load(&backend.client, &session, &metrics).await, LoadStatus::Ready);
    assert!(metrics.borrow().data.is_empty());

    backend.set_recommendations(Canned::Json(json!({}))).await;
    let recs = Rc::new(RefCell::new(LoadState::<Vec<RecommendationRecord>>::default()));
    assert_eq!(load(&backend.client, &session, &recs).await, LoadStatus::Ready);
    assert!(recs.borrow().data.is_empty());
}

#[tokio::test]
async fn test_server_error_keeps_previous_metrics() {
    let backend = common::spawn_backend().await;
    let user = backend.sign_in_as("admin", "Admin123").await;
    let session = session_for(user);
    let state = Rc::new(RefCell::new(LoadState::<Vec<MetricRecord>>::default()));
    load(&backend.client, &session, &state).await;
    assert_eq!(state.borrow().data.len(), 1);

    backend
        .set_metrics(Canned::Status(
            500,
            r#"{"success":false,"error":"Error al obtener métricas"}"#.into(),
        ))
        .await;
    let status = load(&backend.client, &session, &state).await;

    assert_eq!(status, LoadStatus::Error);
    let state = state.borrow();
    assert_eq!(state.error_message.as_deref(), Some("Error al obtener métricas"));
    assert_eq!(state.data.len(), 1);
    assert!(session.borrow().is_authenticated());
}

#[tokio::test]
async fn test_unparseable_error_body_uses_generic_message() {
    let backend = common::spawn_backend().await;
    let user = backend.sign_in_as("admin", "Admin123").await;
    let session = session_for(user);
    backend
        .set_summary(Canned::Status(502, "<html>Bad Gateway</html>".into()))
        .await;
    let state = Rc::new(RefCell::new(LoadState::<DashboardData>::default()));

    load(&backend.client, &session, &state).await;

    let state = state.borrow();
    assert_eq!(state.status, LoadStatus::Error);
    assert_eq!(state.error_message.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    assert!(state.data.recommendations.is_empty());
}

#[tokio::test]
async fn test_malformed_element_is_a_parse_error() {
    let backend = common::spawn_backend().await;
    backend.sign_in_as("admin", "Admin123").await;
    backend
        .set_metrics(Canned::Json(json!([{ "categoria": 42 }])))
        .await;

    use client::DashboardApi;
    let err = backend.client.metrics().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Parse);
}

#[tokio::test]
async fn test_billing_support_survives_default_filter() {
    let backend = common::spawn_backend().await;
    let user = backend.sign_in_as("analista", "Analista123").await;
    let session = session_for(user);
    let state = Rc::new(RefCell::new(LoadState::<Vec<RecommendationRecord>>::default()));

    load(&backend.client, &session, &state).await;

    let filtered = RecommendationFilter::new(50, LevelFilter::All).apply(&state.borrow().data);
    assert_eq!(filtered.len(), 1);
    assert_eq!(top_by_iar(&filtered)[0].label, "billing support");
}
