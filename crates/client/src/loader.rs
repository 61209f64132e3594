use shared_types::{AppError, DashboardSummary, MetricRecord, RecommendationRecord, User};

use crate::api::DashboardApi;
use crate::session::{Session, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Error,
}

/// Ambient state of one section's data.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub status: LoadStatus,
    pub data: T,
    pub error_message: Option<String>,
}

impl<T: Default> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::Loading,
            data: T::default(),
            error_message: None,
        }
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}

/// Data one section needs, and how to fetch it.
#[allow(async_fn_in_trait)]
pub trait SectionData: Default + Sized {
    async fn fetch<A: DashboardApi>(api: &A) -> Result<Self, AppError>;

    /// Called on a non-401 failure. Default keeps the stale data.
    fn on_error(&mut self) {}
}

/// Dashboard overview: KPIs plus the recommendation list for the charts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardData {
    pub summary: Option<DashboardSummary>,
    pub recommendations: Vec<RecommendationRecord>,
}

/// Pick the error to report from two concurrent requests. A 401 outranks
/// anything else.
fn first_failure<A, B>(a: &Result<A, AppError>, b: &Result<B, AppError>) -> Option<AppError> {
    let errors = [a.as_ref().err(), b.as_ref().err()];
    errors
        .iter()
        .flatten()
        .find(|e| e.is_session_expired())
        .or_else(|| errors.iter().flatten().next())
        .map(|e| (*e).clone())
}

impl SectionData for DashboardData {
    async fn fetch<A: DashboardApi>(api: &A) -> Result<Self, AppError> {
        let (summary, recommendations) =
            futures::join!(api.dashboard_summary(), api.recommendations());
        if let Some(err) = first_failure(&summary, &recommendations) {
            return Err(err);
        }
        Ok(Self {
            summary: summary.ok(),
            recommendations: recommendations.unwrap_or_default(),
        })
    }

    fn on_error(&mut self) {
        self.recommendations.clear();
    }
}

impl SectionData for Vec<RecommendationRecord> {
    async fn fetch<A: DashboardApi>(api: &A) -> Result<Self, AppError> {
        api.recommendations().await
    }
}

impl SectionData for Vec<MetricRecord> {
    async fn fetch<A: DashboardApi>(api: &A) -> Result<Self, AppError> {
        api.metrics().await
    }
}

impl SectionData for Vec<User> {
    async fn fetch<A: DashboardApi>(api: &A) -> Result<Self, AppError> {
        api.list_users().await
    }
}

/// Load a section's data into `state`.
///
/// A 401 expires the session and leaves the state in error; it never becomes
/// ready. Concurrent loads are not cancelled: whichever resolves last wins.
pub async fn load<A, D, S, L>(api: &A, session: &S, state: &L) -> LoadStatus
where
    A: DashboardApi,
    D: SectionData,
    S: Store<Session>,
    L: Store<LoadState<D>>,
{
    state.update(|s| {
        s.status = LoadStatus::Loading;
        s.error_message = None;
    });

    match D::fetch(api).await {
        Ok(data) => {
            state.update(|s| {
                s.data = data;
                s.status = LoadStatus::Ready;
            });
            LoadStatus::Ready
        }
        Err(err) if err.is_session_expired() => {
            state.update(|s| {
                s.status = LoadStatus::Error;
                s.error_message = Some(err.message.clone());
            });
            session.update(|s| s.expire());
            LoadStatus::Error
        }
        Err(err) => {
            tracing::warn!(error = %err, "section load failed");
            state.update(|s| {
                s.status = LoadStatus::Error;
                s.error_message = Some(err.message.clone());
                s.data.on_error();
            });
            LoadStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{
        AppErrorKind, CreateUserRequest, LoginRequest, MessageResponse, Role, UpdateUserRequest,
    };
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tokio::sync::oneshot;

    type Reply<T> = oneshot::Receiver<Result<T, AppError>>;

    /// Fake backend whose answers are queued per endpoint and released by the test.
    #[derive(Default)]
    struct FakeApi {
        summary: RefCell<VecDeque<Reply<DashboardSummary>>>,
        recommendations: RefCell<VecDeque<Reply<Vec<RecommendationRecord>>>>,
        metrics: RefCell<VecDeque<Reply<Vec<MetricRecord>>>>,
        users: RefCell<VecDeque<Reply<Vec<User>>>>,
    }

    fn queue<T>(slot: &RefCell<VecDeque<Reply<T>>>) -> oneshot::Sender<Result<T, AppError>> {
        let (tx, rx) = oneshot::channel();
        slot.borrow_mut().push_back(rx);
        tx
    }

    async fn next<T>(slot: &RefCell<VecDeque<Reply<T>>>) -> Result<T, AppError> {
        let rx = slot.borrow_mut().pop_front();
        match rx {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(AppError::network("dropped"))),
            None => Err(AppError::network("no reply queued")),
        }
    }

    impl DashboardApi for FakeApi {
        async fn current_user(&self) -> Result<Option<User>, AppError> {
            Ok(None)
        }
        async fn login(&self, _: &LoginRequest) -> Result<User, AppError> {
            Err(AppError::network("unused"))
        }
        async fn logout(&self) -> Result<(), AppError> {
            Ok(())
        }
        async fn dashboard_summary(&self) -> Result<DashboardSummary, AppError> {
            next(&self.summary).await
        }
        async fn recommendations(&self) -> Result<Vec<RecommendationRecord>, AppError> {
            next(&self.recommendations).await
        }
        async fn metrics(&self) -> Result<Vec<MetricRecord>, AppError> {
            next(&self.metrics).await
        }
        async fn list_users(&self) -> Result<Vec<User>, AppError> {
            next(&self.users).await
        }
        async fn create_user(&self, _: &CreateUserRequest) -> Result<MessageResponse, AppError> {
            Err(AppError::network("unused"))
        }
        async fn update_user(&self, _: i64, _: &UpdateUserRequest) -> Result<MessageResponse, AppError> {
            Err(AppError::network("unused"))
        }
    }

    fn signed_in() -> Rc<RefCell<Session>> {
        let mut session = Session::new();
        session.sign_in(User {
            id: 1,
            username: "ana".into(),
            email: "ana@nexo.gg".into(),
            role: Some(Role::Admin),
            active: true,
            display_name: String::new(),
        });
        Rc::new(RefCell::new(session))
    }

    fn metric(category: &str) -> MetricRecord {
        MetricRecord {
            category: category.into(),
            ..Default::default()
        }
    }

    fn recommendation(category: &str) -> RecommendationRecord {
        RecommendationRecord {
            category: category.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn success_replaces_data() {
        let api = FakeApi::default();
        let session = signed_in();
        let state = Rc::new(RefCell::new(LoadState::<Vec<MetricRecord>>::default()));
        queue(&api.metrics).send(Ok(vec![metric("envios")])).unwrap();

        let status = load(&api, &session, &state).await;

        assert_eq!(status, LoadStatus::Ready);
        let state = state.borrow();
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.data, vec![metric("envios")]);
        assert_eq!(state.error_message, None);
    }

    #[tokio::test]
    async fn unauthorized_expires_session() {
        let api = FakeApi::default();
        let session = signed_in();
        let state = Rc::new(RefCell::new(LoadState::<Vec<RecommendationRecord>>::default()));
        queue(&api.recommendations).send(Err(AppError::session_expired())).unwrap();

        let status = load(&api, &session, &state).await;

        assert_eq!(status, LoadStatus::Error);
        assert_eq!(state.borrow().status, LoadStatus::Error);
        assert!(!session.borrow().is_authenticated());
        assert!(session.borrow().notice().is_some());
    }

    #[tokio::test]
    async fn server_error_keeps_stale_data() {
        let api = FakeApi::default();
        let session = signed_in();
        let state = Rc::new(RefCell::new(LoadState {
            status: LoadStatus::Ready,
            data: vec![metric("previa")],
            error_message: None,
        }));
        queue(&api.metrics)
            .send(Err(AppError::from_response(500, r#"{"error":"Error al obtener métricas"}"#)))
            .unwrap();

        load(&api, &session, &state).await;

        let state = state.borrow();
        assert_eq!(state.status, LoadStatus::Error);
        assert_eq!(state.error_message.as_deref(), Some("Error al obtener métricas"));
        assert_eq!(state.data, vec![metric("previa")]);
        assert!(session.borrow().is_authenticated());
    }

    #[tokio::test]
    async fn dashboard_error_clears_recommendations() {
        let api = FakeApi::default();
        let session = signed_in();
        let state = Rc::new(RefCell::new(LoadState {
            status: LoadStatus::Ready,
            data: DashboardData {
                summary: Some(DashboardSummary::default()),
                recommendations: vec![recommendation("previa")],
            },
            error_message: None,
        }));
        queue(&api.summary).send(Ok(DashboardSummary::default())).unwrap();
        queue(&api.recommendations)
            .send(Err(AppError::network("connection refused")))
            .unwrap();

        load(&api, &session, &state).await;

        let state = state.borrow();
        assert_eq!(state.status, LoadStatus::Error);
        assert!(state.data.recommendations.is_empty());
        assert!(state.data.summary.is_some());
    }

    #[tokio::test]
    async fn dashboard_prefers_unauthorized_over_other_failures() {
        let api = FakeApi::default();
        let session = signed_in();
        let state = Rc::new(RefCell::new(LoadState::<DashboardData>::default()));
        queue(&api.summary).send(Err(AppError::server("boom"))).unwrap();
        queue(&api.recommendations).send(Err(AppError::session_expired())).unwrap();

        load(&api, &session, &state).await;

        assert!(!session.borrow().is_authenticated());
        assert_ne!(state.borrow().status, LoadStatus::Ready);
    }

    #[tokio::test]
    async fn dashboard_success_fills_both_parts() {
        let api = FakeApi::default();
        let session = signed_in();
        let state = Rc::new(RefCell::new(LoadState::<DashboardData>::default()));
        let summary = DashboardSummary {
            total_tickets: 1500,
            ..Default::default()
        };
        queue(&api.summary).send(Ok(summary.clone())).unwrap();
        queue(&api.recommendations).send(Ok(vec![recommendation("a")])).unwrap();

        load(&api, &session, &state).await;

        let state = state.borrow();
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.data.summary, Some(summary));
        assert_eq!(state.data.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn last_resolved_wins() {
        let api = FakeApi::default();
        let session = signed_in();
        let state = Rc::new(RefCell::new(LoadState::<Vec<MetricRecord>>::default()));
        let first = queue(&api.metrics);
        let second = queue(&api.metrics);

        let first_load = load(&api, &session, &state);
        let second_load = load(&api, &session, &state);
        let release = async {
            tokio::task::yield_now().await;
            second.send(Ok(vec![metric("A")])).unwrap();
            tokio::task::yield_now().await;
            first.send(Ok(vec![metric("B")])).unwrap();
        };
        futures::join!(first_load, second_load, release);

        assert_eq!(state.borrow().data, vec![metric("B")]);
        assert_eq!(state.borrow().status, LoadStatus::Ready);
    }

    #[tokio::test]
    async fn parse_failure_is_an_error_state() {
        let api = FakeApi::default();
        let session = signed_in();
        let state = Rc::new(RefCell::new(LoadState::<Vec<User>>::default()));
        queue(&api.users).send(Err(AppError::parse("bad element"))).unwrap();

        load(&api, &session, &state).await;

        let state = state.borrow();
        assert_eq!(state.status, LoadStatus::Error);
        assert_eq!(state.error_message.as_deref(), Some("bad element"));
        assert!(session.borrow().is_authenticated());
    }

    #[test]
    fn first_failure_ranks_unauthorized() {
        let a: Result<(), AppError> = Err(AppError::network("x"));
        let b: Result<(), AppError> = Err(AppError::session_expired());
        assert_eq!(first_failure(&a, &b).map(|e| e.kind), Some(AppErrorKind::SessionExpired));
        let ok: Result<(), AppError> = Ok(());
        assert_eq!(first_failure(&a, &ok).map(|e| e.kind), Some(AppErrorKind::Network));
        assert!(first_failure(&ok, &ok).is_none());
    }
}
