use reqwest::Method;
use shared_types::{
    AppError, CreateUserRequest, DashboardSummary, LoginRequest, MessageResponse, MetricRecord,
    RecommendationRecord, UpdateUserRequest, User, UserEnvelope, UsersEnvelope,
};
use validator::Validate;

use crate::http::ApiClient;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const ME_PATH: &str = "/api/auth/me";
pub const SUMMARY_PATH: &str = "/api/dashboard/resumen";
pub const RECOMMENDATIONS_PATH: &str = "/api/recomendaciones";
pub const METRICS_PATH: &str = "/api/metricas";
pub const ADMIN_USERS_PATH: &str = "/api/auth/admin/users";

// ── Trait ────────────────────────────────────────────────────────────

/// Every backend call the dashboard makes.
///
/// Loaders and pages are generic over this so they can run against a fake in
/// tests. Futures are not `Send`: the UI runs on a single thread.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    /// Who is signed in. A 401 means nobody and resolves to `Ok(None)`.
    async fn current_user(&self) -> Result<Option<User>, AppError>;

    /// Bad credentials come back as a validation error, never as session expiry.
    async fn login(&self, request: &LoginRequest) -> Result<User, AppError>;

    async fn logout(&self) -> Result<(), AppError>;

    async fn dashboard_summary(&self) -> Result<DashboardSummary, AppError>;

    async fn recommendations(&self) -> Result<Vec<RecommendationRecord>, AppError>;

    async fn metrics(&self) -> Result<Vec<MetricRecord>, AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Validates the request locally before anything is sent.
    async fn create_user(&self, request: &CreateUserRequest) -> Result<MessageResponse, AppError>;

    async fn update_user(
        &self,
        id: i64,
        request: &UpdateUserRequest,
    ) -> Result<MessageResponse, AppError>;
}

// ── HTTP implementation ─────────────────────────────────────────────

impl DashboardApi for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn current_user(&self) -> Result<Option<User>, AppError> {
        match self.get_json::<UserEnvelope>(ME_PATH).await {
            Ok(envelope) => Ok(envelope.user),
            Err(e) if e.is_session_expired() => Ok(None),
            Err(e) => Err(e),
        }
    }

    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    async fn login(&self, request: &LoginRequest) -> Result<User, AppError> {
        let (status, body) = self
            .execute(self.request(Method::POST, LOGIN_PATH).json(request))
            .await?;
        let body = ApiClient::check(status, body.clone())
            .map_err(|e| e.into_credentials_error(&body))?;
        let envelope: UserEnvelope = ApiClient::decode(&body)?;
        let user = envelope
            .user
            .ok_or_else(|| AppError::parse("La respuesta de inicio de sesión no incluye usuario"))?;
        tracing::info!(user_id = user.id, "signed in");
        Ok(user)
    }

    #[tracing::instrument(skip(self))]
    async fn logout(&self) -> Result<(), AppError> {
        let (status, body) = self.execute(self.request(Method::POST, LOGOUT_PATH)).await?;
        ApiClient::check(status, body)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn dashboard_summary(&self) -> Result<DashboardSummary, AppError> {
        self.get_json(SUMMARY_PATH).await
    }

    #[tracing::instrument(skip(self))]
    async fn recommendations(&self) -> Result<Vec<RecommendationRecord>, AppError> {
        self.get_list(RECOMMENDATIONS_PATH).await
    }

    #[tracing::instrument(skip(self))]
    async fn metrics(&self) -> Result<Vec<MetricRecord>, AppError> {
        self.get_list(METRICS_PATH).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let value: serde_json::Value = self.get_json(ADMIN_USERS_PATH).await?;
        let users = serde_json::from_value::<UsersEnvelope>(value)
            .map(|envelope| envelope.users)
            .unwrap_or(serde_json::Value::Null);
        shared_types::coerce_list(users)
            .map_err(|e| AppError::parse(format!("Elemento inválido en la lista: {e}")))
    }

    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    async fn create_user(&self, request: &CreateUserRequest) -> Result<MessageResponse, AppError> {
        request.validate()?;
        self.post_json(ADMIN_USERS_PATH, request).await
    }

    #[tracing::instrument(skip(self))]
    async fn update_user(
        &self,
        id: i64,
        request: &UpdateUserRequest,
    ) -> Result<MessageResponse, AppError> {
        self.put_json(&format!("{ADMIN_USERS_PATH}/{id}"), request).await
    }
}
