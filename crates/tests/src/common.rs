use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use client::ApiClient;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

const SESSION_COOKIE: &str = "seira_session";

/// One account known to the mock backend.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub rol: String,
    pub activo: bool,
}

impl Account {
    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "username": self.username,
            "email": self.email,
            "rol": self.rol,
            "activo": self.activo,
            "nombre_completo": null,
        })
    }
}

/// Canned answer for a data endpoint.
#[derive(Debug, Clone)]
pub enum Canned {
    Json(Value),
    Status(u16, String),
}

/// Mutable state behind the mock backend. Tests reach in to seed or inspect it.
#[derive(Debug)]
pub struct MockState {
    pub accounts: Vec<Account>,
    pub session: Option<i64>,
    pub summary: Canned,
    pub recommendations: Canned,
    pub metrics: Canned,
    pub requests: Vec<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            accounts: vec![
                account(1, "admin", "Admin123", "admin"),
                account(2, "analista", "Analista123", "analista"),
                account(3, "operador", "Operador123", "operador"),
                account(4, "cliente", "Cliente123", "cliente"),
            ],
            session: None,
            summary: Canned::Json(json!({
                "total_tickets": 1500,
                "total_categorias": 12,
                "promedio_iar": 64.2,
                "ahorro_total_anual": 250000,
                "categorias_altamente_recomendadas": 4,
                "roi_promedio_porcentaje": 38.5
            })),
            // Row shapes follow the backend handlers: integer `prioridad` (1-10,
            // 0 when unset), extra ROI columns, and nullable counts.
            recommendations: Canned::Json(json!([
                {
                    "id": 1,
                    "categoria": "billing_support",
                    "iar_score": 92.0,
                    "nivel_recomendacion": "ALTAMENTE_RECOMENDADO",
                    "total_tickets": 500,
                    "roi_anual_estimado": 120000.0,
                    "roi_porcentaje": 45.0,
                    "meses_recuperacion": 2.5,
                    "costo_implementacion": 25000.0,
                    "recomendacion_texto": "Automatizar",
                    "razon_principal": "Alta frecuencia y baja complejidad",
                    "acciones_sugeridas": ["Implementar chatbot"],
                    "prioridad": 9
                },
                {
                    "id": 2,
                    "categoria": "legal_dispute",
                    "iar_score": 18.0,
                    "nivel_recomendacion": "NO_RECOMENDADO",
                    "total_tickets": null,
                    "roi_anual_estimado": 1500.0,
                    "roi_porcentaje": 3.0,
                    "meses_recuperacion": 0.0,
                    "costo_implementacion": 0.0,
                    "recomendacion_texto": "Mantener manual",
                    "razon_principal": "Alta complejidad",
                    "acciones_sugeridas": null,
                    "prioridad": 1
                }
            ])),
            metrics: Canned::Json(json!([
                {
                    "id": 1,
                    "categoria": "billing_support",
                    "total_tickets": 500,
                    "complejidad_promedio": 2.1,
                    "urgencia_critica": null,
                    "urgencia_alta": 90,
                    "urgencia_media": 200,
                    "urgencia_baja": 200,
                    "sentimiento_positivo": 100,
                    "sentimiento_neutral": null,
                    "sentimiento_negativo": 100,
                    "tasa_resolucion": 0
                }
            ])),
            requests: Vec::new(),
        }
    }
}

fn account(id: i64, username: &str, password: &str, rol: &str) -> Account {
    Account {
        id,
        username: username.to_string(),
        email: format!("{username}@seira.test"),
        password: password.to_string(),
        rol: rol.to_string(),
        activo: true,
    }
}

type Shared = Arc<Mutex<MockState>>;

/// A running mock backend and a client pointed at it.
pub struct TestBackend {
    pub base_url: String,
    pub state: Shared,
    pub client: ApiClient,
}

impl TestBackend {
    /// Sign in through the real client so the cookie jar holds a session.
    pub async fn sign_in_as(&self, username: &str, password: &str) -> shared_types::User {
        use client::DashboardApi;
        self.client
            .login(&shared_types::LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await
            .expect("login against mock backend failed")
    }

    pub async fn set_metrics(&self, canned: Canned) {
        self.state.lock().await.metrics = canned;
    }

    pub async fn set_recommendations(&self, canned: Canned) {
        self.state.lock().await.recommendations = canned;
    }

    pub async fn set_summary(&self, canned: Canned) {
        self.state.lock().await.summary = canned;
    }

    pub async fn request_count(&self, path: &str) -> usize {
        self.state
            .lock()
            .await
            .requests
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }
}

/// Spawn the mock backend on an ephemeral port.
pub async fn spawn_backend() -> TestBackend {
    let state: Shared = Arc::new(Mutex::new(MockState::default()));
    let app = mock_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend crashed");
    });

    let base_url = format!("http://{addr}");
    let client = ApiClient::new(&base_url).expect("Failed to build client");
    TestBackend {
        base_url,
        state,
        client,
    }
}

fn mock_router(state: Shared) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
        .route("/api/dashboard/resumen", get(summary))
        .route("/api/recomendaciones", get(recommendations))
        .route("/api/metricas", get(metrics))
        .route("/api/auth/admin/users", get(list_users).post(create_user))
        .route("/api/auth/admin/users/{id}", put(update_user))
        .with_state(state)
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "error": message }))).into_response()
}

fn session_from(headers: &HeaderMap) -> Option<i64> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.parse().ok()).flatten()
    })
}

/// The signed-in account, if the request carries a live session cookie.
fn current(state: &MockState, headers: &HeaderMap) -> Option<Account> {
    let id = session_from(headers)?;
    if state.session != Some(id) {
        return None;
    }
    state.accounts.iter().find(|a| a.id == id && a.activo).cloned()
}

fn canned(answer: &Canned) -> Response {
    match answer {
        Canned::Json(value) => Json(value.clone()).into_response(),
        Canned::Status(code, body) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, body.clone()).into_response()
        }
    }
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().await;
    state.requests.push("/api/auth/login".into());
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if username.is_empty() || password.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Usuario y contraseña son requeridos");
    }
    let Some(found) = state
        .accounts
        .iter()
        .find(|a| (a.username == username || a.email == username) && a.password == password)
        .cloned()
    else {
        return error(StatusCode::UNAUTHORIZED, "Usuario o contraseña incorrectos");
    };
    if !found.activo {
        return error(StatusCode::FORBIDDEN, "Usuario desactivado. Contacta al administrador");
    }
    state.session = Some(found.id);
    (
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}={}; Path=/; HttpOnly", found.id),
        )],
        Json(json!({ "success": true, "message": "Login exitoso", "user": found.to_json() })),
    )
        .into_response()
}

async fn logout(State(state): State<Shared>) -> Response {
    let mut state = state.lock().await;
    state.requests.push("/api/auth/logout".into());
    state.session = None;
    Json(json!({ "success": true, "message": "Logout exitoso" })).into_response()
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = state.lock().await;
    state.requests.push("/api/auth/me".into());
    match current(&state, &headers) {
        Some(account) => Json(json!({ "success": true, "user": account.to_json() })).into_response(),
        None => error(StatusCode::UNAUTHORIZED, "No autenticado"),
    }
}

async fn guarded(state: &Shared, headers: &HeaderMap, path: &str, pick: fn(&MockState) -> &Canned) -> Response {
    let mut state = state.lock().await;
    state.requests.push(path.to_string());
    if current(&state, headers).is_none() {
        return error(StatusCode::UNAUTHORIZED, "No autenticado");
    }
    canned(pick(&state))
}

async fn summary(State(state): State<Shared>, headers: HeaderMap) -> Response {
    guarded(&state, &headers, "/api/dashboard/resumen", |s| &s.summary).await
}

async fn recommendations(State(state): State<Shared>, headers: HeaderMap) -> Response {
    guarded(&state, &headers, "/api/recomendaciones", |s| &s.recommendations).await
}

async fn metrics(State(state): State<Shared>, headers: HeaderMap) -> Response {
    guarded(&state, &headers, "/api/metricas", |s| &s.metrics).await
}

/// Admin gate: 401 without a session, 403 for any other role.
fn require_admin(state: &MockState, headers: &HeaderMap) -> Result<Account, Response> {
    match current(state, headers) {
        None => Err(error(StatusCode::UNAUTHORIZED, "No autenticado")),
        Some(a) if a.rol != "admin" => Err(error(StatusCode::FORBIDDEN, "Acceso denegado")),
        Some(a) => Ok(a),
    }
}

async fn list_users(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = state.lock().await;
    state.requests.push("/api/auth/admin/users".into());
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }
    let users: Vec<Value> = state.accounts.iter().map(Account::to_json).collect();
    Json(json!({ "success": true, "users": users })).into_response()
}

async fn create_user(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().await;
    state.requests.push("/api/auth/admin/users".into());
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }
    let username = body["username"].as_str().unwrap_or_default().to_string();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();
    let rol = body["rol"].as_str().unwrap_or("operador").to_string();
    if state
        .accounts
        .iter()
        .any(|a| a.username == username || a.email == email)
    {
        return error(StatusCode::CONFLICT, "Usuario o email ya existe");
    }
    if !shared_types::password_is_strong(&password) || password.len() < 8 {
        return error(StatusCode::BAD_REQUEST, "La contraseña no cumple los requisitos");
    }
    let id = state.accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
    state.accounts.push(Account {
        id,
        username,
        email,
        password,
        rol,
        activo: true,
    });
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Usuario creado exitosamente" })),
    )
        .into_response()
}

async fn update_user(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().await;
    state.requests.push(format!("/api/auth/admin/users/{id}"));
    if let Err(resp) = require_admin(&state, &headers) {
        return resp;
    }
    let Some(account) = state.accounts.iter_mut().find(|a| a.id == id) else {
        return error(StatusCode::NOT_FOUND, "Usuario no encontrado");
    };
    if let Some(rol) = body["rol"].as_str() {
        account.rol = rol.to_string();
    }
    if let Some(activo) = body["activo"].as_bool() {
        account.activo = activo;
    }
    Json(json!({ "success": true, "message": "Usuario actualizado" })).into_response()
}
