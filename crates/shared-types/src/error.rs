use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Shown whenever the backend fails without a usable `{error}` body.
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error inesperado. Intenta de nuevo.";

/// Shown when a request is rejected because the session cookie is no longer valid.
pub const SESSION_EXPIRED_MESSAGE: &str = "Sesión expirada. Por favor, inicia sesión de nuevo.";

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Transport failure: DNS, refused connection, CORS, dropped body.
    Network,
    /// The response arrived but its JSON did not have the expected shape.
    Parse,
    /// 401 on an authenticated resource. Always escalates to a forced logout.
    SessionExpired,
    /// 4xx carrying a message meant for the user (bad form input, bad credentials).
    Validation,
    Forbidden,
    NotFound,
    /// 5xx from the backend.
    Server,
    /// A section id that is not in the registry was requested.
    UnknownSection,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Parse => write!(f, "Parse"),
            AppErrorKind::SessionExpired => write!(f, "SessionExpired"),
            AppErrorKind::Validation => write!(f, "Validation"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Server => write!(f, "Server"),
            AppErrorKind::UnknownSection => write!(f, "UnknownSection"),
        }
    }
}

/// Structured error used by the API client, the loaders and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status that produced the error, when there was one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Error body returned by every backend endpoint: `{"error": "..."}`.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Parse, message)
    }

    pub fn session_expired() -> Self {
        Self::new(AppErrorKind::SessionExpired, SESSION_EXPIRED_MESSAGE).with_status(401)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::Validation, message)
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Server, message)
    }

    pub fn unknown_section(id: &str) -> Self {
        Self::new(
            AppErrorKind::UnknownSection,
            format!("La sección '{id}' no existe o no tienes acceso a ella."),
        )
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_session_expired(&self) -> bool {
        self.kind == AppErrorKind::SessionExpired
    }

    /// Build an error from a non-2xx response.
    ///
    /// The message comes from the `{error}` body when present; otherwise the
    /// generic message is used. 401 always maps to `SessionExpired`.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::session_expired();
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        let kind = match status {
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            400..=499 => AppErrorKind::Validation,
            _ => AppErrorKind::Server,
        };

        Self::new(kind, message).with_status(status)
    }

    /// Reinterpret a session-expired error as a credentials failure.
    ///
    /// The login endpoint answers bad credentials with 401; there is no session
    /// to expire at that point, so the message from the body is what matters.
    pub fn into_credentials_error(self, body: &str) -> Self {
        if !self.is_session_expired() {
            return self;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| "Usuario o contraseña incorrectos".to_string());
        Self::validation(message, HashMap::new()).with_status(401)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Valor inválido para {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Revisa los campos del formulario", field_errors)
    }
}
