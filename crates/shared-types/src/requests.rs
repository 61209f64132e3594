use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

use crate::models::{Role, User};

/// Credentials posted to `/api/auth/login`. `username` also accepts an email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request DTO for creating a dashboard user (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateUserRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "El usuario debe tener al menos 3 caracteres"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Ingresa un email válido"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(
            length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"),
            custom(function = "validate_password_strength")
        )
    )]
    pub password: String,
    #[serde(rename = "rol")]
    pub role: Role,
}

/// Same rule the backend enforces: one uppercase, one lowercase, one digit.
#[cfg(feature = "validation")]
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password_is_strong(password) {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_strength");
        err.message = Some("La contraseña debe incluir mayúscula, minúscula y número".into());
        Err(err)
    }
}

pub fn password_is_strong(password: &str) -> bool {
    password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Partial update for `PUT /api/auth/admin/users/:id`. Absent fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateUserRequest {
    #[serde(rename = "rol", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UpdateUserRequest {
    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            active: None,
        }
    }

    pub fn active(active: bool) -> Self {
        Self {
            role: None,
            active: Some(active),
        }
    }
}

/// `{ "user": ... }` envelope used by login and `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    #[serde(default)]
    pub user: Option<User>,
}

/// `{ "users": [...] }` envelope used by the admin user list.
///
/// Kept as a raw value so a non-array payload can be coerced to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersEnvelope {
    #[serde(default)]
    pub users: serde_json::Value,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
