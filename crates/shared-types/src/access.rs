use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Named permission level a section requires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Dashboard,
    Analysis,
    Admin,
}

pub const ALL_CAPABILITIES: [Capability; 3] =
    [Capability::Dashboard, Capability::Analysis, Capability::Admin];

/// Whether `role` may view sections gated by `capability`.
///
/// A missing role has no capabilities.
pub fn has_capability(role: Option<Role>, capability: Capability) -> bool {
    let Some(role) = role else {
        return false;
    };
    match capability {
        Capability::Admin => matches!(role, Role::Admin),
        Capability::Analysis => matches!(role, Role::Admin | Role::Analyst),
        Capability::Dashboard => matches!(role, Role::Admin | Role::Analyst | Role::Operator),
    }
}
