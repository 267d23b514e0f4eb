//! User role value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Closed set of user roles.
///
/// Authorization decisions match on this enum rather than comparing
/// raw role strings, so an unknown role can never slip through as a
/// silent "not authorized but also not rejected" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Member,
    Staff,
    Admin,
}

impl Role {
    /// Returns the canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "MEMBER",
            Role::Staff => "STAFF",
            Role::Admin => "ADMIN",
        }
    }

    /// Whether this role may create and manage membership plans.
    pub fn can_manage_plans(&self) -> bool {
        matches!(self, Role::Staff | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MEMBER" => Ok(Role::Member),
            "STAFF" => Ok(Role::Staff),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", s),
            )),
        }
    }
}
