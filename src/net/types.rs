//! Wire DTOs for the CV360 backend API.
//!
//! DESIGN
//! ======
//! Every response shape the client consumes has an explicit serde schema
//! here, so malformed payloads surface as typed decode errors instead of
//! missing-field panics deeper in the UI. Deserialization is lenient about
//! fields the backend sometimes omits or returns as SQL nulls/integers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role, carried on every profile and used for route decisions.
///
/// Unknown strings map to [`Role::Unknown`] rather than failing the whole
/// payload; the role router sends unknown roles to the home route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Worker,
    Employer,
    Admin,
    Unknown,
}

impl Role {
    /// Wire value (`"worker"`, `"employer"`, `"admin"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Employer => "employer",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    /// Human-facing label for headers and tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Worker => "Worker",
            Role::Employer => "Employer",
            Role::Admin => "HR Admin",
            Role::Unknown => "Unknown",
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "worker" => Role::Worker,
            "employer" => Role::Employer,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// An account profile as returned by the auth and admin endpoints.
///
/// The login and register responses return a trimmed profile; the missing
/// fields default rather than failing the decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Backend row identifier.
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default, deserialize_with = "text_or_null")]
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "flag_or_null")]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An established session: token plus the profile it authenticates.
///
/// Both fields are required by the schema, so a response carrying a token
/// without a user (or vice versa) is rejected as malformed and no partial
/// session can ever be stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Profile,
}

/// A job posting as returned by `GET /api/jobs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub description: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub location: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub salary_range: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub job_type: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub requirements: String,
    #[serde(default, deserialize_with = "flag_or_null")]
    pub is_international: bool,
    #[serde(default, deserialize_with = "flag_or_null")]
    pub is_approved: bool,
    #[serde(default, deserialize_with = "text_or_null")]
    pub employer_name: String,
    #[serde(default, deserialize_with = "text_or_null")]
    pub created_at: String,
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Body for `POST /api/jobs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary_range: String,
    pub job_type: String,
    pub requirements: String,
    pub is_international: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// Body for `POST /api/auth/register`.
///
/// Built by [`crate::state::session::RegistrationForm::validate`], which
/// strips the confirmation field before this struct ever exists.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub full_name: String,
    pub phone: String,
    pub location: String,
}

/// Platform-wide counters from `GET /api/admin/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(default)]
    pub total_workers: u32,
    #[serde(default)]
    pub total_employers: u32,
    #[serde(default)]
    pub total_jobs: u32,
    #[serde(default)]
    pub total_applications: u32,
    #[serde(default)]
    pub pending_jobs: u32,
}

/// Generic `{message}` envelope the backend uses for acks and errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Accept a string or an explicit SQL null, defaulting null to `""`.
fn text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a boolean, a SQLite-style 0/1 integer, or null.
fn flag_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
        serde_json::Value::Null => Ok(false),
        other => Err(D::Error::custom(format!("expected boolean flag, got {other}"))),
    }
}
