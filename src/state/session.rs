//! Session store: the single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! An `RwSignal<SessionState>` is provided once from the app root; route
//! guards, dashboards, and the auth screens all read it from context. The
//! persisted copy in localStorage is written only here (login, register,
//! logout), so reload restore and in-memory state cannot drift apart.
//!
//! The state machine is two-valued: `Anonymous` (no session) and
//! `Authenticated` (token plus profile, role included). Transient loading
//! flags live on the calling screens, not in the store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Profile, RegisterRequest, Role, Session};
use crate::util::storage;

/// localStorage key holding the serialized [`Session`].
pub const SESSION_STORAGE_KEY: &str = "cv360.session";

/// Minimum accepted password length for registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Client-side authentication state.
///
/// `None` is the anonymous state. A present session always carries both the
/// token and the profile; there is no partial form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// State wrapping an established session.
    #[must_use]
    pub fn authenticated(session: Session) -> Self {
        Self { session: Some(session) }
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.session.is_none()
    }

    /// Role of the signed-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.user.role)
    }

    #[must_use]
    pub fn user(&self) -> Option<&Profile> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Replace the current session after a successful login or registration.
    pub fn establish(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Drop the current session. Safe to call when already anonymous.
    pub fn clear(&mut self) {
        self.session = None;
    }

    /// React to a 401/403 from a resource endpoint according to `policy`.
    ///
    /// Returns `true` when the session was cleared, so the caller knows to
    /// also drop the persisted copy.
    pub fn apply_unauthorized(&mut self, policy: SessionPolicy) -> bool {
        if policy.logout_on_unauthorized && self.session.is_some() {
            self.clear();
            true
        } else {
            false
        }
    }
}

/// Policy knobs for session lifecycle edges the backend does not dictate.
///
/// The default keeps the session when a jobs/stats request comes back 401:
/// the list stays empty but the user is not logged out. Deployments that
/// prefer a forced logout flip `logout_on_unauthorized`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionPolicy {
    pub logout_on_unauthorized: bool,
}

/// Read the persisted session at process start, without contacting the
/// backend. A stale token is accepted here and only surfaces on the first
/// rejected request.
#[must_use]
pub fn restore_session() -> SessionState {
    SessionState { session: storage::load_json(SESSION_STORAGE_KEY) }
}

/// Write-through after login or registration.
pub fn persist_session(session: &Session) {
    storage::save_json(SESSION_STORAGE_KEY, session);
}

/// Drop the persisted session on logout.
pub fn forget_session() {
    storage::remove(SESSION_STORAGE_KEY);
}

/// Local registration failures, raised before any network request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Raw registration form state as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub full_name: String,
    pub phone: String,
    pub location: String,
}

impl RegistrationForm {
    /// Validate locally and produce the wire request.
    ///
    /// The confirmation field is checked here and never leaves the client.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] when the passwords differ or the password is
    /// shorter than [`MIN_PASSWORD_LEN`]; no request body is built in that
    /// case.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(RegisterRequest {
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            role: self.role,
            full_name: self.full_name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            location: self.location.trim().to_owned(),
        })
    }
}
