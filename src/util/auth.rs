//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboards should apply identical 401 handling; this funnels every
//! rejected resource request through the session policy.

use leptos::prelude::*;

use crate::state::session::{SessionPolicy, SessionState, forget_session};

/// Apply the unauthorized policy to the shared session signal.
///
/// With the default policy this is a no-op; with `logout_on_unauthorized`
/// the in-memory and persisted session are both dropped, which immediately
/// re-triggers the route guard on the current screen. Uses a non-panicking
/// update because the owner may already have unmounted by the time a late
/// response lands.
pub fn handle_unauthorized(session: RwSignal<SessionState>, policy: SessionPolicy) {
    let cleared = session.try_update(|s| s.apply_unauthorized(policy)).unwrap_or(false);
    if cleared {
        forget_session();
    }
}
