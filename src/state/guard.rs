//! Route guard: decides whether a session may enter a role-gated route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated on every navigation to a protected route (and re-evaluated on
//! every session change) by [`crate::components::guard::RequireRole`]; the
//! decision is never cached, so a local logout takes effect immediately.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::landing::landing_route_for;
use crate::state::session::SessionState;

/// Route of the sign-in screen, the target for anonymous visitors.
pub const LOGIN_ROUTE: &str = "/login";

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested screen unchanged.
    Admit,
    /// Navigate to this route instead.
    RedirectTo(&'static str),
}

/// Check `state` against a route's allow-list.
///
/// Anonymous sessions go to the login screen. A signed-in user whose role is
/// not allowed is sent to their own landing route, never to another role's
/// restricted screen.
#[must_use]
pub fn can_enter(state: &SessionState, allowed: &[Role]) -> GuardDecision {
    let Some(role) = state.role() else {
        return GuardDecision::RedirectTo(LOGIN_ROUTE);
    };
    if allowed.contains(&role) {
        GuardDecision::Admit
    } else {
        GuardDecision::RedirectTo(landing_route_for(role))
    }
}
