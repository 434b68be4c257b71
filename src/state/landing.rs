//! Role router: the post-auth landing decision table.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use crate::net::types::Role;

/// Default screen for a role, used after login/registration and by the
/// route guard when redirecting a user away from someone else's dashboard.
#[must_use]
pub fn landing_route_for(role: Role) -> &'static str {
    match role {
        Role::Worker => "/worker-dashboard",
        Role::Employer => "/employer-dashboard",
        Role::Admin => "/admin-dashboard",
        Role::Unknown => "/",
    }
}
