use super::*;
use crate::net::types::{Profile, Session};

fn signed_in(role: Role) -> SessionState {
    SessionState::authenticated(Session {
        token: "t1".to_owned(),
        user: Profile {
            id: 1,
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role,
            full_name: "Alice A".to_owned(),
            phone: None,
            location: None,
            is_verified: false,
            created_at: None,
        },
    })
}

// =============================================================================
// Anonymous sessions
// =============================================================================

#[test]
fn anonymous_is_always_sent_to_login() {
    let state = SessionState::default();
    for allowed in [
        &[Role::Worker][..],
        &[Role::Employer][..],
        &[Role::Admin][..],
        &[Role::Worker, Role::Employer, Role::Admin][..],
    ] {
        assert_eq!(can_enter(&state, allowed), GuardDecision::RedirectTo("/login"));
    }
}

// =============================================================================
// Role matches
// =============================================================================

#[test]
fn each_role_enters_its_own_dashboard() {
    assert_eq!(can_enter(&signed_in(Role::Worker), &[Role::Worker]), GuardDecision::Admit);
    assert_eq!(can_enter(&signed_in(Role::Employer), &[Role::Employer]), GuardDecision::Admit);
    assert_eq!(can_enter(&signed_in(Role::Admin), &[Role::Admin]), GuardDecision::Admit);
}

#[test]
fn any_listed_role_is_admitted() {
    let state = signed_in(Role::Employer);
    assert_eq!(can_enter(&state, &[Role::Worker, Role::Employer]), GuardDecision::Admit);
}

// =============================================================================
// Role mismatches redirect to the visitor's own landing route
// =============================================================================

#[test]
fn worker_visiting_employer_route_goes_to_worker_dashboard() {
    let state = signed_in(Role::Worker);
    assert_eq!(
        can_enter(&state, &[Role::Employer]),
        GuardDecision::RedirectTo("/worker-dashboard")
    );
}

#[test]
fn employer_visiting_admin_route_goes_to_employer_dashboard() {
    let state = signed_in(Role::Employer);
    assert_eq!(
        can_enter(&state, &[Role::Admin]),
        GuardDecision::RedirectTo("/employer-dashboard")
    );
}

#[test]
fn admin_visiting_worker_route_goes_to_admin_dashboard() {
    let state = signed_in(Role::Admin);
    assert_eq!(
        can_enter(&state, &[Role::Worker]),
        GuardDecision::RedirectTo("/admin-dashboard")
    );
}

#[test]
fn unknown_role_is_sent_home_not_to_a_restricted_route() {
    let state = signed_in(Role::Unknown);
    assert_eq!(can_enter(&state, &[Role::Worker]), GuardDecision::RedirectTo("/"));
}

#[test]
fn logout_is_honored_on_the_next_check() {
    let mut state = signed_in(Role::Worker);
    assert_eq!(can_enter(&state, &[Role::Worker]), GuardDecision::Admit);
    state.clear();
    assert_eq!(can_enter(&state, &[Role::Worker]), GuardDecision::RedirectTo("/login"));
}
