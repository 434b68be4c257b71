use super::*;

// =============================================================================
// Landing route table
// =============================================================================

#[test]
fn worker_lands_on_worker_dashboard() {
    assert_eq!(landing_route_for(Role::Worker), "/worker-dashboard");
}

#[test]
fn employer_lands_on_employer_dashboard() {
    assert_eq!(landing_route_for(Role::Employer), "/employer-dashboard");
}

#[test]
fn admin_lands_on_admin_dashboard() {
    assert_eq!(landing_route_for(Role::Admin), "/admin-dashboard");
}

#[test]
fn unknown_role_lands_on_home() {
    assert_eq!(landing_route_for(Role::Unknown), "/");
}
