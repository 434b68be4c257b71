use super::*;
use crate::net::types::{Profile, Role, Session};

fn session() -> SessionState {
    SessionState::authenticated(Session {
        token: "tok-123".to_owned(),
        user: Profile {
            id: 1,
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role: Role::Worker,
            full_name: "Alice A".to_owned(),
            phone: None,
            location: None,
            is_verified: false,
            created_at: None,
        },
    })
}

// =============================================================================
// Endpoint construction
// =============================================================================

#[test]
fn endpoint_joins_default_base_and_path() {
    let client = ApiClient::new();
    assert_eq!(client.endpoint("/auth/login"), "/api/auth/login");
    assert_eq!(client.endpoint("/admin/stats"), "/api/admin/stats");
}

#[test]
fn custom_base_url_trailing_slash_is_normalized() {
    let client = ApiClient::with_base_url("http://localhost:5000/api/");
    assert_eq!(client.endpoint("/jobs"), "http://localhost:5000/api/jobs");
}

// =============================================================================
// Bearer token plumbing
// =============================================================================

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok-123"), "Bearer tok-123");
}

#[test]
fn for_session_carries_the_session_token() {
    let client = ApiClient::for_session(&session());
    assert_eq!(client, ApiClient::new().bearer("tok-123"));
}

#[test]
fn for_session_of_anonymous_state_has_no_token() {
    let client = ApiClient::for_session(&SessionState::default());
    assert_eq!(client, ApiClient::new());
}
