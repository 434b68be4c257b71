use super::*;

fn profile(role: Role) -> Profile {
    Profile {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        full_name: "Alice A".to_owned(),
        phone: None,
        location: None,
        is_verified: false,
        created_at: None,
    }
}

fn session(role: Role) -> Session {
    Session { token: "t1".to_owned(), user: profile(role) }
}

// =============================================================================
// SessionState transitions
// =============================================================================

#[test]
fn default_state_is_anonymous() {
    let state = SessionState::default();
    assert!(state.is_anonymous());
    assert_eq!(state.role(), None);
    assert_eq!(state.token(), None);
}

#[test]
fn establish_carries_token_and_role_together() {
    let mut state = SessionState::default();
    state.establish(session(Role::Employer));
    assert!(!state.is_anonymous());
    assert_eq!(state.token(), Some("t1"));
    assert_eq!(state.role(), Some(Role::Employer));
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
}

#[test]
fn clear_returns_to_anonymous() {
    let mut state = SessionState::authenticated(session(Role::Worker));
    state.clear();
    assert!(state.is_anonymous());
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.clear();
    state.clear();
    assert!(state.is_anonymous());
}

#[test]
fn restore_after_logout_yields_anonymous() {
    // Storage is inert off the browser, so restore models the post-logout
    // reload: nothing persisted, nothing restored.
    forget_session();
    assert!(restore_session().is_anonymous());
}

#[test]
fn login_response_flows_to_the_employer_landing_route() {
    let body = serde_json::json!({
        "token": "t1",
        "user": {
            "id": 9,
            "username": "alice",
            "email": "alice@example.com",
            "role": "employer",
            "full_name": "Alice A"
        }
    });
    let parsed: Session = serde_json::from_value(body).unwrap();
    let mut state = SessionState::default();
    state.establish(parsed);
    assert_eq!(state.token(), Some("t1"));
    assert_eq!(
        state.role().map(crate::state::landing::landing_route_for),
        Some("/employer-dashboard")
    );
}

// =============================================================================
// Unauthorized policy
// =============================================================================

#[test]
fn default_policy_keeps_session_on_401() {
    let mut state = SessionState::authenticated(session(Role::Worker));
    let cleared = state.apply_unauthorized(SessionPolicy::default());
    assert!(!cleared);
    assert!(!state.is_anonymous());
}

#[test]
fn logout_policy_clears_session_on_401() {
    let mut state = SessionState::authenticated(session(Role::Worker));
    let cleared = state.apply_unauthorized(SessionPolicy { logout_on_unauthorized: true });
    assert!(cleared);
    assert!(state.is_anonymous());
}

#[test]
fn logout_policy_reports_nothing_to_clear_when_anonymous() {
    let mut state = SessionState::default();
    let cleared = state.apply_unauthorized(SessionPolicy { logout_on_unauthorized: true });
    assert!(!cleared);
}

// =============================================================================
// Registration validation
// =============================================================================

fn form() -> RegistrationForm {
    RegistrationForm {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        role: Role::Worker,
        full_name: "Bob B".to_owned(),
        phone: String::new(),
        location: String::new(),
    }
}

#[test]
fn five_char_password_fails_before_any_request() {
    let mut f = form();
    f.password = "abc12".to_owned();
    f.confirm_password = "abc12".to_owned();
    assert_eq!(f.validate(), Err(ValidationError::PasswordTooShort));
}

#[test]
fn six_char_password_is_accepted() {
    let mut f = form();
    f.password = "abc123".to_owned();
    f.confirm_password = "abc123".to_owned();
    assert!(f.validate().is_ok());
}

#[test]
fn mismatched_confirmation_fails_before_any_request() {
    let mut f = form();
    f.confirm_password = "secret2".to_owned();
    assert_eq!(f.validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn mismatch_is_reported_before_length() {
    let mut f = form();
    f.password = "abc".to_owned();
    f.confirm_password = "xyz".to_owned();
    assert_eq!(f.validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn wire_request_strips_confirmation_field() {
    let req = form().validate().unwrap();
    let value = serde_json::to_value(&req).unwrap();
    assert!(value.get("confirm_password").is_none());
    assert!(value.get("confirmPassword").is_none());
    assert_eq!(value["username"], "bob");
    assert_eq!(value["role"], "worker");
}

#[test]
fn wire_request_trims_identity_fields_but_not_password() {
    let mut f = form();
    f.username = "  bob  ".to_owned();
    f.password = " secret ".to_owned();
    f.confirm_password = " secret ".to_owned();
    let req = f.validate().unwrap();
    assert_eq!(req.username, "bob");
    assert_eq!(req.password, " secret ");
}

#[test]
fn validation_messages_match_the_inline_banner_copy() {
    assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match");
    assert_eq!(
        ValidationError::PasswordTooShort.to_string(),
        "Password must be at least 6 characters long"
    );
}
