use super::*;

// =============================================================================
// classify_response
// =============================================================================

#[test]
fn resource_401_is_rejected() {
    assert_eq!(classify_response(401, None), ApiError::Rejected);
}

#[test]
fn resource_403_is_rejected() {
    assert_eq!(classify_response(403, Some("Admin access required".to_owned())), ApiError::Rejected);
}

#[test]
fn server_message_is_surfaced_verbatim() {
    assert_eq!(
        classify_response(400, Some("title is required".to_owned())),
        ApiError::Server("title is required".to_owned())
    );
}

#[test]
fn missing_message_falls_back_to_status_text() {
    assert_eq!(
        classify_response(500, None),
        ApiError::Server("Request failed with status 500".to_owned())
    );
}

// =============================================================================
// classify_login_response
// =============================================================================

#[test]
fn login_401_means_invalid_credentials() {
    assert_eq!(classify_login_response(401, Some("Invalid credentials".to_owned())), ApiError::InvalidCredentials);
}

#[test]
fn login_400_keeps_server_message() {
    assert_eq!(
        classify_login_response(400, Some("Username and password required".to_owned())),
        ApiError::Server("Username and password required".to_owned())
    );
}

#[test]
fn login_500_without_body_uses_fallback() {
    assert_eq!(
        classify_login_response(500, None),
        ApiError::Server("Request failed with status 500".to_owned())
    );
}

// =============================================================================
// Display strings shown to the user
// =============================================================================

#[test]
fn display_messages_are_user_facing() {
    assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid username or password");
    assert_eq!(ApiError::Network("timeout".to_owned()).to_string(), "Network error: timeout");
    assert_eq!(ApiError::Server("nope".to_owned()).to_string(), "nope");
}
