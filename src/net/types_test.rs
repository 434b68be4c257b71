use super::*;

// =============================================================================
// Role parsing
// =============================================================================

#[test]
fn role_parses_known_strings() {
    assert_eq!(Role::from("worker".to_owned()), Role::Worker);
    assert_eq!(Role::from("employer".to_owned()), Role::Employer);
    assert_eq!(Role::from("admin".to_owned()), Role::Admin);
}

#[test]
fn role_unknown_string_degrades_instead_of_failing() {
    assert_eq!(Role::from("superuser".to_owned()), Role::Unknown);
    assert_eq!(Role::from(String::new()), Role::Unknown);
}

#[test]
fn role_round_trips_through_json() {
    let role: Role = serde_json::from_str("\"employer\"").unwrap();
    assert_eq!(role, Role::Employer);
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"employer\"");
}

// =============================================================================
// Session / Profile schemas
// =============================================================================

#[test]
fn session_decodes_login_response() {
    let body = serde_json::json!({
        "token": "t1",
        "user": {
            "id": 7,
            "username": "alice",
            "email": "alice@example.com",
            "role": "employer",
            "full_name": "Alice A",
            "phone": "+254 700 000 000",
            "location": "Nairobi, Kenya"
        }
    });
    let session: Session = serde_json::from_value(body).unwrap();
    assert_eq!(session.token, "t1");
    assert_eq!(session.user.role, Role::Employer);
    assert!(!session.user.is_verified);
}

#[test]
fn session_rejects_token_without_user() {
    let body = serde_json::json!({ "token": "t1" });
    assert!(serde_json::from_value::<Session>(body).is_err());
}

#[test]
fn session_rejects_user_without_token() {
    let body = serde_json::json!({
        "user": { "id": 1, "username": "a", "email": "a@b.c", "role": "worker", "full_name": "A" }
    });
    assert!(serde_json::from_value::<Session>(body).is_err());
}

#[test]
fn profile_tolerates_trimmed_register_response() {
    let body = serde_json::json!({
        "id": 12,
        "username": "bob",
        "email": "bob@example.com",
        "role": "worker",
        "full_name": "Bob B"
    });
    let profile: Profile = serde_json::from_value(body).unwrap();
    assert_eq!(profile.phone, None);
    assert_eq!(profile.location, None);
    assert!(!profile.is_verified);
    assert_eq!(profile.created_at, None);
}

#[test]
fn profile_accepts_integer_verified_flag() {
    let body = serde_json::json!({
        "id": 3,
        "username": "carol",
        "email": "carol@example.com",
        "role": "admin",
        "full_name": "Carol C",
        "is_verified": 1
    });
    let profile: Profile = serde_json::from_value(body).unwrap();
    assert!(profile.is_verified);
}

// =============================================================================
// Job schema
// =============================================================================

#[test]
fn job_decodes_full_listing_row() {
    let body = serde_json::json!({
        "id": 42,
        "employer_id": 7,
        "title": "Site Foreman",
        "description": "Supervise construction crews",
        "location": "Mombasa",
        "salary_range": "KES 60k-80k",
        "job_type": "full-time",
        "requirements": "5 years experience",
        "is_international": 0,
        "is_approved": 1,
        "deadline": "2025-01-31",
        "created_at": "2024-12-01 10:00:00",
        "employer_name": "BuildCo"
    });
    let job: Job = serde_json::from_value(body).unwrap();
    assert!(!job.is_international);
    assert!(job.is_approved);
    assert_eq!(job.employer_name, "BuildCo");
}

#[test]
fn job_defaults_null_text_fields() {
    let body = serde_json::json!({
        "id": 1,
        "title": "Cleaner",
        "description": null,
        "location": null,
        "salary_range": null,
        "job_type": null,
        "deadline": null
    });
    let job: Job = serde_json::from_value(body).unwrap();
    assert_eq!(job.description, "");
    assert_eq!(job.location, "");
    assert_eq!(job.deadline, None);
    assert!(!job.is_approved);
}

// =============================================================================
// Request bodies
// =============================================================================

#[test]
fn register_request_serializes_role_as_wire_string() {
    let req = RegisterRequest {
        username: "dina".to_owned(),
        email: "dina@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Employer,
        full_name: "Dina D".to_owned(),
        phone: String::new(),
        location: String::new(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["role"], "employer");
}

#[test]
fn new_job_omits_missing_deadline() {
    let job = NewJob {
        title: "Welder".to_owned(),
        job_type: "contract".to_owned(),
        ..NewJob::default()
    };
    let value = serde_json::to_value(&job).unwrap();
    assert!(value.get("deadline").is_none());
    assert_eq!(value["is_international"], false);
}

// =============================================================================
// Stats / ack envelopes
// =============================================================================

#[test]
fn admin_stats_tolerates_missing_counters() {
    let stats: AdminStats = serde_json::from_value(serde_json::json!({ "total_jobs": 9 })).unwrap();
    assert_eq!(stats.total_jobs, 9);
    assert_eq!(stats.pending_jobs, 0);
}

#[test]
fn ack_reads_optional_message() {
    let ack: Ack = serde_json::from_value(serde_json::json!({ "message": "ok" })).unwrap();
    assert_eq!(ack.message.as_deref(), Some("ok"));
    let empty: Ack = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(empty.message, None);
}
