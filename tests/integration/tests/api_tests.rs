//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema from `migrations/` applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "USER");
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_roundtrip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!auth.access_token.is_empty());

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                email: register.email,
                password: "wrong password entirely".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Complaint Intake & Tracking Tests
// ============================================================================

#[tokio::test]
async fn test_submit_and_track_complaint() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/complaints", &ComplaintRequest::pothole())
        .await
        .unwrap();
    let receipt: ComplaintReceipt = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(receipt.tracking_id.len(), 10);
    assert!(receipt
        .tracking_id
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));

    // Track with the lowercased identifier; lookup normalizes case
    let response = server
        .get(&format!(
            "/api/v1/complaints/track?tracking_id={}",
            receipt.tracking_id.to_lowercase()
        ))
        .await
        .unwrap();
    let detail: ComplaintDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.id, receipt.id);
    assert_eq!(detail.status, "PENDING");
    assert_eq!(detail.timeline.len(), 1);
    assert_eq!(detail.timeline[0].status, "PENDING");
}

#[tokio::test]
async fn test_track_requires_parameter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/complaints/track").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_track_unknown_id_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/complaints/track?tracking_id=ZZZZZZZZZZ")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_intake_validation_rejects_bad_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = json!({
        "title": "t",
        "description": "d",
        "category": "POTHOLES",
        "name": "n",
        "email": "a@b.com"
    });
    let response = server.post("/api/v1/complaints", &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_intake_routes_agency_from_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/complaints", &ComplaintRequest::unrouted("WATER_SUPPLY"))
        .await
        .unwrap();
    let receipt: ComplaintReceipt = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/v1/complaints/{}", receipt.id))
        .await
        .unwrap();
    let detail: ComplaintDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.agency, "WATER_AUTHORITY");
}

#[tokio::test]
async fn test_recent_complaints_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    for _ in 0..3 {
        let response = server
            .post("/api/v1/complaints", &ComplaintRequest::pothole())
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/v1/complaints?limit=3").await.unwrap();
    let listed: Vec<ComplaintSummary> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 3);
    for pair in listed.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_stats_shape_is_consistent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/complaints", &ComplaintRequest::pothole())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/v1/complaints/stats").await.unwrap();
    let stats: Stats = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stats.total >= 1);
    assert_eq!(
        stats.pending + stats.in_progress + stats.resolved + stats.rejected,
        stats.total
    );
    for pair in stats.categories.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
}

// ============================================================================
// Admin Gate Tests
// ============================================================================

#[tokio::test]
async fn test_admin_list_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/admin/complaints").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_list_rejects_citizen_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/complaints", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Admin Lifecycle Tests
// ============================================================================

async fn admin_token() -> Option<String> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let jwt_secret = std::env::var("JWT_SECRET").ok()?;
    let (_admin, token) = seed_admin(&database_url, &jwt_secret).await.ok()?;
    Some(token)
}

#[tokio::test]
async fn test_admin_transition_with_note() {
    if !check_test_env().await {
        return;
    }
    let Some(token) = admin_token().await else {
        return;
    };

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/complaints", &ComplaintRequest::pothole())
        .await
        .unwrap();
    let receipt: ComplaintReceipt = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/complaints/{}", receipt.id),
            &token,
            &json!({"status": "RESOLVED", "note": "Fixed"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/admin/complaints/{}", receipt.id), &token)
        .await
        .unwrap();
    let detail: ComplaintDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.status, "RESOLVED");
    assert_eq!(detail.timeline.len(), 2);
    assert_eq!(detail.timeline[1].status, "RESOLVED");
    assert_eq!(detail.timeline[1].note.as_deref(), Some("Fixed"));
}

#[tokio::test]
async fn test_admin_respond_appends_message() {
    if !check_test_env().await {
        return;
    }
    let Some(token) = admin_token().await else {
        return;
    };

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/complaints", &ComplaintRequest::pothole())
        .await
        .unwrap();
    let receipt: ComplaintReceipt = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/admin/complaints/{}/respond", receipt.id),
            &token,
            &json!({"message": "Crew dispatched"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Status unchanged, response visible on the public tracking surface
    let response = server
        .get(&format!(
            "/api/v1/complaints/track?tracking_id={}",
            receipt.tracking_id
        ))
        .await
        .unwrap();
    let detail: ComplaintDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.status, "PENDING");
    assert_eq!(detail.responses.len(), 1);
    assert_eq!(detail.responses[0].message, "Crew dispatched");
}

#[tokio::test]
async fn test_admin_combined_patch_records_response() {
    if !check_test_env().await {
        return;
    }
    let Some(token) = admin_token().await else {
        return;
    };

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/complaints", &ComplaintRequest::pothole())
        .await
        .unwrap();
    let receipt: ComplaintReceipt = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/complaints/{}", receipt.id),
            &token,
            &json!({
                "status": "IN_PROGRESS",
                "note": "Scheduled",
                "response": "Work begins Monday"
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/admin/complaints/{}", receipt.id), &token)
        .await
        .unwrap();
    let detail: ComplaintDetail = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.status, "IN_PROGRESS");
    assert_eq!(detail.responses.len(), 1);
    assert_eq!(detail.responses[0].message, "Work begins Monday");
}

#[tokio::test]
async fn test_admin_filtered_list() {
    if !check_test_env().await {
        return;
    }
    let Some(token) = admin_token().await else {
        return;
    };

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/complaints", &ComplaintRequest::pothole())
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(
            "/api/v1/admin/complaints?status=PENDING&category=ROADS",
            &token,
        )
        .await
        .unwrap();
    let listed: Vec<ComplaintSummary> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!listed.is_empty());
    assert!(listed
        .iter()
        .all(|c| c.status == "PENDING" && c.category == "ROADS"));
}

#[tokio::test]
async fn test_admin_delete_complaint() {
    if !check_test_env().await {
        return;
    }
    let Some(token) = admin_token().await else {
        return;
    };

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/complaints", &ComplaintRequest::pothole())
        .await
        .unwrap();
    let receipt: ComplaintReceipt = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/admin/complaints/{}", receipt.id), &token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["success"], true);

    let response = server
        .get(&format!("/api/v1/complaints/{}", receipt.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
