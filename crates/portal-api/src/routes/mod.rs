//! Route definitions
//!
//! All API routes organized by surface and mounted under /api/v1.
//! Route order matters within the complaints group: the literal
//! `/complaints/track` and `/complaints/stats` paths must be registered
//! alongside the `/complaints/:id` capture, which Axum resolves by
//! preferring the literal match.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{admin, auth, complaints, health};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(complaint_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Public complaint routes
fn complaint_routes() -> Router<AppState> {
    Router::new()
        .route("/complaints", post(complaints::create_complaint))
        .route("/complaints", get(complaints::recent_complaints))
        .route("/complaints/track", get(complaints::track_complaint))
        .route("/complaints/stats", get(complaints::complaint_stats))
        .route("/complaints/:id", get(complaints::get_complaint))
}

/// Admin routes - every handler gates on the ADMIN role claim
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/complaints", get(admin::list_complaints))
        .route("/admin/complaints/stats", get(admin::stats))
        .route("/admin/complaints/:id", get(admin::get_complaint))
        .route("/admin/complaints/:id", patch(admin::update_status))
        .route("/admin/complaints/:id", delete(admin::delete_complaint))
        .route("/admin/complaints/:id/respond", post(admin::respond))
}
