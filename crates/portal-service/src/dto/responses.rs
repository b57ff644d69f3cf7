//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use portal_core::entities::{ComplaintStatus, Role};
use portal_core::value_objects::{Agency, Category};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response (never includes the credential hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Complaint Responses
// ============================================================================

/// Intake receipt: the internal id plus the public tracking token
#[derive(Debug, Clone, Serialize)]
pub struct CreateComplaintResponse {
    pub id: Uuid,
    pub tracking_id: String,
}

/// Complaint summary for list views
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintResponse {
    pub id: Uuid,
    pub tracking_id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub agency: Agency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub name: String,
    pub email: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One timeline entry
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEventResponse {
    pub id: Uuid,
    pub status: ComplaintStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The staff member who authored a response
#[derive(Debug, Clone, Serialize)]
pub struct RespondentResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// One staff response message
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMessageResponse {
    pub id: Uuid,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent: Option<RespondentResponse>,
    pub created_at: DateTime<Utc>,
}

/// One attachment reference
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentResponse {
    pub id: Uuid,
    pub filename: String,
    pub url: String,
}

/// Complaint with timeline, responses, and attachments attached
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintDetailResponse {
    #[serde(flatten)]
    pub complaint: ComplaintResponse,
    pub timeline: Vec<TimelineEventResponse>,
    pub responses: Vec<ResponseMessageResponse>,
    pub attachments: Vec<AttachmentResponse>,
}

// ============================================================================
// Stats Responses
// ============================================================================

/// Complaint count for one category, with its display label
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCountResponse {
    pub category: Category,
    pub label: &'static str,
    pub count: i64,
}

/// Aggregate statistics, flattened the way the dashboard consumes them
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub rejected: i64,
    /// Sorted descending by count
    pub categories: Vec<CategoryCountResponse>,
}

// ============================================================================
// Misc Responses
// ============================================================================

/// Deletion acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
        }
    }
}
