//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use portal_common::auth::JwtService;
use portal_core::entities::{Role, User};
use portal_core::traits::UserRepository;
use portal_db::PgUserRepository;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Auth fixtures
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Citizen {suffix}"),
            email: format!("citizen{suffix}@example.com"),
            password: "a very long passphrase".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

// ============================================================================
// Complaint fixtures
// ============================================================================

/// Complaint intake request
#[derive(Debug, Serialize)]
pub struct ComplaintRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ComplaintRequest {
    /// The canonical pothole intake
    pub fn pothole() -> Self {
        Self {
            title: "Pothole on Main St".to_string(),
            description: "Large pothole near the intersection, growing weekly".to_string(),
            category: "ROADS".to_string(),
            agency: Some("PUBLIC_WORKS".to_string()),
            location: Some("Main St and 5th Ave".to_string()),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
        }
    }

    /// An intake without an explicit agency (exercises category routing)
    pub fn unrouted(category: &str) -> Self {
        Self {
            title: format!("Issue {}", unique_suffix()),
            description: "Details".to_string(),
            category: category.to_string(),
            agency: None,
            location: None,
            name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
        }
    }
}

/// Intake receipt
#[derive(Debug, Deserialize)]
pub struct ComplaintReceipt {
    pub id: Uuid,
    pub tracking_id: String,
}

/// Timeline entry in a complaint detail
#[derive(Debug, Deserialize)]
pub struct TimelineEntry {
    pub status: String,
    pub note: Option<String>,
}

/// Staff response in a complaint detail
#[derive(Debug, Deserialize)]
pub struct ResponseEntry {
    pub message: String,
}

/// Complaint detail (flattened complaint plus sub-records)
#[derive(Debug, Deserialize)]
pub struct ComplaintDetail {
    pub id: Uuid,
    pub tracking_id: String,
    pub status: String,
    pub agency: String,
    pub timeline: Vec<TimelineEntry>,
    pub responses: Vec<ResponseEntry>,
}

/// Complaint summary in list responses
#[derive(Debug, Deserialize)]
pub struct ComplaintSummary {
    pub id: Uuid,
    pub status: String,
    pub category: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Aggregate statistics
#[derive(Debug, Deserialize)]
pub struct Stats {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub rejected: i64,
    pub categories: Vec<CategoryStat>,
}

/// One category bucket in the statistics
#[derive(Debug, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub count: i64,
}

// ============================================================================
// Admin provisioning
// ============================================================================

/// Provision an admin account directly in the store and mint its token
///
/// Admin accounts are never self-registered, so tests create them the way
/// operations would: a direct row plus a bearer token signed with the same
/// secret the server uses.
pub async fn seed_admin(database_url: &str, jwt_secret: &str) -> Result<(User, String)> {
    let pool = PgPool::connect(database_url).await?;
    let repo = PgUserRepository::new(pool);

    let suffix = unique_suffix();
    let mut admin = User::new(
        Uuid::new_v4(),
        format!("Duty Officer {suffix}"),
        format!("officer{suffix}@example.gov"),
    );
    admin.role = Role::Admin;

    let password_hash = portal_common::hash_password("a very long passphrase")
        .map_err(|e| anyhow::anyhow!("hash error: {e}"))?;
    repo.create(&admin, &password_hash)
        .await
        .map_err(|e| anyhow::anyhow!("seed error: {e}"))?;

    let token = JwtService::new(jwt_secret, 900)
        .issue_token(admin.id, Role::Admin)
        .map_err(|e| anyhow::anyhow!("token error: {e}"))?;

    Ok((admin, token.access_token))
}
