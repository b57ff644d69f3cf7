//! Complaint database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the complaints table
///
/// Status, category, and agency are stored as their wire strings; the mapper
/// parses them back into domain enums.
#[derive(Debug, Clone, FromRow)]
pub struct ComplaintModel {
    pub id: Uuid,
    pub tracking_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub agency: String,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub name: String,
    pub email: String,
    pub status: String,
    pub submitter_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
