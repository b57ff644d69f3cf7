//! Timeline event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the timeline_events table
#[derive(Debug, Clone, FromRow)]
pub struct TimelineEventModel {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub status: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}
