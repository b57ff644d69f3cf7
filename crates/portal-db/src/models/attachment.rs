//! Attachment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the attachments table
#[derive(Debug, Clone, FromRow)]
pub struct AttachmentModel {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub filename: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
