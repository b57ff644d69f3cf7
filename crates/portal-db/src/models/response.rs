//! Response database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the responses table
#[derive(Debug, Clone, FromRow)]
pub struct ResponseModel {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub respondent_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
