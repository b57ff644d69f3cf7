//! Attachment entity - a file reference on a complaint

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// File attached at complaint submission time
///
/// Blob storage is external; the portal only records the filename and a
/// retrievable URL. Read-only after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub filename: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    /// Create a new attachment record
    pub fn new(id: Uuid, complaint_id: Uuid, filename: String, url: String) -> Self {
        Self {
            id,
            complaint_id,
            filename,
            url,
            created_at: Utc::now(),
        }
    }
}
