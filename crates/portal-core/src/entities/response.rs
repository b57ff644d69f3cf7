//! Response entity - a staff message on a complaint

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Message from an administrator attached to a complaint
///
/// Append-only; responses are never edited after creation. This collection
/// is the canonical record of agency responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub id: Uuid,
    pub complaint_id: Uuid,
    /// The admin principal who authored the message
    pub respondent_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Response {
    /// Create a new response
    pub fn new(id: Uuid, complaint_id: Uuid, respondent_id: Uuid, message: String) -> Self {
        Self {
            id,
            complaint_id,
            respondent_id,
            message,
            created_at: Utc::now(),
        }
    }

    /// Check if the message is blank
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_creation() {
        let response = Response::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Crew dispatched".to_string(),
        );
        assert!(!response.is_empty());
    }

    #[test]
    fn test_blank_message_is_empty() {
        let response = Response::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), "  ".into());
        assert!(response.is_empty());
    }
}
