//! Timeline event entity - append-only record of a status change

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::ComplaintStatus;

/// One entry in a complaint's status timeline
///
/// Created once per status transition, plus the initial `PENDING` entry at
/// intake. Never mutated or deleted; insertion order is transition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub status: ComplaintStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TimelineEvent {
    /// Create a new timeline event
    pub fn new(id: Uuid, complaint_id: Uuid, status: ComplaintStatus) -> Self {
        Self {
            id,
            complaint_id,
            status,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Attach an optional free-text note
    #[must_use]
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|n| !n.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let complaint_id = Uuid::new_v4();
        let event = TimelineEvent::new(Uuid::new_v4(), complaint_id, ComplaintStatus::Pending);
        assert_eq!(event.complaint_id, complaint_id);
        assert_eq!(event.status, ComplaintStatus::Pending);
        assert_eq!(event.note, None);
    }

    #[test]
    fn test_with_note_drops_blank() {
        let event = TimelineEvent::new(Uuid::new_v4(), Uuid::new_v4(), ComplaintStatus::Resolved)
            .with_note(Some(String::new()));
        assert_eq!(event.note, None);

        let event = TimelineEvent::new(Uuid::new_v4(), Uuid::new_v4(), ComplaintStatus::Resolved)
            .with_note(Some("Fixed".to_string()));
        assert_eq!(event.note.as_deref(), Some("Fixed"));
    }
}
