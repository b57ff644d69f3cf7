//! Complaint entity - the central record of the portal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::value_objects::{Agency, Category, TrackingId};

/// Lifecycle status of a complaint
///
/// Every complaint starts as `Pending`. Any status is a legal transition
/// target; the narrowing the admin surface applies per current status is a
/// UI convenience, not a store invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ComplaintStatus {
    /// All statuses
    pub const ALL: [ComplaintStatus; 4] =
        [Self::Pending, Self::InProgress, Self::Resolved, Self::Rejected];

    /// Wire representation (stored in the database as-is)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Whether the complaint is still awaiting an outcome
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| s.to_string())
    }
}

/// Complaint entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    pub id: Uuid,
    /// Public token assigned once at intake, immutable thereafter
    pub tracking_id: TrackingId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub agency: Agency,
    pub location: Option<String>,
    pub phone: Option<String>,
    /// Submitter contact details (collected even for anonymous submissions)
    pub name: String,
    pub email: String,
    pub status: ComplaintStatus,
    /// Registered user account, when the submitter was signed in
    pub submitter_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Complaint {
    /// Create a new pending complaint
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        tracking_id: TrackingId,
        title: String,
        description: String,
        category: Category,
        agency: Agency,
        name: String,
        email: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            tracking_id,
            title,
            description,
            category,
            agency,
            location: None,
            phone: None,
            name,
            email,
            status: ComplaintStatus::Pending,
            submitter_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach an optional location
    #[must_use]
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location.filter(|l| !l.trim().is_empty());
        self
    }

    /// Attach an optional contact phone
    #[must_use]
    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone.filter(|p| !p.trim().is_empty());
        self
    }

    /// Associate the submitting user account
    #[must_use]
    pub fn with_submitter(mut self, submitter_id: Option<Uuid>) -> Self {
        self.submitter_id = submitter_id;
        self
    }

    /// Apply a status transition, advancing `updated_at`
    pub fn transition(&mut self, status: ComplaintStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Whether the complaint is still awaiting an outcome
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Complaint {
        Complaint::new(
            Uuid::new_v4(),
            TrackingId::generate(),
            "Pothole on Main St".to_string(),
            "Large pothole near the intersection".to_string(),
            Category::Roads,
            Agency::PublicWorks,
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
        )
    }

    #[test]
    fn test_new_complaint_is_pending() {
        let complaint = sample();
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert!(complaint.is_open());
        assert_eq!(complaint.created_at, complaint.updated_at);
    }

    #[test]
    fn test_transition_advances_updated_at() {
        let mut complaint = sample();
        let created = complaint.created_at;
        complaint.transition(ComplaintStatus::Resolved);
        assert_eq!(complaint.status, ComplaintStatus::Resolved);
        assert!(!complaint.is_open());
        assert!(complaint.updated_at >= created);
    }

    #[test]
    fn test_with_location_drops_blank() {
        let complaint = sample().with_location(Some("   ".to_string()));
        assert_eq!(complaint.location, None);

        let complaint = sample().with_location(Some("5th and Main".to_string()));
        assert_eq!(complaint.location.as_deref(), Some("5th and Main"));
    }

    #[test]
    fn test_status_roundtrip() {
        for status in ComplaintStatus::ALL {
            let parsed: ComplaintStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("CLOSED".parse::<ComplaintStatus>().is_err());
    }

    #[test]
    fn test_status_serde_wire_form() {
        let json = serde_json::to_string(&ComplaintStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }
}
