//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Attachment, Complaint, ComplaintStatus, Response, TimelineEvent, User};
use crate::error::DomainError;
use crate::value_objects::{Agency, Category, TrackingId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Query Types
// ============================================================================

/// Relative date bucket for list filtering, resolved against call time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// Since local midnight
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// Last 365 days
    Year,
}

impl DateRange {
    /// Lower bound of the bucket relative to `now`
    #[must_use]
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map_or(now, |midnight| midnight.and_utc()),
            Self::Week => now - Duration::days(7),
            Self::Month => now - Duration::days(30),
            Self::Year => now - Duration::days(365),
        }
    }
}

/// Filter dimensions for listing complaints
///
/// Supplied dimensions combine with logical AND; results are always ordered
/// newest-first by creation time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintFilter {
    pub status: Option<ComplaintStatus>,
    pub category: Option<Category>,
    pub agency: Option<Agency>,
    /// Case-insensitive substring over title, description, tracking id, location
    pub search: Option<String>,
    pub date_range: Option<DateRange>,
    pub limit: Option<i64>,
}

impl ComplaintFilter {
    /// Whether no filter dimension is set
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.status.is_none()
            && self.category.is_none()
            && self.agency.is_none()
            && self.search.is_none()
            && self.date_range.is_none()
    }
}

/// Per-status complaint counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub rejected: i64,
}

impl StatusCounts {
    /// Sum over all statuses; always equals the total complaint count
    #[must_use]
    pub fn sum(&self) -> i64 {
        self.pending + self.in_progress + self.resolved + self.rejected
    }
}

/// Complaint count for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: i64,
}

/// Aggregate complaint statistics, materialized from the store at call time
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintStats {
    pub total: i64,
    pub by_status: StatusCounts,
    /// Sorted descending by count
    pub categories: Vec<CategoryCount>,
}

// ============================================================================
// Complaint Repository
// ============================================================================

#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Find complaint by internal id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Complaint>>;

    /// Find complaint by public tracking identifier
    async fn find_by_tracking_id(&self, tracking_id: &TrackingId)
        -> RepoResult<Option<Complaint>>;

    /// Check whether a tracking identifier is already assigned
    async fn tracking_id_exists(&self, tracking_id: &TrackingId) -> RepoResult<bool>;

    /// Persist a new complaint, its initial timeline event, and any
    /// attachments in one transaction - either all rows land or none do
    async fn create(
        &self,
        complaint: &Complaint,
        initial_event: &TimelineEvent,
        attachments: &[Attachment],
    ) -> RepoResult<()>;

    /// Persist a status change and its timeline event in one transaction
    async fn update_status(&self, complaint: &Complaint, event: &TimelineEvent) -> RepoResult<()>;

    /// List complaints matching all supplied filter dimensions, newest first
    async fn list(&self, filter: &ComplaintFilter) -> RepoResult<Vec<Complaint>>;

    /// Most recent complaints, newest first
    async fn recent(&self, limit: i64) -> RepoResult<Vec<Complaint>>;

    /// Delete a complaint and its sub-records
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Aggregate counts over the current record set
    async fn stats(&self) -> RepoResult<ComplaintStats>;
}

// ============================================================================
// Timeline Repository
// ============================================================================

#[async_trait]
pub trait TimelineRepository: Send + Sync {
    /// Timeline events for a complaint in insertion (chronological) order
    async fn find_by_complaint(&self, complaint_id: Uuid) -> RepoResult<Vec<TimelineEvent>>;
}

// ============================================================================
// Response Repository
// ============================================================================

#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Append a response
    async fn create(&self, response: &Response) -> RepoResult<()>;

    /// Responses for a complaint in insertion order
    async fn find_by_complaint(&self, complaint_id: Uuid) -> RepoResult<Vec<Response>>;
}

// ============================================================================
// Attachment Repository
// ============================================================================

#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    /// Attachments for a complaint
    async fn find_by_complaint(&self, complaint_id: Uuid) -> RepoResult<Vec<Attachment>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
}
