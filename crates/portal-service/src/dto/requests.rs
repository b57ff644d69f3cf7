//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Enumerated fields (status, category, agency) deserialize directly into
//! domain enums, so an unknown value is rejected before any handler runs.

use portal_core::entities::ComplaintStatus;
use portal_core::value_objects::{Agency, Category};
use portal_core::DateRange;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Complaint Requests
// ============================================================================

/// Attachment reference submitted with a complaint
///
/// Blob storage is external; the intake records name and URL only.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttachmentInput {
    #[validate(length(min = 1, max = 255, message = "Filename must be 1-255 characters"))]
    pub filename: String,

    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// Complaint intake request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComplaintRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    pub category: Category,

    /// Responsible department; defaults to the category's routing when omitted
    pub agency: Option<Agency>,

    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub attachments: Vec<AttachmentInput>,
}

/// Status update request (admin)
///
/// `response` carries an optional staff message recorded alongside the
/// transition - the combined action the admin surface offers.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    pub status: ComplaintStatus,

    #[validate(length(max = 2000, message = "Note must be at most 2000 characters"))]
    pub note: Option<String>,

    #[validate(length(max = 5000, message = "Response must be at most 5000 characters"))]
    pub response: Option<String>,
}

/// Staff response request (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RespondRequest {
    #[validate(length(min = 1, max = 5000, message = "Response message must be 1-5000 characters"))]
    pub message: String,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the public tracking lookup
///
/// The camelCase alias keeps old intake-form links working.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackQuery {
    #[serde(alias = "trackingId")]
    pub tracking_id: Option<String>,
}

/// Query parameters for the recent complaints list
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

/// Query parameters for the filtered admin list
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListComplaintsQuery {
    pub status: Option<ComplaintStatus>,
    pub category: Option<Category>,
    pub agency: Option<Agency>,
    pub search: Option<String>,
    pub date_range: Option<DateRange>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_unknown_category() {
        let json = r#"{
            "title": "t", "description": "d", "category": "POTHOLES",
            "name": "n", "email": "a@b.com"
        }"#;
        assert!(serde_json::from_str::<CreateComplaintRequest>(json).is_err());
    }

    #[test]
    fn test_create_request_validates_email() {
        let json = r#"{
            "title": "t", "description": "d", "category": "ROADS",
            "name": "n", "email": "not-an-email"
        }"#;
        let request: CreateComplaintRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_minimal_fields() {
        let json = r#"{
            "title": "Pothole on Main St", "description": "Deep pothole",
            "category": "ROADS", "name": "Jane Doe", "email": "jane@example.com"
        }"#;
        let request: CreateComplaintRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.category, Category::Roads);
        assert!(request.agency.is_none());
        assert!(request.attachments.is_empty());
    }

    #[test]
    fn test_update_status_request_parses() {
        let json = r#"{"status": "RESOLVED", "note": "Fixed"}"#;
        let request: UpdateStatusRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, ComplaintStatus::Resolved);
        assert_eq!(request.note.as_deref(), Some("Fixed"));
        assert!(request.response.is_none());
    }

    #[test]
    fn test_empty_respond_message_rejected() {
        let request = RespondRequest {
            message: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_list_query_date_range() {
        let query: ListComplaintsQuery =
            serde_json::from_str(r#"{"date_range": "week", "status": "PENDING"}"#).unwrap();
        assert_eq!(query.date_range, Some(DateRange::Week));
        assert_eq!(query.status, Some(ComplaintStatus::Pending));
    }
}
