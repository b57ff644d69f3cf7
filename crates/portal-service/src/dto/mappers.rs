//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use portal_core::entities::{Attachment, Complaint, TimelineEvent, User};

use super::responses::{
    AttachmentResponse, ComplaintResponse, RespondentResponse, TimelineEventResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for RespondentResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

// ============================================================================
// Complaint Mappers
// ============================================================================

impl From<&Complaint> for ComplaintResponse {
    fn from(complaint: &Complaint) -> Self {
        Self {
            id: complaint.id,
            tracking_id: complaint.tracking_id.as_str().to_string(),
            title: complaint.title.clone(),
            description: complaint.description.clone(),
            category: complaint.category,
            agency: complaint.agency,
            location: complaint.location.clone(),
            phone: complaint.phone.clone(),
            name: complaint.name.clone(),
            email: complaint.email.clone(),
            status: complaint.status,
            created_at: complaint.created_at,
            updated_at: complaint.updated_at,
        }
    }
}

impl From<Complaint> for ComplaintResponse {
    fn from(complaint: Complaint) -> Self {
        Self::from(&complaint)
    }
}

impl From<&TimelineEvent> for TimelineEventResponse {
    fn from(event: &TimelineEvent) -> Self {
        Self {
            id: event.id,
            status: event.status,
            note: event.note.clone(),
            created_at: event.created_at,
        }
    }
}

impl From<&Attachment> for AttachmentResponse {
    fn from(attachment: &Attachment) -> Self {
        Self {
            id: attachment.id,
            filename: attachment.filename.clone(),
            url: attachment.url.clone(),
        }
    }
}
