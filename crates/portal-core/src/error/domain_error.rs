//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Complaint not found: {0}")]
    ComplaintNotFound(Uuid),

    #[error("No complaint found for tracking identifier: {0}")]
    TrackingIdNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid complaint status: {0}")]
    InvalidStatus(String),

    #[error("Invalid complaint category: {0}")]
    InvalidCategory(String),

    #[error("Invalid agency: {0}")]
    InvalidAgency(String),

    #[error("Invalid tracking identifier: {0}")]
    InvalidTrackingId(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Administrator role required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Tracking identifier already assigned")]
    TrackingIdExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ComplaintNotFound(_) => "UNKNOWN_COMPLAINT",
            Self::TrackingIdNotFound(_) => "UNKNOWN_TRACKING_ID",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidCategory(_) => "INVALID_CATEGORY",
            Self::InvalidAgency(_) => "INVALID_AGENCY",
            Self::InvalidTrackingId(_) => "INVALID_TRACKING_ID",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::TrackingIdExists => "TRACKING_ID_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ComplaintNotFound(_) | Self::TrackingIdNotFound(_) | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidStatus(_)
                | Self::InvalidCategory(_)
                | Self::InvalidAgency(_)
                | Self::InvalidTrackingId(_)
                | Self::WeakPassword(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminRequired)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::TrackingIdExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ComplaintNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_COMPLAINT");

        let err = DomainError::EmailAlreadyExists;
        assert_eq!(err.code(), "EMAIL_ALREADY_EXISTS");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ComplaintNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::TrackingIdNotFound("AB12CD34EF".into()).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidStatus("CLOSED".into()).is_validation());
        assert!(DomainError::InvalidEmail.is_validation());
        assert!(!DomainError::AdminRequired.is_validation());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::AdminRequired.is_authorization());
        assert!(!DomainError::UserNotFound(Uuid::nil()).is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::TrackingIdNotFound("AB12CD34EF".to_string());
        assert_eq!(
            err.to_string(),
            "No complaint found for tracking identifier: AB12CD34EF"
        );
    }
}
