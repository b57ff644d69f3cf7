//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AttachmentInput, CreateComplaintRequest, ListComplaintsQuery, LoginRequest, RecentQuery,
    RegisterRequest, RespondRequest, TrackQuery, UpdateStatusRequest,
};

// Re-export commonly used response types
pub use responses::{
    AttachmentResponse, AuthResponse, CategoryCountResponse, ComplaintDetailResponse,
    ComplaintResponse, CreateComplaintResponse, DeleteResponse, HealthResponse, ReadinessResponse,
    RespondentResponse, ResponseMessageResponse, StatsResponse, TimelineEventResponse,
    UserResponse,
};
