//! # portal-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AttachmentInput, AttachmentResponse, AuthResponse, ComplaintDetailResponse, ComplaintResponse,
    CreateComplaintRequest, CreateComplaintResponse, CategoryCountResponse, DeleteResponse,
    HealthResponse, ListComplaintsQuery, LoginRequest, ReadinessResponse, RecentQuery,
    RegisterRequest, RespondRequest, ResponseMessageResponse, RespondentResponse, StatsResponse,
    TimelineEventResponse, TrackQuery, UpdateStatusRequest, UserResponse,
};
pub use services::{
    AuthService, ComplaintService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
