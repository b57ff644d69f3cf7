//! Repository traits and query types

mod repositories;

pub use repositories::{
    AttachmentRepository, CategoryCount, ComplaintFilter, ComplaintRepository, ComplaintStats,
    DateRange, RepoResult, ResponseRepository, StatusCounts, TimelineRepository, UserRepository,
};
