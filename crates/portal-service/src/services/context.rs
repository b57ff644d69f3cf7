//! Service context - dependency container for services
//!
//! Holds all repositories and shared services. The persistence handle is
//! passed in explicitly; no service reaches for a process-wide connection.

use std::sync::Arc;

use portal_common::auth::JwtService;
use portal_core::traits::{
    AttachmentRepository, ComplaintRepository, ResponseRepository, TimelineRepository,
    UserRepository,
};
use portal_db::PgPool;
use uuid::Uuid;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (held for health checks; repositories carry their own)
    pool: PgPool,

    // Repositories
    complaint_repo: Arc<dyn ComplaintRepository>,
    timeline_repo: Arc<dyn TimelineRepository>,
    response_repo: Arc<dyn ResponseRepository>,
    attachment_repo: Arc<dyn AttachmentRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        complaint_repo: Arc<dyn ComplaintRepository>,
        timeline_repo: Arc<dyn TimelineRepository>,
        response_repo: Arc<dyn ResponseRepository>,
        attachment_repo: Arc<dyn AttachmentRepository>,
        user_repo: Arc<dyn UserRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            complaint_repo,
            timeline_repo,
            response_repo,
            attachment_repo,
            user_repo,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the complaint repository
    pub fn complaint_repo(&self) -> &dyn ComplaintRepository {
        self.complaint_repo.as_ref()
    }

    /// Get the timeline repository
    pub fn timeline_repo(&self) -> &dyn TimelineRepository {
        self.timeline_repo.as_ref()
    }

    /// Get the response repository
    pub fn response_repo(&self) -> &dyn ResponseRepository {
        self.response_repo.as_ref()
    }

    /// Get the attachment repository
    pub fn attachment_repo(&self) -> &dyn AttachmentRepository {
        self.attachment_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new entity id
    pub fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    complaint_repo: Option<Arc<dyn ComplaintRepository>>,
    timeline_repo: Option<Arc<dyn TimelineRepository>>,
    response_repo: Option<Arc<dyn ResponseRepository>>,
    attachment_repo: Option<Arc<dyn AttachmentRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn complaint_repo(mut self, repo: Arc<dyn ComplaintRepository>) -> Self {
        self.complaint_repo = Some(repo);
        self
    }

    pub fn timeline_repo(mut self, repo: Arc<dyn TimelineRepository>) -> Self {
        self.timeline_repo = Some(repo);
        self
    }

    pub fn response_repo(mut self, repo: Arc<dyn ResponseRepository>) -> Self {
        self.response_repo = Some(repo);
        self
    }

    pub fn attachment_repo(mut self, repo: Arc<dyn AttachmentRepository>) -> Self {
        self.attachment_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.complaint_repo
                .ok_or_else(|| ServiceError::validation("complaint_repo is required"))?,
            self.timeline_repo
                .ok_or_else(|| ServiceError::validation("timeline_repo is required"))?,
            self.response_repo
                .ok_or_else(|| ServiceError::validation("response_repo is required"))?,
            self.attachment_repo
                .ok_or_else(|| ServiceError::validation("attachment_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}
