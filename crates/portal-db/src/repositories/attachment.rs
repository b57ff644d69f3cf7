//! PostgreSQL implementation of AttachmentRepository
//!
//! Attachment rows are written at complaint creation inside the intake
//! transaction; afterward they are read-only.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::Attachment;
use portal_core::traits::{AttachmentRepository, RepoResult};

use crate::models::AttachmentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AttachmentRepository
#[derive(Clone)]
pub struct PgAttachmentRepository {
    pool: PgPool,
}

impl PgAttachmentRepository {
    /// Create a new PgAttachmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttachmentRepository for PgAttachmentRepository {
    #[instrument(skip(self))]
    async fn find_by_complaint(&self, complaint_id: Uuid) -> RepoResult<Vec<Attachment>> {
        let rows = sqlx::query_as::<_, AttachmentModel>(
            r"
            SELECT id, complaint_id, filename, url, created_at
            FROM attachments
            WHERE complaint_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(complaint_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Attachment::from).collect())
    }
}
