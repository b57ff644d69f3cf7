//! PostgreSQL implementation of TimelineRepository
//!
//! Timeline rows are written by `PgComplaintRepository` inside the same
//! transaction as the complaint row they describe; this repository only
//! reads them back.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::TimelineEvent;
use portal_core::traits::{RepoResult, TimelineRepository};

use crate::models::TimelineEventModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TimelineRepository
#[derive(Clone)]
pub struct PgTimelineRepository {
    pool: PgPool,
}

impl PgTimelineRepository {
    /// Create a new PgTimelineRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimelineRepository for PgTimelineRepository {
    #[instrument(skip(self))]
    async fn find_by_complaint(&self, complaint_id: Uuid) -> RepoResult<Vec<TimelineEvent>> {
        let rows = sqlx::query_as::<_, TimelineEventModel>(
            r"
            SELECT id, complaint_id, status, note, created_at
            FROM timeline_events
            WHERE complaint_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(complaint_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
