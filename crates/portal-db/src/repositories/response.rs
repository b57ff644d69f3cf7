//! PostgreSQL implementation of ResponseRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::Response;
use portal_core::traits::{RepoResult, ResponseRepository};

use crate::models::ResponseModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ResponseRepository
#[derive(Clone)]
pub struct PgResponseRepository {
    pool: PgPool,
}

impl PgResponseRepository {
    /// Create a new PgResponseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResponseRepository for PgResponseRepository {
    #[instrument(skip(self, response), fields(complaint_id = %response.complaint_id))]
    async fn create(&self, response: &Response) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO responses (id, complaint_id, respondent_id, message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(response.id)
        .bind(response.complaint_id)
        .bind(response.respondent_id)
        .bind(&response.message)
        .bind(response.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_complaint(&self, complaint_id: Uuid) -> RepoResult<Vec<Response>> {
        let rows = sqlx::query_as::<_, ResponseModel>(
            r"
            SELECT id, complaint_id, respondent_id, message, created_at
            FROM responses
            WHERE complaint_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(complaint_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Response::from).collect())
    }
}
