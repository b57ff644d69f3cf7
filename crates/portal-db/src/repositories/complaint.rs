//! PostgreSQL implementation of ComplaintRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use portal_core::entities::{Attachment, Complaint, ComplaintStatus, TimelineEvent};
use portal_core::error::DomainError;
use portal_core::traits::{
    CategoryCount, ComplaintFilter, ComplaintRepository, ComplaintStats, RepoResult, StatusCounts,
};
use portal_core::value_objects::{Category, TrackingId};

use crate::mappers::bad_column;
use crate::models::ComplaintModel;

use super::error::{complaint_not_found, map_db_error, map_unique_violation};

const COMPLAINT_COLUMNS: &str = "id, tracking_id, title, description, category, agency, \
     location, phone, name, email, status, submitter_id, created_at, updated_at";

/// PostgreSQL implementation of ComplaintRepository
#[derive(Clone)]
pub struct PgComplaintRepository {
    pool: PgPool,
}

impl PgComplaintRepository {
    /// Create a new PgComplaintRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape `%`, `_`, and `\` so user search input matches literally under ILIKE
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn rows_to_complaints(rows: Vec<ComplaintModel>) -> RepoResult<Vec<Complaint>> {
    rows.into_iter().map(TryInto::try_into).collect()
}

#[async_trait]
impl ComplaintRepository for PgComplaintRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Complaint>> {
        let result = sqlx::query_as::<_, ComplaintModel>(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(TryInto::try_into).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_tracking_id(
        &self,
        tracking_id: &TrackingId,
    ) -> RepoResult<Option<Complaint>> {
        let result = sqlx::query_as::<_, ComplaintModel>(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE tracking_id = $1"
        ))
        .bind(tracking_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(TryInto::try_into).transpose()
    }

    #[instrument(skip(self))]
    async fn tracking_id_exists(&self, tracking_id: &TrackingId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM complaints WHERE tracking_id = $1)",
        )
        .bind(tracking_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, complaint, initial_event, attachments), fields(tracking_id = %complaint.tracking_id))]
    async fn create(
        &self,
        complaint: &Complaint,
        initial_event: &TimelineEvent,
        attachments: &[Attachment],
    ) -> RepoResult<()> {
        // Complaint, initial timeline entry, and attachments land together
        // or not at all - a complaint without its PENDING event would break
        // the timeline invariant.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO complaints (id, tracking_id, title, description, category, agency,
                                    location, phone, name, email, status, submitter_id,
                                    created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(complaint.id)
        .bind(complaint.tracking_id.as_str())
        .bind(&complaint.title)
        .bind(&complaint.description)
        .bind(complaint.category.as_str())
        .bind(complaint.agency.as_str())
        .bind(&complaint.location)
        .bind(&complaint.phone)
        .bind(&complaint.name)
        .bind(&complaint.email)
        .bind(complaint.status.as_str())
        .bind(complaint.submitter_id)
        .bind(complaint.created_at)
        .bind(complaint.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TrackingIdExists))?;

        sqlx::query(
            r"
            INSERT INTO timeline_events (id, complaint_id, status, note, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(initial_event.id)
        .bind(initial_event.complaint_id)
        .bind(initial_event.status.as_str())
        .bind(&initial_event.note)
        .bind(initial_event.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for attachment in attachments {
            sqlx::query(
                r"
                INSERT INTO attachments (id, complaint_id, filename, url, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(attachment.id)
            .bind(attachment.complaint_id)
            .bind(&attachment.filename)
            .bind(&attachment.url)
            .bind(attachment.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, complaint, event), fields(complaint_id = %complaint.id, status = %complaint.status))]
    async fn update_status(
        &self,
        complaint: &Complaint,
        event: &TimelineEvent,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE complaints
            SET status = $2, updated_at = $3
            WHERE id = $1
            ",
        )
        .bind(complaint.id)
        .bind(complaint.status.as_str())
        .bind(complaint.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(complaint_not_found(complaint.id));
        }

        sqlx::query(
            r"
            INSERT INTO timeline_events (id, complaint_id, status, note, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(event.id)
        .bind(event.complaint_id)
        .bind(event.status.as_str())
        .bind(&event.note)
        .bind(event.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, filter))]
    async fn list(&self, filter: &ComplaintFilter) -> RepoResult<Vec<Complaint>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE 1=1"));

        if let Some(status) = filter.status {
            qb.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(category) = filter.category {
            qb.push(" AND category = ").push_bind(category.as_str());
        }
        if let Some(agency) = filter.agency {
            qb.push(" AND agency = ").push_bind(agency.as_str());
        }
        if let Some(search) = filter.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                let pattern = format!("%{}%", escape_like(search));
                qb.push(" AND (title ILIKE ")
                    .push_bind(pattern.clone())
                    .push(" OR description ILIKE ")
                    .push_bind(pattern.clone())
                    .push(" OR tracking_id ILIKE ")
                    .push_bind(pattern.clone())
                    .push(" OR location ILIKE ")
                    .push_bind(pattern)
                    .push(")");
            }
        }
        if let Some(range) = filter.date_range {
            qb.push(" AND created_at >= ").push_bind(range.since(Utc::now()));
        }

        qb.push(" ORDER BY created_at DESC");

        if let Some(limit) = filter.limit {
            qb.push(" LIMIT ").push_bind(limit);
        }

        let rows = qb
            .build_query_as::<ComplaintModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows_to_complaints(rows)
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<Complaint>> {
        let rows = sqlx::query_as::<_, ComplaintModel>(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows_to_complaints(rows)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        // Sub-records go with the complaint via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(complaint_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<ComplaintStats> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM complaints")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let status_rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM complaints GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_status = StatusCounts::default();
        for (status, count) in status_rows {
            match status.parse::<ComplaintStatus>() {
                Ok(ComplaintStatus::Pending) => by_status.pending = count,
                Ok(ComplaintStatus::InProgress) => by_status.in_progress = count,
                Ok(ComplaintStatus::Resolved) => by_status.resolved = count,
                Ok(ComplaintStatus::Rejected) => by_status.rejected = count,
                Err(_) => return Err(bad_column("status", &status)),
            }
        }

        let category_rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT category, COUNT(*) FROM complaints GROUP BY category ORDER BY COUNT(*) DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let categories = category_rows
            .into_iter()
            .map(|(category, count)| {
                category
                    .parse::<Category>()
                    .map(|category| CategoryCount { category, count })
                    .map_err(|_| bad_column("category", &category))
            })
            .collect::<RepoResult<Vec<_>>>()?;

        Ok(ComplaintStats {
            total,
            by_status,
            categories,
        })
    }
}
