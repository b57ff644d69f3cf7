//! Complaint lifecycle service
//!
//! Owns the rules for creating a complaint, transitioning its status,
//! attaching staff responses, and computing aggregate statistics. All state
//! lives in the store; the service holds nothing between calls.

use std::collections::HashMap;

use portal_core::entities::{Attachment, Complaint, ComplaintStatus, Response, TimelineEvent, User};
use portal_core::error::DomainError;
use portal_core::traits::ComplaintFilter;
use portal_core::value_objects::TrackingId;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    CategoryCountResponse, ComplaintDetailResponse, ComplaintResponse, CreateComplaintRequest,
    CreateComplaintResponse, ListComplaintsQuery, RespondentResponse, ResponseMessageResponse,
    StatsResponse, TimelineEventResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attempts at generating a non-colliding tracking identifier before the
/// intake is abandoned. The token space is 36^10, so hitting this limit
/// means something other than luck is wrong.
const MAX_TRACKING_ATTEMPTS: usize = 5;

/// Default and maximum sizes for the recent-complaints list
const DEFAULT_RECENT_LIMIT: i64 = 20;
const MAX_RECENT_LIMIT: i64 = 100;

/// Complaint lifecycle service
pub struct ComplaintService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ComplaintService<'a> {
    /// Create a new ComplaintService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Intake a new complaint
    ///
    /// Generates a unique tracking identifier (collision-checked against the
    /// store, regenerated on conflict), persists the complaint with status
    /// `PENDING` together with its initial timeline entry and attachments,
    /// and returns the intake receipt.
    #[instrument(skip(self, request), fields(category = %request.category))]
    pub async fn create(
        &self,
        request: CreateComplaintRequest,
        submitter_id: Option<Uuid>,
    ) -> ServiceResult<CreateComplaintResponse> {
        // Route to the category's agency when the caller did not pick one
        let agency = request
            .agency
            .unwrap_or_else(|| request.category.default_agency());

        for attempt in 0..MAX_TRACKING_ATTEMPTS {
            let tracking_id = TrackingId::generate();
            if self
                .ctx
                .complaint_repo()
                .tracking_id_exists(&tracking_id)
                .await?
            {
                warn!(attempt, "Tracking identifier collision, regenerating");
                continue;
            }

            let complaint = Complaint::new(
                self.ctx.generate_id(),
                tracking_id,
                request.title.clone(),
                request.description.clone(),
                request.category,
                agency,
                request.name.clone(),
                request.email.clone(),
            )
            .with_location(request.location.clone())
            .with_phone(request.phone.clone())
            .with_submitter(submitter_id);

            let initial_event =
                TimelineEvent::new(self.ctx.generate_id(), complaint.id, ComplaintStatus::Pending);

            let attachments: Vec<Attachment> = request
                .attachments
                .iter()
                .map(|a| {
                    Attachment::new(
                        self.ctx.generate_id(),
                        complaint.id,
                        a.filename.clone(),
                        a.url.clone(),
                    )
                })
                .collect();

            match self
                .ctx
                .complaint_repo()
                .create(&complaint, &initial_event, &attachments)
                .await
            {
                Ok(()) => {
                    info!(
                        complaint_id = %complaint.id,
                        tracking_id = %complaint.tracking_id,
                        "Complaint created"
                    );
                    return Ok(CreateComplaintResponse {
                        id: complaint.id,
                        tracking_id: complaint.tracking_id.into_inner(),
                    });
                }
                // A concurrent intake won the identifier between the
                // existence check and the insert; pick a new one.
                Err(DomainError::TrackingIdExists) => {
                    warn!(attempt, "Tracking identifier raced, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::internal(
            "exhausted tracking identifier generation attempts",
        ))
    }

    /// Get a complaint by internal id, with timeline, responses, and attachments
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ComplaintDetailResponse> {
        let complaint = self
            .ctx
            .complaint_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ComplaintNotFound(id))?;

        self.assemble_detail(complaint).await
    }

    /// Look up a complaint by its public tracking identifier
    ///
    /// Input is normalized to uppercase before matching, so a citizen can
    /// paste the token in any case.
    #[instrument(skip(self))]
    pub async fn lookup(&self, raw_tracking_id: &str) -> ServiceResult<ComplaintDetailResponse> {
        let normalized = raw_tracking_id.trim().to_ascii_uppercase();
        let tracking_id = TrackingId::parse(&normalized)
            .map_err(|_| DomainError::TrackingIdNotFound(normalized.clone()))?;

        let complaint = self
            .ctx
            .complaint_repo()
            .find_by_tracking_id(&tracking_id)
            .await?
            .ok_or_else(|| DomainError::TrackingIdNotFound(normalized))?;

        self.assemble_detail(complaint).await
    }

    /// Most recent complaints, newest first
    #[instrument(skip(self))]
    pub async fn recent(&self, limit: Option<i64>) -> ServiceResult<Vec<ComplaintResponse>> {
        let limit = limit
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .clamp(1, MAX_RECENT_LIMIT);

        let complaints = self.ctx.complaint_repo().recent(limit).await?;
        Ok(complaints.iter().map(ComplaintResponse::from).collect())
    }

    /// List complaints matching all supplied filter dimensions, newest first
    #[instrument(skip(self, query))]
    pub async fn list(&self, query: ListComplaintsQuery) -> ServiceResult<Vec<ComplaintResponse>> {
        let filter = ComplaintFilter {
            status: query.status,
            category: query.category,
            agency: query.agency,
            search: query.search,
            date_range: query.date_range,
            limit: query.limit,
        };

        let complaints = self.ctx.complaint_repo().list(&filter).await?;
        Ok(complaints.iter().map(ComplaintResponse::from).collect())
    }

    /// Transition a complaint to a new status
    ///
    /// Any of the four statuses is a legal target; the narrowing the admin
    /// surface offers per current status is not enforced here. The status
    /// change and its timeline entry are persisted atomically.
    #[instrument(skip(self, note))]
    pub async fn transition(
        &self,
        id: Uuid,
        status: ComplaintStatus,
        note: Option<String>,
    ) -> ServiceResult<ComplaintResponse> {
        let mut complaint = self
            .ctx
            .complaint_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ComplaintNotFound(id))?;

        let previous = complaint.status;
        complaint.transition(status);

        let event = TimelineEvent::new(self.ctx.generate_id(), complaint.id, status).with_note(note);

        self.ctx
            .complaint_repo()
            .update_status(&complaint, &event)
            .await?;

        info!(
            complaint_id = %complaint.id,
            from = %previous,
            to = %status,
            "Complaint status changed"
        );

        Ok(ComplaintResponse::from(&complaint))
    }

    /// Append a staff response to a complaint
    ///
    /// Does not change status; the admin surface issues a separate
    /// transition when both are wanted.
    #[instrument(skip(self, message))]
    pub async fn respond(
        &self,
        complaint_id: Uuid,
        respondent_id: Uuid,
        message: String,
    ) -> ServiceResult<ResponseMessageResponse> {
        if message.trim().is_empty() {
            return Err(ServiceError::validation("Response message cannot be empty"));
        }

        // Complaint must exist
        self.ctx
            .complaint_repo()
            .find_by_id(complaint_id)
            .await?
            .ok_or(DomainError::ComplaintNotFound(complaint_id))?;

        // Respondent must be a provisioned admin
        let respondent = self
            .ctx
            .user_repo()
            .find_by_id(respondent_id)
            .await?
            .ok_or(DomainError::UserNotFound(respondent_id))?;

        if !respondent.is_admin() {
            return Err(ServiceError::permission_denied("role ADMIN"));
        }

        let response = Response::new(
            self.ctx.generate_id(),
            complaint_id,
            respondent_id,
            message,
        );
        self.ctx.response_repo().create(&response).await?;

        info!(
            complaint_id = %complaint_id,
            respondent_id = %respondent_id,
            "Response recorded"
        );

        Ok(ResponseMessageResponse {
            id: response.id,
            message: response.message,
            respondent: Some(RespondentResponse::from(&respondent)),
            created_at: response.created_at,
        })
    }

    /// Delete a complaint and its sub-records
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.complaint_repo().delete(id).await?;
        info!(complaint_id = %id, "Complaint deleted");
        Ok(())
    }

    /// Aggregate statistics over the current record set
    ///
    /// Computed from the store at call time, so a transition is visible to
    /// the very next call.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<StatsResponse> {
        let stats = self.ctx.complaint_repo().stats().await?;

        Ok(StatsResponse {
            total: stats.total,
            pending: stats.by_status.pending,
            in_progress: stats.by_status.in_progress,
            resolved: stats.by_status.resolved,
            rejected: stats.by_status.rejected,
            categories: stats
                .categories
                .into_iter()
                .map(|c| CategoryCountResponse {
                    category: c.category,
                    label: c.category.label(),
                    count: c.count,
                })
                .collect(),
        })
    }

    /// Attach timeline, responses (with author details), and attachments
    async fn assemble_detail(
        &self,
        complaint: Complaint,
    ) -> ServiceResult<ComplaintDetailResponse> {
        let timeline = self
            .ctx
            .timeline_repo()
            .find_by_complaint(complaint.id)
            .await?;
        let responses = self
            .ctx
            .response_repo()
            .find_by_complaint(complaint.id)
            .await?;
        let attachments = self
            .ctx
            .attachment_repo()
            .find_by_complaint(complaint.id)
            .await?;

        // Resolve respondent details once per distinct author
        let mut respondents: HashMap<Uuid, User> = HashMap::new();
        for response in &responses {
            if respondents.contains_key(&response.respondent_id) {
                continue;
            }
            if let Some(user) = self
                .ctx
                .user_repo()
                .find_by_id(response.respondent_id)
                .await?
            {
                respondents.insert(response.respondent_id, user);
            }
        }

        Ok(ComplaintDetailResponse {
            complaint: ComplaintResponse::from(&complaint),
            timeline: timeline.iter().map(TimelineEventResponse::from).collect(),
            responses: responses
                .iter()
                .map(|r| ResponseMessageResponse {
                    id: r.id,
                    message: r.message.clone(),
                    respondent: respondents
                        .get(&r.respondent_id)
                        .map(RespondentResponse::from),
                    created_at: r.created_at,
                })
                .collect(),
            attachments: attachments
                .iter()
                .map(crate::dto::AttachmentResponse::from)
                .collect(),
        })
    }
}
