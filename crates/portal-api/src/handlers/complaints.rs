//! Public complaint handlers
//!
//! Intake, tracking, recent list, statistics, and single-complaint reads.
//! None of these require authentication; intake links the submitter's
//! account when a valid token happens to be present.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use portal_service::{
    ComplaintDetailResponse, ComplaintResponse, ComplaintService, CreateComplaintRequest,
    CreateComplaintResponse, RecentQuery, StatsResponse, TrackQuery,
};
use uuid::Uuid;

use crate::extractors::{OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Submit a new complaint
///
/// POST /complaints
pub async fn create_complaint(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<CreateComplaintRequest>,
) -> ApiResult<Created<Json<CreateComplaintResponse>>> {
    let service = ComplaintService::new(state.service_context());
    let submitter_id = auth.0.map(|user| user.user_id);
    let response = service.create(request, submitter_id).await?;
    Ok(Created(Json(response)))
}

/// Recent complaints, newest first
///
/// GET /complaints?limit=N
pub async fn recent_complaints(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> ApiResult<Json<Vec<ComplaintResponse>>> {
    let service = ComplaintService::new(state.service_context());
    let response = service.recent(query.limit).await?;
    Ok(Json(response))
}

/// Look up a complaint by its public tracking identifier
///
/// GET /complaints/track?tracking_id=XXX
pub async fn track_complaint(
    State(state): State<AppState>,
    Query(query): Query<TrackQuery>,
) -> ApiResult<Json<ComplaintDetailResponse>> {
    let tracking_id = query
        .tracking_id
        .ok_or_else(|| ApiError::invalid_query("tracking_id is required"))?;

    let service = ComplaintService::new(state.service_context());
    let response = service.lookup(&tracking_id).await?;
    Ok(Json(response))
}

/// Aggregate complaint statistics
///
/// GET /complaints/stats
pub async fn complaint_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<StatsResponse>> {
    let service = ComplaintService::new(state.service_context());
    let response = service.stats().await?;
    Ok(Json(response))
}

/// Get a single complaint with its timeline, responses, and attachments
///
/// GET /complaints/{id}
pub async fn get_complaint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ComplaintDetailResponse>> {
    let id: Uuid = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid complaint id format"))?;

    let service = ComplaintService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}
