//! Admin complaint handlers
//!
//! Every handler here takes the `AdminUser` extractor - the single
//! authorization predicate for the admin surface. Unauthenticated requests
//! get 401, authenticated non-admins get 403, before any handler code runs.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use portal_service::{
    ComplaintDetailResponse, ComplaintResponse, ComplaintService, DeleteResponse,
    ListComplaintsQuery, RespondRequest, ResponseMessageResponse, StatsResponse,
    UpdateStatusRequest,
};
use uuid::Uuid;

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_complaint_id(raw: &str) -> ApiResult<Uuid> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid complaint id format"))
}

/// Filtered and searched complaint list
///
/// GET /admin/complaints
pub async fn list_complaints(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ListComplaintsQuery>,
) -> ApiResult<Json<Vec<ComplaintResponse>>> {
    let service = ComplaintService::new(state.service_context());
    let response = service.list(query).await?;
    Ok(Json(response))
}

/// Complaint detail for the admin surface
///
/// GET /admin/complaints/{id}
pub async fn get_complaint(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ComplaintDetailResponse>> {
    let id = parse_complaint_id(&id)?;

    let service = ComplaintService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}

/// Transition a complaint's status, optionally recording a response
///
/// PATCH /admin/complaints/{id}
///
/// When the body carries a `response` message, the transition and the
/// response are issued as two service calls, matching the combined action
/// the admin surface offers.
pub async fn update_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> ApiResult<Json<ComplaintResponse>> {
    let id = parse_complaint_id(&id)?;

    let service = ComplaintService::new(state.service_context());
    let updated = service
        .transition(id, request.status, request.note)
        .await?;

    if let Some(message) = request.response.filter(|m| !m.trim().is_empty()) {
        service.respond(id, admin.0.user_id, message).await?;
    }

    Ok(Json(updated))
}

/// Record a staff response on a complaint
///
/// POST /admin/complaints/{id}/respond
pub async fn respond(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<RespondRequest>,
) -> ApiResult<Created<Json<ResponseMessageResponse>>> {
    let id = parse_complaint_id(&id)?;

    let service = ComplaintService::new(state.service_context());
    let response = service.respond(id, admin.0.user_id, request.message).await?;
    Ok(Created(Json(response)))
}

/// Delete a complaint and its sub-records
///
/// DELETE /admin/complaints/{id}
pub async fn delete_complaint(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_complaint_id(&id)?;

    let service = ComplaintService::new(state.service_context());
    service.delete(id).await?;
    Ok(Json(DeleteResponse::ok()))
}

/// Aggregate statistics for the dashboard
///
/// GET /admin/complaints/stats
pub async fn stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<StatsResponse>> {
    let service = ComplaintService::new(state.service_context());
    let response = service.stats().await?;
    Ok(Json(response))
}
