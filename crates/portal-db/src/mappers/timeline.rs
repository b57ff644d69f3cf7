//! Timeline event entity <-> model mapper

use portal_core::entities::{ComplaintStatus, TimelineEvent};
use portal_core::error::DomainError;

use crate::models::TimelineEventModel;

use super::bad_column;

impl TryFrom<TimelineEventModel> for TimelineEvent {
    type Error = DomainError;

    fn try_from(model: TimelineEventModel) -> Result<Self, Self::Error> {
        let status: ComplaintStatus = model
            .status
            .parse()
            .map_err(|_| bad_column("status", &model.status))?;

        Ok(TimelineEvent {
            id: model.id,
            complaint_id: model.complaint_id,
            status,
            note: model.note,
            created_at: model.created_at,
        })
    }
}
