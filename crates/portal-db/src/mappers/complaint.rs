//! Complaint entity <-> model mapper

use portal_core::entities::{Complaint, ComplaintStatus};
use portal_core::error::DomainError;
use portal_core::value_objects::{Agency, Category, TrackingId};

use crate::models::ComplaintModel;

/// Error for a stored column that no longer parses into its domain type
pub(crate) fn bad_column(column: &str, value: &str) -> DomainError {
    DomainError::DatabaseError(format!("invalid {column} value in row: {value}"))
}

impl TryFrom<ComplaintModel> for Complaint {
    type Error = DomainError;

    fn try_from(model: ComplaintModel) -> Result<Self, Self::Error> {
        let tracking_id = TrackingId::parse(&model.tracking_id)
            .map_err(|_| bad_column("tracking_id", &model.tracking_id))?;
        let category: Category = model
            .category
            .parse()
            .map_err(|_| bad_column("category", &model.category))?;
        let agency: Agency = model
            .agency
            .parse()
            .map_err(|_| bad_column("agency", &model.agency))?;
        let status: ComplaintStatus = model
            .status
            .parse()
            .map_err(|_| bad_column("status", &model.status))?;

        Ok(Complaint {
            id: model.id,
            tracking_id,
            title: model.title,
            description: model.description,
            category,
            agency,
            location: model.location,
            phone: model.phone,
            name: model.name,
            email: model.email,
            status,
            submitter_id: model.submitter_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
