//! Response entity <-> model mapper

use portal_core::entities::Response;

use crate::models::ResponseModel;

impl From<ResponseModel> for Response {
    fn from(model: ResponseModel) -> Self {
        Response {
            id: model.id,
            complaint_id: model.complaint_id,
            respondent_id: model.respondent_id,
            message: model.message,
            created_at: model.created_at,
        }
    }
}
