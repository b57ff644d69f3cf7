//! Attachment entity <-> model mapper

use portal_core::entities::Attachment;

use crate::models::AttachmentModel;

impl From<AttachmentModel> for Attachment {
    fn from(model: AttachmentModel) -> Self {
        Attachment {
            id: model.id,
            complaint_id: model.complaint_id,
            filename: model.filename,
            url: model.url,
            created_at: model.created_at,
        }
    }
}
