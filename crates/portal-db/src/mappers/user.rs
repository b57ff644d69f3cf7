//! User entity <-> model mapper
//!
//! The password hash never leaves this layer as part of the entity; it is
//! fetched separately for credential checks.

use portal_core::entities::{Role, User};
use portal_core::error::DomainError;

use crate::models::UserModel;

use super::bad_column;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: Role = model
            .role
            .parse()
            .map_err(|_| bad_column("role", &model.role))?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
