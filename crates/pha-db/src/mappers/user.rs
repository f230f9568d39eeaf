//! User entity <-> model mapper

use pha_core::entities::User;
use pha_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            phone_number: model.phone_number,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
