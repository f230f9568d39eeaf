//! Session entity <-> model mapper

use pha_core::entities::Session;
use pha_core::value_objects::UserId;

use crate::models::SessionModel;

/// Convert SessionModel to Session entity
impl From<SessionModel> for Session {
    fn from(model: SessionModel) -> Self {
        Session {
            id: model.id,
            user_id: UserId::new(model.user_id),
            refresh_token: model.refresh_token,
            user_agent: model.user_agent,
            client_ip: model.client_ip,
            is_blocked: model.is_blocked,
            expired_at: model.expired_at,
            created_at: model.created_at,
        }
    }
}
