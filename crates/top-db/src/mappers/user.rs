//! User entity <-> model mapper

use top_core::entities::{Status, User, UserDraft};

use super::{BindValue, PgResource};
use crate::models::UserModel;

/// Convert a stored status code; the table's CHECK constraint only admits 0 and 1
pub(crate) fn parse_status(code: i16) -> Status {
    Status::from_code(code).unwrap_or(Status::Inactive)
}

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            phone: model.phone,
            status: parse_status(model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl PgResource for User {
    type Model = UserModel;

    const COLUMNS: &'static str =
        "id, username, email, phone, status, created_at, updated_at, deleted_at";

    const WRITE_COLUMNS: &'static [&'static str] = &["username", "email", "phone", "status"];

    fn draft_values(draft: &UserDraft) -> Vec<BindValue> {
        vec![
            BindValue::Text(draft.username.clone()),
            BindValue::Text(draft.email.clone()),
            BindValue::Text(draft.phone.clone()),
            BindValue::SmallInt(draft.status.code()),
        ]
    }

    fn record_values(&self) -> Vec<BindValue> {
        vec![
            BindValue::Text(self.username.clone()),
            BindValue::Text(self.email.clone()),
            BindValue::Text(self.phone.clone()),
            BindValue::SmallInt(self.status.code()),
        ]
    }
}
