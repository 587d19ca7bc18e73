//! User entity - an account record with unique username and email

use chrono::{DateTime, Utc};

use super::resource::{apply, FieldValue, Resource, ResourceSpec};
use super::status::Status;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub status: Status,
}

impl UserDraft {
    /// Create a draft with an empty phone and active status
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            phone: String::new(),
            status: Status::Active,
        }
    }
}

/// Partial update of a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<Status>,
}

impl Resource for User {
    type Draft = UserDraft;
    type Patch = UserPatch;

    const SPEC: ResourceSpec = ResourceSpec {
        name: "user",
        table: "users",
        search_columns: &["username", "email"],
        exact_column: None,
        soft_delete: true,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn merge(&mut self, patch: UserPatch) {
        apply(&mut self.username, patch.username);
        apply(&mut self.email, patch.email);
        apply(&mut self.phone, patch.phone);
        apply(&mut self.status, patch.status);
    }

    fn field(&self, column: &str) -> Option<FieldValue<'_>> {
        match column {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "username" => Some(FieldValue::Text(&self.username)),
            "email" => Some(FieldValue::Text(&self.email)),
            "phone" => Some(FieldValue::Text(&self.phone)),
            "status" => Some(FieldValue::Number(f64::from(self.status.code()))),
            _ => None,
        }
    }
}
