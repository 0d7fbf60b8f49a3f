use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::generate_timestamp,
    record::{CollectionSchema, Record},
};

pub const USER_COLLECTION: &str = "users";

/// Width of a generated user id (`00001`).
pub const USER_ID_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Faculty,
    Admin,
    SuperAdmin,
}

/// Login account. Admins, faculty members and students own the user with
/// their own `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub role: UserRole,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: String, role: UserRole, password: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id,
            role,
            password,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for User {
    const SCHEMA: CollectionSchema = CollectionSchema {
        name: USER_COLLECTION,
        searchable_fields: &["id", "role"],
        flattenable: &[],
        references: &[],
        linked: None,
    };
}
