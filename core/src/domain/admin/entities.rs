use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    record::{
        CollectionSchema, Record,
        entities::{NAME_FIELDS, Name, PERSON_SEARCHABLE_FIELDS},
    },
    user::entities::USER_COLLECTION,
};

pub const ADMIN_COLLECTION: &str = "admins";

/// An administrator. Shares its `id` with the user account it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub name: Name,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: String,
    pub contact_no: String,
    pub emergency_contact_no: Option<String>,
    pub blood_group: Option<String>,
    pub present_address: Option<String>,
    pub permanent_address: Option<String>,
    pub management_department: Option<String>,
    pub designation: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Admin {
    const SCHEMA: CollectionSchema = CollectionSchema {
        name: ADMIN_COLLECTION,
        searchable_fields: PERSON_SEARCHABLE_FIELDS,
        flattenable: &[("name", NAME_FIELDS)],
        references: &[],
        linked: Some(USER_COLLECTION),
    };
}
