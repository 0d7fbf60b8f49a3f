use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{generate_timestamp, generate_uuid_v7},
    record::{CollectionSchema, Record},
};

pub const ACADEMIC_FACULTY_COLLECTION: &str = "academic_faculties";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicFaculty {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AcademicFaculty {
    pub fn new(title: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7().to_string(),
            title,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for AcademicFaculty {
    const SCHEMA: CollectionSchema = CollectionSchema {
        name: ACADEMIC_FACULTY_COLLECTION,
        searchable_fields: &["title"],
        flattenable: &[],
        references: &[],
        linked: None,
    };
}
