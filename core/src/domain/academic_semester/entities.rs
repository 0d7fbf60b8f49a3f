use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    academic_semester::value_objects::CreateAcademicSemesterInput,
    common::{generate_timestamp, generate_uuid_v7},
    record::{CollectionSchema, Record},
};

pub const ACADEMIC_SEMESTER_COLLECTION: &str = "academic_semesters";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicSemester {
    pub id: String,
    pub title: String,
    pub year: String,
    pub code: String,
    pub start_month: String,
    pub end_month: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AcademicSemester {
    pub fn new(input: CreateAcademicSemesterInput) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7().to_string(),
            title: input.title,
            year: input.year,
            code: input.code,
            start_month: input.start_month,
            end_month: input.end_month,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for AcademicSemester {
    const SCHEMA: CollectionSchema = CollectionSchema {
        name: ACADEMIC_SEMESTER_COLLECTION,
        searchable_fields: &["title", "code", "year"],
        flattenable: &[],
        references: &[],
        linked: None,
    };
}
