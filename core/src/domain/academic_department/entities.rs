use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    academic_faculty::entities::{ACADEMIC_FACULTY_COLLECTION, AcademicFaculty},
    common::{generate_timestamp, generate_uuid_v7},
    record::{CollectionSchema, Record, entities::Reference},
};

pub const ACADEMIC_DEPARTMENT_COLLECTION: &str = "academic_departments";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicDepartment {
    pub id: String,
    pub title: String,
    pub academic_faculty: Reference<AcademicFaculty>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AcademicDepartment {
    pub fn new(title: String, academic_faculty: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7().to_string(),
            title,
            academic_faculty: Reference::Id(academic_faculty),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for AcademicDepartment {
    const SCHEMA: CollectionSchema = CollectionSchema {
        name: ACADEMIC_DEPARTMENT_COLLECTION,
        searchable_fields: &["title"],
        flattenable: &[],
        references: &[("academicFaculty", ACADEMIC_FACULTY_COLLECTION)],
        linked: None,
    };
}
