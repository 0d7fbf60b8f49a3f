use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    academic_department::entities::{ACADEMIC_DEPARTMENT_COLLECTION, AcademicDepartment},
    academic_faculty::entities::{ACADEMIC_FACULTY_COLLECTION, AcademicFaculty},
    record::{
        CollectionSchema, Record,
        entities::{NAME_FIELDS, Name, PERSON_SEARCHABLE_FIELDS, Reference},
    },
    user::entities::USER_COLLECTION,
};

pub const FACULTY_COLLECTION: &str = "faculties";

/// A teaching faculty member. Shares its `id` with the user account it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
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
    pub designation: Option<String>,
    pub academic_department: Reference<AcademicDepartment>,
    pub academic_faculty: Reference<AcademicFaculty>,
    pub profile_image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Faculty {
    const SCHEMA: CollectionSchema = CollectionSchema {
        name: FACULTY_COLLECTION,
        searchable_fields: PERSON_SEARCHABLE_FIELDS,
        flattenable: &[("name", NAME_FIELDS)],
        references: &[
            ("academicDepartment", ACADEMIC_DEPARTMENT_COLLECTION),
            ("academicFaculty", ACADEMIC_FACULTY_COLLECTION),
        ],
        linked: Some(USER_COLLECTION),
    };
}
