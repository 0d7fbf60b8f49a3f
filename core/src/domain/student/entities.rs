use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    academic_department::entities::{ACADEMIC_DEPARTMENT_COLLECTION, AcademicDepartment},
    academic_faculty::entities::{ACADEMIC_FACULTY_COLLECTION, AcademicFaculty},
    academic_semester::entities::{ACADEMIC_SEMESTER_COLLECTION, AcademicSemester},
    record::{
        CollectionSchema, Record,
        entities::{NAME_FIELDS, Name, PERSON_SEARCHABLE_FIELDS, Reference},
    },
    user::entities::USER_COLLECTION,
};

pub const STUDENT_COLLECTION: &str = "students";

pub const GUARDIAN_FIELDS: &[&str] = &[
    "fatherName",
    "fatherOccupation",
    "fatherContactNo",
    "motherName",
    "motherOccupation",
    "motherContactNo",
    "address",
];

pub const LOCAL_GUARDIAN_FIELDS: &[&str] = &["name", "occupation", "contactNo", "address"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub father_name: String,
    pub father_occupation: Option<String>,
    pub father_contact_no: Option<String>,
    pub mother_name: String,
    pub mother_occupation: Option<String>,
    pub mother_contact_no: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalGuardian {
    pub name: String,
    pub occupation: Option<String>,
    pub contact_no: String,
    pub address: Option<String>,
}

/// A student. Shares its `id` with the user account it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
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
    pub guardian: Guardian,
    pub local_guardian: LocalGuardian,
    pub academic_semester: Reference<AcademicSemester>,
    pub academic_department: Reference<AcademicDepartment>,
    pub academic_faculty: Reference<AcademicFaculty>,
    pub profile_image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Student {
    const SCHEMA: CollectionSchema = CollectionSchema {
        name: STUDENT_COLLECTION,
        searchable_fields: PERSON_SEARCHABLE_FIELDS,
        flattenable: &[
            ("name", NAME_FIELDS),
            ("guardian", GUARDIAN_FIELDS),
            ("localGuardian", LOCAL_GUARDIAN_FIELDS),
        ],
        references: &[
            ("academicSemester", ACADEMIC_SEMESTER_COLLECTION),
            ("academicDepartment", ACADEMIC_DEPARTMENT_COLLECTION),
            ("academicFaculty", ACADEMIC_FACULTY_COLLECTION),
        ],
        linked: Some(USER_COLLECTION),
    };
}
