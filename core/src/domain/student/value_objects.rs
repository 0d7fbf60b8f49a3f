use serde::{Deserialize, Serialize};

use crate::domain::record::entities::NameChanges;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianChanges {
    pub father_name: Option<String>,
    pub father_occupation: Option<String>,
    pub father_contact_no: Option<String>,
    pub mother_name: Option<String>,
    pub mother_occupation: Option<String>,
    pub mother_contact_no: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalGuardianChanges {
    pub name: Option<String>,
    pub occupation: Option<String>,
    pub contact_no: Option<String>,
    pub address: Option<String>,
}

/// Partial student change. Name and guardian objects are merged leaf by
/// leaf with what is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentInput {
    pub name: Option<NameChanges>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub contact_no: Option<String>,
    pub emergency_contact_no: Option<String>,
    pub blood_group: Option<String>,
    pub present_address: Option<String>,
    pub permanent_address: Option<String>,
    pub guardian: Option<GuardianChanges>,
    pub local_guardian: Option<LocalGuardianChanges>,
    pub academic_semester: Option<String>,
    pub academic_department: Option<String>,
    pub academic_faculty: Option<String>,
    pub profile_image: Option<String>,
}
