use serde::{Deserialize, Serialize};

use crate::domain::record::entities::NameChanges;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacultyInput {
    pub name: Option<NameChanges>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub contact_no: Option<String>,
    pub emergency_contact_no: Option<String>,
    pub blood_group: Option<String>,
    pub present_address: Option<String>,
    pub permanent_address: Option<String>,
    pub designation: Option<String>,
    pub academic_department: Option<String>,
    pub academic_faculty: Option<String>,
    pub profile_image: Option<String>,
}
