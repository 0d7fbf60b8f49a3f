use serde::{Deserialize, Serialize};

use crate::domain::record::entities::NameChanges;

/// Partial admin change; `None` leaves a field as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminInput {
    pub name: Option<NameChanges>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub contact_no: Option<String>,
    pub emergency_contact_no: Option<String>,
    pub blood_group: Option<String>,
    pub present_address: Option<String>,
    pub permanent_address: Option<String>,
    pub management_department: Option<String>,
    pub designation: Option<String>,
    pub profile_image: Option<String>,
}
