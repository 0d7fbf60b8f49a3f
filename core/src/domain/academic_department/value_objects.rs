use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcademicDepartmentInput {
    pub title: String,
    /// Id of the owning academic faculty.
    pub academic_faculty: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcademicDepartmentInput {
    pub title: Option<String>,
    pub academic_faculty: Option<String>,
}
