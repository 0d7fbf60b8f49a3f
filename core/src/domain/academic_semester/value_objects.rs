use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcademicSemesterInput {
    pub title: String,
    pub year: String,
    pub code: String,
    pub start_month: String,
    pub end_month: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAcademicSemesterInput {
    pub title: Option<String>,
    pub year: Option<String>,
    pub code: Option<String>,
    pub start_month: Option<String>,
    pub end_month: Option<String>,
}
