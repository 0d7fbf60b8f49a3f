use crate::domain::{
    common::entities::app_errors::CoreError,
    document::value_objects::Document,
    faculty::{entities::Faculty, value_objects::UpdateFacultyInput},
    query::{pagination::Paginated, value_objects::RawParameters},
};

#[cfg_attr(test, mockall::automock)]
pub trait FacultyService: Send + Sync {
    fn get_all_faculties(
        &self,
        params: RawParameters,
    ) -> impl Future<Output = Result<Paginated<Document>, CoreError>> + Send;

    fn get_single_faculty(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Option<Faculty>, CoreError>> + Send;

    fn update_faculty(
        &self,
        id: String,
        input: UpdateFacultyInput,
    ) -> impl Future<Output = Result<Faculty, CoreError>> + Send;

    /// Removes the faculty member and its user account in one transaction.
    fn delete_faculty(&self, id: String)
    -> impl Future<Output = Result<Faculty, CoreError>> + Send;
}
