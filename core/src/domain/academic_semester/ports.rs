use crate::domain::{
    academic_semester::{
        entities::AcademicSemester,
        value_objects::{CreateAcademicSemesterInput, UpdateAcademicSemesterInput},
    },
    common::entities::app_errors::CoreError,
    document::value_objects::Document,
    query::{pagination::Paginated, value_objects::RawParameters},
};

#[cfg_attr(test, mockall::automock)]
pub trait AcademicSemesterService: Send + Sync {
    /// Fails with `InvalidSemesterCode` when the code does not belong to the
    /// title, and with `Conflict` when the title already exists for the year.
    fn create_semester(
        &self,
        input: CreateAcademicSemesterInput,
    ) -> impl Future<Output = Result<AcademicSemester, CoreError>> + Send;

    fn get_all_semesters(
        &self,
        params: RawParameters,
    ) -> impl Future<Output = Result<Paginated<Document>, CoreError>> + Send;

    fn get_single_semester(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Option<AcademicSemester>, CoreError>> + Send;

    /// Applies the creation rules to the semester as it would be after the
    /// change.
    fn update_semester(
        &self,
        id: String,
        input: UpdateAcademicSemesterInput,
    ) -> impl Future<Output = Result<AcademicSemester, CoreError>> + Send;

    fn delete_semester(
        &self,
        id: String,
    ) -> impl Future<Output = Result<AcademicSemester, CoreError>> + Send;
}
