use crate::domain::{
    academic_faculty::{
        entities::AcademicFaculty,
        value_objects::{CreateAcademicFacultyInput, UpdateAcademicFacultyInput},
    },
    common::entities::app_errors::CoreError,
    document::value_objects::Document,
    query::{pagination::Paginated, value_objects::RawParameters},
};

#[cfg_attr(test, mockall::automock)]
pub trait AcademicFacultyService: Send + Sync {
    fn create_academic_faculty(
        &self,
        input: CreateAcademicFacultyInput,
    ) -> impl Future<Output = Result<AcademicFaculty, CoreError>> + Send;

    fn get_all_academic_faculties(
        &self,
        params: RawParameters,
    ) -> impl Future<Output = Result<Paginated<Document>, CoreError>> + Send;

    fn get_single_academic_faculty(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Option<AcademicFaculty>, CoreError>> + Send;

    fn update_academic_faculty(
        &self,
        id: String,
        input: UpdateAcademicFacultyInput,
    ) -> impl Future<Output = Result<AcademicFaculty, CoreError>> + Send;

    fn delete_academic_faculty(
        &self,
        id: String,
    ) -> impl Future<Output = Result<AcademicFaculty, CoreError>> + Send;
}
