use crate::domain::{
    academic_department::{
        entities::AcademicDepartment,
        value_objects::{CreateAcademicDepartmentInput, UpdateAcademicDepartmentInput},
    },
    common::entities::app_errors::CoreError,
    document::value_objects::Document,
    query::{pagination::Paginated, value_objects::RawParameters},
};

#[cfg_attr(test, mockall::automock)]
pub trait AcademicDepartmentService: Send + Sync {
    fn create_department(
        &self,
        input: CreateAcademicDepartmentInput,
    ) -> impl Future<Output = Result<AcademicDepartment, CoreError>> + Send;

    /// Rows carry their academic faculty populated.
    fn get_all_departments(
        &self,
        params: RawParameters,
    ) -> impl Future<Output = Result<Paginated<Document>, CoreError>> + Send;

    fn get_single_department(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Option<AcademicDepartment>, CoreError>> + Send;

    fn update_department(
        &self,
        id: String,
        input: UpdateAcademicDepartmentInput,
    ) -> impl Future<Output = Result<AcademicDepartment, CoreError>> + Send;

    fn delete_department(
        &self,
        id: String,
    ) -> impl Future<Output = Result<AcademicDepartment, CoreError>> + Send;
}
