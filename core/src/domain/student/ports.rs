use crate::domain::{
    common::entities::app_errors::CoreError,
    document::value_objects::Document,
    query::{pagination::Paginated, value_objects::RawParameters},
    student::{entities::Student, value_objects::UpdateStudentInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait StudentService: Send + Sync {
    fn get_all_students(
        &self,
        params: RawParameters,
    ) -> impl Future<Output = Result<Paginated<Document>, CoreError>> + Send;

    fn get_single_student(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Option<Student>, CoreError>> + Send;

    fn update_student(
        &self,
        id: String,
        input: UpdateStudentInput,
    ) -> impl Future<Output = Result<Student, CoreError>> + Send;

    /// Removes the student and its user account in one transaction.
    fn delete_student(&self, id: String)
    -> impl Future<Output = Result<Student, CoreError>> + Send;
}
