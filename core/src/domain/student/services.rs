use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::AcademiaService},
    document::{ports::DocumentStore, value_objects::Document},
    query::{pagination::Paginated, value_objects::RawParameters},
    record::{
        Record,
        services::{delete_record, get_record, list_records, update_record},
    },
    student::{entities::Student, ports::StudentService, value_objects::UpdateStudentInput},
};

impl<S> StudentService for AcademiaService<S>
where
    S: DocumentStore,
{
    #[instrument(skip(self))]
    async fn get_all_students(
        &self,
        params: RawParameters,
    ) -> Result<Paginated<Document>, CoreError> {
        list_records(&self.store, &self.translator, &Student::SCHEMA, &params).await
    }

    #[instrument(skip(self))]
    async fn get_single_student(&self, id: String) -> Result<Option<Student>, CoreError> {
        get_record(&self.store, &id).await
    }

    #[instrument(skip(self))]
    async fn update_student(
        &self,
        id: String,
        input: UpdateStudentInput,
    ) -> Result<Student, CoreError> {
        update_record(&self.store, &id, &input).await
    }

    #[instrument(skip(self))]
    async fn delete_student(&self, id: String) -> Result<Student, CoreError> {
        delete_record(&self.store, &id).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        academic_semester::{
            ports::AcademicSemesterService, value_objects::CreateAcademicSemesterInput,
        },
        common::services::test_support::in_memory_service,
        student::value_objects::{GuardianChanges, LocalGuardianChanges},
    };
    use crate::infrastructure::memory::InMemoryDocumentStore;

    async fn seed(service: &AcademiaService<InMemoryDocumentStore>) -> String {
        let semester = service
            .create_semester(CreateAcademicSemesterInput {
                title: "Autumn".to_string(),
                year: "2025".to_string(),
                code: "01".to_string(),
                start_month: "September".to_string(),
                end_month: "December".to_string(),
            })
            .await
            .unwrap();

        let students = [
            ("00021", "Marie", "Curie", "female", "O+"),
            ("00022", "Pierre", "Curie", "male", "A+"),
            ("00023", "Lise", "Meitner", "female", "O+"),
        ];
        for (id, first, last, gender, blood_group) in students {
            service
                .store()
                .insert(
                    "students",
                    json!({
                        "id": id,
                        "name": { "firstName": first, "lastName": last },
                        "gender": gender,
                        "bloodGroup": blood_group,
                        "email": format!("{}@example.com", first.to_lowercase()),
                        "contactNo": "0190000000",
                        "guardian": {
                            "fatherName": "Father",
                            "motherName": "Mother",
                            "address": "Warsaw",
                        },
                        "localGuardian": {
                            "name": "Local",
                            "contactNo": "0191111111",
                        },
                        "academicSemester": semester.id,
                        "academicDepartment": "d-1",
                        "academicFaculty": "f-1",
                    }),
                )
                .await
                .unwrap();
            service
                .store()
                .insert("users", json!({ "id": id, "role": "student", "password": "x" }))
                .await
                .unwrap();
        }

        semester.id
    }

    #[tokio::test]
    async fn test_search_combined_with_exact_filters() {
        let service = in_memory_service();
        seed(&service).await;

        let page = service
            .get_all_students(RawParameters::from_pairs(&[
                ("search", "curie"),
                ("gender", "female"),
                ("bloodGroup", "O+"),
            ]))
            .await
            .unwrap();

        assert_eq!(page.meta.total, 1);
        assert_eq!(page.data[0]["id"], json!("00021"));
    }

    #[tokio::test]
    async fn test_single_student_has_populated_semester() {
        let service = in_memory_service();
        let semester_id = seed(&service).await;

        let student = service
            .get_single_student("00023".to_string())
            .await
            .unwrap()
            .unwrap();

        let semester = student.academic_semester.populated().unwrap();
        assert_eq!(semester.id, semester_id);
        assert_eq!(semester.code, "01");
        assert_eq!(student.academic_department.as_id(), Some("d-1"));
    }

    #[tokio::test]
    async fn test_update_merges_guardian_leaves() {
        let service = in_memory_service();
        seed(&service).await;

        let updated = service
            .update_student(
                "00022".to_string(),
                UpdateStudentInput {
                    guardian: Some(GuardianChanges {
                        father_occupation: Some("Physicist".to_string()),
                        ..Default::default()
                    }),
                    local_guardian: Some(LocalGuardianChanges {
                        address: Some("Paris".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.guardian.father_name, "Father");
        assert_eq!(updated.guardian.father_occupation.as_deref(), Some("Physicist"));
        assert_eq!(updated.guardian.address.as_deref(), Some("Warsaw"));
        assert_eq!(updated.local_guardian.name, "Local");
        assert_eq!(updated.local_guardian.address.as_deref(), Some("Paris"));
    }

    #[tokio::test]
    async fn test_delete_student_cascades() {
        let service = in_memory_service();
        seed(&service).await;

        let removed = service.delete_student("00021".to_string()).await.unwrap();
        assert_eq!(removed.name.first_name, "Marie");
        assert!(
            service
                .store()
                .find_by_id("users", "00021")
                .await
                .unwrap()
                .is_none()
        );

        assert_eq!(
            service.delete_student("00021".to_string()).await,
            Err(CoreError::NotFound)
        );
    }
}
