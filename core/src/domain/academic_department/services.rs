use tracing::instrument;

use crate::domain::{
    academic_department::{
        entities::AcademicDepartment,
        ports::AcademicDepartmentService,
        value_objects::{CreateAcademicDepartmentInput, UpdateAcademicDepartmentInput},
    },
    common::{entities::app_errors::CoreError, services::AcademiaService},
    document::{ports::DocumentStore, value_objects::Document},
    query::{pagination::Paginated, value_objects::RawParameters},
    record::{
        Record,
        services::{create_record, delete_record, get_record, list_records, update_record},
    },
};

impl<S> AcademicDepartmentService for AcademiaService<S>
where
    S: DocumentStore,
{
    #[instrument(skip(self))]
    async fn create_department(
        &self,
        input: CreateAcademicDepartmentInput,
    ) -> Result<AcademicDepartment, CoreError> {
        let department = AcademicDepartment::new(input.title, input.academic_faculty);
        create_record(&self.store, &department).await
    }

    #[instrument(skip(self))]
    async fn get_all_departments(
        &self,
        params: RawParameters,
    ) -> Result<Paginated<Document>, CoreError> {
        list_records(
            &self.store,
            &self.translator,
            &AcademicDepartment::SCHEMA,
            &params,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_single_department(
        &self,
        id: String,
    ) -> Result<Option<AcademicDepartment>, CoreError> {
        get_record(&self.store, &id).await
    }

    #[instrument(skip(self))]
    async fn update_department(
        &self,
        id: String,
        input: UpdateAcademicDepartmentInput,
    ) -> Result<AcademicDepartment, CoreError> {
        update_record(&self.store, &id, &input).await
    }

    #[instrument(skip(self))]
    async fn delete_department(&self, id: String) -> Result<AcademicDepartment, CoreError> {
        delete_record(&self.store, &id).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        academic_faculty::{
            ports::AcademicFacultyService, value_objects::CreateAcademicFacultyInput,
        },
        common::services::test_support::in_memory_service,
    };

    #[tokio::test]
    async fn test_department_reads_populate_academic_faculty() {
        let service = in_memory_service();
        let faculty = service
            .create_academic_faculty(CreateAcademicFacultyInput {
                title: "Faculty of Science".to_string(),
            })
            .await
            .unwrap();
        let department = service
            .create_department(CreateAcademicDepartmentInput {
                title: "Physics".to_string(),
                academic_faculty: faculty.id.clone(),
            })
            .await
            .unwrap();
        assert_eq!(department.academic_faculty.as_id(), Some(faculty.id.as_str()));

        let single = service
            .get_single_department(department.id.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(single.academic_faculty.populated(), Some(&faculty));

        let page = service
            .get_all_departments(RawParameters::from_pairs(&[("search", "phy")]))
            .await
            .unwrap();
        assert_eq!(page.meta.total, 1);
        assert_eq!(
            page.data[0]["academicFaculty"]["title"],
            json!("Faculty of Science")
        );
    }

    #[tokio::test]
    async fn test_update_moves_department_to_other_faculty() {
        let service = in_memory_service();
        let department = service
            .create_department(CreateAcademicDepartmentInput {
                title: "Chemistry".to_string(),
                academic_faculty: "f-1".to_string(),
            })
            .await
            .unwrap();

        let updated = service
            .update_department(
                department.id.clone(),
                UpdateAcademicDepartmentInput {
                    academic_faculty: Some("f-2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Chemistry");
        assert_eq!(updated.academic_faculty.as_id(), Some("f-2"));
    }

    #[tokio::test]
    async fn test_update_missing_department_is_not_found() {
        let service = in_memory_service();
        assert_eq!(
            service
                .update_department("missing".to_string(), Default::default())
                .await,
            Err(CoreError::NotFound)
        );
    }
}
