use tracing::instrument;

use crate::domain::{
    academic_faculty::{
        entities::AcademicFaculty,
        ports::AcademicFacultyService,
        value_objects::{CreateAcademicFacultyInput, UpdateAcademicFacultyInput},
    },
    common::{entities::app_errors::CoreError, services::AcademiaService},
    document::{ports::DocumentStore, value_objects::Document},
    query::{pagination::Paginated, value_objects::RawParameters},
    record::{
        Record,
        services::{create_record, delete_record, get_record, list_records, update_record},
    },
};

impl<S> AcademicFacultyService for AcademiaService<S>
where
    S: DocumentStore,
{
    #[instrument(skip(self))]
    async fn create_academic_faculty(
        &self,
        input: CreateAcademicFacultyInput,
    ) -> Result<AcademicFaculty, CoreError> {
        create_record(&self.store, &AcademicFaculty::new(input.title)).await
    }

    #[instrument(skip(self))]
    async fn get_all_academic_faculties(
        &self,
        params: RawParameters,
    ) -> Result<Paginated<Document>, CoreError> {
        list_records(&self.store, &self.translator, &AcademicFaculty::SCHEMA, &params).await
    }

    #[instrument(skip(self))]
    async fn get_single_academic_faculty(
        &self,
        id: String,
    ) -> Result<Option<AcademicFaculty>, CoreError> {
        get_record(&self.store, &id).await
    }

    #[instrument(skip(self))]
    async fn update_academic_faculty(
        &self,
        id: String,
        input: UpdateAcademicFacultyInput,
    ) -> Result<AcademicFaculty, CoreError> {
        update_record(&self.store, &id, &input).await
    }

    #[instrument(skip(self))]
    async fn delete_academic_faculty(&self, id: String) -> Result<AcademicFaculty, CoreError> {
        delete_record(&self.store, &id).await
    }
}
