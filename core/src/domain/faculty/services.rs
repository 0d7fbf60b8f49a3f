use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::AcademiaService},
    document::{ports::DocumentStore, value_objects::Document},
    faculty::{entities::Faculty, ports::FacultyService, value_objects::UpdateFacultyInput},
    query::{pagination::Paginated, value_objects::RawParameters},
    record::{
        Record,
        services::{delete_record, get_record, list_records, update_record},
    },
};

impl<S> FacultyService for AcademiaService<S>
where
    S: DocumentStore,
{
    #[instrument(skip(self))]
    async fn get_all_faculties(
        &self,
        params: RawParameters,
    ) -> Result<Paginated<Document>, CoreError> {
        list_records(&self.store, &self.translator, &Faculty::SCHEMA, &params).await
    }

    #[instrument(skip(self))]
    async fn get_single_faculty(&self, id: String) -> Result<Option<Faculty>, CoreError> {
        get_record(&self.store, &id).await
    }

    #[instrument(skip(self))]
    async fn update_faculty(
        &self,
        id: String,
        input: UpdateFacultyInput,
    ) -> Result<Faculty, CoreError> {
        update_record(&self.store, &id, &input).await
    }

    #[instrument(skip(self))]
    async fn delete_faculty(&self, id: String) -> Result<Faculty, CoreError> {
        delete_record(&self.store, &id).await
    }
}
