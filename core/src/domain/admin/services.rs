use tracing::instrument;

use crate::domain::{
    admin::{entities::Admin, ports::AdminService, value_objects::UpdateAdminInput},
    common::{entities::app_errors::CoreError, services::AcademiaService},
    document::{ports::DocumentStore, value_objects::Document},
    query::{pagination::Paginated, value_objects::RawParameters},
    record::{
        Record,
        services::{delete_record, get_record, list_records, update_record},
    },
};

impl<S> AdminService for AcademiaService<S>
where
    S: DocumentStore,
{
    #[instrument(skip(self))]
    async fn get_all_admins(&self, params: RawParameters) -> Result<Paginated<Document>, CoreError> {
        list_records(&self.store, &self.translator, &Admin::SCHEMA, &params).await
    }

    #[instrument(skip(self))]
    async fn get_single_admin(&self, id: String) -> Result<Option<Admin>, CoreError> {
        get_record(&self.store, &id).await
    }

    #[instrument(skip(self))]
    async fn update_admin(&self, id: String, input: UpdateAdminInput) -> Result<Admin, CoreError> {
        update_record(&self.store, &id, &input).await
    }

    #[instrument(skip(self))]
    async fn delete_admin(&self, id: String) -> Result<Admin, CoreError> {
        delete_record(&self.store, &id).await
    }
}
