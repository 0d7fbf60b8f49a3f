use crate::domain::{
    admin::{entities::Admin, value_objects::UpdateAdminInput},
    common::entities::app_errors::CoreError,
    document::value_objects::Document,
    query::{pagination::Paginated, value_objects::RawParameters},
};

#[cfg_attr(test, mockall::automock)]
pub trait AdminService: Send + Sync {
    fn get_all_admins(
        &self,
        params: RawParameters,
    ) -> impl Future<Output = Result<Paginated<Document>, CoreError>> + Send;

    fn get_single_admin(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Option<Admin>, CoreError>> + Send;

    fn update_admin(
        &self,
        id: String,
        input: UpdateAdminInput,
    ) -> impl Future<Output = Result<Admin, CoreError>> + Send;

    /// Removes the admin and its user account in one transaction.
    fn delete_admin(&self, id: String) -> impl Future<Output = Result<Admin, CoreError>> + Send;
}
