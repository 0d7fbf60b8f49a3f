use crate::domain::{
    common::entities::app_errors::CoreError,
    document::value_objects::Document,
    query::{pagination::Paginated, value_objects::RawParameters},
    user::{entities::User, value_objects::CreateUserInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    /// Creates a user under the next free numeric id.
    fn create_user(
        &self,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_all_users(
        &self,
        params: RawParameters,
    ) -> impl Future<Output = Result<Paginated<Document>, CoreError>> + Send;

    fn get_single_user(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}
