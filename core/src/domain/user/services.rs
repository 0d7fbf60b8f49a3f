use tracing::{debug, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::AcademiaService},
    document::{
        ports::DocumentStore,
        value_objects::{Document, ID_FIELD, document_id},
    },
    query::{
        condition::ConditionExpression,
        pagination::Paginated,
        value_objects::{QuerySpec, RawParameters},
    },
    record::{
        Record,
        services::{create_record, get_record, list_records},
    },
    user::{
        entities::{USER_ID_WIDTH, User},
        ports::UserService,
        value_objects::CreateUserInput,
    },
};

const PASSWORD_FIELD: &str = "password";

/// Next id in the numeric user sequence, zero-padded. Ids that are not
/// numeric do not take part in the sequence.
pub async fn next_user_id<S: DocumentStore>(store: &S) -> Result<String, CoreError> {
    let spec = QuerySpec {
        fields: Some(vec![ID_FIELD.to_string()]),
        ..Default::default()
    };
    let ids = store
        .find(User::SCHEMA.name, &ConditionExpression::MatchAll, &spec)
        .await?;

    let last = ids
        .iter()
        .filter_map(document_id)
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    debug!(last, "Resolved last user id");

    Ok(format!("{:0width$}", last + 1, width = USER_ID_WIDTH))
}

impl<S> UserService for AcademiaService<S>
where
    S: DocumentStore,
{
    #[instrument(skip(self, input), fields(role = ?input.role))]
    async fn create_user(&self, input: CreateUserInput) -> Result<User, CoreError> {
        let password = input
            .password
            .filter(|password| !password.is_empty())
            .unwrap_or_else(|| self.config.default_user_password.clone());

        let id = next_user_id(&self.store).await?;
        let user = create_record(&self.store, &User::new(id, input.role, password)).await?;

        info!(id = %user.id, "User created");
        Ok(user)
    }

    /// Passwords are neither filterable nor part of listed rows.
    #[instrument(skip(self))]
    async fn get_all_users(
        &self,
        mut params: RawParameters,
    ) -> Result<Paginated<Document>, CoreError> {
        params.remove_field(PASSWORD_FIELD);
        let page = list_records(&self.store, &self.translator, &User::SCHEMA, &params).await?;

        Ok(page.map(|mut document| {
            if let Some(fields) = document.as_object_mut() {
                fields.remove(PASSWORD_FIELD);
            }
            document
        }))
    }

    #[instrument(skip(self))]
    async fn get_single_user(&self, id: String) -> Result<Option<User>, CoreError> {
        get_record(&self.store, &id).await
    }
}
