use crate::{
    domain::common::{AcademiaConfig, services::AcademiaService},
    infrastructure::postgres::{Postgres, PostgresConfig, PostgresDocumentStore},
};

pub type PostgresAcademiaService = AcademiaService<PostgresDocumentStore>;

/// Connects to the configured database and builds the service on top of it.
pub async fn create_service(config: AcademiaConfig) -> Result<PostgresAcademiaService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(AcademiaService::new(
        PostgresDocumentStore::new(postgres.get_db()),
        config,
    ))
}
