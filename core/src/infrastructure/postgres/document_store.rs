use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, QueryResult, TransactionTrait};
use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{
        ports::{DocumentStore, DocumentTransaction},
        value_objects::{Document, UpdateDocument, apply_update, document_id, project},
    },
    query::{condition::ConditionExpression, value_objects::QuerySpec},
};

use super::sql::{SqlStatement, by_id, count_documents, quote_identifier, select_documents};

#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pub db: DatabaseConnection,
}

impl PostgresDocumentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn read_document(row: &QueryResult) -> Result<Document, CoreError> {
    row.try_get::<Document>("", "doc").map_err(|e| {
        error!("Failed to read document column: {}", e);
        CoreError::InternalServerError
    })
}

async fn fetch_optional<C: ConnectionTrait>(
    conn: &C,
    stmt: SqlStatement,
    action: &str,
) -> Result<Option<Document>, CoreError> {
    let row = conn.query_one(stmt.into_statement()).await.map_err(|e| {
        error!("Failed to {}: {}", action, e);
        CoreError::InternalServerError
    })?;

    row.as_ref().map(read_document).transpose()
}

async fn delete_document<C: ConnectionTrait>(
    conn: &C,
    collection: &str,
    id: &str,
) -> Result<Option<Document>, CoreError> {
    let stmt = by_id("DELETE FROM", collection, "RETURNING doc", id);
    fetch_optional(conn, stmt, "delete document").await
}

impl DocumentStore for PostgresDocumentStore {
    type Transaction = PostgresTransaction;

    async fn find(
        &self,
        collection: &str,
        condition: &ConditionExpression,
        spec: &QuerySpec,
    ) -> Result<Vec<Document>, CoreError> {
        let stmt = select_documents(collection, condition, spec);
        let rows = self.db.query_all(stmt.into_statement()).await.map_err(|e| {
            error!("Failed to find documents: {}", e);
            CoreError::InternalServerError
        })?;

        rows.iter()
            .map(|row| {
                let document = read_document(row)?;
                Ok(match &spec.fields {
                    Some(fields) => project(&document, fields),
                    None => document,
                })
            })
            .collect()
    }

    async fn count(
        &self,
        collection: &str,
        condition: &ConditionExpression,
    ) -> Result<u64, CoreError> {
        let stmt = count_documents(collection, condition);
        let count = self
            .db
            .query_one(stmt.into_statement())
            .await
            .map_err(|e| {
                error!("Failed to count documents: {}", e);
                CoreError::InternalServerError
            })?
            .and_then(|row| row.try_get::<i64>("", "count").ok())
            .unwrap_or(0);

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, CoreError> {
        let stmt = by_id("SELECT doc FROM", collection, "", id);
        fetch_optional(&self.db, stmt, "find document").await
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<Document, CoreError> {
        let Some(id) = document_id(&document).map(str::to_string) else {
            return Err(CoreError::Invalid("document must carry a string id".to_string()));
        };

        let mut stmt = SqlStatement::new("INSERT INTO ");
        stmt.push(&quote_identifier(collection));
        let id_placeholder = stmt.bind(id.clone());
        let doc_placeholder = stmt.bind(document);
        stmt.push(&format!(
            " (id, doc) VALUES ({id_placeholder}, {doc_placeholder}) \
             ON CONFLICT (id) DO NOTHING RETURNING doc"
        ));

        match fetch_optional(&self.db, stmt, "insert document").await? {
            Some(inserted) => Ok(inserted),
            None => {
                warn!(collection, id = %id, "Duplicate document id");
                Err(CoreError::Conflict(format!(
                    "{collection} record {id} already exists"
                )))
            }
        }
    }

    /// Read-modify-write under a row lock, so concurrent updates to one
    /// record apply one after the other.
    async fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        update: UpdateDocument,
    ) -> Result<Option<Document>, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin update transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let stmt = by_id("SELECT doc FROM", collection, "FOR UPDATE", id);
        let Some(mut document) = fetch_optional(&txn, stmt, "lock document").await? else {
            return Ok(None);
        };
        apply_update(&mut document, &update);

        let mut stmt = SqlStatement::new("UPDATE ");
        stmt.push(&quote_identifier(collection));
        let doc_placeholder = stmt.bind(document);
        let id_placeholder = stmt.bind(id.to_string());
        stmt.push(&format!(
            " SET doc = {doc_placeholder} WHERE id = {id_placeholder} RETURNING doc"
        ));
        let updated = fetch_optional(&txn, stmt, "update document").await?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit update: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, CoreError> {
        delete_document(&self.db, collection, id).await
    }

    async fn begin(&self) -> Result<PostgresTransaction, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(PostgresTransaction { txn })
    }
}

/// Rolled back by the driver when dropped without a commit.
pub struct PostgresTransaction {
    txn: DatabaseTransaction,
}

impl DocumentTransaction for PostgresTransaction {
    async fn delete_by_id(
        &mut self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, CoreError> {
        delete_document(&self.txn, collection, id).await
    }

    async fn commit(self) -> Result<(), CoreError> {
        self.txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn rollback(self) -> Result<(), CoreError> {
        self.txn.rollback().await.map_err(|e| {
            error!("Failed to roll back transaction: {}", e);
            CoreError::InternalServerError
        })
    }
}
