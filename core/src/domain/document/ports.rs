use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{condition::ConditionExpression, value_objects::QuerySpec},
};

use super::value_objects::{Document, UpdateDocument};

/// Storage primitives the record layer runs on. Every collection holds JSON
/// documents keyed by their string `id`.
pub trait DocumentStore: Send + Sync {
    type Transaction: DocumentTransaction;

    /// Matching documents, sorted, paginated and projected per `spec`.
    fn find(
        &self,
        collection: &str,
        condition: &ConditionExpression,
        spec: &QuerySpec,
    ) -> impl Future<Output = Result<Vec<Document>, CoreError>> + Send;

    fn count(
        &self,
        collection: &str,
        condition: &ConditionExpression,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn find_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<Option<Document>, CoreError>> + Send;

    /// Stores a new document; an existing `id` is a conflict.
    fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> impl Future<Output = Result<Document, CoreError>> + Send;

    /// Applies dotted-path changes and returns the updated document.
    fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        update: UpdateDocument,
    ) -> impl Future<Output = Result<Option<Document>, CoreError>> + Send;

    /// Removes a document and returns it as it was before removal.
    fn delete_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<Option<Document>, CoreError>> + Send;

    /// Opens a transaction. It is rolled back unless committed, including
    /// when it is dropped.
    fn begin(&self) -> impl Future<Output = Result<Self::Transaction, CoreError>> + Send;
}

pub trait DocumentTransaction: Send {
    fn delete_by_id(
        &mut self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<Option<Document>, CoreError>> + Send;

    fn commit(self) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn rollback(self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
