use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{
        ports::{DocumentStore, DocumentTransaction},
        value_objects::{
            Document, UpdateDocument, apply_update, compare_scalars, document_id, get_path,
            project,
        },
    },
    query::{
        condition::ConditionExpression,
        value_objects::{QuerySpec, SortDirection, SortSpec},
    },
};

type Collections = HashMap<String, Vec<Document>>;

/// Process-local document store. Collections keep insertion order.
///
/// A transaction holds the store lock from `begin` until it is committed,
/// rolled back or dropped, so readers never observe half of it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<Mutex<Collections>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn position_of(documents: &[Document], id: &str) -> Option<usize> {
    documents
        .iter()
        .position(|doc| document_id(doc) == Some(id))
}

fn compare_by(a: &Document, b: &Document, sorts: &[SortSpec]) -> Ordering {
    for sort in sorts {
        let ordering = compare_scalars(get_path(a, &sort.field), get_path(b, &sort.field));
        let ordering = match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

impl DocumentStore for InMemoryDocumentStore {
    type Transaction = InMemoryTransaction;

    async fn find(
        &self,
        collection: &str,
        condition: &ConditionExpression,
        spec: &QuerySpec,
    ) -> Result<Vec<Document>, CoreError> {
        let collections = self.collections.lock().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<&Document> = documents
            .iter()
            .filter(|doc| condition.matches(doc))
            .collect();

        if let Some(sorts) = &spec.sort {
            matched.sort_by(|a, b| compare_by(a, b, sorts));
        }

        let skip = usize::try_from(spec.skip.unwrap_or(0)).unwrap_or(usize::MAX);
        let take = match spec.effective_limit() {
            0 => usize::MAX,
            limit => usize::try_from(limit).unwrap_or(usize::MAX),
        };

        let results = matched
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|doc| match &spec.fields {
                Some(fields) => project(doc, fields),
                None => doc.clone(),
            })
            .collect();

        Ok(results)
    }

    async fn count(
        &self,
        collection: &str,
        condition: &ConditionExpression,
    ) -> Result<u64, CoreError> {
        let collections = self.collections.lock().await;
        let count = collections
            .get(collection)
            .map_or(0, |documents| {
                documents.iter().filter(|doc| condition.matches(doc)).count()
            });

        Ok(count as u64)
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, CoreError> {
        let collections = self.collections.lock().await;
        let document = collections.get(collection).and_then(|documents| {
            position_of(documents, id).map(|position| documents[position].clone())
        });

        Ok(document)
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<Document, CoreError> {
        let Some(id) = document_id(&document).map(str::to_string) else {
            return Err(CoreError::Invalid("document must carry a string id".to_string()));
        };

        let mut collections = self.collections.lock().await;
        let documents = collections.entry(collection.to_string()).or_default();
        if position_of(documents, &id).is_some() {
            warn!(collection, id = %id, "Duplicate document id");
            return Err(CoreError::Conflict(format!("{collection} record {id} already exists")));
        }
        documents.push(document.clone());

        Ok(document)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        update: UpdateDocument,
    ) -> Result<Option<Document>, CoreError> {
        let mut collections = self.collections.lock().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(None);
        };
        let Some(position) = position_of(documents, id) else {
            return Ok(None);
        };

        let document = &mut documents[position];
        apply_update(document, &update);

        Ok(Some(document.clone()))
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, CoreError> {
        let mut collections = self.collections.lock().await;
        let removed = collections.get_mut(collection).and_then(|documents| {
            position_of(documents, id).map(|position| documents.remove(position))
        });

        Ok(removed)
    }

    async fn begin(&self) -> Result<InMemoryTransaction, CoreError> {
        let guard = Arc::clone(&self.collections).lock_owned().await;

        Ok(InMemoryTransaction {
            guard: Some(guard),
            undo: Vec::new(),
        })
    }
}

struct UndoEntry {
    collection: String,
    position: usize,
    document: Document,
}

/// Exclusive, undo-logged view of an [`InMemoryDocumentStore`].
pub struct InMemoryTransaction {
    guard: Option<OwnedMutexGuard<Collections>>,
    undo: Vec<UndoEntry>,
}

impl InMemoryTransaction {
    fn restore(&mut self) {
        let Some(guard) = self.guard.as_mut() else {
            return;
        };

        let restored = self.undo.len();
        while let Some(entry) = self.undo.pop() {
            let documents = guard.entry(entry.collection).or_default();
            let position = entry.position.min(documents.len());
            documents.insert(position, entry.document);
        }
        if restored > 0 {
            debug!(restored, "Rolled back in-memory transaction");
        }
    }
}

impl DocumentTransaction for InMemoryTransaction {
    async fn delete_by_id(
        &mut self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, CoreError> {
        let Some(guard) = self.guard.as_mut() else {
            return Err(CoreError::Invalid("transaction already finished".to_string()));
        };
        let Some(documents) = guard.get_mut(collection) else {
            return Ok(None);
        };
        let Some(position) = position_of(documents, id) else {
            return Ok(None);
        };

        let document = documents.remove(position);
        self.undo.push(UndoEntry {
            collection: collection.to_string(),
            position,
            document: document.clone(),
        });

        Ok(Some(document))
    }

    async fn commit(mut self) -> Result<(), CoreError> {
        self.undo.clear();
        self.guard.take();
        Ok(())
    }

    async fn rollback(mut self) -> Result<(), CoreError> {
        self.restore();
        self.guard.take();
        Ok(())
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        self.restore();
    }
}
