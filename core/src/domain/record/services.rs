use std::collections::{BTreeSet, HashMap};

use futures::try_join;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::domain::{
    cascade::services::delete_with_linked_record,
    common::{entities::app_errors::CoreError, generate_timestamp},
    document::{
        ports::DocumentStore,
        value_objects::{Document, ID_FIELD, document_id},
    },
    query::{
        condition::ConditionExpression,
        pagination::Paginated,
        searcher,
        translator::QueryTranslator,
        value_objects::{QuerySpec, RawParameters},
    },
};

use super::{CollectionSchema, Record, flatten::flatten_update};

pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// Lists one page of a collection.
///
/// Rows are returned as documents since a `fields` projection may leave out
/// fields the typed record requires.
pub async fn list_records<S: DocumentStore>(
    store: &S,
    translator: &QueryTranslator,
    schema: &CollectionSchema,
    params: &RawParameters,
) -> Result<Paginated<Document>, CoreError> {
    let (filter, spec) = translator.translate(params);
    let condition = searcher::build(&filter, schema.searchable_fields);

    let (mut documents, total) = try_join!(
        store.find(schema.name, &condition, &spec),
        store.count(schema.name, &condition),
    )?;
    populate(store, schema, &mut documents).await?;

    debug!(
        collection = schema.name,
        total,
        returned = documents.len(),
        "Listed records"
    );

    Ok(Paginated::new(documents, total, spec.effective_limit()))
}

pub async fn get_record<S: DocumentStore, T: Record>(
    store: &S,
    id: &str,
) -> Result<Option<T>, CoreError> {
    let schema = T::SCHEMA;
    let Some(document) = store.find_by_id(schema.name, id).await? else {
        return Ok(None);
    };

    let mut documents = [document];
    populate(store, &schema, &mut documents).await?;
    let [document] = documents;

    decode(document).map(Some)
}

pub async fn create_record<S: DocumentStore, T: Record>(
    store: &S,
    record: &T,
) -> Result<T, CoreError> {
    let schema = T::SCHEMA;
    let stored = store.insert(schema.name, encode(record)?).await?;

    info!(collection = schema.name, id = document_id(&stored), "Record created");
    decode(stored)
}

/// Applies a partial change set. Sub-objects are merged leaf by leaf and
/// `updatedAt` is refreshed.
pub async fn update_record<S, T, U>(store: &S, id: &str, changes: &U) -> Result<T, CoreError>
where
    S: DocumentStore,
    T: Record,
    U: Serialize + Sync,
{
    let schema = T::SCHEMA;
    if store.find_by_id(schema.name, id).await?.is_none() {
        return Err(CoreError::NotFound);
    }

    let mut update = flatten_update(&schema, encode_object(changes)?);
    let (now, _) = generate_timestamp();
    update.insert(UPDATED_AT_FIELD.to_string(), encode(&now)?);

    let updated = store
        .update_by_id(schema.name, id, update)
        .await?
        .ok_or(CoreError::NotFound)?;

    info!(collection = schema.name, id, "Record updated");
    decode(updated)
}

/// Deletes a record, together with its linked record when the collection
/// has one.
pub async fn delete_record<S: DocumentStore, T: Record>(store: &S, id: &str) -> Result<T, CoreError> {
    let schema = T::SCHEMA;
    let removed = match schema.pairing() {
        Some(pairing) => delete_with_linked_record(store, pairing, id).await?,
        None => store
            .delete_by_id(schema.name, id)
            .await?
            .ok_or(CoreError::NotFound)?,
    };

    info!(collection = schema.name, id, "Record deleted");
    decode(removed)
}

/// Replaces reference ids with the referenced documents, one batched lookup
/// per reference field. Ids with no matching document are left as they are.
pub async fn populate<S: DocumentStore>(
    store: &S,
    schema: &CollectionSchema,
    documents: &mut [Document],
) -> Result<(), CoreError> {
    for &(field, collection) in schema.references {
        let ids: BTreeSet<String> = documents
            .iter()
            .filter_map(|doc| doc.get(field)?.as_str().map(str::to_string))
            .collect();
        if ids.is_empty() {
            continue;
        }

        let condition = ConditionExpression::Or(
            ids.iter()
                .map(|id| ConditionExpression::equals(ID_FIELD, id.as_str()))
                .collect(),
        );
        let referenced: HashMap<String, Document> = store
            .find(collection, &condition, &QuerySpec::default())
            .await?
            .into_iter()
            .filter_map(|doc| {
                let id = document_id(&doc)?.to_string();
                Some((id, doc))
            })
            .collect();

        for document in documents.iter_mut() {
            let Some(slot) = document.get_mut(field) else {
                continue;
            };
            if let Some(found) = slot.as_str().and_then(|id| referenced.get(id)) {
                *slot = found.clone();
            }
        }
    }

    Ok(())
}

pub(crate) fn decode<T: DeserializeOwned>(document: Document) -> Result<T, CoreError> {
    serde_json::from_value(document).map_err(|e| {
        error!("Failed to decode stored record: {}", e);
        CoreError::InternalServerError
    })
}

pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Document, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to encode record: {}", e);
        CoreError::InternalServerError
    })
}

fn encode_object<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>, CoreError> {
    match encode(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(CoreError::Invalid("changes must be an object".to_string())),
    }
}
