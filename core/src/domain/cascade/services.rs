use tracing::{debug, error, info, instrument};

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{
        ports::{DocumentStore, DocumentTransaction},
        value_objects::Document,
    },
};

use super::entities::{CascadePairing, CascadeState};

/// Deletes a parent record and its linked record as one unit.
pub struct CascadeDeleteCoordinator<'a, S: DocumentStore> {
    store: &'a S,
    pairing: CascadePairing,
    state: CascadeState,
}

impl<'a, S: DocumentStore> CascadeDeleteCoordinator<'a, S> {
    pub fn new(store: &'a S, pairing: CascadePairing) -> Self {
        Self {
            store,
            pairing,
            state: CascadeState::NotStarted,
        }
    }

    pub fn state(&self) -> CascadeState {
        self.state
    }

    /// Returns the parent record as it was removed.
    ///
    /// The existence check runs before the transaction and only decides
    /// between `NotFound` and going ahead; the delete inside the transaction
    /// is what detects a concurrent removal (`Conflict`). A failure in either
    /// delete rolls the transaction back and is returned unchanged.
    #[instrument(skip(self))]
    pub async fn execute(&mut self, id: &str) -> Result<Document, CoreError> {
        if self.state != CascadeState::NotStarted {
            return Err(CoreError::Invalid(format!(
                "cascade delete already {}",
                self.state
            )));
        }

        if self.store.find_by_id(self.pairing.parent, id).await?.is_none() {
            debug!(collection = self.pairing.parent, "Cascade delete target not found");
            return Err(CoreError::NotFound);
        }

        let mut transaction = self.store.begin().await?;
        self.transition(CascadeState::Began);

        match self.delete_pair(&mut transaction, id).await {
            Ok(parent) => {
                if let Err(e) = transaction.commit().await {
                    self.transition(CascadeState::Aborted);
                    return Err(e);
                }
                self.transition(CascadeState::Committed);

                info!(
                    parent = self.pairing.parent,
                    linked = self.pairing.linked,
                    "Cascade delete committed"
                );
                Ok(parent)
            }
            Err(e) => {
                if let Err(rollback_error) = transaction.rollback().await {
                    error!(error = %rollback_error, "Failed to roll back cascade delete");
                }
                self.transition(CascadeState::Aborted);
                Err(e)
            }
        }
    }

    async fn delete_pair(
        &mut self,
        transaction: &mut S::Transaction,
        id: &str,
    ) -> Result<Document, CoreError> {
        let parent = transaction
            .delete_by_id(self.pairing.parent, id)
            .await?
            .ok_or_else(|| {
                CoreError::Conflict(format!(
                    "{} record {} was removed concurrently",
                    self.pairing.parent, id
                ))
            })?;
        self.transition(CascadeState::ParentDeleted);

        if transaction
            .delete_by_id(self.pairing.linked, id)
            .await?
            .is_none()
        {
            debug!(collection = self.pairing.linked, "No linked record to delete");
        }
        self.transition(CascadeState::LinkedDeleted);

        Ok(parent)
    }

    fn transition(&mut self, next: CascadeState) {
        debug!(from = %self.state, to = %next, "Cascade delete transition");
        self.state = next;
    }
}

/// Runs one cascading delete of `id` from `pairing.parent` and `pairing.linked`.
pub async fn delete_with_linked_record<S: DocumentStore>(
    store: &S,
    pairing: CascadePairing,
    id: &str,
) -> Result<Document, CoreError> {
    CascadeDeleteCoordinator::new(store, pairing).execute(id).await
}
