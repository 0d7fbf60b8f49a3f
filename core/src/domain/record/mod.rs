use serde::{Serialize, de::DeserializeOwned};

use crate::domain::cascade::entities::CascadePairing;

pub mod entities;
pub mod flatten;
pub mod services;

/// Static description of one collection: how it is searched, which nested
/// objects may be partially updated, which fields reference other
/// collections, and which collection (if any) holds its linked record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSchema {
    pub name: &'static str,
    pub searchable_fields: &'static [&'static str],
    /// `(sub-object, declared leaves)`.
    pub flattenable: &'static [(&'static str, &'static [&'static str])],
    /// `(field, referenced collection)`.
    pub references: &'static [(&'static str, &'static str)],
    pub linked: Option<&'static str>,
}

impl CollectionSchema {
    pub fn leaves_of(&self, field: &str) -> Option<&'static [&'static str]> {
        self.flattenable
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, leaves)| *leaves)
    }

    pub fn pairing(&self) -> Option<CascadePairing> {
        self.linked
            .map(|linked| CascadePairing::new(self.name, linked))
    }
}

/// A typed view over the documents of one collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    const SCHEMA: CollectionSchema;
}
