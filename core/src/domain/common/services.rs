use crate::domain::{
    common::AcademiaConfig, document::ports::DocumentStore, query::translator::QueryTranslator,
};

/// Entry point of the core. Every entity service trait is implemented on it.
#[derive(Clone)]
pub struct AcademiaService<S>
where
    S: DocumentStore,
{
    pub(crate) store: S,
    pub(crate) config: AcademiaConfig,
    pub(crate) translator: QueryTranslator,
}

impl<S> AcademiaService<S>
where
    S: DocumentStore,
{
    pub fn new(store: S, config: AcademiaConfig) -> Self {
        let translator = QueryTranslator::new(config.query);

        Self {
            store,
            config,
            translator,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &AcademiaConfig {
        &self.config
    }
}
