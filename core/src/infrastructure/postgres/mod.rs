pub mod db;
pub mod document_store;
pub mod sql;

pub use db::{Postgres, PostgresConfig};
pub use document_store::{PostgresDocumentStore, PostgresTransaction};
