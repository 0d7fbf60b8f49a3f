pub mod condition;
pub mod pagination;
pub mod searcher;
pub mod translator;
pub mod value_objects;
