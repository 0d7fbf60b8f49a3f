pub mod academic_department;
pub mod academic_faculty;
pub mod academic_semester;
pub mod admin;
pub mod cascade;
pub mod common;
pub mod document;
pub mod faculty;
pub mod query;
pub mod record;
pub mod student;
pub mod user;
