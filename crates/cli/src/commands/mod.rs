pub mod build_document;
pub mod common;
pub mod list_types;
