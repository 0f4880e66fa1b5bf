pub mod default_catalog;
pub mod json_file_repo;
pub mod persistence;
pub mod suggestion_store;
