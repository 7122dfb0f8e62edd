pub mod edit_service;
pub mod import_service;
pub mod ingestion;
pub mod intake;
pub mod pending_store;
pub mod query_service;
pub mod script_service;
pub mod submission;
