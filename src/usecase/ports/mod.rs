pub mod file_source;
pub mod state_cell;
pub mod table_api;
