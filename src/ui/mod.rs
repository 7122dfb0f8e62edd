pub mod files;
pub mod notice;
pub mod state;
