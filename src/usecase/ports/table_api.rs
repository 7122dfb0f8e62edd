use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::domain::entities::row::Row;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServerMessage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptOutput {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddRowsRequest<'a> {
    pub table_name: &'a str,
    pub rows: &'a [Row],
}

#[derive(Debug, Serialize)]
pub struct AddRowRequest<'a> {
    pub table_name: &'a str,
    pub row_data: &'a Row,
}

#[derive(Debug, Serialize)]
pub struct RunScriptRequest<'a> {
    pub script_name: &'a str,
}

#[async_trait(?Send)]
pub trait TableApi {
    async fn fetch_rows(&self, table_name: &str) -> Result<Vec<Row>, ApiError>;
    async fn add_rows(&self, table_name: &str, rows: &[Row]) -> Result<ServerMessage, ApiError>;
    async fn add_row(&self, table_name: &str, row: &Row) -> Result<ServerMessage, ApiError>;
    async fn run_script(&self, script_name: &str) -> Result<ScriptOutput, ApiError>;
}
