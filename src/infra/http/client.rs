use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::row::Row;
use crate::usecase::ports::table_api::{
    AddRowRequest, AddRowsRequest, ApiError, RunScriptRequest, ScriptOutput, ServerMessage,
    TableApi,
};

pub struct HttpTableApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTableApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            message: error_message_from_body(body),
        });
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

pub fn decode_ack(status: u16, body: &str) -> Result<ServerMessage, ApiError> {
    match decode_response(status, body) {
        Err(ApiError::Decode(reason)) => {
            debug!(status, reason = %reason, "write accepted with unreadable body");
            Ok(ServerMessage::default())
        }
        other => other,
    }
}

async fn read_body(response: reqwest::Response) -> Result<(u16, String), ApiError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    debug!(status, bytes = body.len(), "received response");
    Ok((status, body))
}

async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let (status, body) = read_body(response).await?;
    decode_response(status, &body)
}

async fn read_ack(response: reqwest::Response) -> Result<ServerMessage, ApiError> {
    let (status, body) = read_body(response).await?;
    decode_ack(status, &body)
}

#[async_trait(?Send)]
impl TableApi for HttpTableApi {
    async fn fetch_rows(&self, table_name: &str) -> Result<Vec<Row>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("get-data"))
            .query(&[("table_name", table_name)])
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        read_response(response).await
    }

    async fn add_rows(&self, table_name: &str, rows: &[Row]) -> Result<ServerMessage, ApiError> {
        let response = self
            .client
            .post(self.endpoint("add-rows"))
            .json(&AddRowsRequest { table_name, rows })
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        read_ack(response).await
    }

    async fn add_row(&self, table_name: &str, row: &Row) -> Result<ServerMessage, ApiError> {
        let response = self
            .client
            .post(self.endpoint("add-row"))
            .json(&AddRowRequest {
                table_name,
                row_data: row,
            })
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        read_ack(response).await
    }

    async fn run_script(&self, script_name: &str) -> Result<ScriptOutput, ApiError> {
        let response = self
            .client
            .post(self.endpoint("run-script"))
            .json(&RunScriptRequest { script_name })
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        read_response(response).await
    }
}
