use std::rc::Rc;

use tracing::{info, warn};

use crate::domain::entities::table::{TableSnapshot, TableView};
use crate::domain::errors::IngestError;
use crate::usecase::ports::state_cell::StateCell;
use crate::usecase::ports::table_api::TableApi;

#[derive(Clone)]
pub struct QueryService<V: StateCell<TableView>> {
    api: Rc<dyn TableApi>,
    table_name: String,
    view: V,
}

impl<V: StateCell<TableView>> QueryService<V> {
    pub fn new(api: Rc<dyn TableApi>, table_name: impl Into<String>, view: V) -> Self {
        Self {
            api,
            table_name: table_name.into(),
            view,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub async fn refresh(&self) -> Result<usize, IngestError> {
        let ticket = self.view.update(|view| view.begin_fetch());

        let result = self
            .api
            .fetch_rows(&self.table_name)
            .await
            .map(|rows| TableSnapshot::new(self.table_name.clone(), rows))
            .map_err(|err| err.user_message());

        let outcome = match &result {
            Ok(snapshot) => Ok(snapshot.rows.len()),
            Err(message) => Err(IngestError::FetchError {
                message: message.clone(),
            }),
        };

        if !self.view.update(|view| view.apply(ticket, result)) {
            warn!(table = %self.table_name, "discarding superseded table fetch");
            return outcome;
        }
        match &outcome {
            Ok(rows) => info!(table = %self.table_name, rows, "table refreshed"),
            Err(err) => warn!(table = %self.table_name, error = %err, "table refresh failed"),
        }
        outcome
    }
}
