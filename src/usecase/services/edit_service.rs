use std::rc::Rc;

use tracing::{info, warn};

use crate::domain::entities::row::Row;
use crate::domain::entities::table::TableView;
use crate::domain::errors::IngestError;
use crate::usecase::ports::state_cell::StateCell;
use crate::usecase::ports::table_api::TableApi;
use crate::usecase::services::query_service::QueryService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowForm {
    pub title: String,
    pub field1: String,
    pub field2: String,
    pub field3: String,
}

impl RowForm {
    pub fn to_row(&self) -> Row {
        Row::from_form(
            &self.title,
            [
                self.field1.as_str(),
                self.field2.as_str(),
                self.field3.as_str(),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub message: String,
    pub refresh_error: Option<IngestError>,
}

#[derive(Clone)]
pub struct EditService<V: StateCell<TableView>> {
    api: Rc<dyn TableApi>,
    refresher: QueryService<V>,
}

impl<V: StateCell<TableView>> EditService<V> {
    pub fn new(api: Rc<dyn TableApi>, refresher: QueryService<V>) -> Self {
        Self { api, refresher }
    }

    pub async fn add_row(&self, form: &RowForm) -> Result<AddOutcome, IngestError> {
        let table_name = self.refresher.table_name().to_string();
        let row = form.to_row();

        let response = self
            .api
            .add_row(&table_name, &row)
            .await
            .map_err(|err| {
                warn!(table = %table_name, error = %err, "add row failed");
                IngestError::TransportOrServerError {
                    message: err.user_message(),
                }
            })?;
        info!(table = %table_name, "row added");

        let refresh_error = self.refresher.refresh().await.err();
        Ok(AddOutcome {
            message: response.message,
            refresh_error,
        })
    }
}
