use std::rc::Rc;

use tracing::{info, warn};

use crate::domain::entities::table::TableView;
use crate::domain::errors::IngestError;
use crate::usecase::ports::state_cell::StateCell;
use crate::usecase::ports::table_api::TableApi;
use crate::usecase::services::ingestion::IngestionWorkflow;
use crate::usecase::services::query_service::QueryService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: String,
    pub rows_sent: usize,
    pub refresh_error: Option<IngestError>,
}

#[derive(Clone)]
pub struct SubmissionController<C, V>
where
    C: StateCell<IngestionWorkflow>,
    V: StateCell<TableView>,
{
    api: Rc<dyn TableApi>,
    workflow: C,
    refresher: QueryService<V>,
}

impl<C, V> SubmissionController<C, V>
where
    C: StateCell<IngestionWorkflow>,
    V: StateCell<TableView>,
{
    pub fn new(api: Rc<dyn TableApi>, workflow: C, refresher: QueryService<V>) -> Self {
        Self {
            api,
            workflow,
            refresher,
        }
    }

    pub async fn confirm(&self) -> Result<SubmitOutcome, IngestError> {
        let batch = self.workflow.update(|wf| wf.begin_submit())?;
        let table_name = self.refresher.table_name().to_string();

        match self.api.add_rows(&table_name, batch.rows()).await {
            Ok(response) => {
                self.workflow.update(|wf| wf.complete_submit(true));
                info!(table = %table_name, rows = batch.len(), "batch accepted");
                let refresh_error = self.refresher.refresh().await.err();
                Ok(SubmitOutcome {
                    message: response.message,
                    rows_sent: batch.len(),
                    refresh_error,
                })
            }
            Err(err) => {
                self.workflow.update(|wf| wf.complete_submit(false));
                warn!(table = %table_name, error = %err, "batch rejected, keeping preview");
                Err(IngestError::TransportOrServerError {
                    message: err.user_message(),
                })
            }
        }
    }

    pub fn cancel(&self) -> Result<(), IngestError> {
        self.workflow.update(|wf| wf.cancel())?;
        info!("pending import discarded");
        Ok(())
    }
}
