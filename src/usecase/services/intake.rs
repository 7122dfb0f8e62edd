use tracing::{info, warn};

use crate::domain::entities::batch::IntakeSource;
use crate::domain::errors::IngestError;
use crate::usecase::ports::file_source::SelectedFile;
use crate::usecase::ports::state_cell::StateCell;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::ingestion::{IngestionWorkflow, ParseResolution};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Ready { file_name: String, rows: usize },
    Superseded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropZoneState {
    depth: u32,
}

impl DropZoneState {
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.depth = 0;
    }

    pub fn is_active(&self) -> bool {
        self.depth > 0
    }
}

pub fn first_file<T>(files: Vec<T>) -> Option<(T, usize)> {
    let ignored = files.len().saturating_sub(1);
    let file = files.into_iter().next()?;
    if ignored > 0 {
        warn!(ignored, "multiple files dropped, only the first is used");
    }
    Some((file, ignored))
}

#[derive(Clone)]
pub struct FileIntake<C: StateCell<IngestionWorkflow>> {
    workflow: C,
}

impl<C: StateCell<IngestionWorkflow>> FileIntake<C> {
    pub fn new(workflow: C) -> Self {
        Self { workflow }
    }

    pub async fn select_file<F: SelectedFile + ?Sized>(
        &self,
        file: &F,
        source: IntakeSource,
    ) -> Result<SelectionOutcome, IngestError> {
        let file_name = file.name();
        let ticket = self
            .workflow
            .update(|wf| wf.begin_selection(&file_name, source))?;

        let result = ImportService::parse(file).await;

        match self
            .workflow
            .update(|wf| wf.complete_parse(ticket, &file_name, result))
        {
            ParseResolution::Ready { file_name, rows } => {
                info!(file = %file_name, rows, "file accepted for preview");
                Ok(SelectionOutcome::Ready { file_name, rows })
            }
            ParseResolution::Rejected(err) => Err(err.into()),
            ParseResolution::Stale => Ok(SelectionOutcome::Superseded),
        }
    }
}
