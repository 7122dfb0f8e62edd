use tracing::{info, warn};

use crate::domain::entities::batch::{Batch, IntakeSource, PendingImport};
use crate::domain::errors::{IngestError, ParseError};
use crate::usecase::services::pending_store::PendingBatchStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IngestionState {
    #[default]
    Empty,
    Parsing {
        file_name: String,
    },
    PreviewReady,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTicket {
    generation: u64,
    source: IntakeSource,
}

impl ParseTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResolution {
    Ready { file_name: String, rows: usize },
    Rejected(ParseError),
    Stale,
}

/// Ingestion state machine. Owns the pending batch and the parse generation;
/// results tagged with an older generation are dropped on arrival.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestionWorkflow {
    state: IngestionState,
    store: PendingBatchStore,
    generation: u64,
}

impl IngestionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &IngestionState {
        &self.state
    }

    pub fn pending(&self) -> Option<&PendingImport> {
        self.store.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == IngestionState::Submitting
    }

    pub fn can_confirm(&self) -> bool {
        self.state == IngestionState::PreviewReady
            && self.store.get().is_some_and(|pending| !pending.batch.is_empty())
    }

    pub fn begin_selection(
        &mut self,
        file_name: &str,
        source: IntakeSource,
    ) -> Result<ParseTicket, IngestError> {
        if self.is_submitting() {
            return Err(IngestError::Busy);
        }

        self.generation += 1;
        self.store.clear();
        self.state = IngestionState::Parsing {
            file_name: file_name.to_string(),
        };
        info!(
            file = file_name,
            generation = self.generation,
            source = ?source,
            "parsing selected file"
        );
        Ok(ParseTicket {
            generation: self.generation,
            source,
        })
    }

    pub fn complete_parse(
        &mut self,
        ticket: ParseTicket,
        file_name: &str,
        result: Result<Batch, ParseError>,
    ) -> ParseResolution {
        let in_flight = matches!(self.state, IngestionState::Parsing { .. });
        if ticket.generation != self.generation || !in_flight {
            warn!(
                file = file_name,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale parse result"
            );
            return ParseResolution::Stale;
        }

        match result {
            Ok(batch) => {
                let rows = batch.len();
                self.store
                    .set_pending(PendingImport::new(file_name, ticket.source, batch));
                self.state = IngestionState::PreviewReady;
                info!(file = file_name, rows, "preview ready");
                ParseResolution::Ready {
                    file_name: file_name.to_string(),
                    rows,
                }
            }
            Err(err) => {
                self.store.clear();
                self.state = IngestionState::Empty;
                warn!(file = file_name, error = %err, "parse rejected");
                ParseResolution::Rejected(err)
            }
        }
    }

    pub fn begin_submit(&mut self) -> Result<Batch, IngestError> {
        if self.is_submitting() {
            return Err(IngestError::Busy);
        }
        let batch = match self.store.get() {
            Some(pending) if !pending.batch.is_empty() => pending.batch.clone(),
            _ => return Err(IngestError::EmptyBatch),
        };

        self.state = IngestionState::Submitting;
        info!(rows = batch.len(), "submitting batch");
        Ok(batch)
    }

    pub fn complete_submit(&mut self, accepted: bool) {
        if !self.is_submitting() {
            return;
        }
        if accepted {
            self.store.clear();
            self.state = IngestionState::Empty;
        } else {
            self.state = IngestionState::PreviewReady;
        }
    }

    pub fn cancel(&mut self) -> Result<(), IngestError> {
        if self.is_submitting() {
            return Err(IngestError::Busy);
        }
        if matches!(self.state, IngestionState::Parsing { .. }) {
            self.generation += 1;
        }
        self.store.clear();
        self.state = IngestionState::Empty;
        Ok(())
    }
}
