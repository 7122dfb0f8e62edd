use crate::domain::entities::batch::collect_columns;
use crate::domain::entities::row::Row;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableSnapshot {
    pub table_name: String,
    pub rows: Vec<Row>,
}

impl TableSnapshot {
    pub fn new(table_name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            table_name: table_name.into(),
            rows,
        }
    }

    pub fn columns(&self) -> Vec<String> {
        collect_columns(&self.rows)
    }

    pub fn pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.rows).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    pub snapshot: Option<TableSnapshot>,
    pub last_error: Option<String>,
    pub loading: bool,
    latest_fetch: u64,
}

impl TableView {
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.loading = true;
        FetchTicket(self.latest_fetch)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest_fetch
    }

    pub fn apply(&mut self, ticket: FetchTicket, result: Result<TableSnapshot, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.last_error = None;
            }
            Err(message) => {
                self.last_error = Some(message);
            }
        }
        true
    }
}
