use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::row::Row;

#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    rows: Arc<[Row]>,
}

impl Batch {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> Vec<String> {
        collect_columns(&self.rows)
    }
}

pub(crate) fn collect_columns(rows: &[Row]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.iter().any(|existing| existing == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeSource {
    Picker,
    Drop,
}

impl IntakeSource {
    pub fn label(self) -> &'static str {
        match self {
            IntakeSource::Picker => "選擇檔案",
            IntakeSource::Drop => "拖放",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingImport {
    pub file_name: String,
    pub source: IntakeSource,
    pub batch: Batch,
    pub parsed_at: DateTime<Utc>,
}

impl PendingImport {
    pub fn new(file_name: impl Into<String>, source: IntakeSource, batch: Batch) -> Self {
        Self {
            file_name: file_name.into(),
            source,
            batch,
            parsed_at: Utc::now(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.batch.len()
    }
}
