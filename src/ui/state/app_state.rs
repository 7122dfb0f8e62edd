use dioxus::prelude::*;

use crate::domain::entities::table::TableView;
use crate::usecase::ports::state_cell::StateCell;
use crate::usecase::ports::table_api::ScriptOutput;
use crate::usecase::services::edit_service::RowForm;
use crate::usecase::services::ingestion::IngestionWorkflow;
use crate::usecase::services::intake::DropZoneState;

pub struct AppState {
    pub workflow: Signal<IngestionWorkflow>,
    pub table_view: Signal<TableView>,
    pub drop_zone: Signal<DropZoneState>,
    pub status: Signal<String>,
    pub row_form: Signal<RowForm>,
    pub adding_row: Signal<bool>,
    pub script_name: Signal<String>,
    pub script_output: Signal<Option<ScriptOutput>>,
    pub running_script: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            workflow: use_signal(IngestionWorkflow::new),
            table_view: use_signal(TableView::default),
            drop_zone: use_signal(DropZoneState::default),
            status: use_signal(|| "就緒".to_string()),
            row_form: use_signal(RowForm::default),
            adding_row: use_signal(|| false),
            script_name: use_signal(String::new),
            script_output: use_signal(|| None::<ScriptOutput>),
            running_script: use_signal(|| false),
        }
    }
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        let mut guard = signal.write();
        f(&mut *guard)
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.read();
        f(&*guard)
    }
}
