use crate::domain::entities::batch::PendingImport;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingBatchStore {
    slot: Option<PendingImport>,
}

impl PendingBatchStore {
    pub fn set_pending(&mut self, import: PendingImport) {
        self.slot = Some(import);
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn get(&self) -> Option<&PendingImport> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
