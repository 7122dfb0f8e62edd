use async_trait::async_trait;
use dioxus::html::FileData;

use crate::usecase::ports::file_source::{DeclaredType, SelectedFile};

pub struct DroppedFile(FileData);

impl DroppedFile {
    pub fn new(file: FileData) -> Self {
        Self(file)
    }
}

#[async_trait(?Send)]
impl SelectedFile for DroppedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn declared_type(&self) -> DeclaredType {
        DeclaredType::detect(self.0.content_type().as_deref(), &self.0.name())
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        self.0
            .read_bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|err| err.to_string())
    }
}
