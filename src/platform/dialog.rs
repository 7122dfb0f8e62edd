use async_trait::async_trait;
use rfd::{AsyncFileDialog, AsyncMessageDialog, FileHandle, MessageButtons, MessageLevel};

use crate::usecase::ports::file_source::{DeclaredType, SelectedFile};

pub struct PickedFile(FileHandle);

#[async_trait(?Send)]
impl SelectedFile for PickedFile {
    fn name(&self) -> String {
        self.0.file_name()
    }

    fn declared_type(&self) -> DeclaredType {
        DeclaredType::detect(None, &self.0.file_name())
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        Ok(self.0.read().await)
    }
}

pub async fn pick_json_file() -> Option<PickedFile> {
    AsyncFileDialog::new()
        .add_filter("JSON", &["json"])
        .add_filter("所有檔案", &["*"])
        .pick_file()
        .await
        .map(PickedFile)
}

pub async fn show_message(title: &str, description: &str) {
    let _ = AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
