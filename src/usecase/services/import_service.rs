use tracing::debug;

use crate::domain::entities::batch::Batch;
use crate::domain::errors::ParseError;
use crate::infra::import::json::decode_rows;
use crate::usecase::ports::file_source::SelectedFile;

pub struct ImportService;

impl ImportService {
    pub fn check_type<F: SelectedFile + ?Sized>(file: &F) -> Result<(), ParseError> {
        let declared = file.declared_type();
        if declared.is_json() {
            Ok(())
        } else {
            Err(ParseError::UnsupportedFileType {
                file_name: file.name(),
                declared: declared.describe(),
            })
        }
    }

    pub async fn parse<F: SelectedFile + ?Sized>(file: &F) -> Result<Batch, ParseError> {
        Self::check_type(file)?;

        let file_name = file.name();
        let bytes = file
            .read_bytes()
            .await
            .map_err(|reason| ParseError::MalformedContent {
                file_name: file_name.clone(),
                reason: format!("failed to read file: {reason}"),
            })?;
        debug!(file = %file_name, bytes = bytes.len(), "read import file");

        let rows = decode_rows(&bytes)
            .map_err(|reason| ParseError::MalformedContent { file_name, reason })?;
        Ok(Batch::new(rows))
    }
}
