use crate::domain::errors::IngestError;
use crate::usecase::services::edit_service::AddOutcome;
use crate::usecase::services::intake::SelectionOutcome;
use crate::usecase::services::submission::SubmitOutcome;

pub fn selection_notice(
    result: &Result<SelectionOutcome, IngestError>,
    ignored_files: usize,
) -> Option<String> {
    let notice = match result {
        Ok(SelectionOutcome::Ready { file_name, rows }) => {
            format!("已解析 {file_name}（{rows} 筆），請確認後送出")
        }
        Ok(SelectionOutcome::Superseded) => return None,
        Err(err) => err.notice(),
    };
    if ignored_files > 0 {
        Some(format!("{notice}；已略過其餘 {ignored_files} 個檔案"))
    } else {
        Some(notice)
    }
}

pub fn submit_notice(result: &Result<SubmitOutcome, IngestError>) -> String {
    match result {
        Ok(outcome) => {
            let message = if outcome.message.is_empty() {
                format!("已送出 {} 筆", outcome.rows_sent)
            } else {
                outcome.message.clone()
            };
            match &outcome.refresh_error {
                Some(err) => format!("{message}；{}", err.notice()),
                None => message,
            }
        }
        Err(err) => err.notice(),
    }
}

pub fn add_row_notice(result: &Result<AddOutcome, IngestError>) -> String {
    match result {
        Ok(outcome) => {
            let message = if outcome.message.is_empty() {
                "已新增 1 筆".to_string()
            } else {
                outcome.message.clone()
            };
            match &outcome.refresh_error {
                Some(err) => format!("{message}；{}", err.notice()),
                None => message,
            }
        }
        Err(err) => err.notice(),
    }
}
