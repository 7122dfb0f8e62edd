use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unsupported file type for {file_name}: {declared}")]
    UnsupportedFileType { file_name: String, declared: String },
    #[error("malformed content in {file_name}: {reason}")]
    MalformedContent { file_name: String, reason: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("unsupported file type for {file_name}: {declared}")]
    UnsupportedFileType { file_name: String, declared: String },
    #[error("malformed content in {file_name}: {reason}")]
    MalformedContent { file_name: String, reason: String },
    #[error("nothing to submit")]
    EmptyBatch,
    #[error("{message}")]
    TransportOrServerError { message: String },
    #[error("failed to load table: {message}")]
    FetchError { message: String },
    #[error("a submission is in progress")]
    Busy,
}

impl From<ParseError> for IngestError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnsupportedFileType {
                file_name,
                declared,
            } => IngestError::UnsupportedFileType {
                file_name,
                declared,
            },
            ParseError::MalformedContent { file_name, reason } => {
                IngestError::MalformedContent { file_name, reason }
            }
        }
    }
}

impl IngestError {
    pub fn notice(&self) -> String {
        match self {
            IngestError::UnsupportedFileType { .. } => format!("不支援的檔案類型：{self}"),
            IngestError::MalformedContent { .. } => format!("檔案內容格式錯誤：{self}"),
            IngestError::EmptyBatch => "沒有可送出的資料".to_string(),
            IngestError::TransportOrServerError { .. } => format!("送出失敗：{self}"),
            IngestError::FetchError { .. } => format!("載入資料失敗：{self}"),
            IngestError::Busy => "正在送出，請稍候".to_string(),
        }
    }
}
