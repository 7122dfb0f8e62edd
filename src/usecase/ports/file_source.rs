use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    Json,
    Other(String),
    Unknown,
}

impl DeclaredType {
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Self {
        if let Some(mime) = content_type.map(str::trim).filter(|mime| !mime.is_empty()) {
            let essence = mime
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            return if essence == "application/json"
                || essence == "text/json"
                || essence.ends_with("+json")
            {
                DeclaredType::Json
            } else {
                DeclaredType::Other(essence)
            };
        }

        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && ext.eq_ignore_ascii_case("json") => {
                DeclaredType::Json
            }
            Some((_, ext)) => DeclaredType::Other(format!(".{}", ext.to_ascii_lowercase())),
            None => DeclaredType::Unknown,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, DeclaredType::Json)
    }

    pub fn describe(&self) -> String {
        match self {
            DeclaredType::Json => "application/json".to_string(),
            DeclaredType::Other(value) => value.clone(),
            DeclaredType::Unknown => "unknown".to_string(),
        }
    }
}

#[async_trait(?Send)]
pub trait SelectedFile {
    fn name(&self) -> String;

    fn declared_type(&self) -> DeclaredType;

    async fn read_bytes(&self) -> Result<Vec<u8>, String>;
}
