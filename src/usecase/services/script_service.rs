use std::rc::Rc;

use tracing::{info, warn};

use crate::domain::errors::IngestError;
use crate::usecase::ports::table_api::{ScriptOutput, TableApi};

#[derive(Clone)]
pub struct ScriptService {
    api: Rc<dyn TableApi>,
}

impl ScriptService {
    pub fn new(api: Rc<dyn TableApi>) -> Self {
        Self { api }
    }

    pub async fn run(&self, script_name: &str) -> Result<ScriptOutput, IngestError> {
        let script_name = script_name.trim();
        if script_name.is_empty() {
            return Ok(ScriptOutput {
                output: None,
                error: Some("script name is required".to_string()),
            });
        }

        match self.api.run_script(script_name).await {
            Ok(output) => {
                info!(script = script_name, "script finished");
                Ok(output)
            }
            Err(err) => {
                warn!(script = script_name, error = %err, "script failed");
                Err(IngestError::TransportOrServerError {
                    message: err.user_message(),
                })
            }
        }
    }
}
