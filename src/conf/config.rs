use config::{Config as CConfig, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TABLE_NAME: &str = "generic_table";
pub const ENV_PREFIX: &str = "TABLEDESK";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cannot parse config: {0}")]
    Parsing(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerConf {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TableConf {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConf,
    pub table: TableConf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConf {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            table: TableConf {
                name: DEFAULT_TABLE_NAME.to_string(),
            },
        }
    }
}

fn with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    CConfig::builder()
        .set_default("server.base_url", DEFAULT_BASE_URL)
        .and_then(|builder| builder.set_default("table.name", DEFAULT_TABLE_NAME))
        .map_err(|e| ConfigError::Parsing(e.to_string()))
}

fn finish(
    builder: ConfigBuilder<config::builder::DefaultState>,
) -> Result<AppConfig, ConfigError> {
    builder
        .build()
        .map_err(|e| ConfigError::Parsing(e.to_string()))?
        .try_deserialize::<AppConfig>()
        .map_err(|e| ConfigError::Parsing(e.to_string()))
}

impl AppConfig {
    pub fn from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
        finish(with_defaults()?.add_source(File::from_str(toml_str, FileFormat::Toml)))
    }

    pub fn load(toml_str: Option<&str>) -> Result<AppConfig, ConfigError> {
        let mut builder = with_defaults()?;
        if let Some(toml_str) = toml_str {
            builder = builder.add_source(File::from_str(toml_str, FileFormat::Toml));
        }
        finish(builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_correct_toml() {
        let toml = r#"
        [server]
        base_url = "http://10.0.0.2:8080"

        [table]
        name = "inventory"
        "#;
        let conf = AppConfig::from_str(toml);
        assert_eq!(
            conf,
            Ok(AppConfig {
                server: ServerConf {
                    base_url: String::from("http://10.0.0.2:8080"),
                },
                table: TableConf {
                    name: String::from("inventory"),
                },
            })
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let conf = AppConfig::from_str("[table]\nname = \"people\"\n").expect("should parse");

        assert_eq!(conf.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(conf.table.name, "people");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let conf = AppConfig::from_str("[server]\nbase_url = \"x\"\nport = 1\n");

        assert!(matches!(conf, Err(ConfigError::Parsing(_))));
    }
}
