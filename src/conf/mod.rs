mod config;

pub use self::config::{
    AppConfig, ConfigError, ServerConf, TableConf, DEFAULT_BASE_URL, DEFAULT_TABLE_NAME,
};

#[cfg(not(target_arch = "wasm32"))]
pub fn default_config_path() -> anyhow::Result<std::path::PathBuf> {
    use anyhow::Context;

    let dirs = directories::ProjectDirs::from("com", "tabledesk", "tabledesk")
        .context("failed to resolve project directories")?;
    Ok(dirs.config_dir().join("config.toml"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    use anyhow::Context;

    let path = default_config_path()?;
    let contents = if path.exists() {
        Some(
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?,
        )
    } else {
        None
    };
    AppConfig::load(contents.as_deref())
        .with_context(|| format!("failed to load config: {}", path.display()))
}

#[cfg(target_arch = "wasm32")]
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    Ok(AppConfig::load(None)?)
}
