use std::path::PathBuf;

use async_trait::async_trait;
use config::{Config, Environment, File, FileFormat, Map};
use tracing::debug;

use crate::application::ports::outbound::{SettingsError, SettingsRepositoryPort};
use crate::domain::value_objects::SummarySettings;

/// Prefix of environment variables overriding stored settings,
/// e.g. `SWADE_SUMMARY_CHARACTERS_PER_ROW=3`
pub const ENV_PREFIX: &str = "SWADE_SUMMARY";

/// Settings layered from defaults, a JSON file and the environment
pub struct FileSettingsRepository {
    path: PathBuf,
    /// Variables to read instead of the process environment
    env: Option<Map<String, String>>,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            env: None,
        }
    }

    /// Read overrides from `env` rather than the process environment
    #[cfg(test)]
    pub fn with_env(mut self, env: Map<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    fn load(&self) -> Result<SummarySettings, SettingsError> {
        let config = Config::builder()
            .add_source(
                File::from(self.path.as_path())
                    .format(FileFormat::Json)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(self.env.clone()),
            )
            .build()
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| SettingsError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl SettingsRepositoryPort for FileSettingsRepository {
    async fn get(&self) -> Result<SummarySettings, SettingsError> {
        let settings = self.load()?;
        debug!(path = %self.path.display(), "Settings resolved");
        Ok(settings)
    }

    async fn save(&self, settings: &SummarySettings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SettingsError::Storage(e.to_string()))?;
        }
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    async fn reset(&self) -> Result<SummarySettings, SettingsError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(SettingsError::Storage(e.to_string())),
        }

        self.load()
    }
}
