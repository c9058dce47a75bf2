use async_trait::async_trait;

use crate::domain::value_objects::{SettingValueError, SummarySettings};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Value(#[from] SettingValueError),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepositoryPort: Send + Sync {
    async fn get(&self) -> Result<SummarySettings, SettingsError>;
    async fn save(&self, settings: &SummarySettings) -> Result<(), SettingsError>;
    async fn reset(&self) -> Result<SummarySettings, SettingsError>;
}
