use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::application::ports::outbound::{SettingsError, SettingsRepositoryPort};
use crate::domain::value_objects::{SettingKey, SummarySettings};

pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryPort>,
    cache: RwLock<Option<SummarySettings>>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryPort>) -> Self {
        Self {
            repository,
            cache: RwLock::new(None),
        }
    }

    /// Get current settings (cached)
    pub async fn get(&self) -> Result<SummarySettings, SettingsError> {
        let cache = self.cache.read().await;
        if let Some(settings) = &*cache {
            return Ok(settings.clone());
        }
        drop(cache);

        let settings = self.repository.get().await?;
        settings.validate()?;
        debug!(?settings, "Loaded summary settings");
        *self.cache.write().await = Some(settings.clone());
        Ok(settings)
    }

    /// Update settings and invalidate cache
    pub async fn update(&self, settings: SummarySettings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.repository.save(&settings).await?;
        *self.cache.write().await = Some(settings);
        Ok(())
    }

    /// Change a single setting from its raw value
    pub async fn set(&self, key: SettingKey, value: &str) -> Result<SummarySettings, SettingsError> {
        let mut settings = self.get().await?;
        settings.apply(key, value)?;
        self.update(settings.clone()).await?;
        info!(setting = %key, value = %settings.value_of(key), "Setting updated");
        Ok(settings)
    }

    /// Reset to env/defaults and clear stored values
    pub async fn reset(&self) -> Result<SummarySettings, SettingsError> {
        let settings = self.repository.reset().await?;
        *self.cache.write().await = Some(settings.clone());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::MockSettingsRepositoryPort;
    use crate::domain::value_objects::ButtonPosition;

    #[tokio::test]
    async fn test_get_is_cached() {
        let mut repository = MockSettingsRepositoryPort::new();
        repository
            .expect_get()
            .times(1)
            .returning(|| Ok(SummarySettings::default()));

        let service = SettingsService::new(Arc::new(repository));
        assert_eq!(service.get().await.unwrap(), SummarySettings::default());
        assert_eq!(service.get().await.unwrap(), SummarySettings::default());
    }

    #[tokio::test]
    async fn test_get_rejects_invalid_columns() {
        let mut repository = MockSettingsRepositoryPort::new();
        repository.expect_get().returning(|| {
            Ok(SummarySettings {
                characters_per_row: 9,
                ..Default::default()
            })
        });

        let service = SettingsService::new(Arc::new(repository));
        assert!(matches!(service.get().await, Err(SettingsError::Value(_))));
    }

    #[tokio::test]
    async fn test_set_saves_and_updates_cache() {
        let mut repository = MockSettingsRepositoryPort::new();
        repository
            .expect_get()
            .times(1)
            .returning(|| Ok(SummarySettings::default()));
        repository
            .expect_save()
            .withf(|s| s.button_position == ButtonPosition::BottomLeft)
            .times(1)
            .returning(|_| Ok(()));

        let service = SettingsService::new(Arc::new(repository));
        let updated = service
            .set(SettingKey::ButtonPosition, "bottom-left")
            .await
            .unwrap();
        assert_eq!(updated.button_position, ButtonPosition::BottomLeft);
        assert_eq!(service.get().await.unwrap().button_position, ButtonPosition::BottomLeft);
    }

    #[tokio::test]
    async fn test_set_invalid_value_does_not_save() {
        let mut repository = MockSettingsRepositoryPort::new();
        repository
            .expect_get()
            .returning(|| Ok(SummarySettings::default()));
        repository.expect_save().never();

        let service = SettingsService::new(Arc::new(repository));
        assert!(service.set(SettingKey::CharactersPerRow, "4").await.is_err());
    }
}
