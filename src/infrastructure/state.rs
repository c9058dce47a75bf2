//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{SettingsService, SummaryService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{FileSettingsRepository, JsonSnapshotRegistry};
use crate::infrastructure::presentation::{
    FileTemplateRenderer, HtmlPanelPresenter, TracingLauncher, TracingNotifier,
};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub settings_service: Arc<SettingsService>,
    pub summary_service: SummaryService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let registry = JsonSnapshotRegistry::load(&config.snapshot_path).await?;
        let settings_repository = FileSettingsRepository::new(config.settings_path.clone());
        let settings_service = Arc::new(SettingsService::new(Arc::new(settings_repository)));

        let summary_service = SummaryService::new(
            Arc::new(registry),
            settings_service.clone(),
            Arc::new(FileTemplateRenderer::new(config.template_path.clone())),
            Arc::new(HtmlPanelPresenter::new(config.output_dir.clone())),
            Arc::new(TracingNotifier),
            Arc::new(TracingLauncher),
            config.viewport,
        );

        Ok(Self {
            config,
            settings_service,
            summary_service,
        })
    }
}
