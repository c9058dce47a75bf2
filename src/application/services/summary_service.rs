//! Summary Service - Host-facing flows of the character summary
//!
//! Wires the roster selection, view model building and panel sizing to the
//! host ports: mounting the launcher button, opening the summary panel and
//! opening the detail panel when an item link is clicked.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::application::dto::{columns_class, ItemLink, PanelRequest, RenderedPanel};
use crate::application::ports::outbound::{
    GameRegistryPort, LauncherPort, NotificationPort, PanelPort, TemplateRendererPort,
    SUPPORTED_SYSTEM_ID,
};
use crate::application::services::settings_service::SettingsService;
use crate::application::services::view_model::build_view_model;
use crate::domain::services::{sanitize_description, select_roster, size_panel};
use crate::domain::value_objects::{PanelSize, SettingKey, Viewport};

pub const SUMMARY_TITLE: &str = "Characters Summary";
pub const SUMMARY_PANEL_CLASS: &str = "swade-summary-dialog";
pub const DESCRIPTION_PANEL_CLASS: &str = "swade-item-description";
pub const DESCRIPTION_PANEL_SIZE: PanelSize = PanelSize {
    width: 400.0,
    height: 300.0,
};

/// An opened summary panel
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedSummary {
    pub panel: RenderedPanel,
    pub size: PanelSize,
    pub character_count: usize,
}

pub struct SummaryService {
    registry: Arc<dyn GameRegistryPort>,
    settings: Arc<SettingsService>,
    renderer: Arc<dyn TemplateRendererPort>,
    panels: Arc<dyn PanelPort>,
    notifications: Arc<dyn NotificationPort>,
    launcher: Arc<dyn LauncherPort>,
    viewport: Viewport,
}

impl SummaryService {
    pub fn new(
        registry: Arc<dyn GameRegistryPort>,
        settings: Arc<SettingsService>,
        renderer: Arc<dyn TemplateRendererPort>,
        panels: Arc<dyn PanelPort>,
        notifications: Arc<dyn NotificationPort>,
        launcher: Arc<dyn LauncherPort>,
        viewport: Viewport,
    ) -> Self {
        Self {
            registry,
            settings,
            renderer,
            panels,
            notifications,
            launcher,
            viewport,
        }
    }

    /// Mount the launcher button if the game system is supported and
    /// summaries are enabled. Returns whether the button was mounted.
    pub async fn init(&self) -> Result<bool> {
        let system_id = self.registry.system_id().await?;
        if system_id != SUPPORTED_SYSTEM_ID {
            warn!(system_id = %system_id, "Summary only works with the SWADE system");
            return Ok(false);
        }

        let settings = self.settings.get().await?;
        if !settings.enable_summaries {
            info!("Summaries are disabled");
            return Ok(false);
        }

        self.launcher.mount(settings.button_position);
        info!(position = settings.button_position.css_class(), "Summary button mounted");
        Ok(true)
    }

    /// React to a host setting change
    pub async fn on_setting_changed(&self, key: SettingKey) -> Result<()> {
        if key == SettingKey::ButtonPosition {
            let settings = self.settings.get().await?;
            self.launcher.reposition(settings.button_position);
            debug!(position = settings.button_position.css_class(), "Summary button moved");
        }
        Ok(())
    }

    /// Open the summary panel for the current roster.
    ///
    /// Returns `None` when summaries are disabled.
    #[instrument(skip(self))]
    pub async fn show_summary(&self) -> Result<Option<OpenedSummary>> {
        let settings = self.settings.get().await?;
        if !settings.enable_summaries {
            info!("Summaries are disabled, not opening the panel");
            return Ok(None);
        }

        let users = self.registry.users().await.context("Failed to load users")?;
        let actors = self.registry.actors().await.context("Failed to load actors")?;

        let roster = select_roster(&users, &actors, &settings.selected_characters);
        let columns = settings.characters_per_row;
        let view = build_view_model(&roster, columns);

        let content = self
            .renderer
            .render(&view)
            .await
            .context("Failed to render summary template")?;
        let size = size_panel(columns, roster.len(), self.viewport);

        let panel = self
            .panels
            .open(PanelRequest {
                title: SUMMARY_TITLE.to_string(),
                content,
                size,
                resizable: true,
                classes: vec![SUMMARY_PANEL_CLASS.to_string(), columns_class(columns)],
            })
            .await
            .context("Failed to open summary panel")?;

        info!(
            characters = roster.len(),
            links = panel.item_links.len(),
            width = size.width,
            height = size.height,
            "Summary panel opened"
        );

        Ok(Some(OpenedSummary {
            panel,
            size,
            character_count: roster.len(),
        }))
    }

    /// Open the description panel for a clicked item link.
    ///
    /// A missing actor or item is reported to the user and yields `None`.
    #[instrument(skip(self, link), fields(actor_id = %link.actor_id, item_id = %link.item_id))]
    pub async fn show_item_description(&self, link: &ItemLink) -> Result<Option<RenderedPanel>> {
        let Some(actor) = self.registry.actor(&link.actor_id).await? else {
            self.notifications.error("Actor not found");
            return Ok(None);
        };

        let Some(item) = actor.item(&link.item_id) else {
            self.notifications.error("Item not found");
            return Ok(None);
        };

        let description = sanitize_description(item.description());
        let content = format!(
            r#"<div class="item-description"><h3>{name}</h3><div class="description-content">{description}</div></div>"#,
            name = escape_html(&item.name),
            description = escape_html(&description),
        );

        let panel = self
            .panels
            .open(PanelRequest {
                title: item.name.clone(),
                content,
                size: DESCRIPTION_PANEL_SIZE,
                resizable: true,
                classes: vec![DESCRIPTION_PANEL_CLASS.to_string()],
            })
            .await
            .context("Failed to open description panel")?;

        debug!("Description panel opened for {}", item.name);
        Ok(Some(panel))
    }
}

/// Escape text for inclusion in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
