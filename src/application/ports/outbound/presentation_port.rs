//! Presentation ports - How the summary reaches the screen
//!
//! The host owns templating, panels and notifications. The summary only
//! hands over payloads and reacts to what the host reports back.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::dto::{PanelRequest, RenderedPanel, SummaryViewModel};
use crate::domain::value_objects::ButtonPosition;

// =============================================================================
// Template Renderer Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateRendererPort: Send + Sync {
    /// Render the summary template with `view` as its only input
    async fn render(&self, view: &SummaryViewModel) -> Result<String>;
}

// =============================================================================
// Panel Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PanelPort: Send + Sync {
    /// Open a panel.
    ///
    /// Resolves once the panel has finished rendering, so callers can wire
    /// up its item links straight away.
    async fn open(&self, request: PanelRequest) -> Result<RenderedPanel>;
}

// =============================================================================
// Notification Port
// =============================================================================

/// User-facing notifications; the summary only reports failures
#[cfg_attr(test, mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn error(&self, message: &str);
}

// =============================================================================
// Launcher Port
// =============================================================================

/// The floating button that opens the summary
#[cfg_attr(test, mockall::automock)]
pub trait LauncherPort: Send + Sync {
    fn mount(&self, position: ButtonPosition);
    fn reposition(&self, position: ButtonPosition);
}
