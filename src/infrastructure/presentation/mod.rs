//! Presentation adapters - Standalone stand-ins for the host UI
//!
//! Panels are written as HTML documents, notifications and the launcher
//! button are reported through `tracing`.

mod html_panel;
mod template_renderer;
mod tracing_adapters;

pub use html_panel::HtmlPanelPresenter;
pub use template_renderer::FileTemplateRenderer;
pub use tracing_adapters::{TracingLauncher, TracingNotifier};
