//! Application services - Use case implementations
//!
//! The view model builder is a pure function; the settings and summary
//! services drive the outbound ports.

pub mod settings_service;
pub mod summary_service;
pub mod view_model;

pub use settings_service::SettingsService;
pub use summary_service::{escape_html, SummaryService};
