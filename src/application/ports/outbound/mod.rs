//! Outbound ports - Interfaces that the application requires from the host

mod presentation_port;
mod registry_port;
mod settings_port;

pub use presentation_port::{LauncherPort, NotificationPort, PanelPort, TemplateRendererPort};
pub use registry_port::{GameRegistryPort, SUPPORTED_SYSTEM_ID};
pub use settings_port::{SettingsError, SettingsRepositoryPort};

#[cfg(test)]
pub use presentation_port::{
    MockLauncherPort, MockNotificationPort, MockPanelPort, MockTemplateRendererPort,
};
#[cfg(test)]
pub use registry_port::MockGameRegistryPort;
#[cfg(test)]
pub use settings_port::MockSettingsRepositoryPort;
