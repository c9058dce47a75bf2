use tracing::{error, info};

use crate::application::ports::outbound::{LauncherPort, NotificationPort};
use crate::domain::value_objects::ButtonPosition;

/// Reports user notifications through the log
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn error(&self, message: &str) {
        error!(target: "swade_summary::notifications", "{}", message);
    }
}

/// Logs where the floating summary button would be placed
pub struct TracingLauncher;

impl TracingLauncher {
    pub fn markup(position: ButtonPosition) -> String {
        format!(
            r#"<div id="swade-summary-float-btn" class="swade-summary-float-btn {}"><button type="button" title="Character Summary"><i class="fas fa-users"></i></button></div>"#,
            position.css_class()
        )
    }
}

impl LauncherPort for TracingLauncher {
    fn mount(&self, position: ButtonPosition) {
        info!(position = position.css_class(), markup = %Self::markup(position), "Summary button mounted");
    }

    fn reposition(&self, position: ButtonPosition) {
        info!(position = position.css_class(), "Summary button moved to {}", position.label());
    }
}
