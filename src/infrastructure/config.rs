//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::value_objects::Viewport;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON world snapshot with the system id, users and actors
    pub snapshot_path: PathBuf,
    /// JSON file holding saved summary settings
    pub settings_path: PathBuf,
    /// HTML frame template for the summary panel
    pub template_path: PathBuf,
    /// Directory rendered panels are written to
    pub output_dir: PathBuf,

    /// Size of the host window panels are fitted to
    pub viewport: Viewport,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Viewport::default();
        Ok(Self {
            snapshot_path: env_path("SWADE_SNAPSHOT_PATH", "world.json"),
            settings_path: env_path("SWADE_SETTINGS_PATH", "swade-summary.settings.json"),
            template_path: env_path("SWADE_TEMPLATE_PATH", "templates/character-summary.html"),
            output_dir: env_path("SWADE_OUTPUT_DIR", "out"),

            viewport: Viewport::new(
                env_f64("SWADE_VIEWPORT_WIDTH", defaults.width)
                    .context("SWADE_VIEWPORT_WIDTH must be a number")?,
                env_f64("SWADE_VIEWPORT_HEIGHT", defaults.height)
                    .context("SWADE_VIEWPORT_HEIGHT must be a number")?,
            ),
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn env_f64(key: &str, default: f64) -> Result<f64> {
    match env::var(key) {
        Ok(value) => Ok(value.trim().parse()?),
        Err(_) => Ok(default),
    }
}
