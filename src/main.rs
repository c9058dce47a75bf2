//! SWADE Summary - Party roster summary for Savage Worlds tables
//!
//! Builds the character summary panel from a world snapshot:
//! - Selects connected players' characters plus any forced in by settings
//! - Lists each character's edges and hindrances (with severity)
//! - Sizes the panel for the configured number of columns
//! - Opens item descriptions with markup and document links cleaned up

mod application;
mod domain;
mod infrastructure;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::dto::ItemLink;
use crate::domain::value_objects::SettingKey;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::state::AppState;

#[derive(Parser)]
#[command(name = "swade-summary", version, about = "Character summary panel for SWADE")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the character summary panel (default)
    Summary,
    /// Open the description panel of one item
    Describe {
        /// Owning actor id
        actor_id: String,
        /// Item id
        item_id: String,
    },
    /// Show or change summary settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print every setting with its scope and resolved value
    Show,
    /// Change one setting, e.g. `characters-per-row 3`
    Set { key: String, value: String },
    /// Forget saved settings
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swade_summary=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    tracing::debug!("Configuration loaded");
    tracing::debug!("  Snapshot: {}", config.snapshot_path.display());
    tracing::debug!("  Settings: {}", config.settings_path.display());
    tracing::debug!("  Template: {}", config.template_path.display());

    let state = AppState::new(config).await?;
    tracing::debug!(
        width = state.config.viewport.width,
        height = state.config.viewport.height,
        "Viewport"
    );

    match cli.command.unwrap_or(Command::Summary) {
        Command::Summary => {
            if !state.summary_service.init().await? {
                return Ok(());
            }
            match state.summary_service.show_summary().await? {
                Some(opened) => {
                    println!("{}", opened.panel.location);
                    println!(
                        "{} character(s), {}x{}px",
                        opened.character_count, opened.size.width, opened.size.height
                    );
                    for link in &opened.panel.item_links {
                        println!("  {} {}", link.actor_id, link.item_id);
                    }
                }
                None => println!("Summaries are disabled"),
            }
        }
        Command::Describe { actor_id, item_id } => {
            let link = ItemLink::new(item_id, actor_id);
            if let Some(panel) = state.summary_service.show_item_description(&link).await? {
                println!("{}", panel.location);
            }
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => {
                let settings = state.settings_service.get().await?;
                for key in SettingKey::ALL {
                    println!("{} [{}] = {}", key, key.scope().as_str(), settings.value_of(key));
                }
            }
            SettingsAction::Set { key, value } => {
                let key: SettingKey = key.parse()?;
                let settings = state.settings_service.set(key, &value).await?;
                state.summary_service.on_setting_changed(key).await?;
                println!("{} = {}", key, settings.value_of(key));
            }
            SettingsAction::Reset => {
                let settings = state.settings_service.reset().await?;
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
        },
    }

    Ok(())
}
