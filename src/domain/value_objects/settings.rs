//! Summary settings value object
//!
//! Settings are registered with the host under the `swade-summary`
//! namespace. World-scoped settings are shared by everyone at the table,
//! client-scoped ones are per browser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Namespace all settings are registered under
pub const SETTINGS_NAMESPACE: &str = "swade-summary";

/// Allowed range for `characters-per-row`
pub const MIN_CHARACTERS_PER_ROW: u32 = 1;
pub const MAX_CHARACTERS_PER_ROW: u32 = 3;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingValueError {
    #[error("Unknown setting: {0}")]
    UnknownKey(String),
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: SettingKey,
        value: String,
        reason: String,
    },
}

/// Where a setting is stored by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingScope {
    World,
    Client,
}

impl SettingScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingScope::World => "world",
            SettingScope::Client => "client",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    EnableSummaries,
    SelectedCharacters,
    ButtonPosition,
    CharactersPerRow,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::EnableSummaries,
        SettingKey::SelectedCharacters,
        SettingKey::ButtonPosition,
        SettingKey::CharactersPerRow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::EnableSummaries => "enable-summaries",
            SettingKey::SelectedCharacters => "selected-characters",
            SettingKey::ButtonPosition => "button-position",
            SettingKey::CharactersPerRow => "characters-per-row",
        }
    }

    pub fn scope(&self) -> SettingScope {
        match self {
            SettingKey::EnableSummaries | SettingKey::SelectedCharacters => SettingScope::World,
            SettingKey::ButtonPosition | SettingKey::CharactersPerRow => SettingScope::Client,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", SETTINGS_NAMESPACE, self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = SettingValueError;

    /// Accepts both the bare key and the namespaced form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s
            .strip_prefix(SETTINGS_NAMESPACE)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(s);
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == bare)
            .ok_or_else(|| SettingValueError::UnknownKey(s.to_string()))
    }
}

/// Screen corner of the floating summary button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ButtonPosition {
    pub const ALL: [ButtonPosition; 4] = [
        ButtonPosition::TopLeft,
        ButtonPosition::TopRight,
        ButtonPosition::BottomLeft,
        ButtonPosition::BottomRight,
    ];

    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonPosition::TopLeft => "top-left",
            ButtonPosition::TopRight => "top-right",
            ButtonPosition::BottomLeft => "bottom-left",
            ButtonPosition::BottomRight => "bottom-right",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonPosition::TopLeft => "Top Left",
            ButtonPosition::TopRight => "Top Right",
            ButtonPosition::BottomLeft => "Bottom Left",
            ButtonPosition::BottomRight => "Bottom Right",
        }
    }
}

impl FromStr for ButtonPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonPosition::ALL
            .into_iter()
            .find(|p| p.css_class() == s)
            .ok_or_else(|| "expected one of top-left, top-right, bottom-left, bottom-right".to_string())
    }
}

/// All settings the summary reads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummarySettings {
    pub enable_summaries: bool,
    /// Comma-separated character names or ids always shown in the summary
    pub selected_characters: String,
    pub button_position: ButtonPosition,
    pub characters_per_row: u32,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            enable_summaries: true,
            selected_characters: String::new(),
            button_position: ButtonPosition::TopRight,
            characters_per_row: 2,
        }
    }
}

impl SummarySettings {
    /// Parse `value` and assign it to the setting named by `key`
    pub fn apply(&mut self, key: SettingKey, value: &str) -> Result<(), SettingValueError> {
        let invalid = |reason: String| SettingValueError::InvalidValue {
            key,
            value: value.to_string(),
            reason,
        };

        match key {
            SettingKey::EnableSummaries => {
                self.enable_summaries = value
                    .trim()
                    .parse::<bool>()
                    .map_err(|_| invalid("expected true or false".to_string()))?;
            }
            SettingKey::SelectedCharacters => {
                self.selected_characters = value.to_string();
            }
            SettingKey::ButtonPosition => {
                self.button_position = value.trim().parse::<ButtonPosition>().map_err(invalid)?;
            }
            SettingKey::CharactersPerRow => {
                let columns: u32 = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid("expected a whole number".to_string()))?;
                check_columns(columns).map_err(invalid)?;
                self.characters_per_row = columns;
            }
        }
        Ok(())
    }

    /// Check values the host does not constrain on its own
    pub fn validate(&self) -> Result<(), SettingValueError> {
        check_columns(self.characters_per_row).map_err(|reason| SettingValueError::InvalidValue {
            key: SettingKey::CharactersPerRow,
            value: self.characters_per_row.to_string(),
            reason,
        })
    }

    /// Current value of `key` as the host would display it
    pub fn value_of(&self, key: SettingKey) -> String {
        match key {
            SettingKey::EnableSummaries => self.enable_summaries.to_string(),
            SettingKey::SelectedCharacters => self.selected_characters.clone(),
            SettingKey::ButtonPosition => self.button_position.css_class().to_string(),
            SettingKey::CharactersPerRow => self.characters_per_row.to_string(),
        }
    }
}

fn check_columns(columns: u32) -> Result<(), String> {
    if (MIN_CHARACTERS_PER_ROW..=MAX_CHARACTERS_PER_ROW).contains(&columns) {
        Ok(())
    } else {
        Err(format!(
            "must be between {} and {}",
            MIN_CHARACTERS_PER_ROW, MAX_CHARACTERS_PER_ROW
        ))
    }
}
