//! Panel layout value objects

use serde::{Deserialize, Serialize};

/// Gap between cards, horizontally and vertically
pub const CARD_GAP: f64 = 20.0;
/// Panel padding (30px each side)
pub const PANEL_PADDING: f64 = 60.0;
/// Space reserved for the close button
pub const BUTTON_AREA: f64 = 50.0;
/// Space reserved for the title bar and margins
pub const TITLE_RESERVE: f64 = 100.0;
/// Panels are never shorter than this, whatever the column count
pub const MIN_PANEL_HEIGHT: f64 = 350.0;
/// Share of the viewport width a panel may take
pub const MAX_WIDTH_RATIO: f64 = 0.95;
/// Share of the viewport height a panel may take
pub const MAX_HEIGHT_RATIO: f64 = 0.9;

/// Card and panel dimensions for a given number of columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnProfile {
    pub columns: u32,
    pub card_width: f64,
    pub card_height: f64,
    pub min_width: f64,
}

const ONE_COLUMN: ColumnProfile = ColumnProfile {
    columns: 1,
    card_width: 400.0,
    card_height: 300.0,
    min_width: 450.0,
};

const TWO_COLUMNS: ColumnProfile = ColumnProfile {
    columns: 2,
    card_width: 320.0,
    card_height: 280.0,
    min_width: 700.0,
};

const THREE_COLUMNS: ColumnProfile = ColumnProfile {
    columns: 3,
    card_width: 280.0,
    card_height: 260.0,
    min_width: 920.0,
};

impl ColumnProfile {
    /// Profile for `columns`; anything outside 1..=3 gets the two-column profile
    pub fn for_columns(columns: u32) -> Self {
        match columns {
            1 => ONE_COLUMN,
            3 => THREE_COLUMNS,
            _ => TWO_COLUMNS,
        }
    }
}

/// Visible area of the host window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Pixel size of a panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

impl PanelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
