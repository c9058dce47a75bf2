//! Value objects - Immutable objects defined by their attributes

mod ids;
mod item_properties;
mod layout;
mod settings;
mod severity;

pub use ids::*;
pub use item_properties::ItemProperties;
pub use layout::{
    ColumnProfile, PanelSize, Viewport, BUTTON_AREA, CARD_GAP, MAX_HEIGHT_RATIO, MAX_WIDTH_RATIO,
    MIN_PANEL_HEIGHT, PANEL_PADDING, TITLE_RESERVE,
};
pub use settings::{ButtonPosition, SettingKey, SettingValueError, SummarySettings};
pub use severity::Severity;
