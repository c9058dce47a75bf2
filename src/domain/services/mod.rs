//! Domain services - Pure operations over domain entities

pub mod description;
pub mod layout;
pub mod roster;

pub use description::sanitize_description;
pub use layout::size_panel;
pub use roster::select_roster;
