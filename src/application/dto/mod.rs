//! Data Transfer Objects - Payloads crossing the host boundary
//!
//! The view model is what templates receive; panel requests and item links
//! are exchanged with the panel presenter.

pub mod panel;
pub mod summary;

pub use panel::{ItemLink, PanelRequest, RenderedPanel};
pub use summary::{columns_class, CharacterSummaryDto, SummaryViewModel, TraitEntryDto};
