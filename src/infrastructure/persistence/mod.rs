//! Persistence adapters
//!
//! The host owns all documents; these adapters read a JSON snapshot of them
//! and keep the summary settings in a local file.

mod settings_repository;
mod snapshot_registry;

pub use settings_repository::FileSettingsRepository;
pub use snapshot_registry::JsonSnapshotRegistry;
