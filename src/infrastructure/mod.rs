//! Infrastructure layer - Adapters standing in for the host
//!
//! This layer contains:
//! - Config: Process configuration from the environment
//! - Persistence: World snapshot registry and settings file
//! - Presentation: Template rendering, HTML panels, notifications
//! - State: Shared application state

pub mod config;
pub mod persistence;
pub mod presentation;
pub mod state;
