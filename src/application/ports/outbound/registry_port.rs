//! Registry port - Read-only access to the host's users and actors

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{Actor, User};
use crate::domain::value_objects::ActorId;

/// Identifier of the only game system the summary supports
pub const SUPPORTED_SYSTEM_ID: &str = "swade";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRegistryPort: Send + Sync {
    /// Id of the active game system
    async fn system_id(&self) -> Result<String>;

    /// All users, in host order
    async fn users(&self) -> Result<Vec<User>>;

    /// All actors, in host order
    async fn actors(&self) -> Result<Vec<Actor>>;

    /// Get an actor by ID
    async fn actor(&self, id: &ActorId) -> Result<Option<Actor>>;
}
