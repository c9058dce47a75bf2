//! World snapshot registry
//!
//! Reads users and actors from a JSON export of the host world, in the same
//! shape the host serializes its documents.

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::application::ports::outbound::GameRegistryPort;
use crate::domain::entities::{Actor, User};
use crate::domain::value_objects::ActorId;

/// Host world contents relevant to the summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSnapshot {
    /// Active game system, e.g. `swade`
    pub system_id: String,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub actors: Vec<Actor>,
}

/// Read-only registry over a [`WorldSnapshot`]
pub struct JsonSnapshotRegistry {
    snapshot: WorldSnapshot,
}

impl JsonSnapshotRegistry {
    pub fn new(snapshot: WorldSnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read world snapshot {}", path.display()))?;
        let snapshot: WorldSnapshot = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid world snapshot {}", path.display()))?;

        info!(
            system_id = %snapshot.system_id,
            users = snapshot.users.len(),
            actors = snapshot.actors.len(),
            "World snapshot loaded from {}",
            path.display()
        );
        Ok(Self::new(snapshot))
    }
}

#[async_trait]
impl GameRegistryPort for JsonSnapshotRegistry {
    async fn system_id(&self) -> Result<String> {
        Ok(self.snapshot.system_id.clone())
    }

    async fn users(&self) -> Result<Vec<User>> {
        Ok(self.snapshot.users.clone())
    }

    async fn actors(&self) -> Result<Vec<Actor>> {
        Ok(self.snapshot.actors.clone())
    }

    async fn actor(&self, id: &ActorId) -> Result<Option<Actor>> {
        Ok(self.snapshot.actors.iter().find(|a| &a.id == id).cloned())
    }
}
