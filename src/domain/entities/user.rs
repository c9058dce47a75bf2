//! User entity - a participant known to the host

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActorId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Currently connected to the session
    #[serde(default)]
    pub active: bool,
    #[serde(default, rename = "isGM")]
    pub is_gm: bool,
    /// The user's assigned character, if any
    #[serde(default)]
    pub character: Option<ActorId>,
}

impl User {
    pub fn player(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active: true,
            is_gm: false,
            character: None,
        }
    }

    pub fn game_master(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            is_gm: true,
            ..Self::player(id, name)
        }
    }

    pub fn with_character(mut self, character: impl Into<ActorId>) -> Self {
        self.character = Some(character.into());
        self
    }

    pub fn disconnected(mut self) -> Self {
        self.active = false;
        self
    }

    /// Connected player (not GM) with an assigned character
    pub fn is_connected_player(&self) -> bool {
        self.active && !self.is_gm && self.character.is_some()
    }
}
