//! Actor entity - characters, NPCs and other host documents that own items

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActorId, ItemId, ItemProperties};

/// Host actor type. Only [`ActorType::Character`] is a player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Character,
    Npc,
    Vehicle,
    Group,
    #[serde(other)]
    Other,
}

/// An actor registered with the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    #[serde(rename = "type")]
    pub actor_type: ActorType,
    /// Owned items, in the order the host stores them
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Actor {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>, actor_type: ActorType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            actor_type,
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn is_player_character(&self) -> bool {
        self.actor_type == ActorType::Character
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items of one type, in stored order
    pub fn items_of_type(&self, item_type: ItemType) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.item_type == item_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Special ability
    Edge,
    /// Disadvantage, optionally with a severity
    Hindrance,
    Skill,
    Power,
    Weapon,
    Armor,
    Shield,
    Gear,
    Consumable,
    Ability,
    Action,
    #[serde(other)]
    Other,
}

/// An item owned by exactly one actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Game system data; shape varies by item type
    #[serde(default)]
    pub system: ItemProperties,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            system: ItemProperties::default(),
        }
    }

    pub fn with_system(mut self, system: ItemProperties) -> Self {
        self.system = system;
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.system.description()
    }
}
