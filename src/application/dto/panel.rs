use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActorId, ItemId, PanelSize};

/// Everything the host needs to open a panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelRequest {
    pub title: String,
    /// Rendered markup; opaque to the summary
    pub content: String,
    pub size: PanelSize,
    pub resizable: bool,
    pub classes: Vec<String>,
}

/// A panel that finished rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPanel {
    /// Where the host put the panel (a file path for the HTML presenter)
    pub location: String,
    /// Clickable item links found in the rendered panel
    pub item_links: Vec<ItemLink>,
}

/// The `{itemId, actorId}` pair carried by a clickable item link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLink {
    pub item_id: ItemId,
    pub actor_id: ActorId,
}

impl ItemLink {
    pub fn new(item_id: impl Into<ItemId>, actor_id: impl Into<ActorId>) -> Self {
        Self {
            item_id: item_id.into(),
            actor_id: actor_id.into(),
        }
    }
}
