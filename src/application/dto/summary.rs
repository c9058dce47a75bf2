use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActorId, ItemId};

/// Prefix of the layout token selecting a column-count specific style
pub const COLUMNS_CLASS_PREFIX: &str = "cols-";

/// Template payload for the character summary panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryViewModel {
    pub characters: Vec<CharacterSummaryDto>,
    /// Layout token, e.g. `cols-2`
    pub columns_class: String,
}

/// One character card.
///
/// `edges` and `hindrances` are `None` (serialized as `null`) when the
/// character has none, so templates can tell "none" apart from "not loaded".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSummaryDto {
    pub name: String,
    pub id: ActorId,
    pub edges: Option<Vec<TraitEntryDto>>,
    pub hindrances: Option<Vec<TraitEntryDto>>,
}

/// An edge or hindrance line on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitEntryDto {
    pub name: String,
    pub id: ItemId,
}

pub fn columns_class(columns: u32) -> String {
    format!("{}{}", COLUMNS_CLASS_PREFIX, columns)
}
