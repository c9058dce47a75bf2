//! Summary view model building

use crate::application::dto::{columns_class, CharacterSummaryDto, SummaryViewModel, TraitEntryDto};
use crate::domain::entities::{Actor, Item, ItemType};
use crate::domain::value_objects::Severity;

/// Build the template payload for `characters`, preserving their order.
pub fn build_view_model(characters: &[&Actor], columns_per_row: u32) -> SummaryViewModel {
    SummaryViewModel {
        characters: characters.iter().map(|actor| summarize(actor)).collect(),
        columns_class: columns_class(columns_per_row),
    }
}

fn summarize(actor: &Actor) -> CharacterSummaryDto {
    let edges = actor.items_of_type(ItemType::Edge).map(edge_entry).collect();
    let hindrances = actor
        .items_of_type(ItemType::Hindrance)
        .map(hindrance_entry)
        .collect();

    CharacterSummaryDto {
        name: actor.name.clone(),
        id: actor.id.clone(),
        edges: non_empty(edges),
        hindrances: non_empty(hindrances),
    }
}

fn edge_entry(item: &Item) -> TraitEntryDto {
    TraitEntryDto {
        name: item.name.clone(),
        id: item.id.clone(),
    }
}

fn hindrance_entry(item: &Item) -> TraitEntryDto {
    let suffix = Severity::resolve(&item.system)
        .map(|severity| severity.suffix())
        .unwrap_or_default();
    TraitEntryDto {
        name: format!("{}{}", item.name, suffix),
        id: item.id.clone(),
    }
}

fn non_empty(entries: Vec<TraitEntryDto>) -> Option<Vec<TraitEntryDto>> {
    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ActorType;
    use crate::domain::value_objects::ItemProperties;

    fn hero(items: Vec<Item>) -> Actor {
        items
            .into_iter()
            .fold(Actor::new("a1", "Hero", ActorType::Character), Actor::with_item)
    }

    fn hindrance(id: &str, name: &str, system: ItemProperties) -> Item {
        Item::new(id, name, ItemType::Hindrance).with_system(system)
    }

    fn hindrance_names(view: &SummaryViewModel) -> Vec<String> {
        view.characters[0]
            .hindrances
            .as_ref()
            .map(|h| h.iter().map(|e| e.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_no_characters() {
        let view = build_view_model(&[], 2);
        assert!(view.characters.is_empty());
        assert_eq!(view.columns_class, "cols-2");
    }

    #[test]
    fn test_columns_class() {
        assert_eq!(build_view_model(&[], 1).columns_class, "cols-1");
        assert_eq!(build_view_model(&[], 3).columns_class, "cols-3");
    }

    #[test]
    fn test_edges_in_stored_order() {
        let actor = hero(vec![
            Item::new("e1", "Quick", ItemType::Edge),
            Item::new("s1", "Fighting", ItemType::Skill),
            Item::new("e2", "Brave", ItemType::Edge),
        ]);
        let view = build_view_model(&[&actor], 2);

        let edges = view.characters[0].edges.as_ref().expect("edges should be present");
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].name, "Quick");
        assert_eq!(edges[0].id.as_str(), "e1");
        assert_eq!(edges[1].name, "Brave");
        assert!(view.characters[0].hindrances.is_none());
    }

    #[test]
    fn test_hindrance_severity_suffixes() {
        let actor = hero(vec![
            hindrance("h1", "Overconfident", ItemProperties::new().with("major", true)),
            hindrance("h2", "Curious", ItemProperties::new().with("major", false)),
            hindrance("h3", "Loyal", ItemProperties::new().with("severity", "Minor")),
            hindrance("h4", "Phobia", ItemProperties::new().with("level", "Major")),
            hindrance("h5", "Unknown", ItemProperties::new()),
        ]);
        let view = build_view_model(&[&actor], 2);

        assert_eq!(
            hindrance_names(&view),
            vec![
                "Overconfident (Major)",
                "Curious (Minor)",
                "Loyal (Minor)",
                "Phobia (Major)",
                "Unknown",
            ]
        );
    }

    #[test]
    fn test_major_flag_takes_precedence() {
        let actor = hero(vec![hindrance(
            "h1",
            "Stubborn",
            ItemProperties::new()
                .with("major", true)
                .with("severity", "Minor")
                .with("level", "Minor"),
        )]);
        let view = build_view_model(&[&actor], 2);
        assert_eq!(hindrance_names(&view), vec!["Stubborn (Major)"]);
    }

    #[test]
    fn test_empty_buckets_are_absent() {
        let actor = hero(vec![]);
        let view = build_view_model(&[&actor], 2);
        assert!(view.characters[0].edges.is_none());
        assert!(view.characters[0].hindrances.is_none());

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["characters"][0]["edges"].is_null());
        assert_eq!(json["columnsClass"], "cols-2");
    }

    #[test]
    fn test_multiple_characters_keep_order() {
        let one = Actor::new("a1", "Hero One", ActorType::Character)
            .with_item(Item::new("e1", "Quick", ItemType::Edge));
        let two = Actor::new("a2", "Hero Two", ActorType::Character).with_item(hindrance(
            "h1",
            "Greedy",
            ItemProperties::new().with("major", false),
        ));

        let view = build_view_model(&[&two, &one], 2);
        assert_eq!(view.characters.len(), 2);
        assert_eq!(view.characters[0].name, "Hero Two");
        assert!(view.characters[0].edges.is_none());
        assert_eq!(view.characters[0].hindrances.as_ref().map(Vec::len), Some(1));
        assert_eq!(view.characters[1].name, "Hero One");
        assert_eq!(view.characters[1].edges.as_ref().map(Vec::len), Some(1));
        assert!(view.characters[1].hindrances.is_none());
    }
}
