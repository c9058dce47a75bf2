//! Roster selection
//!
//! The summary shows every connected player's character, followed by any
//! characters forced in through the `selected-characters` setting.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::{Actor, User};
use crate::domain::value_objects::ActorId;

/// Select the characters to summarize.
///
/// Connected non-GM players' characters come first, in `users` order. Then
/// each comma-separated token of `override_text` is resolved by actor id,
/// falling back to a case-insensitive player character name match, and
/// appended in token order. Every actor appears at most once and only player
/// characters are returned. Tokens that resolve to nothing are skipped.
pub fn select_roster<'a>(users: &[User], actors: &'a [Actor], override_text: &str) -> Vec<&'a Actor> {
    let mut roster = Vec::new();
    let mut seen: HashSet<&ActorId> = HashSet::new();

    let connected = users
        .iter()
        .filter(|user| user.is_connected_player())
        .filter_map(|user| user.character.as_ref())
        .filter_map(|id| find_by_id(actors, id.as_str()))
        .filter(|actor| actor.is_player_character());

    for actor in connected {
        if seen.insert(&actor.id) {
            roster.push(actor);
        }
    }

    for token in override_tokens(override_text) {
        match resolve_token(actors, token) {
            Some(actor) if actor.is_player_character() => {
                if seen.insert(&actor.id) {
                    roster.push(actor);
                }
            }
            Some(actor) => debug!(actor_id = %actor.id, "Skipping non-character actor: {}", token),
            None => debug!("No character matches '{}'", token),
        }
    }

    roster
}

fn override_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|token| !token.is_empty())
}

fn resolve_token<'a>(actors: &'a [Actor], token: &str) -> Option<&'a Actor> {
    find_by_id(actors, token).or_else(|| {
        let wanted = token.to_lowercase();
        actors
            .iter()
            .find(|actor| actor.is_player_character() && actor.name.to_lowercase() == wanted)
    })
}

fn find_by_id<'a>(actors: &'a [Actor], id: &str) -> Option<&'a Actor> {
    actors.iter().find(|actor| actor.id == *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ActorType;

    fn character(id: &str, name: &str) -> Actor {
        Actor::new(id, name, ActorType::Character)
    }

    fn ids(roster: &[&Actor]) -> Vec<String> {
        roster.iter().map(|a| a.id.to_string()).collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(select_roster(&[], &[], "").is_empty());
        assert!(select_roster(&[], &[], "   ").is_empty());
    }

    #[test]
    fn test_connected_players_in_user_order() {
        let actors = vec![character("actor1", "Hero One"), character("actor2", "Hero Two")];
        let users = vec![
            User::player("user2", "Player 2").with_character("actor2"),
            User::player("user1", "Player 1").with_character("actor1"),
            User::game_master("gm", "Game Master"),
        ];

        let roster = select_roster(&users, &actors, "");
        assert_eq!(ids(&roster), vec!["actor2", "actor1"]);
    }

    #[test]
    fn test_excludes_disconnected_gm_and_unassigned() {
        let actors = vec![
            character("actor1", "Hero One"),
            character("actor2", "Hero Two"),
            character("gmActor", "GM Character"),
        ];
        let users = vec![
            User::player("user1", "Player 1").with_character("actor1"),
            User::player("user2", "Player 2").with_character("actor2").disconnected(),
            User::game_master("gm", "Game Master").with_character("gmActor"),
            User::player("user3", "Player 3"),
        ];

        let roster = select_roster(&users, &actors, "");
        assert_eq!(ids(&roster), vec!["actor1"]);
    }

    #[test]
    fn test_connected_player_with_npc_assigned() {
        let actors = vec![Actor::new("npc1", "Sidekick", ActorType::Npc)];
        let users = vec![User::player("user1", "Player 1").with_character("npc1")];
        assert!(select_roster(&users, &actors, "").is_empty());
    }

    #[test]
    fn test_override_by_name_and_id() {
        let actors = vec![
            character("actor1", "Hero One"),
            character("npc1", "Important NPC"),
            character("ally1", "Trusty Ally"),
        ];
        let users = vec![User::player("user1", "Player 1").with_character("actor1")];

        let roster = select_roster(&users, &actors, "ally1, Important NPC");
        assert_eq!(ids(&roster), vec!["actor1", "ally1", "npc1"]);
    }

    #[test]
    fn test_override_name_is_case_insensitive() {
        let actors = vec![character("actor1", "Hero One")];
        let roster = select_roster(&[], &actors, "hErO oNe");
        assert_eq!(ids(&roster), vec!["actor1"]);
    }

    #[test]
    fn test_override_skips_non_characters() {
        let actors = vec![
            Actor::new("npc1", "Villain", ActorType::Npc),
            Actor::new("car1", "Car", ActorType::Vehicle),
        ];
        let roster = select_roster(&[], &actors, "npc1, Villain, Car");
        assert!(roster.is_empty());
    }

    #[test]
    fn test_name_match_ignores_npc_with_same_name() {
        let actors = vec![
            Actor::new("npc1", "Twin", ActorType::Npc),
            character("pc1", "Twin"),
        ];
        let roster = select_roster(&[], &actors, "twin");
        assert_eq!(ids(&roster), vec!["pc1"]);
    }

    #[test]
    fn test_no_duplicates() {
        let actors = vec![character("actor1", "Hero One"), character("actor2", "Hero Two")];
        let users = vec![User::player("user1", "Player 1").with_character("actor1")];

        let roster = select_roster(&users, &actors, "Hero One, actor1, actor2, HERO TWO, actor2");
        assert_eq!(ids(&roster), vec!["actor1", "actor2"]);
    }

    #[test]
    fn test_whitespace_and_empty_tokens() {
        let actors = vec![character("actor1", "Hero One"), character("actor2", "Hero Two")];
        let roster = select_roster(&[], &actors, " ,  Hero One ,, ,actor2 , ");
        assert_eq!(ids(&roster), vec!["actor1", "actor2"]);
    }

    #[test]
    fn test_unresolved_tokens_are_skipped() {
        let actors = vec![character("actor1", "Hero One")];
        let roster = select_roster(&[], &actors, "Nobody, actor1, ghost");
        assert_eq!(ids(&roster), vec!["actor1"]);
    }

    #[test]
    fn test_disconnected_player_added_back_by_override() {
        let a = character("A", "Alpha");
        let b = character("B", "Bravo");
        let c = character("C", "NPC");
        let actors = vec![a, b, c];
        let users = vec![
            User::player("u1", "One").with_character("A"),
            User::player("u2", "Two").with_character("B").disconnected(),
        ];

        let roster = select_roster(&users, &actors, "NPC");
        assert_eq!(ids(&roster), vec!["A", "C"]);

        let roster = select_roster(&users, &actors, "NPC, Bravo");
        assert_eq!(ids(&roster), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let actors = vec![
            character("actor1", "Hero One"),
            character("actor2", "Hero Two"),
            character("actor3", "Hero Three"),
        ];
        let users = vec![
            User::player("user1", "Player 1").with_character("actor2"),
            User::player("user2", "Player 2").with_character("actor1"),
        ];

        let first = select_roster(&users, &actors, "actor3, actor2");
        let second = select_roster(&users, &actors, "actor3, actor2");
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(ids(&first), vec!["actor2", "actor1", "actor3"]);
    }
}
