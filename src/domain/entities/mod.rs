//! Domain entities - Host documents with identity

mod actor;
mod user;

pub use actor::{Actor, ActorType, Item, ItemType};
pub use user::User;
