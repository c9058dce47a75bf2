//! Domain layer - Core business logic with no host dependencies
//!
//! This layer contains:
//! - Entities: User, Actor, Item
//! - Value Objects: identifiers, summary settings, severity, layout profiles
//! - Domain Services: roster selection, panel sizing, description cleanup

pub mod entities;
pub mod services;
pub mod value_objects;
