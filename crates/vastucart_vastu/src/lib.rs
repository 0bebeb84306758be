//! Vastu room placement rules.
//!
//! This crate provides:
//! - The nine vastu zones with element, deity and ruling graha
//! - Twelve room types, each with ideal/good/acceptable/avoid buckets
//! - The room advisor: score, remedies and tips for a room in a zone

pub mod advisor;
pub mod direction;
pub mod error;
pub mod room;

pub use advisor::{RoomAdvice, advise_room, best_directions, room_report};
pub use direction::{ALL_DIRECTIONS, Direction, Element};
pub use error::VastuError;
pub use room::{ALL_ROOMS, RoomType, RoomVastu, Suitability, special_remedies};
