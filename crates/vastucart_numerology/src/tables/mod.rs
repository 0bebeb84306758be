//! Static reference tables. All are read-only; every lookup is total over
//! its documented key set and falls back to a fixed entry otherwise.

pub mod colors;
pub mod compatibility;
pub mod house;
pub mod meanings;
pub mod names;
pub mod planets;

pub use colors::{COLORS, ColorEntry, color_for_graha};
pub use compatibility::{compatibility_score, compatible_numbers};
pub use house::{HouseProfile, house_profile};
pub use meanings::{NumberProfile, PROFILE_NUMBERS, number_profile};
pub use names::{Gender, NameEntry, NameOrigin, find_name, name_catalog};
pub use planets::{
    PlanetProfile, WEEK, planet_for_number, planet_profile, weekday_lord, weekday_name,
};
