//! Numerology tables and calculators built on `vastucart_core`.
//!
//! This crate provides:
//! - Static tables: number meanings, planetary associations, the pair
//!   compatibility matrix, the colour catalog, house profiles and the
//!   name catalog
//! - Child-name suggestions from the parents' birth dates
//! - Lucky numbers and lucky colours
//! - Love compatibility between two partners
//! - House-number and full-name analysis
//!
//! Every calculator is a pure function of its inputs and never fails on a
//! validated request.

pub mod child_name;
pub mod error;
pub mod house_number;
pub mod love;
pub mod lucky_color;
pub mod lucky_number;
pub mod name_analysis;
pub mod tables;

pub use child_name::{
    ALL_QUALITIES, ChildNameRequest, ChildNameResult, DEFAULT_SUGGESTION_LIMIT, MatchCriterion,
    NameSuggestion, ParentNumbers, Quality, calculate_child_name_suggestions,
};
pub use error::NumerologyError;
pub use house_number::{AddressComponent, HouseNumberResult, calculate_house_number};
pub use love::{
    CompatibilityLevel, LoveCompatibilityResult, Partner, PartnerNumbers,
    calculate_love_compatibility,
};
pub use lucky_color::{DayColor, LuckyColorRequest, LuckyColorResult, ScoredColor, calculate_lucky_colors};
pub use lucky_number::{CoreNumbers, LuckyNumberRequest, LuckyNumberResult, calculate_lucky_numbers};
pub use name_analysis::{NameAnalysis, NumberReading, analyze_name};
pub use tables::{Gender, NameEntry, NameOrigin, compatibility_score, compatible_numbers};
