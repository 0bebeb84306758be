//! Numerology primitives shared by every VastuCart calculator.
//!
//! This crate provides:
//! - Digit reduction with per-call-site master-number policy
//! - Pythagorean and Chaldean letter values and name numbers
//! - Life path, birth day and other date-derived numbers
//! - English/Hindi text pairs used in every result
//! - The nine grahas and their numerology digits
//!
//! Everything here is pure and allocation-light; no calculator holds state.

pub mod date;
pub mod error;
pub mod graha;
pub mod letters;
pub mod numbers;
pub mod reduce;
pub mod text;

pub use date::BirthDate;
pub use error::CoreError;
pub use graha::{
    ALL_GRAHAS, Graha, Maitri, SAPTA_GRAHAS, enemy_numbers, friendly_numbers, naisargika_maitri,
};
pub use letters::{
    ALL_LETTER_SYSTEMS, LetterSystem, LetterValue, PYTHAGOREAN_LETTERS, consonant_sum, is_vowel,
    letter_value, letter_values, letters_for_number, name_number, name_number_with, name_sum,
    normalize_name, vowel_sum,
};
pub use numbers::{
    attitude_number, birth_date_digit_sum, birth_day_number, expression_number,
    life_path_number, life_path_reduction, personal_year_number, personality_number,
    soul_urge_number,
};
pub use reduce::{
    MASTER_NUMBERS, MasterPolicy, Reduction, digit_sum, is_master, is_numerology_number, reduce,
    reduce_with_steps, root,
};
pub use text::{BilingualString, BilingualText, Lang};
