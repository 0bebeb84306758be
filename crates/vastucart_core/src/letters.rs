//! Letter-to-number systems and name numbers.
//!
//! - Pythagorean: A–Z cycle through 1–9 (A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8).
//! - Chaldean: fixed table by sound value; no letter carries 9.
//!
//! Names are normalised before mapping: case is ignored, simple Latin
//! accents are folded to their base letter, everything else is dropped.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::reduce::{MasterPolicy, reduce};

/// Letter-value system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterSystem {
    #[default]
    Pythagorean,
    Chaldean,
}

/// Both systems, Pythagorean first.
pub const ALL_LETTER_SYSTEMS: [LetterSystem; 2] =
    [LetterSystem::Pythagorean, LetterSystem::Chaldean];

/// Chaldean values for A..Z.
const CHALDEAN_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, 1, 2, 3, 4, 5, 7, 8, 1, 2, 3, 4, 6, 6, 6, 5, 1, 7,
];

impl LetterSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pythagorean => "Pythagorean",
            Self::Chaldean => "Chaldean",
        }
    }
}

impl Display for LetterSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LetterSystem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pythagorean" | "western" => Ok(Self::Pythagorean),
            "chaldean" | "indian" => Ok(Self::Chaldean),
            _ => Err(CoreError::UnknownLetterSystem(s.to_string())),
        }
    }
}

/// One mapped letter of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u8,
    pub is_vowel: bool,
}

/// Fold a character to an uppercase ASCII letter, if it has one.
fn fold_letter(ch: char) -> Option<char> {
    if ch.is_ascii_alphabetic() {
        return Some(ch.to_ascii_uppercase());
    }
    let base = match ch.to_lowercase().next()? {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'A',
        'ç' | 'ć' | 'č' => 'C',
        'è' | 'é' | 'ê' | 'ë' | 'ē' => 'E',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'I',
        'ñ' | 'ń' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'O',
        'ś' | 'š' | 'ṣ' => 'S',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'U',
        'ý' | 'ÿ' => 'Y',
        'ž' | 'ź' | 'ż' => 'Z',
        _ => return None,
    };
    Some(base)
}

/// Uppercase A–Z letters of `s`, everything else removed.
pub fn normalize_name(s: &str) -> String {
    s.chars().filter_map(fold_letter).collect()
}

/// True for A, E, I, O, U (Y counts as a consonant).
pub const fn is_vowel(letter: char) -> bool {
    matches!(letter.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Value of a single letter, or `None` for non-letters.
pub fn letter_value(ch: char, system: LetterSystem) -> Option<u8> {
    let letter = fold_letter(ch)?;
    let idx = (letter as u8 - b'A') as usize;
    Some(match system {
        LetterSystem::Pythagorean => (idx % 9) as u8 + 1,
        LetterSystem::Chaldean => CHALDEAN_VALUES[idx],
    })
}

/// Per-letter breakdown of a name.
pub fn letter_values(s: &str, system: LetterSystem) -> Vec<LetterValue> {
    s.chars()
        .filter_map(fold_letter)
        .filter_map(|letter| {
            letter_value(letter, system).map(|value| LetterValue {
                letter,
                value,
                is_vowel: is_vowel(letter),
            })
        })
        .collect()
}

/// Unreduced sum of all letter values.
pub fn name_sum(s: &str, system: LetterSystem) -> u32 {
    s.chars()
        .filter_map(|c| letter_value(c, system))
        .map(u32::from)
        .sum()
}

/// Unreduced sum of vowel values.
pub fn vowel_sum(s: &str, system: LetterSystem) -> u32 {
    letter_values(s, system)
        .iter()
        .filter(|lv| lv.is_vowel)
        .map(|lv| lv.value as u32)
        .sum()
}

/// Unreduced sum of consonant values.
pub fn consonant_sum(s: &str, system: LetterSystem) -> u32 {
    letter_values(s, system)
        .iter()
        .filter(|lv| !lv.is_vowel)
        .map(|lv| lv.value as u32)
        .sum()
}

/// Name number, keeping all master numbers.
pub fn name_number(s: &str, system: LetterSystem) -> u8 {
    name_number_with(s, system, MasterPolicy::All)
}

/// Name number under an explicit master policy.
pub fn name_number_with(s: &str, system: LetterSystem, policy: MasterPolicy) -> u8 {
    reduce(name_sum(s, system), policy)
}

/// Pythagorean letters for each digit 1–9 (index 0 = digit 1).
pub const PYTHAGOREAN_LETTERS: [&[char]; 9] = [
    &['A', 'J', 'S'],
    &['B', 'K', 'T'],
    &['C', 'L', 'U'],
    &['D', 'M', 'V'],
    &['E', 'N', 'W'],
    &['F', 'O', 'X'],
    &['G', 'P', 'Y'],
    &['H', 'Q', 'Z'],
    &['I', 'R'],
];

/// Letters carrying digit `n` in the Pythagorean system. Master numbers use
/// their root digit; 0 and out-of-range values fall back to digit 1.
pub fn letters_for_number(n: u8) -> &'static [char] {
    let digit = crate::reduce::root(n);
    if (1..=9).contains(&digit) {
        PYTHAGOREAN_LETTERS[digit as usize - 1]
    } else {
        PYTHAGOREAN_LETTERS[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_cycle() {
        assert_eq!(letter_value('A', LetterSystem::Pythagorean), Some(1));
        assert_eq!(letter_value('I', LetterSystem::Pythagorean), Some(9));
        assert_eq!(letter_value('J', LetterSystem::Pythagorean), Some(1));
        assert_eq!(letter_value('R', LetterSystem::Pythagorean), Some(9));
        assert_eq!(letter_value('S', LetterSystem::Pythagorean), Some(1));
        assert_eq!(letter_value('Z', LetterSystem::Pythagorean), Some(8));
    }

    #[test]
    fn chaldean_has_no_nine() {
        for c in 'A'..='Z' {
            let v = letter_value(c, LetterSystem::Chaldean).unwrap();
            assert!((1..=8).contains(&v), "{c} = {v}");
        }
    }

    #[test]
    fn chaldean_spot_values() {
        assert_eq!(letter_value('F', LetterSystem::Chaldean), Some(8));
        assert_eq!(letter_value('O', LetterSystem::Chaldean), Some(7));
        assert_eq!(letter_value('Z', LetterSystem::Chaldean), Some(7));
        assert_eq!(letter_value('W', LetterSystem::Chaldean), Some(6));
    }

    #[test]
    fn case_insensitive() {
        for system in ALL_LETTER_SYSTEMS {
            assert_eq!(letter_value('q', system), letter_value('Q', system));
        }
    }

    #[test]
    fn non_letters_ignored() {
        assert_eq!(letter_value('3', LetterSystem::Pythagorean), None);
        assert_eq!(letter_value(' ', LetterSystem::Chaldean), None);
        assert_eq!(name_sum("A-B C.", LetterSystem::Pythagorean), 6);
    }

    #[test]
    fn accents_fold() {
        assert_eq!(normalize_name("José Ñuñez"), "JOSENUNEZ");
        assert_eq!(
            name_number("Renée", LetterSystem::Pythagorean),
            name_number("Renee", LetterSystem::Pythagorean)
        );
    }

    #[test]
    fn devanagari_dropped() {
        assert_eq!(normalize_name("राम Ram"), "RAM");
    }

    #[test]
    fn john_smith_is_eight() {
        assert_eq!(name_sum("JOHN SMITH", LetterSystem::Pythagorean), 44);
        assert_eq!(name_number("JOHN SMITH", LetterSystem::Pythagorean), 8);
        assert_eq!(name_number("john smith", LetterSystem::Pythagorean), 8);
    }

    #[test]
    fn vowels_and_consonants_partition() {
        let name = "Aarav Sharma";
        for system in ALL_LETTER_SYSTEMS {
            assert_eq!(
                vowel_sum(name, system) + consonant_sum(name, system),
                name_sum(name, system)
            );
        }
    }

    #[test]
    fn letters_for_each_digit() {
        assert_eq!(letters_for_number(1), &['A', 'J', 'S']);
        assert_eq!(letters_for_number(9), &['I', 'R']);
        assert_eq!(letters_for_number(11), letters_for_number(2));
        assert_eq!(letters_for_number(0), letters_for_number(1));
    }

    #[test]
    fn pythagorean_letters_agree_with_values() {
        for (i, letters) in PYTHAGOREAN_LETTERS.iter().enumerate() {
            for &c in *letters {
                assert_eq!(letter_value(c, LetterSystem::Pythagorean), Some(i as u8 + 1));
            }
        }
    }

    #[test]
    fn system_parse() {
        assert_eq!("Chaldean".parse::<LetterSystem>(), Ok(LetterSystem::Chaldean));
        assert!("vedic".parse::<LetterSystem>().is_err());
    }
}
