//! Expression, soul-urge and personality numbers of a name.

use serde::Serialize;
use vastucart_core::{
    LetterSystem, LetterValue, expression_number, letter_values, name_sum, normalize_name,
    personality_number, soul_urge_number,
};

use crate::tables::meanings::{NumberProfile, number_profile};

/// A derived number together with its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberReading {
    pub number: u8,
    pub profile: &'static NumberProfile,
}

impl NumberReading {
    fn of(number: u8) -> Self {
        Self {
            number,
            profile: number_profile(number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAnalysis {
    pub name: String,
    pub normalized: String,
    pub system: LetterSystem,
    pub total: u32,
    pub expression: NumberReading,
    pub soul_urge: NumberReading,
    pub personality: NumberReading,
    pub letters: Vec<LetterValue>,
}

pub fn analyze_name(name: &str, system: LetterSystem) -> NameAnalysis {
    let expression = expression_number(name, system);
    let soul_urge = soul_urge_number(name, system);
    let personality = personality_number(name, system);
    log::debug!(
        "name {name:?} ({system}): expression {expression}, soul {soul_urge}, personality {personality}"
    );
    NameAnalysis {
        name: name.to_string(),
        normalized: normalize_name(name),
        system,
        total: name_sum(name, system),
        expression: NumberReading::of(expression),
        soul_urge: NumberReading::of(soul_urge),
        personality: NumberReading::of(personality),
        letters: letter_values(name, system),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn john_smith() {
        let a = analyze_name("John Smith", LetterSystem::Pythagorean);
        assert_eq!(a.normalized, "JOHNSMITH");
        assert_eq!(a.total, 44);
        assert_eq!(a.expression.number, 8);
        assert_eq!(a.soul_urge.number, 6);
        assert_eq!(a.personality.number, 11);
        assert_eq!(a.personality.profile.number, 11);
        assert_eq!(a.letters.len(), 9);
        assert_eq!(a.letters.iter().filter(|l| l.is_vowel).count(), 2);
    }

    #[test]
    fn empty_name_uses_fallback_profile() {
        let a = analyze_name("", LetterSystem::Chaldean);
        assert_eq!(a.expression.number, 0);
        assert_eq!(a.expression.profile.number, 1);
        assert!(a.letters.is_empty());
    }
}
