//! Vedic planet (graha) enum, shared by numerology and jyotish calculators.
//!
//! Numerology assigns one graha to each digit 1–9 (Chaldean/Vedic
//! convention): 1 Surya, 2 Chandra, 3 Guru, 4 Rahu, 5 Buddh, 6 Shukra,
//! 7 Ketu, 8 Shani, 9 Mangal.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::reduce::root;
use crate::text::BilingualText;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English/Hindi display name.
    pub const fn label(self) -> BilingualText {
        match self {
            Self::Surya => BilingualText::new("Sun", "सूर्य"),
            Self::Chandra => BilingualText::new("Moon", "चंद्र"),
            Self::Mangal => BilingualText::new("Mars", "मंगल"),
            Self::Buddh => BilingualText::new("Mercury", "बुध"),
            Self::Guru => BilingualText::new("Jupiter", "गुरु"),
            Self::Shukra => BilingualText::new("Venus", "शुक्र"),
            Self::Shani => BilingualText::new("Saturn", "शनि"),
            Self::Rahu => BilingualText::new("Rahu", "राहु"),
            Self::Ketu => BilingualText::new("Ketu", "केतु"),
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Numerology digit ruled by this graha.
    pub const fn number(self) -> u8 {
        match self {
            Self::Surya => 1,
            Self::Chandra => 2,
            Self::Guru => 3,
            Self::Rahu => 4,
            Self::Buddh => 5,
            Self::Shukra => 6,
            Self::Ketu => 7,
            Self::Shani => 8,
            Self::Mangal => 9,
        }
    }

    /// Ruling graha of a numerology number. Master numbers use their root;
    /// anything outside 1–9 falls back to Surya (the entry for 1).
    pub fn from_number(n: u8) -> Self {
        match root(n) {
            2 => Self::Chandra,
            3 => Self::Guru,
            4 => Self::Rahu,
            5 => Self::Buddh,
            6 => Self::Shukra,
            7 => Self::Ketu,
            8 => Self::Shani,
            9 => Self::Mangal,
            _ => Self::Surya,
        }
    }

    /// Parse an English or Sanskrit name, case-insensitive.
    pub fn from_name(s: &str) -> Option<Self> {
        let g = match s.trim().to_lowercase().as_str() {
            "sun" | "surya" => Self::Surya,
            "moon" | "chandra" => Self::Chandra,
            "mars" | "mangal" => Self::Mangal,
            "mercury" | "buddh" | "budh" => Self::Buddh,
            "jupiter" | "guru" => Self::Guru,
            "venus" | "shukra" => Self::Shukra,
            "saturn" | "shani" => Self::Shani,
            "rahu" => Self::Rahu,
            "ketu" => Self::Ketu,
            _ => return None,
        };
        Some(g)
    }
}

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Maitri {
    Friend,
    Neutral,
    Enemy,
}

/// Natural (naisargika) friendship of `graha` towards `other`.
///
/// Sapta-graha pairs follow the BPHS table. Rahu and Ketu use the
/// numerology convention (Rahu friendly with Mercury, Venus and Saturn;
/// Ketu with Mars, Venus and Saturn; both hostile to the luminaries).
/// A graha is neutral towards itself.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> Maitri {
    use Graha::*;
    use Maitri::*;

    match (graha, other) {
        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn,nodes
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani | Rahu | Ketu) => Enemy,

        // Moon: friends=Sun,Mercury; enemies=nodes
        (Chandra, Surya | Buddh) => Friend,
        (Chandra, Rahu | Ketu) => Enemy,

        // Mars: friends=Sun,Moon,Jupiter,Ketu; enemies=Mercury,Rahu
        (Mangal, Surya | Chandra | Guru | Ketu) => Friend,
        (Mangal, Buddh | Rahu) => Enemy,

        // Mercury: friends=Sun,Venus,Rahu; enemies=Moon
        (Buddh, Surya | Shukra | Rahu) => Friend,
        (Buddh, Chandra) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        // Venus: friends=Mercury,Saturn,nodes; enemies=Sun,Moon
        (Shukra, Buddh | Shani | Rahu | Ketu) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        // Saturn: friends=Mercury,Venus,nodes; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra | Rahu | Ketu) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        // Rahu: friends=Mercury,Venus,Saturn; enemies=Sun,Moon,Mars
        (Rahu, Buddh | Shukra | Shani) => Friend,
        (Rahu, Surya | Chandra | Mangal) => Enemy,

        // Ketu: friends=Mars,Venus,Saturn; enemies=Sun,Moon
        (Ketu, Mangal | Shukra | Shani) => Friend,
        (Ketu, Surya | Chandra) => Enemy,

        _ => Neutral,
    }
}

/// Numbers of the grahas `graha` counts as friends, ascending.
pub fn friendly_numbers(graha: Graha) -> Vec<u8> {
    let mut nums: Vec<u8> = ALL_GRAHAS
        .iter()
        .filter(|&&o| matches!(naisargika_maitri(graha, o), Maitri::Friend))
        .map(|o| o.number())
        .collect();
    nums.sort_unstable();
    nums
}

/// Numbers of the grahas `graha` counts as enemies, ascending.
pub fn enemy_numbers(graha: Graha) -> Vec<u8> {
    let mut nums: Vec<u8> = ALL_GRAHAS
        .iter()
        .filter(|&&o| matches!(naisargika_maitri(graha, o), Maitri::Enemy))
        .map(|o| o.number())
        .collect();
    nums.sort_unstable();
    nums
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn number_round_trip() {
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_number(g.number()), g);
        }
    }

    #[test]
    fn master_numbers_use_root() {
        assert_eq!(Graha::from_number(11), Graha::Chandra);
        assert_eq!(Graha::from_number(22), Graha::Rahu);
        assert_eq!(Graha::from_number(33), Graha::Shukra);
    }

    #[test]
    fn unmapped_falls_back_to_surya() {
        assert_eq!(Graha::from_number(0), Graha::Surya);
    }

    #[test]
    fn names_parse() {
        assert_eq!(Graha::from_name("Saturn"), Some(Graha::Shani));
        assert_eq!(Graha::from_name(" shukra "), Some(Graha::Shukra));
        assert_eq!(Graha::from_name("pluto"), None);
    }

    #[test]
    fn self_is_neutral() {
        for g in ALL_GRAHAS {
            assert_eq!(naisargika_maitri(g, g), Maitri::Neutral);
        }
    }

    #[test]
    fn sun_friends_and_enemies() {
        assert_eq!(friendly_numbers(Graha::Surya), vec![2, 3, 9]);
        assert_eq!(enemy_numbers(Graha::Surya), vec![4, 6, 7, 8]);
    }

    #[test]
    fn moon_has_few_enemies() {
        assert_eq!(friendly_numbers(Graha::Chandra), vec![1, 5]);
        assert_eq!(enemy_numbers(Graha::Chandra), vec![4, 7]);
    }

    #[test]
    fn friend_and_enemy_sets_disjoint() {
        for g in ALL_GRAHAS {
            let f = friendly_numbers(g);
            for e in enemy_numbers(g) {
                assert!(!f.contains(&e), "{g}: {e} both friend and enemy");
            }
        }
    }

    #[test]
    fn labels_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.label().en.is_empty());
            assert!(!g.label().hi.is_empty());
        }
    }
}
