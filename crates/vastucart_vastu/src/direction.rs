//! The nine vastu zones: eight compass directions plus the centre
//! (Brahmasthan), with their element, deity and ruling graha.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use vastucart_core::{BilingualText as T, Graha};

use crate::error::VastuError;

/// A vastu zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Center,
}

/// All zones in compass order, centre last.
pub const ALL_DIRECTIONS: [Direction; 9] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
    Direction::Center,
];

/// The five elements (pancha bhoota).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Water,
    Fire,
    Earth,
    Air,
    Space,
}

impl Element {
    pub const fn label(self) -> T {
        match self {
            Self::Water => T::new("Water", "जल"),
            Self::Fire => T::new("Fire", "अग्नि"),
            Self::Earth => T::new("Earth", "पृथ्वी"),
            Self::Air => T::new("Air", "वायु"),
            Self::Space => T::new("Space", "आकाश"),
        }
    }
}

impl Direction {
    /// Kebab-case identifier, e.g. `north-east`.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::NorthEast => "north-east",
            Self::East => "east",
            Self::SouthEast => "south-east",
            Self::South => "south",
            Self::SouthWest => "south-west",
            Self::West => "west",
            Self::NorthWest => "north-west",
            Self::Center => "center",
        }
    }

    /// Two-letter abbreviation (`C` for the centre).
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
            Self::Center => "C",
        }
    }

    /// 0-based compass index (North=0 .. NorthWest=7, Center=8).
    pub const fn index(self) -> u8 {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::East => 2,
            Self::SouthEast => 3,
            Self::South => 4,
            Self::SouthWest => 5,
            Self::West => 6,
            Self::NorthWest => 7,
            Self::Center => 8,
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::North => T::new("North", "उत्तर"),
            Self::NorthEast => T::new("North-East", "उत्तर-पूर्व (ईशान)"),
            Self::East => T::new("East", "पूर्व"),
            Self::SouthEast => T::new("South-East", "दक्षिण-पूर्व (आग्नेय)"),
            Self::South => T::new("South", "दक्षिण"),
            Self::SouthWest => T::new("South-West", "दक्षिण-पश्चिम (नैऋत्य)"),
            Self::West => T::new("West", "पश्चिम"),
            Self::NorthWest => T::new("North-West", "उत्तर-पश्चिम (वायव्य)"),
            Self::Center => T::new("Center (Brahmasthan)", "मध्य (ब्रह्मस्थान)"),
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::North | Self::NorthEast | Self::West => Element::Water,
            Self::SouthEast | Self::South => Element::Fire,
            Self::SouthWest => Element::Earth,
            Self::East | Self::NorthWest => Element::Air,
            Self::Center => Element::Space,
        }
    }

    /// Presiding deity (dikpala) of the zone.
    pub const fn deity(self) -> T {
        match self {
            Self::North => T::new("Kubera", "कुबेर"),
            Self::NorthEast => T::new("Ishana (Shiva)", "ईशान (शिव)"),
            Self::East => T::new("Indra", "इंद्र"),
            Self::SouthEast => T::new("Agni", "अग्नि देव"),
            Self::South => T::new("Yama", "यम"),
            Self::SouthWest => T::new("Nirriti", "निऋति"),
            Self::West => T::new("Varuna", "वरुण"),
            Self::NorthWest => T::new("Vayu", "वायु देव"),
            Self::Center => T::new("Brahma", "ब्रह्मा"),
        }
    }

    /// Ruling graha; the centre has none.
    pub const fn planet(self) -> Option<Graha> {
        match self {
            Self::North => Some(Graha::Buddh),
            Self::NorthEast => Some(Graha::Guru),
            Self::East => Some(Graha::Surya),
            Self::SouthEast => Some(Graha::Shukra),
            Self::South => Some(Graha::Mangal),
            Self::SouthWest => Some(Graha::Rahu),
            Self::West => Some(Graha::Shani),
            Self::NorthWest => Some(Graha::Chandra),
            Self::Center => None,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Direction {
    type Err = VastuError;

    /// Accepts slugs (`north-east`), run-together or snake forms
    /// (`northeast`, `north_east`) and abbreviations (`ne`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        let d = match key.as_str() {
            "north" | "n" => Self::North,
            "northeast" | "ne" | "ishan" | "ishaan" => Self::NorthEast,
            "east" | "e" => Self::East,
            "southeast" | "se" | "agneya" => Self::SouthEast,
            "south" | "s" => Self::South,
            "southwest" | "sw" | "nairutya" => Self::SouthWest,
            "west" | "w" => Self::West,
            "northwest" | "nw" | "vayavya" => Self::NorthWest,
            "center" | "centre" | "c" | "brahmasthan" => Self::Center,
            _ => return Err(VastuError::UnknownDirection(s.to_string())),
        };
        Ok(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, d) in ALL_DIRECTIONS.iter().enumerate() {
            assert_eq!(d.index() as usize, i);
        }
    }

    #[test]
    fn slug_round_trip() {
        for d in ALL_DIRECTIONS {
            assert_eq!(d.slug().parse::<Direction>(), Ok(d));
            assert_eq!(d.abbrev().parse::<Direction>(), Ok(d));
        }
    }

    #[test]
    fn parse_variants() {
        assert_eq!("NorthEast".parse(), Ok(Direction::NorthEast));
        assert_eq!("south_west".parse(), Ok(Direction::SouthWest));
        assert_eq!(" Centre ".parse(), Ok(Direction::Center));
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn only_center_has_no_planet() {
        for d in ALL_DIRECTIONS {
            assert_eq!(d.planet().is_none(), d == Direction::Center);
        }
        assert_eq!(Direction::Center.element(), Element::Space);
    }
}
