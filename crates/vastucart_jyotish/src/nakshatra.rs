//! The 27 nakshatras and lookup from the Moon's sidereal longitude.

use serde::Serialize;

use crate::rashi::normalize_360;

/// Span of one nakshatra: 360/27 = 13 deg 20'.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada (quarter nakshatra): 3 deg 20'.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

use Nakshatra::*;

/// Ashwini (0) to Revati (26).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Ashwini, Bharani, Krittika, Rohini, Mrigashira, Ardra, Punarvasu, Pushya, Ashlesha,
    Magha, PurvaPhalguni, UttaraPhalguni, Hasta, Chitra, Swati, Vishakha, Anuradha, Jyeshtha,
    Mula, PurvaAshadha, UttaraAshadha, Shravana, Dhanishtha, Shatabhisha, PurvaBhadrapada,
    UttaraBhadrapada, Revati,
];

const NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

impl Nakshatra {
    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }
}

/// Nakshatra position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// Quarter within the nakshatra, 1–4.
    pub pada: u8,
    pub degrees_in_nakshatra: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
}

pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - idx as f64 * NAKSHATRA_SPAN;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        pada,
        degrees_in_nakshatra,
        elapsed_fraction: degrees_in_nakshatra / NAKSHATRA_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
        assert_eq!(Revati.name(), "Revati");
        assert_eq!(UttaraPhalguni.name(), "Uttara Phalguni");
    }

    #[test]
    fn rohini_start() {
        let p = nakshatra_from_longitude(40.0);
        assert_eq!(p.nakshatra, Rohini);
        assert_eq!(p.pada, 1);
        assert!(p.elapsed_fraction.abs() < 1e-10);
    }

    #[test]
    fn midpoint_and_pada() {
        let p = nakshatra_from_longitude(NAKSHATRA_SPAN / 2.0);
        assert_eq!(p.nakshatra, Ashwini);
        assert_eq!(p.pada, 3);
        assert!((p.elapsed_fraction - 0.5).abs() < 1e-10);
    }

    #[test]
    fn wraps_negative() {
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Revati);
        assert_eq!(nakshatra_from_longitude(360.0).nakshatra, Ashwini);
    }
}
