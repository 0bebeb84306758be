//! Rashi (zodiac sign) enum and sign arithmetic.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each, starting
//! from Mesha (Aries) at 0 deg sidereal.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use vastucart_core::{BilingualText as T, Graha};

use crate::error::JyotishError;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::Mesha => T::new("Aries (Mesha)", "मेष"),
            Self::Vrishabha => T::new("Taurus (Vrishabha)", "वृषभ"),
            Self::Mithuna => T::new("Gemini (Mithuna)", "मिथुन"),
            Self::Karka => T::new("Cancer (Karka)", "कर्क"),
            Self::Simha => T::new("Leo (Simha)", "सिंह"),
            Self::Kanya => T::new("Virgo (Kanya)", "कन्या"),
            Self::Tula => T::new("Libra (Tula)", "तुला"),
            Self::Vrischika => T::new("Scorpio (Vrischika)", "वृश्चिक"),
            Self::Dhanu => T::new("Sagittarius (Dhanu)", "धनु"),
            Self::Makara => T::new("Capricorn (Makara)", "मकर"),
            Self::Kumbha => T::new("Aquarius (Kumbha)", "कुंभ"),
            Self::Meena => T::new("Pisces (Meena)", "मीन"),
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi at `index` modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Sign lord.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Buddh,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    /// The rashi `n` signs ahead (0 = self).
    pub const fn offset(self, n: u8) -> Self {
        Self::from_index(self.index() + n % 12)
    }

    /// Whole-sign house (1–12) of `self` counted from `reference`.
    pub const fn house_from(self, reference: Rashi) -> u8 {
        (self.index() + 12 - reference.index()) % 12 + 1
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rashi {
    type Err = JyotishError;

    /// Accepts Sanskrit or English names, or a 1-based number, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Ok(n) = key.parse::<u8>() {
            if (1..=12).contains(&n) {
                return Ok(Self::from_index(n - 1));
            }
        }
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| {
                r.name().eq_ignore_ascii_case(&key) || r.western_name().eq_ignore_ascii_case(&key)
            })
            .or(match key.as_str() {
                "vrishchika" | "vrishchik" => Some(Self::Vrischika),
                "karkata" | "kark" => Some(Self::Karka),
                "meen" => Some(Self::Meena),
                "mesh" => Some(Self::Mesha),
                _ => None,
            })
            .ok_or_else(|| JyotishError::UnknownRashi(s.to_string()))
    }
}

/// Normalize longitude to [0, 360).
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Rashi position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiPosition {
    pub rashi: Rashi,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiPosition {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    RashiPosition {
        rashi: ALL_RASHIS[rashi_idx as usize],
        degrees_in_rashi: lon - (rashi_idx as f64) * 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }

    #[test]
    fn house_counting() {
        assert_eq!(Rashi::Mesha.house_from(Rashi::Mesha), 1);
        assert_eq!(Rashi::Karka.house_from(Rashi::Mesha), 4);
        assert_eq!(Rashi::Mesha.house_from(Rashi::Meena), 2);
        assert_eq!(Rashi::Meena.house_from(Rashi::Mesha), 12);
        assert_eq!(Rashi::Tula.offset(6), Rashi::Mesha);
    }

    #[test]
    fn lords() {
        assert_eq!(Rashi::Vrischika.lord(), Graha::Mangal);
        assert_eq!(Rashi::Kumbha.lord(), Graha::Shani);
    }

    #[test]
    fn parse_names() {
        assert_eq!("scorpio".parse(), Ok(Rashi::Vrischika));
        assert_eq!("MAKARA".parse(), Ok(Rashi::Makara));
        assert_eq!("12".parse(), Ok(Rashi::Meena));
        assert!("13".parse::<Rashi>().is_err());
        assert!("ophiuchus".parse::<Rashi>().is_err());
    }

    #[test]
    fn rashi_boundaries() {
        for i in 0..12u8 {
            let pos = rashi_from_longitude(i as f64 * 30.0);
            assert_eq!(pos.rashi.index(), i);
            assert!(pos.degrees_in_rashi.abs() < 1e-10);
        }
    }

    #[test]
    fn rashi_wrap_and_negative() {
        let pos = rashi_from_longitude(365.0);
        assert_eq!(pos.rashi, Rashi::Mesha);
        assert!((pos.degrees_in_rashi - 5.0).abs() < 1e-10);
        let pos = rashi_from_longitude(-10.0);
        assert_eq!(pos.rashi, Rashi::Meena);
        assert!((pos.degrees_in_rashi - 20.0).abs() < 1e-10);
    }
}
