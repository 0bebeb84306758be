//! Caller-supplied birth chart: lagna and the sign of every graha.
//!
//! Houses are whole-sign: the lagna's rashi is the 1st house.

use serde::Serialize;
use vastucart_core::{ALL_GRAHAS, Graha};

use crate::error::JyotishError;
use crate::rashi::{Rashi, rashi_from_longitude};

/// Planet placements indexed by [`Graha::index`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    pub lagna: Rashi,
    pub placements: [Rashi; 9],
    /// Sidereal longitudes in degrees, when known.
    pub longitudes: Option<[f64; 9]>,
}

/// Parse a graha by Sanskrit or English name.
pub fn parse_graha(s: &str) -> Result<Graha, JyotishError> {
    Graha::from_name(s).ok_or_else(|| JyotishError::UnknownGraha(s.to_string()))
}

fn check_longitude(deg: f64) -> Result<f64, JyotishError> {
    if deg.is_finite() {
        Ok(deg)
    } else {
        Err(JyotishError::InvalidLongitude(deg))
    }
}

impl ChartInput {
    /// Chart from signs only.
    pub fn new(lagna: Rashi, placements: [Rashi; 9]) -> Self {
        Self {
            lagna,
            placements,
            longitudes: None,
        }
    }

    /// Chart from sidereal longitudes of the lagna and all nine grahas.
    pub fn from_longitudes(lagna_deg: f64, longitudes: [f64; 9]) -> Result<Self, JyotishError> {
        let lagna = rashi_from_longitude(check_longitude(lagna_deg)?).rashi;
        let mut placements = [Rashi::Mesha; 9];
        for (slot, &deg) in placements.iter_mut().zip(longitudes.iter()) {
            *slot = rashi_from_longitude(check_longitude(deg)?).rashi;
        }
        Ok(Self {
            lagna,
            placements,
            longitudes: Some(longitudes),
        })
    }

    /// Set a single graha's sign.
    pub fn with_placement(mut self, graha: Graha, rashi: Rashi) -> Self {
        self.placements[graha.index() as usize] = rashi;
        self
    }

    pub fn rashi_of(&self, graha: Graha) -> Rashi {
        self.placements[graha.index() as usize]
    }

    /// Whole-sign house (1–12) of `graha` from the lagna.
    pub fn house_of(&self, graha: Graha) -> u8 {
        self.rashi_of(graha).house_from(self.lagna)
    }

    /// House of `graha` counted from the sign of `reference`.
    pub fn house_from_graha(&self, graha: Graha, reference: Graha) -> u8 {
        self.rashi_of(graha).house_from(self.rashi_of(reference))
    }

    /// Sidereal longitude of `graha`; the middle of its sign when only signs
    /// were supplied.
    pub fn longitude_of(&self, graha: Graha) -> f64 {
        match self.longitudes {
            Some(l) => l[graha.index() as usize],
            None => self.rashi_of(graha).index() as f64 * 30.0 + 15.0,
        }
    }

    /// Whether two grahas share a sign.
    pub fn conjunct(&self, a: Graha, b: Graha) -> bool {
        self.rashi_of(a) == self.rashi_of(b)
    }

    /// Grahas placed in `rashi`.
    pub fn occupants(&self, rashi: Rashi) -> Vec<Graha> {
        ALL_GRAHAS
            .iter()
            .copied()
            .filter(|&g| self.rashi_of(g) == rashi)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_sign_houses() {
        let chart = ChartInput::new(Rashi::Simha, [Rashi::Simha; 9])
            .with_placement(Graha::Mangal, Rashi::Vrischika)
            .with_placement(Graha::Chandra, Rashi::Karka);
        assert_eq!(chart.house_of(Graha::Surya), 1);
        assert_eq!(chart.house_of(Graha::Mangal), 4);
        assert_eq!(chart.house_of(Graha::Chandra), 12);
        assert_eq!(chart.house_from_graha(Graha::Mangal, Graha::Chandra), 5);
    }

    #[test]
    fn from_longitudes() {
        let lons = [10.0, 45.0, 100.0, 130.0, 200.0, 250.0, 300.0, 350.0, 170.0];
        let chart = ChartInput::from_longitudes(95.0, lons).unwrap();
        assert_eq!(chart.lagna, Rashi::Karka);
        assert_eq!(chart.rashi_of(Graha::Chandra), Rashi::Vrishabha);
        assert_eq!(chart.rashi_of(Graha::Rahu), Rashi::Meena);
        assert_eq!(chart.longitude_of(Graha::Shani), 300.0);
    }

    #[test]
    fn rejects_nan() {
        let mut lons = [0.0; 9];
        lons[2] = f64::NAN;
        assert!(matches!(
            ChartInput::from_longitudes(0.0, lons),
            Err(JyotishError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn graha_names() {
        assert_eq!(parse_graha("mangal"), Ok(Graha::Mangal));
        assert!(matches!(parse_graha("pluto"), Err(JyotishError::UnknownGraha(_))));
    }

    #[test]
    fn mid_sign_estimate() {
        let chart = ChartInput::new(Rashi::Mesha, [Rashi::Tula; 9]);
        assert_eq!(chart.longitude_of(Graha::Guru), 195.0);
        assert_eq!(chart.occupants(Rashi::Tula).len(), 9);
    }
}
