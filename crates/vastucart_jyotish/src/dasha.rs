//! Vimshottari mahadasha and antardasha periods.
//!
//! The Moon's nakshatra fixes the first lord; the fraction of that nakshatra
//! already traversed at birth is the fraction of the first mahadasha already
//! spent. Antardashas divide each mahadasha in proportion to the 120-year
//! cycle, starting from the mahadasha lord itself.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use vastucart_core::{BirthDate, Graha};

use crate::error::JyotishError;
use crate::nakshatra::{Nakshatra, NakshatraPosition, nakshatra_from_longitude};

/// Year length used for dasha arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Dasha order with each lord's years; Ashwini starts at Ketu.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

fn sequence_position(graha: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&(g, _)| g == graha)
        .unwrap_or(0)
}

/// Full mahadasha length of `graha` in years.
pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[sequence_position(graha)].1
}

/// Lord of the first mahadasha for a Moon in `nakshatra`.
pub const fn starting_lord(nakshatra: Nakshatra) -> Graha {
    VIMSHOTTARI_SEQUENCE[nakshatra.index() as usize % 9].0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaPeriod {
    pub lord: Graha,
    pub start: NaiveDate,
    /// Exclusive.
    pub end: NaiveDate,
    /// Years actually lived in this period; shorter than the full length for
    /// periods cut by birth.
    pub years: f64,
}

impl DashaPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mahadasha {
    #[serde(flatten)]
    pub period: DashaPeriod,
    pub antardashas: Vec<DashaPeriod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaBalance {
    pub lord: Graha,
    pub total_years: f64,
    pub remaining_years: f64,
    pub elapsed_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDasha {
    pub on: NaiveDate,
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MahadashaRequest {
    pub birth_date: BirthDate,
    /// Sidereal longitude of the natal Moon, degrees.
    pub moon_longitude: f64,
    /// Date for the active-period lookup.
    pub on: Option<NaiveDate>,
}

impl MahadashaRequest {
    pub fn new(birth_date: BirthDate, moon_longitude: f64) -> Self {
        Self {
            birth_date,
            moon_longitude,
            on: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.on = Some(date);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MahadashaResult {
    pub birth_date: NaiveDate,
    pub moon: NakshatraPosition,
    pub balance: DashaBalance,
    pub mahadashas: Vec<Mahadasha>,
    pub active: Option<ActiveDasha>,
}

/// Span in days from birth; negative start for the first mahadasha.
#[derive(Debug, Clone, Copy)]
struct Span {
    lord: Graha,
    start: f64,
    end: f64,
}

fn to_date(birth: NaiveDate, days: f64) -> NaiveDate {
    birth
        .checked_add_signed(Duration::days(days.max(0.0).round() as i64))
        .unwrap_or(NaiveDate::MAX)
}

fn to_period(birth: NaiveDate, span: Span) -> DashaPeriod {
    let start = span.start.max(0.0);
    DashaPeriod {
        lord: span.lord,
        start: to_date(birth, start),
        end: to_date(birth, span.end),
        years: (span.end - start) / DAYS_PER_YEAR,
    }
}

/// Proportional sub-periods of `parent`, clipped at birth.
fn antardashas(birth: NaiveDate, parent: Span) -> Vec<DashaPeriod> {
    let first = sequence_position(parent.lord);
    let duration = parent.end - parent.start;
    let mut cursor = parent.start;
    let mut spans: Vec<Span> = (0..9)
        .map(|i| {
            let (lord, years) = VIMSHOTTARI_SEQUENCE[(first + i) % 9];
            let end = cursor + duration * years / VIMSHOTTARI_TOTAL_YEARS;
            let span = Span {
                lord,
                start: cursor,
                end,
            };
            cursor = end;
            span
        })
        .collect();
    if let Some(last) = spans.last_mut() {
        last.end = parent.end;
    }
    spans
        .into_iter()
        .filter(|s| s.end > 0.0)
        .map(|s| to_period(birth, s))
        .collect()
}

pub fn calculate_mahadasha(request: &MahadashaRequest) -> Result<MahadashaResult, JyotishError> {
    if !request.moon_longitude.is_finite() {
        return Err(JyotishError::InvalidLongitude(request.moon_longitude));
    }
    let birth = request.birth_date.to_naive();
    let moon = nakshatra_from_longitude(request.moon_longitude);
    let lord = starting_lord(moon.nakshatra);
    let total_years = vimshottari_years(lord);
    let balance = DashaBalance {
        lord,
        total_years,
        remaining_years: total_years * (1.0 - moon.elapsed_fraction),
        elapsed_fraction: moon.elapsed_fraction,
    };

    let first = sequence_position(lord);
    let mut cursor = -moon.elapsed_fraction * total_years * DAYS_PER_YEAR;
    let mahadashas: Vec<Mahadasha> = (0..9)
        .map(|i| {
            let (lord, years) = VIMSHOTTARI_SEQUENCE[(first + i) % 9];
            let span = Span {
                lord,
                start: cursor,
                end: cursor + years * DAYS_PER_YEAR,
            };
            cursor = span.end;
            Mahadasha {
                period: to_period(birth, span),
                antardashas: antardashas(birth, span),
            }
        })
        .collect();

    let active = request.on.and_then(|on| {
        let maha = mahadashas.iter().find(|m| m.period.contains(on))?;
        let antar = maha.antardashas.iter().find(|a| a.contains(on))?;
        Some(ActiveDasha {
            on,
            mahadasha: maha.period,
            antardasha: *antar,
        })
    });

    log::debug!(
        "mahadasha: moon in {} pada {}, first lord {lord} with {:.2} of {total_years} years left",
        moon.nakshatra.name(),
        moon.pada,
        balance.remaining_years
    );

    Ok(MahadashaResult {
        birth_date: birth,
        moon,
        balance,
        mahadashas,
        active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;

    fn birth() -> BirthDate {
        BirthDate::new(1, 1, 2000).unwrap()
    }

    #[test]
    fn cycle_is_120_years() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|&(_, y)| y).sum();
        assert_eq!(total, VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn starting_lords() {
        assert_eq!(starting_lord(Nakshatra::Ashwini), Graha::Ketu);
        assert_eq!(starting_lord(Nakshatra::Magha), Graha::Ketu);
        assert_eq!(starting_lord(Nakshatra::Rohini), Graha::Chandra);
        assert_eq!(starting_lord(Nakshatra::Revati), Graha::Buddh);
    }

    #[test]
    fn full_first_period_at_nakshatra_start() {
        let r = calculate_mahadasha(&MahadashaRequest::new(birth(), 40.0)).unwrap();
        assert_eq!(r.balance.lord, Graha::Chandra);
        assert!((r.balance.remaining_years - 10.0).abs() < 1e-9);
        assert_eq!(r.mahadashas.len(), 9);
        let first = &r.mahadashas[0];
        assert_eq!(first.period.start, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(first.period.end, NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!(first.antardashas.len(), 9);
        assert_eq!(first.antardashas[0].lord, Graha::Chandra);
        assert_eq!(first.antardashas[1].lord, Graha::Mangal);
        assert_eq!(r.mahadashas[1].period.lord, Graha::Mangal);
    }

    #[test]
    fn balance_clips_first_antardashas() {
        let r = calculate_mahadasha(&MahadashaRequest::new(birth(), NAKSHATRA_SPAN / 2.0)).unwrap();
        assert_eq!(r.balance.lord, Graha::Ketu);
        assert!((r.balance.remaining_years - 3.5).abs() < 1e-9);
        let first = &r.mahadashas[0];
        let lords: Vec<Graha> = first.antardashas.iter().map(|a| a.lord).collect();
        assert_eq!(lords, vec![Graha::Rahu, Graha::Guru, Graha::Shani, Graha::Buddh]);
        assert_eq!(first.antardashas[0].start, first.period.start);
        let sum: f64 = first.antardashas.iter().map(|a| a.years).sum();
        assert!((sum - 3.5).abs() < 1e-9);
    }

    #[test]
    fn active_period() {
        let on = NaiveDate::from_ymd_opt(2005, 1, 1).unwrap();
        let r = calculate_mahadasha(&MahadashaRequest::new(birth(), 40.0).on(on)).unwrap();
        let active = r.active.unwrap();
        assert_eq!(active.mahadasha.lord, Graha::Chandra);
        assert_eq!(active.antardasha.lord, Graha::Shani);
    }

    #[test]
    fn before_birth_has_no_active_period() {
        let on = NaiveDate::from_ymd_opt(1999, 6, 1).unwrap();
        let r = calculate_mahadasha(&MahadashaRequest::new(birth(), 40.0).on(on)).unwrap();
        assert!(r.active.is_none());
    }

    #[test]
    fn rejects_non_finite_moon() {
        assert!(calculate_mahadasha(&MahadashaRequest::new(birth(), f64::INFINITY)).is_err());
    }
}
