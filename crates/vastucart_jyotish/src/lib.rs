//! Rule checks over a caller-supplied birth chart.
//!
//! No ephemeris is computed here: the lagna, the sign (and optionally the
//! sidereal longitude) of each graha, and the Moon's longitude for dashas
//! are inputs.
//!
//! This crate provides:
//! - Rashi and nakshatra arithmetic with whole-sign houses
//! - Manglik dosha with cancellations
//! - Kalsarp dosha (full and partial) and its twelve types
//! - Sade-sati phases and Saturn dhaiya
//! - Vimshottari mahadashas and antardashas

pub mod chart;
pub mod dasha;
pub mod error;
pub mod kalsarp;
pub mod manglik;
pub mod nakshatra;
pub mod rashi;
pub mod sade_sati;

pub use chart::{ChartInput, parse_graha};
pub use dasha::{
    ActiveDasha, DAYS_PER_YEAR, DashaBalance, DashaPeriod, Mahadasha, MahadashaRequest,
    MahadashaResult, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, calculate_mahadasha,
    starting_lord, vimshottari_years,
};
pub use error::JyotishError;
pub use kalsarp::{KalsarpResult, KalsarpStatus, KalsarpType, NodeArc, check_kalsarp};
pub use manglik::{
    Cancellation, MANGLIK_HOUSES, ManglikReference, ManglikResult, ManglikSeverity, MarsPosition,
    check_manglik,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPosition, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiPosition, rashi_from_longitude};
pub use sade_sati::{Dhaiya, SadeSatiPhase, SadeSatiResult, check_sade_sati, moon_signs_in_sade_sati};
