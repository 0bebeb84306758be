//! Manglik (Kuja) dosha.
//!
//! Mars in the 1st, 2nd, 4th, 7th, 8th or 12th house counted from the lagna,
//! the Moon and Venus. The number of references that flag Mars sets the
//! severity; a single cancellation clears the dosha but the positions are
//! still reported.

use serde::Serialize;
use vastucart_core::{BilingualString, BilingualText as T, Graha};

use crate::chart::ChartInput;
use crate::rashi::Rashi;

/// Houses from a reference point that carry the dosha.
pub const MANGLIK_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManglikReference {
    Lagna,
    Moon,
    Venus,
}

impl ManglikReference {
    pub const fn label(self) -> T {
        match self {
            Self::Lagna => T::new("Lagna", "लग्न"),
            Self::Moon => T::new("Moon", "चंद्र"),
            Self::Venus => T::new("Venus", "शुक्र"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManglikSeverity {
    None,
    Low,
    Partial,
    High,
}

impl ManglikSeverity {
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Low,
            2 => Self::Partial,
            _ => Self::High,
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::None => T::new("No Manglik dosha", "कोई मांगलिक दोष नहीं"),
            Self::Low => T::new("Low", "निम्न"),
            Self::Partial => T::new("Partial", "आंशिक"),
            Self::High => T::new("High", "उच्च"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cancellation {
    MarsOwnSign,
    MarsExalted,
    MarsSecondInMercurySign,
    MarsTwelfthInVenusSign,
    JupiterWithMars,
    JupiterInLagna,
}

impl Cancellation {
    pub const fn label(self) -> T {
        match self {
            Self::MarsOwnSign => T::new(
                "Mars is in its own sign (Aries or Scorpio)",
                "मंगल अपनी राशि (मेष या वृश्चिक) में है",
            ),
            Self::MarsExalted => T::new(
                "Mars is exalted in Capricorn",
                "मंगल मकर राशि में उच्च का है",
            ),
            Self::MarsSecondInMercurySign => T::new(
                "Mars in the 2nd house in Gemini or Virgo",
                "मंगल दूसरे भाव में मिथुन या कन्या राशि में",
            ),
            Self::MarsTwelfthInVenusSign => T::new(
                "Mars in the 12th house in Taurus or Libra",
                "मंगल बारहवें भाव में वृषभ या तुला राशि में",
            ),
            Self::JupiterWithMars => T::new(
                "Jupiter is conjunct Mars",
                "गुरु मंगल के साथ युति में है",
            ),
            Self::JupiterInLagna => T::new(
                "Jupiter is in the lagna",
                "गुरु लग्न में है",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarsPosition {
    pub reference: ManglikReference,
    pub reference_rashi: Rashi,
    pub house: u8,
    pub is_dosha: bool,
}

static REMEDIES: [T; 5] = [
    T::new(
        "Recite the Hanuman Chalisa on Tuesdays",
        "मंगलवार को हनुमान चालीसा का पाठ करें",
    ),
    T::new(
        "Perform Mangal Shanti puja before marriage",
        "विवाह से पहले मंगल शांति पूजा करवाएं",
    ),
    T::new(
        "Donate red lentils and jaggery on Tuesdays",
        "मंगलवार को मसूर दाल और गुड़ का दान करें",
    ),
    T::new(
        "Chant \"Om Angarakaya Namah\" 108 times",
        "\"ॐ अंगारकाय नमः\" का 108 बार जाप करें",
    ),
    T::new(
        "Prefer a partner who is also Manglik",
        "मांगलिक जीवनसाथी को प्राथमिकता दें",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManglikResult {
    pub mars_rashi: Rashi,
    pub positions: Vec<MarsPosition>,
    pub dosha_count: usize,
    pub severity: ManglikSeverity,
    pub cancellations: Vec<Cancellation>,
    pub is_manglik: bool,
    /// Empty unless the dosha stands.
    pub remedies: &'static [T],
    pub summary: BilingualString,
}

fn cancellations(chart: &ChartInput) -> Vec<Cancellation> {
    let mars = chart.rashi_of(Graha::Mangal);
    let house = chart.house_of(Graha::Mangal);
    let mut found = Vec::new();
    if matches!(mars, Rashi::Mesha | Rashi::Vrischika) {
        found.push(Cancellation::MarsOwnSign);
    }
    if mars == Rashi::Makara {
        found.push(Cancellation::MarsExalted);
    }
    if house == 2 && matches!(mars, Rashi::Mithuna | Rashi::Kanya) {
        found.push(Cancellation::MarsSecondInMercurySign);
    }
    if house == 12 && matches!(mars, Rashi::Vrishabha | Rashi::Tula) {
        found.push(Cancellation::MarsTwelfthInVenusSign);
    }
    if chart.conjunct(Graha::Guru, Graha::Mangal) {
        found.push(Cancellation::JupiterWithMars);
    }
    if chart.house_of(Graha::Guru) == 1 {
        found.push(Cancellation::JupiterInLagna);
    }
    found
}

fn summary(severity: ManglikSeverity, is_manglik: bool, cancelled: bool) -> BilingualString {
    if is_manglik {
        let s = severity.label();
        BilingualString::new(
            format!("Manglik dosha is present ({} severity).", s.en),
            format!("मांगलिक दोष उपस्थित है ({} तीव्रता)।", s.hi),
        )
    } else if cancelled {
        BilingualString::new(
            "Mars occupies a Manglik house but the dosha is cancelled.",
            "मंगल मांगलिक भाव में है परंतु दोष निरस्त हो जाता है।",
        )
    } else {
        BilingualString::new(
            "No Manglik dosha in this chart.",
            "इस कुंडली में मांगलिक दोष नहीं है।",
        )
    }
}

pub fn check_manglik(chart: &ChartInput) -> ManglikResult {
    let mars_rashi = chart.rashi_of(Graha::Mangal);
    let references = [
        (ManglikReference::Lagna, chart.lagna),
        (ManglikReference::Moon, chart.rashi_of(Graha::Chandra)),
        (ManglikReference::Venus, chart.rashi_of(Graha::Shukra)),
    ];
    let positions: Vec<MarsPosition> = references
        .iter()
        .map(|&(reference, reference_rashi)| {
            let house = mars_rashi.house_from(reference_rashi);
            MarsPosition {
                reference,
                reference_rashi,
                house,
                is_dosha: MANGLIK_HOUSES.contains(&house),
            }
        })
        .collect();

    let dosha_count = positions.iter().filter(|p| p.is_dosha).count();
    let severity = ManglikSeverity::from_count(dosha_count);
    let cancellations = if dosha_count > 0 {
        cancellations(chart)
    } else {
        Vec::new()
    };
    let is_manglik = dosha_count > 0 && cancellations.is_empty();

    log::debug!(
        "manglik: mars in {mars_rashi}, {dosha_count} references, {} cancellations",
        cancellations.len()
    );

    ManglikResult {
        mars_rashi,
        summary: summary(severity, is_manglik, !cancellations.is_empty()),
        positions,
        dosha_count,
        severity,
        cancellations,
        is_manglik,
        remedies: if is_manglik { &REMEDIES[..] } else { &[] },
    }
}
