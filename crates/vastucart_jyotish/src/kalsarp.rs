//! Kalsarp dosha: the seven classical grahas hemmed between Rahu and Ketu.
//!
//! Ketu is taken as exactly opposite Rahu. A graha on either node counts as
//! inside both arcs. When the chart carries signs only, each graha sits in
//! the middle of its sign, so grahas sharing a node's sign land on the node.

use serde::Serialize;
use vastucart_core::{BilingualString, BilingualText as T, Graha, SAPTA_GRAHAS};

use crate::chart::ChartInput;
use crate::rashi::{Rashi, normalize_360, rashi_from_longitude};

/// The twelve kalsarp yogas, by Rahu's house from the lagna.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KalsarpType {
    Anant,
    Kulik,
    Vasuki,
    Shankhpal,
    Padma,
    Mahapadma,
    Takshak,
    Karkotak,
    Shankhachur,
    Ghatak,
    Vishdhar,
    Sheshnag,
}

const TYPES: [KalsarpType; 12] = [
    KalsarpType::Anant,
    KalsarpType::Kulik,
    KalsarpType::Vasuki,
    KalsarpType::Shankhpal,
    KalsarpType::Padma,
    KalsarpType::Mahapadma,
    KalsarpType::Takshak,
    KalsarpType::Karkotak,
    KalsarpType::Shankhachur,
    KalsarpType::Ghatak,
    KalsarpType::Vishdhar,
    KalsarpType::Sheshnag,
];

impl KalsarpType {
    /// Type for Rahu in `house` (1–12, wraps).
    pub const fn from_rahu_house(house: u8) -> Self {
        TYPES[((house + 11) % 12) as usize]
    }

    pub const fn label(self) -> T {
        match self {
            Self::Anant => T::new("Anant", "अनंत"),
            Self::Kulik => T::new("Kulik", "कुलिक"),
            Self::Vasuki => T::new("Vasuki", "वासुकी"),
            Self::Shankhpal => T::new("Shankhpal", "शंखपाल"),
            Self::Padma => T::new("Padma", "पद्म"),
            Self::Mahapadma => T::new("Mahapadma", "महापद्म"),
            Self::Takshak => T::new("Takshak", "तक्षक"),
            Self::Karkotak => T::new("Karkotak", "कर्कोटक"),
            Self::Shankhachur => T::new("Shankhachur", "शंखचूड़"),
            Self::Ghatak => T::new("Ghatak", "घातक"),
            Self::Vishdhar => T::new("Vishdhar", "विषधर"),
            Self::Sheshnag => T::new("Sheshnag", "शेषनाग"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KalsarpStatus {
    None,
    Partial,
    Full,
}

/// Which half of the zodiac holds the grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeArc {
    RahuToKetu,
    KetuToRahu,
}

static REMEDIES: [T; 4] = [
    T::new(
        "Perform Kalsarp dosha puja at Trimbakeshwar or Ujjain",
        "त्र्यंबकेश्वर या उज्जैन में कालसर्प दोष पूजा करवाएं",
    ),
    T::new(
        "Chant the Maha Mrityunjaya mantra daily",
        "प्रतिदिन महामृत्युंजय मंत्र का जाप करें",
    ),
    T::new(
        "Offer milk on a Shivling on Mondays",
        "सोमवार को शिवलिंग पर दूध अर्पित करें",
    ),
    T::new(
        "Worship Nag Devta on Nag Panchami",
        "नाग पंचमी पर नाग देवता की पूजा करें",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KalsarpResult {
    pub rahu_rashi: Rashi,
    pub ketu_rashi: Rashi,
    pub rahu_house: u8,
    pub status: KalsarpStatus,
    pub has_dosha: bool,
    pub kalsarp_type: Option<KalsarpType>,
    pub arc: Option<NodeArc>,
    /// Grahas outside the hemming arc; one entry for a partial dosha.
    pub outside: Vec<Graha>,
    /// True when positions were estimated from signs.
    pub approximate: bool,
    pub remedies: &'static [T],
    pub summary: BilingualString,
}

fn outside_arc(chart: &ChartInput, rahu: f64, arc: NodeArc) -> Vec<Graha> {
    SAPTA_GRAHAS
        .iter()
        .copied()
        .filter(|&g| {
            let d = normalize_360(chart.longitude_of(g) - rahu);
            let on_node = d == 0.0 || d == 180.0;
            let inside = match arc {
                NodeArc::RahuToKetu => d < 180.0,
                NodeArc::KetuToRahu => d > 180.0,
            };
            !(inside || on_node)
        })
        .collect()
}

fn summary(status: KalsarpStatus, kind: Option<KalsarpType>) -> BilingualString {
    match (status, kind) {
        (KalsarpStatus::Full, Some(k)) => {
            let l = k.label();
            BilingualString::new(
                format!("Full {} Kalsarp dosha is present.", l.en),
                format!("पूर्ण {} कालसर्प दोष उपस्थित है।", l.hi),
            )
        }
        (KalsarpStatus::Partial, Some(k)) => {
            let l = k.label();
            BilingualString::new(
                format!("Partial {} Kalsarp dosha: one graha lies outside the nodes.", l.en),
                format!("आंशिक {} कालसर्प दोष: एक ग्रह राहु-केतु अक्ष से बाहर है।", l.hi),
            )
        }
        _ => BilingualString::new(
            "No Kalsarp dosha in this chart.",
            "इस कुंडली में कालसर्प दोष नहीं है।",
        ),
    }
}

pub fn check_kalsarp(chart: &ChartInput) -> KalsarpResult {
    let rahu = normalize_360(chart.longitude_of(Graha::Rahu));
    let rahu_rashi = rashi_from_longitude(rahu).rashi;
    let ketu_rashi = rashi_from_longitude(rahu + 180.0).rashi;
    let rahu_house = rahu_rashi.house_from(chart.lagna);

    let rk = outside_arc(chart, rahu, NodeArc::RahuToKetu);
    let kr = outside_arc(chart, rahu, NodeArc::KetuToRahu);
    let (arc, outside) = if rk.len() <= kr.len() {
        (NodeArc::RahuToKetu, rk)
    } else {
        (NodeArc::KetuToRahu, kr)
    };

    let status = match outside.len() {
        0 => KalsarpStatus::Full,
        1 => KalsarpStatus::Partial,
        _ => KalsarpStatus::None,
    };
    let has_dosha = status != KalsarpStatus::None;
    let kalsarp_type = has_dosha.then(|| KalsarpType::from_rahu_house(rahu_house));

    log::debug!(
        "kalsarp: rahu {rahu:.2} in house {rahu_house}, {} outside, {status:?}",
        outside.len()
    );

    KalsarpResult {
        rahu_rashi,
        ketu_rashi,
        rahu_house,
        status,
        has_dosha,
        kalsarp_type,
        arc: has_dosha.then_some(arc),
        outside: if has_dosha { outside } else { Vec::new() },
        approximate: chart.longitudes.is_none(),
        remedies: if has_dosha { &REMEDIES[..] } else { &[] },
        summary: summary(status, kalsarp_type),
    }
}
