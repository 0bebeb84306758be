//! Sade-sati and dhaiya from Saturn's transit sign relative to the natal
//! Moon sign.

use serde::Serialize;
use vastucart_core::{BilingualString, BilingualText as T};

use crate::rashi::Rashi;

/// The three two-and-a-half-year phases of sade-sati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SadeSatiPhase {
    /// Saturn in the 12th from the Moon.
    Rising,
    /// Saturn over the Moon sign.
    Peak,
    /// Saturn in the 2nd from the Moon.
    Setting,
}

impl SadeSatiPhase {
    pub const fn from_house(house: u8) -> Option<Self> {
        match house {
            12 => Some(Self::Rising),
            1 => Some(Self::Peak),
            2 => Some(Self::Setting),
            _ => None,
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::Rising => T::new("Rising phase", "आरोही चरण"),
            Self::Peak => T::new("Peak phase", "शिखर चरण"),
            Self::Setting => T::new("Setting phase", "अवरोही चरण"),
        }
    }

    const fn description(self) -> T {
        match self {
            Self::Rising => T::new(
                "Saturn transits the 12th from your Moon: expenses, travel and disturbed sleep.",
                "शनि चंद्र से बारहवें भाव में: खर्च, यात्रा और नींद में बाधा।",
            ),
            Self::Peak => T::new(
                "Saturn transits your Moon sign: mental pressure, health and hard work.",
                "शनि आपकी चंद्र राशि पर: मानसिक दबाव, स्वास्थ्य और कठिन परिश्रम।",
            ),
            Self::Setting => T::new(
                "Saturn transits the 2nd from your Moon: family and finances need care.",
                "शनि चंद्र से दूसरे भाव में: परिवार और धन पर ध्यान दें।",
            ),
        }
    }
}

/// Saturn's small panoti (dhaiya).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dhaiya {
    /// Saturn in the 4th from the Moon.
    Kantak,
    /// Saturn in the 8th from the Moon.
    Ashtama,
}

impl Dhaiya {
    pub const fn from_house(house: u8) -> Option<Self> {
        match house {
            4 => Some(Self::Kantak),
            8 => Some(Self::Ashtama),
            _ => None,
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::Kantak => T::new("Kantak Shani (4th house dhaiya)", "कंटक शनि (चतुर्थ ढैया)"),
            Self::Ashtama => T::new("Ashtama Shani (8th house dhaiya)", "अष्टम शनि (अष्टम ढैया)"),
        }
    }
}

static REMEDIES: [T; 4] = [
    T::new(
        "Recite the Hanuman Chalisa on Saturdays",
        "शनिवार को हनुमान चालीसा का पाठ करें",
    ),
    T::new(
        "Light a mustard oil lamp under a peepal tree on Saturdays",
        "शनिवार को पीपल के नीचे सरसों के तेल का दीपक जलाएं",
    ),
    T::new(
        "Donate black sesame, urad and iron items",
        "काले तिल, उड़द और लोहे की वस्तुओं का दान करें",
    ),
    T::new(
        "Chant \"Om Sham Shanaishcharaya Namah\" 108 times",
        "\"ॐ शं शनैश्चराय नमः\" का 108 बार जाप करें",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SadeSatiResult {
    pub moon_rashi: Rashi,
    pub saturn_rashi: Rashi,
    pub saturn_house_from_moon: u8,
    pub in_sade_sati: bool,
    pub phase: Option<SadeSatiPhase>,
    pub dhaiya: Option<Dhaiya>,
    pub description: BilingualString,
    /// Empty when neither sade-sati nor dhaiya applies.
    pub remedies: &'static [T],
}

pub fn check_sade_sati(moon_rashi: Rashi, saturn_rashi: Rashi) -> SadeSatiResult {
    let house = saturn_rashi.house_from(moon_rashi);
    let phase = SadeSatiPhase::from_house(house);
    let dhaiya = Dhaiya::from_house(house);

    let description = match (phase, dhaiya) {
        (Some(p), _) => {
            let (l, d) = (p.label(), p.description());
            BilingualString::new(
                format!("Sade-sati, {}. {}", l.en, d.en),
                format!("साढ़े साती, {}। {}", l.hi, d.hi),
            )
        }
        (None, Some(d)) => {
            let l = d.label();
            BilingualString::new(
                format!("{} is running; not sade-sati.", l.en),
                format!("{} चल रही है; साढ़े साती नहीं।", l.hi),
            )
        }
        (None, None) => BilingualString::new(
            "Saturn is not afflicting your Moon sign.",
            "शनि आपकी चंद्र राशि को पीड़ित नहीं कर रहे।",
        ),
    };

    log::debug!("sade-sati: saturn {saturn_rashi} is house {house} from moon {moon_rashi}");

    let afflicted = phase.is_some() || dhaiya.is_some();
    SadeSatiResult {
        moon_rashi,
        saturn_rashi,
        saturn_house_from_moon: house,
        in_sade_sati: phase.is_some(),
        phase,
        dhaiya,
        description,
        remedies: if afflicted { &REMEDIES[..] } else { &[] },
    }
}

/// Moon signs under sade-sati while Saturn transits `saturn_rashi`, in
/// rising, peak, setting order.
pub fn moon_signs_in_sade_sati(saturn_rashi: Rashi) -> [(Rashi, SadeSatiPhase); 3] {
    [
        (saturn_rashi.offset(1), SadeSatiPhase::Rising),
        (saturn_rashi, SadeSatiPhase::Peak),
        (saturn_rashi.offset(11), SadeSatiPhase::Setting),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_phases() {
        let moon = Rashi::Kumbha;
        assert_eq!(
            check_sade_sati(moon, Rashi::Makara).phase,
            Some(SadeSatiPhase::Rising)
        );
        assert_eq!(check_sade_sati(moon, Rashi::Kumbha).phase, Some(SadeSatiPhase::Peak));
        assert_eq!(
            check_sade_sati(moon, Rashi::Meena).phase,
            Some(SadeSatiPhase::Setting)
        );
        assert!(!check_sade_sati(moon, Rashi::Mesha).in_sade_sati);
    }

    #[test]
    fn dhaiya() {
        let r = check_sade_sati(Rashi::Mesha, Rashi::Karka);
        assert_eq!(r.dhaiya, Some(Dhaiya::Kantak));
        assert!(!r.in_sade_sati);
        assert!(!r.remedies.is_empty());
        assert_eq!(
            check_sade_sati(Rashi::Mesha, Rashi::Vrischika).dhaiya,
            Some(Dhaiya::Ashtama)
        );
    }

    #[test]
    fn clear_transit() {
        let r = check_sade_sati(Rashi::Mesha, Rashi::Simha);
        assert_eq!(r.saturn_house_from_moon, 5);
        assert!(r.phase.is_none() && r.dhaiya.is_none());
        assert!(r.remedies.is_empty());
    }

    #[test]
    fn moon_signs_round_trip() {
        for (moon, phase) in moon_signs_in_sade_sati(Rashi::Meena) {
            assert_eq!(check_sade_sati(moon, Rashi::Meena).phase, Some(phase));
        }
        assert_eq!(moon_signs_in_sade_sati(Rashi::Meena)[0].0, Rashi::Mesha);
    }
}
