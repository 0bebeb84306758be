//! Love compatibility between two partners.
//!
//! Three pair scores come from the compatibility matrix (life path, name
//! number, birth day) and are blended 50/30/20. Strengths, challenges and
//! advice are picked by rules on the partners' life-path roots, then topped
//! up from the defaults of the resulting level.

use serde::Serialize;
use vastucart_core::{
    BilingualString, BilingualText as T, BirthDate, LetterSystem, MasterPolicy,
    birth_day_number, life_path_number, name_number, root,
};

use crate::tables::compatibility::compatibility_score;

/// Weights of the three pair scores, in tenths.
pub const LIFE_PATH_WEIGHT: u32 = 5;
pub const NAME_WEIGHT: u32 = 3;
pub const BIRTH_DAY_WEIGHT: u32 = 2;

pub const MIN_BULLETS: usize = 3;
pub const MAX_BULLETS: usize = 4;

/// One partner's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partner {
    pub name: String,
    pub birth_date: BirthDate,
}

impl Partner {
    pub fn new(name: impl Into<String>, birth_date: BirthDate) -> Self {
        Self {
            name: name.into(),
            birth_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerNumbers {
    pub life_path: u8,
    pub name_number: u8,
    pub birth_day: u8,
}

impl PartnerNumbers {
    pub fn of(partner: &Partner) -> Self {
        Self {
            life_path: life_path_number(partner.birth_date, MasterPolicy::ElevenTwentyTwo),
            name_number: name_number(&partner.name, LetterSystem::Pythagorean),
            birth_day: birth_day_number(partner.birth_date.day()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CompatibilityLevel {
    Challenging,
    Average,
    Good,
    Excellent,
}

impl CompatibilityLevel {
    pub const fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Excellent,
            65..=79 => Self::Good,
            50..=64 => Self::Average,
            _ => Self::Challenging,
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::Excellent => T::new("Excellent", "उत्कृष्ट"),
            Self::Good => T::new("Good", "अच्छा"),
            Self::Average => T::new("Average", "सामान्य"),
            Self::Challenging => T::new("Challenging", "चुनौतीपूर्ण"),
        }
    }

    fn summary(self) -> T {
        match self {
            Self::Excellent => T::new(
                "A naturally harmonious match with strong mutual support.",
                "स्वाभाविक रूप से सामंजस्यपूर्ण जोड़ी, जिसमें परस्पर सहयोग प्रबल है।",
            ),
            Self::Good => T::new(
                "A good match; small adjustments keep the relationship smooth.",
                "अच्छी जोड़ी; छोटे समायोजन से संबंध सहज रहता है।",
            ),
            Self::Average => T::new(
                "A workable match that grows with patience and understanding.",
                "धैर्य और समझ से आगे बढ़ने वाली व्यावहारिक जोड़ी।",
            ),
            Self::Challenging => T::new(
                "A demanding match; conscious effort is needed from both sides.",
                "कठिन जोड़ी; दोनों पक्षों से सचेत प्रयास आवश्यक है।",
            ),
        }
    }

    fn defaults(self) -> &'static Bullets {
        match self {
            Self::Excellent | Self::Good => &WARM_DEFAULTS,
            Self::Average | Self::Challenging => &MIXED_DEFAULTS,
        }
    }
}

struct Bullets {
    strengths: &'static [T],
    challenges: &'static [T],
    advice: &'static [T],
}

static WARM_DEFAULTS: Bullets = Bullets {
    strengths: &[
        T::new("Easy emotional understanding", "सहज भावनात्मक समझ"),
        T::new("Shared values and goals", "साझा मूल्य और लक्ष्य"),
        T::new("Mutual respect", "परस्पर सम्मान"),
    ],
    challenges: &[
        T::new("Taking the bond for granted", "संबंध को हल्के में लेना"),
        T::new("Avoiding small disagreements", "छोटी असहमतियों को टालना"),
        T::new("Routine can dull romance", "दिनचर्या से रोमांस फीका पड़ सकता है"),
    ],
    advice: &[
        T::new("Keep celebrating small milestones", "छोटी उपलब्धियों का उत्सव मनाते रहें"),
        T::new("Try new experiences together", "साथ मिलकर नए अनुभव लें"),
        T::new("Express gratitude often", "अक्सर आभार व्यक्त करें"),
    ],
};

static MIXED_DEFAULTS: Bullets = Bullets {
    strengths: &[
        T::new("Room to learn from differences", "मतभेदों से सीखने का अवसर"),
        T::new("Complementary skills", "एक-दूसरे के पूरक गुण"),
        T::new("Potential for growth together", "साथ बढ़ने की संभावना"),
    ],
    challenges: &[
        T::new("Different expectations", "भिन्न अपेक्षाएं"),
        T::new("Misread intentions", "इरादों की गलत व्याख्या"),
        T::new("Clashing daily rhythms", "दैनिक दिनचर्या में टकराव"),
    ],
    advice: &[
        T::new("Talk through expectations early", "अपेक्षाओं पर पहले ही बात करें"),
        T::new("Practise patient listening", "धैर्य से सुनने का अभ्यास करें"),
        T::new("Agree on shared routines", "साझा दिनचर्या पर सहमति बनाएं"),
    ],
};

/// When a rule fires, in terms of the two life-path roots.
#[derive(Debug, Clone, Copy)]
enum Trigger {
    /// Either partner's root is in the set.
    Either(&'static [u8]),
    /// Both roots are equal.
    Same,
}

impl Trigger {
    fn fires(self, a: u8, b: u8) -> bool {
        match self {
            Self::Either(set) => set.contains(&a) || set.contains(&b),
            Self::Same => a == b,
        }
    }
}

struct Rule {
    trigger: Trigger,
    strength: T,
    challenge: T,
    advice: T,
}

static RULES: [Rule; 7] = [
    Rule {
        trigger: Trigger::Either(&[1, 8]),
        strength: T::new("Strong shared ambition", "प्रबल साझा महत्वाकांक्षा"),
        challenge: T::new("Power struggles over who leads", "नेतृत्व को लेकर सत्ता संघर्ष"),
        advice: T::new("Divide leadership by area instead of competing", "प्रतिस्पर्धा के बजाय क्षेत्र के अनुसार नेतृत्व बांटें"),
    },
    Rule {
        trigger: Trigger::Either(&[2, 6]),
        strength: T::new("Deep emotional care", "गहरी भावनात्मक देखभाल"),
        challenge: T::new("Sensitivity to criticism", "आलोचना के प्रति संवेदनशीलता"),
        advice: T::new("State needs openly rather than hinting", "संकेत देने के बजाय अपनी जरूरतें खुलकर कहें"),
    },
    Rule {
        trigger: Trigger::Either(&[3, 5]),
        strength: T::new("Lively communication and fun", "जीवंत संवाद और आनंद"),
        challenge: T::new("Restlessness and scattered focus", "बेचैनी और बिखरा ध्यान"),
        advice: T::new("Plan regular adventures together", "नियमित रूप से साथ में रोमांच की योजना बनाएं"),
    },
    Rule {
        trigger: Trigger::Either(&[4, 8]),
        strength: T::new("Practical teamwork on long-term goals", "दीर्घकालिक लक्ष्यों पर व्यावहारिक टीमवर्क"),
        challenge: T::new("Work crowding out romance", "काम के कारण रोमांस की कमी"),
        advice: T::new("Set aside fixed time for each other", "एक-दूसरे के लिए निश्चित समय निकालें"),
    },
    Rule {
        trigger: Trigger::Either(&[7]),
        strength: T::new("Intellectual and spiritual depth", "बौद्धिक और आध्यात्मिक गहराई"),
        challenge: T::new("Need for solitude may feel distant", "एकांत की आवश्यकता दूरी जैसी लग सकती है"),
        advice: T::new("Respect quiet time as a way to recharge", "शांत समय को ऊर्जा पाने का साधन मानें"),
    },
    Rule {
        trigger: Trigger::Either(&[9]),
        strength: T::new("Generosity and shared ideals", "उदारता और साझा आदर्श"),
        challenge: T::new("Idealism overlooking practical matters", "आदर्शवाद में व्यावहारिक बातों की अनदेखी"),
        advice: T::new("Turn shared ideals into a joint cause", "साझा आदर्शों को एक संयुक्त उद्देश्य बनाएं"),
    },
    Rule {
        trigger: Trigger::Same,
        strength: T::new("Instinctive understanding of each other", "एक-दूसरे की सहज समझ"),
        challenge: T::new("Shared blind spots", "साझा कमजोरियां"),
        advice: T::new("Seek outside views on big decisions", "बड़े निर्णयों पर बाहरी राय लें"),
    },
];

/// Rule picks first, then level defaults, de-duplicated and bounded to
/// [`MIN_BULLETS`]..=[`MAX_BULLETS`].
fn fill(picked: Vec<T>, defaults: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(MAX_BULLETS);
    for t in picked {
        if !out.contains(&t) {
            out.push(t);
        }
    }
    for t in defaults {
        if out.len() >= MIN_BULLETS {
            break;
        }
        if !out.contains(t) {
            out.push(*t);
        }
    }
    out.truncate(MAX_BULLETS);
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoveCompatibilityResult {
    pub partner_a: PartnerNumbers,
    pub partner_b: PartnerNumbers,
    pub life_path_score: u8,
    pub name_score: u8,
    pub birth_day_score: u8,
    pub compatibility_score: u8,
    pub level: CompatibilityLevel,
    pub level_label: T,
    pub summary: BilingualString,
    pub strengths: Vec<T>,
    pub challenges: Vec<T>,
    pub advice: Vec<T>,
}

/// Blend of the three pair scores, rounded half up and clamped to 100.
pub fn weighted_score(life_path: u8, name: u8, birth_day: u8) -> u8 {
    let tenths = LIFE_PATH_WEIGHT * life_path as u32
        + NAME_WEIGHT * name as u32
        + BIRTH_DAY_WEIGHT * birth_day as u32;
    ((tenths + 5) / 10).min(100) as u8
}

/// Compatibility of two partners. Symmetric in `a` and `b`.
pub fn calculate_love_compatibility(a: &Partner, b: &Partner) -> LoveCompatibilityResult {
    let na = PartnerNumbers::of(a);
    let nb = PartnerNumbers::of(b);

    let life_path_score = compatibility_score(na.life_path, nb.life_path);
    let name_score = compatibility_score(na.name_number, nb.name_number);
    let birth_day_score = compatibility_score(na.birth_day, nb.birth_day);
    let score = weighted_score(life_path_score, name_score, birth_day_score);
    let level = CompatibilityLevel::from_score(score);

    log::debug!(
        "love: {na:?} x {nb:?} -> lp {life_path_score}, name {name_score}, day {birth_day_score}, overall {score}"
    );

    let (ra, rb) = (root(na.life_path), root(nb.life_path));
    let fired: Vec<&Rule> = RULES.iter().filter(|r| r.trigger.fires(ra, rb)).collect();
    let defaults = level.defaults();

    let strengths = fill(fired.iter().map(|r| r.strength).collect(), defaults.strengths);
    let challenges = fill(fired.iter().map(|r| r.challenge).collect(), defaults.challenges);
    let advice = fill(fired.iter().map(|r| r.advice).collect(), defaults.advice);

    let blurb = level.summary();
    let summary = BilingualString::new(
        format!("{score}% compatible. {}", blurb.en),
        format!("{score}% अनुकूलता। {}", blurb.hi),
    );

    LoveCompatibilityResult {
        partner_a: na,
        partner_b: nb,
        life_path_score,
        name_score,
        birth_day_score,
        compatibility_score: score,
        level,
        level_label: level.label(),
        summary,
        strengths,
        challenges,
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> Partner {
        Partner::new("Asha", BirthDate::new(15, 7, 1990).unwrap())
    }

    fn ravi() -> Partner {
        Partner::new("Ravi", BirthDate::new(6, 2, 1992).unwrap())
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(CompatibilityLevel::from_score(100), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(80), CompatibilityLevel::Excellent);
        assert_eq!(CompatibilityLevel::from_score(79), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(65), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(50), CompatibilityLevel::Average);
        assert_eq!(CompatibilityLevel::from_score(49), CompatibilityLevel::Challenging);
    }

    #[test]
    fn weighted_rounding() {
        assert_eq!(weighted_score(55, 55, 80), 60);
        assert_eq!(weighted_score(100, 100, 100), 100);
        // 0.5*85 + 0.3*70 + 0.2*65 = 76.5
        assert_eq!(weighted_score(85, 70, 65), 77);
    }

    #[test]
    fn known_pair() {
        // Asha: LP 5, name 11, day 6. Ravi: LP 11, name 5, day 6.
        let r = calculate_love_compatibility(&asha(), &ravi());
        assert_eq!(r.partner_a.life_path, 5);
        assert_eq!(r.partner_b.life_path, 11);
        assert_eq!(r.life_path_score, 55);
        assert_eq!(r.name_score, 55);
        assert_eq!(r.birth_day_score, 80);
        assert_eq!(r.compatibility_score, 60);
        assert_eq!(r.level, CompatibilityLevel::Average);
    }

    #[test]
    fn bullets_bounded() {
        let r = calculate_love_compatibility(&asha(), &ravi());
        for list in [&r.strengths, &r.challenges, &r.advice] {
            assert!((MIN_BULLETS..=MAX_BULLETS).contains(&list.len()));
        }
        // roots 5 and 2 fire the 2/6 and 3/5 rules first
        assert_eq!(r.strengths[0].en, "Deep emotional care");
        assert_eq!(r.strengths[1].en, "Lively communication and fun");
    }

    #[test]
    fn symmetric_in_partners() {
        let ab = calculate_love_compatibility(&asha(), &ravi());
        let ba = calculate_love_compatibility(&ravi(), &asha());
        assert_eq!(ab.compatibility_score, ba.compatibility_score);
        assert_eq!(ab.level, ba.level);
        assert_eq!(ab.strengths, ba.strengths);
        assert_eq!(ab.advice, ba.advice);
    }
}
