//! Meaning of each numerology number (1–9 and the master numbers).

use serde::Serialize;
use vastucart_core::BilingualText as T;

/// Descriptive profile of one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberProfile {
    pub number: u8,
    pub title: T,
    pub keywords: &'static [T],
    pub description: T,
    pub strengths: &'static [T],
    pub challenges: &'static [T],
    pub careers: &'static [T],
}

/// Every number with a profile, in table order.
pub const PROFILE_NUMBERS: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

static PROFILES: [NumberProfile; 12] = [
    NumberProfile {
        number: 1,
        title: T::new("The Leader", "नेता"),
        keywords: &[
            T::new("Independence", "स्वतंत्रता"),
            T::new("Ambition", "महत्वाकांक्षा"),
            T::new("Initiative", "पहल"),
        ],
        description: T::new(
            "Ruled by the Sun, number 1 carries pioneering energy, self-reliance and the drive to be first.",
            "सूर्य द्वारा शासित अंक 1 अग्रणी ऊर्जा, आत्मनिर्भरता और सबसे आगे रहने की प्रेरणा देता है।",
        ),
        strengths: &[
            T::new("Natural leadership", "स्वाभाविक नेतृत्व"),
            T::new("Strong willpower", "दृढ़ इच्छाशक्ति"),
            T::new("Original thinking", "मौलिक सोच"),
        ],
        challenges: &[
            T::new("Stubbornness", "हठ"),
            T::new("Impatience with others", "दूसरों के प्रति अधीरता"),
        ],
        careers: &[
            T::new("Entrepreneur", "उद्यमी"),
            T::new("Administrator", "प्रशासक"),
            T::new("Politician", "राजनेता"),
        ],
    },
    NumberProfile {
        number: 2,
        title: T::new("The Peacemaker", "शांतिदूत"),
        keywords: &[
            T::new("Harmony", "सामंजस्य"),
            T::new("Sensitivity", "संवेदनशीलता"),
            T::new("Cooperation", "सहयोग"),
        ],
        description: T::new(
            "Ruled by the Moon, number 2 is gentle, intuitive and happiest working in partnership.",
            "चंद्रमा द्वारा शासित अंक 2 कोमल, अंतर्ज्ञानी और साझेदारी में सबसे अधिक प्रसन्न रहता है।",
        ),
        strengths: &[
            T::new("Diplomacy", "कूटनीति"),
            T::new("Deep intuition", "गहरा अंतर्ज्ञान"),
            T::new("Caring nature", "देखभाल करने वाला स्वभाव"),
        ],
        challenges: &[
            T::new("Mood swings", "मनोदशा में उतार-चढ़ाव"),
            T::new("Over-dependence on others", "दूसरों पर अधिक निर्भरता"),
        ],
        careers: &[
            T::new("Counsellor", "परामर्शदाता"),
            T::new("Artist", "कलाकार"),
            T::new("Nurse", "नर्स"),
        ],
    },
    NumberProfile {
        number: 3,
        title: T::new("The Communicator", "संवादक"),
        keywords: &[
            T::new("Creativity", "रचनात्मकता"),
            T::new("Wisdom", "ज्ञान"),
            T::new("Optimism", "आशावाद"),
        ],
        description: T::new(
            "Ruled by Jupiter, number 3 brings expansion, learning and joyful self-expression.",
            "गुरु द्वारा शासित अंक 3 विस्तार, ज्ञान और आनंदपूर्ण अभिव्यक्ति लाता है।",
        ),
        strengths: &[
            T::new("Expressive speech", "प्रभावशाली वाणी"),
            T::new("Teaching ability", "शिक्षण क्षमता"),
            T::new("Generosity", "उदारता"),
        ],
        challenges: &[
            T::new("Scattered focus", "बिखरा हुआ ध्यान"),
            T::new("Overconfidence", "अति आत्मविश्वास"),
        ],
        careers: &[
            T::new("Teacher", "शिक्षक"),
            T::new("Writer", "लेखक"),
            T::new("Advisor", "सलाहकार"),
        ],
    },
    NumberProfile {
        number: 4,
        title: T::new("The Builder", "निर्माता"),
        keywords: &[
            T::new("Discipline", "अनुशासन"),
            T::new("Practicality", "व्यावहारिकता"),
            T::new("Unconventional", "अपरंपरागत"),
        ],
        description: T::new(
            "Ruled by Rahu, number 4 works hard, thinks differently and builds lasting foundations.",
            "राहु द्वारा शासित अंक 4 परिश्रमी, अलग सोच वाला और स्थायी नींव बनाने वाला होता है।",
        ),
        strengths: &[
            T::new("Hard work", "कड़ी मेहनत"),
            T::new("Organisation", "व्यवस्था"),
            T::new("Reliability", "विश्वसनीयता"),
        ],
        challenges: &[
            T::new("Sudden setbacks", "अचानक रुकावटें"),
            T::new("Rigidity", "कठोरता"),
        ],
        careers: &[
            T::new("Engineer", "इंजीनियर"),
            T::new("Technologist", "तकनीकी विशेषज्ञ"),
            T::new("Researcher", "शोधकर्ता"),
        ],
    },
    NumberProfile {
        number: 5,
        title: T::new("The Adventurer", "साहसी"),
        keywords: &[
            T::new("Freedom", "स्वतंत्रता"),
            T::new("Intelligence", "बुद्धिमत्ता"),
            T::new("Versatility", "बहुमुखी प्रतिभा"),
        ],
        description: T::new(
            "Ruled by Mercury, number 5 is quick-witted, adaptable and drawn to travel and trade.",
            "बुध द्वारा शासित अंक 5 तेज बुद्धि, लचीला और यात्रा व व्यापार की ओर आकर्षित होता है।",
        ),
        strengths: &[
            T::new("Quick learning", "तेजी से सीखना"),
            T::new("Communication", "संचार कौशल"),
            T::new("Business sense", "व्यावसायिक समझ"),
        ],
        challenges: &[
            T::new("Restlessness", "बेचैनी"),
            T::new("Inconsistency", "अस्थिरता"),
        ],
        careers: &[
            T::new("Business", "व्यापार"),
            T::new("Marketing", "विपणन"),
            T::new("Journalism", "पत्रकारिता"),
        ],
    },
    NumberProfile {
        number: 6,
        title: T::new("The Nurturer", "पोषक"),
        keywords: &[
            T::new("Love", "प्रेम"),
            T::new("Beauty", "सौंदर्य"),
            T::new("Responsibility", "जिम्मेदारी"),
        ],
        description: T::new(
            "Ruled by Venus, number 6 values family, comfort and art, and seeks balance in relationships.",
            "शुक्र द्वारा शासित अंक 6 परिवार, सुख-सुविधा और कला को महत्व देता है तथा रिश्तों में संतुलन चाहता है।",
        ),
        strengths: &[
            T::new("Devotion to family", "परिवार के प्रति समर्पण"),
            T::new("Artistic taste", "कलात्मक रुचि"),
            T::new("Charm", "आकर्षण"),
        ],
        challenges: &[
            T::new("Over-indulgence", "अति भोग"),
            T::new("Worrying about others", "दूसरों की अधिक चिंता"),
        ],
        careers: &[
            T::new("Designer", "डिज़ाइनर"),
            T::new("Hospitality", "आतिथ्य"),
            T::new("Healthcare", "स्वास्थ्य सेवा"),
        ],
    },
    NumberProfile {
        number: 7,
        title: T::new("The Seeker", "साधक"),
        keywords: &[
            T::new("Spirituality", "आध्यात्मिकता"),
            T::new("Analysis", "विश्लेषण"),
            T::new("Introspection", "आत्मचिंतन"),
        ],
        description: T::new(
            "Ruled by Ketu, number 7 looks beneath the surface and is drawn to research and spiritual study.",
            "केतु द्वारा शासित अंक 7 गहराई में देखता है और शोध तथा आध्यात्मिक अध्ययन की ओर आकर्षित होता है।",
        ),
        strengths: &[
            T::new("Deep thinking", "गहन चिंतन"),
            T::new("Intuition", "अंतर्ज्ञान"),
            T::new("Independence of mind", "स्वतंत्र विचार"),
        ],
        challenges: &[
            T::new("Isolation", "एकाकीपन"),
            T::new("Suspicion", "संदेह"),
        ],
        careers: &[
            T::new("Scientist", "वैज्ञानिक"),
            T::new("Philosopher", "दार्शनिक"),
            T::new("Astrologer", "ज्योतिषी"),
        ],
    },
    NumberProfile {
        number: 8,
        title: T::new("The Achiever", "उपलब्धि प्राप्तकर्ता"),
        keywords: &[
            T::new("Power", "शक्ति"),
            T::new("Prosperity", "समृद्धि"),
            T::new("Karma", "कर्म"),
        ],
        description: T::new(
            "Ruled by Saturn, number 8 rewards patience and effort with authority and material success.",
            "शनि द्वारा शासित अंक 8 धैर्य और परिश्रम का फल अधिकार और भौतिक सफलता के रूप में देता है।",
        ),
        strengths: &[
            T::new("Perseverance", "दृढ़ता"),
            T::new("Management", "प्रबंधन"),
            T::new("Sense of justice", "न्याय की भावना"),
        ],
        challenges: &[
            T::new("Delays", "विलंब"),
            T::new("Workaholism", "अत्यधिक काम"),
        ],
        careers: &[
            T::new("Finance", "वित्त"),
            T::new("Law", "कानून"),
            T::new("Real estate", "रियल एस्टेट"),
        ],
    },
    NumberProfile {
        number: 9,
        title: T::new("The Warrior", "योद्धा"),
        keywords: &[
            T::new("Courage", "साहस"),
            T::new("Compassion", "करुणा"),
            T::new("Energy", "ऊर्जा"),
        ],
        description: T::new(
            "Ruled by Mars, number 9 is brave and energetic, and fights for causes larger than itself.",
            "मंगल द्वारा शासित अंक 9 साहसी और ऊर्जावान है तथा बड़े उद्देश्यों के लिए संघर्ष करता है।",
        ),
        strengths: &[
            T::new("Courage", "साहस"),
            T::new("Humanitarian spirit", "मानवतावादी भावना"),
            T::new("Determination", "दृढ़ संकल्प"),
        ],
        challenges: &[
            T::new("Anger", "क्रोध"),
            T::new("Impulsiveness", "आवेग"),
        ],
        careers: &[
            T::new("Armed forces", "सेना"),
            T::new("Surgeon", "सर्जन"),
            T::new("Sports", "खेल"),
        ],
    },
    NumberProfile {
        number: 11,
        title: T::new("The Visionary", "दूरदर्शी"),
        keywords: &[
            T::new("Inspiration", "प्रेरणा"),
            T::new("Illumination", "प्रकाश"),
            T::new("Idealism", "आदर्शवाद"),
        ],
        description: T::new(
            "Master number 11 heightens the intuition of 2 into insight that can inspire many people.",
            "मास्टर अंक 11, अंक 2 के अंतर्ज्ञान को ऐसी अंतर्दृष्टि में बदलता है जो अनेक लोगों को प्रेरित कर सके।",
        ),
        strengths: &[
            T::new("Spiritual insight", "आध्यात्मिक अंतर्दृष्टि"),
            T::new("Inspiring presence", "प्रेरक व्यक्तित्व"),
            T::new("Sensitivity", "संवेदनशीलता"),
        ],
        challenges: &[
            T::new("Nervous tension", "मानसिक तनाव"),
            T::new("Self-doubt", "आत्म-संदेह"),
        ],
        careers: &[
            T::new("Spiritual teacher", "आध्यात्मिक गुरु"),
            T::new("Healer", "उपचारक"),
            T::new("Artist", "कलाकार"),
        ],
    },
    NumberProfile {
        number: 22,
        title: T::new("The Master Builder", "महान निर्माता"),
        keywords: &[
            T::new("Vision", "दृष्टि"),
            T::new("Achievement", "उपलब्धि"),
            T::new("Service", "सेवा"),
        ],
        description: T::new(
            "Master number 22 joins the practicality of 4 with large vision, turning dreams into real structures.",
            "मास्टर अंक 22, अंक 4 की व्यावहारिकता को बड़ी दृष्टि से जोड़कर सपनों को साकार करता है।",
        ),
        strengths: &[
            T::new("Large-scale planning", "बड़े स्तर की योजना"),
            T::new("Practical idealism", "व्यावहारिक आदर्शवाद"),
            T::new("Leadership", "नेतृत्व"),
        ],
        challenges: &[
            T::new("Pressure of expectations", "अपेक्षाओं का दबाव"),
            T::new("Control issues", "नियंत्रण की प्रवृत्ति"),
        ],
        careers: &[
            T::new("Architect", "वास्तुकार"),
            T::new("Statesman", "राजनेता"),
            T::new("Founder", "संस्थापक"),
        ],
    },
    NumberProfile {
        number: 33,
        title: T::new("The Master Teacher", "महान शिक्षक"),
        keywords: &[
            T::new("Compassion", "करुणा"),
            T::new("Healing", "उपचार"),
            T::new("Guidance", "मार्गदर्शन"),
        ],
        description: T::new(
            "Master number 33 raises the care of 6 into selfless service and teaching.",
            "मास्टर अंक 33, अंक 6 की देखभाल को निस्वार्थ सेवा और शिक्षा के स्तर तक उठाता है।",
        ),
        strengths: &[
            T::new("Unconditional love", "निःस्वार्थ प्रेम"),
            T::new("Healing ability", "उपचार क्षमता"),
            T::new("Wisdom", "ज्ञान"),
        ],
        challenges: &[
            T::new("Self-sacrifice", "आत्म-बलिदान"),
            T::new("Carrying others' burdens", "दूसरों का बोझ उठाना"),
        ],
        careers: &[
            T::new("Teacher", "शिक्षक"),
            T::new("Social worker", "सामाजिक कार्यकर्ता"),
            T::new("Doctor", "चिकित्सक"),
        ],
    },
];

/// Profile for `number`; unknown numbers fall back to the profile of 1.
pub fn number_profile(number: u8) -> &'static NumberProfile {
    PROFILES
        .iter()
        .find(|p| p.number == number)
        .unwrap_or(&PROFILES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_number_has_profile() {
        for n in PROFILE_NUMBERS {
            assert_eq!(number_profile(n).number, n);
        }
    }

    #[test]
    fn unknown_falls_back_to_one() {
        assert_eq!(number_profile(0).number, 1);
        assert_eq!(number_profile(44).number, 1);
    }

    #[test]
    fn lists_populated() {
        for p in PROFILES.iter() {
            assert!(!p.keywords.is_empty());
            assert!(!p.strengths.is_empty());
            assert!(!p.challenges.is_empty());
            assert!(!p.careers.is_empty());
            assert!(!p.description.hi.is_empty());
        }
    }
}
