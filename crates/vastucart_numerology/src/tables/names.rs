//! Baby-name catalog.
//!
//! Rows are static; the Pythagorean and Chaldean numbers of each name are
//! computed once, on first access, and cached on the entry.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;
use vastucart_core::{BilingualText as T, LetterSystem, name_number};

use crate::error::NumerologyError;

/// Gender a name is given to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
    Unisex,
}

impl Gender {
    /// True if a catalog name of this gender suits a child of `wanted`.
    pub fn suits(self, wanted: Gender) -> bool {
        self == wanted || self == Gender::Unisex || wanted == Gender::Unisex
    }

    pub const fn label(self) -> T {
        match self {
            Self::Boy => T::new("Boy", "लड़का"),
            Self::Girl => T::new("Girl", "लड़की"),
            Self::Unisex => T::new("Unisex", "उभयलिंगी"),
        }
    }
}

impl FromStr for Gender {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boy" | "male" | "m" => Ok(Self::Boy),
            "girl" | "female" | "f" => Ok(Self::Girl),
            "unisex" | "any" | "u" => Ok(Self::Unisex),
            _ => Err(NumerologyError::UnknownGender(s.to_string())),
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label().en)
    }
}

/// Linguistic origin of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameOrigin {
    Sanskrit,
    Hindi,
    Arabic,
    Persian,
    Punjabi,
    Modern,
}

impl NameOrigin {
    pub const fn label(self) -> T {
        match self {
            Self::Sanskrit => T::new("Sanskrit", "संस्कृत"),
            Self::Hindi => T::new("Hindi", "हिंदी"),
            Self::Arabic => T::new("Arabic", "अरबी"),
            Self::Persian => T::new("Persian", "फ़ारसी"),
            Self::Punjabi => T::new("Punjabi", "पंजाबी"),
            Self::Modern => T::new("Modern", "आधुनिक"),
        }
    }
}

/// One catalog row with its derived numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameEntry {
    pub name: &'static str,
    pub meaning: T,
    pub gender: Gender,
    pub origin: NameOrigin,
    pub pythagorean_number: u8,
    pub chaldean_number: u8,
}

impl NameEntry {
    /// Cached number under `system`.
    pub fn number(&self, system: LetterSystem) -> u8 {
        match system {
            LetterSystem::Pythagorean => self.pythagorean_number,
            LetterSystem::Chaldean => self.chaldean_number,
        }
    }

    /// Uppercase first letter.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('A')
    }
}

use Gender::{Boy, Girl, Unisex};
use NameOrigin::{Arabic, Hindi, Modern, Persian, Punjabi, Sanskrit};

type Row = (&'static str, &'static str, &'static str, Gender, NameOrigin);

const ROWS: &[Row] = &[
    // Boys
    ("Aarav", "Peaceful, calm", "शांत, सौम्य", Boy, Sanskrit),
    ("Aditya", "The Sun", "सूर्य", Boy, Sanskrit),
    ("Arjun", "Bright, shining", "उज्ज्वल, चमकदार", Boy, Sanskrit),
    ("Atharv", "Lord Ganesha, knower of the Vedas", "भगवान गणेश, वेदों के ज्ञाता", Boy, Sanskrit),
    ("Ayaan", "Gift of God", "ईश्वर का उपहार", Boy, Arabic),
    ("Bhavya", "Grand, magnificent", "भव्य, शानदार", Boy, Sanskrit),
    ("Chirag", "Lamp, light", "दीपक, प्रकाश", Boy, Hindi),
    ("Daksh", "Capable, skilled", "सक्षम, कुशल", Boy, Sanskrit),
    ("Dhruv", "Pole star, steadfast", "ध्रुव तारा, अटल", Boy, Sanskrit),
    ("Eshan", "Lord Shiva", "भगवान शिव", Boy, Sanskrit),
    ("Farhan", "Happy, joyful", "प्रसन्न, आनंदित", Boy, Arabic),
    ("Gautam", "Enlightened one", "प्रबुद्ध", Boy, Sanskrit),
    ("Harsh", "Joy, delight", "हर्ष, आनंद", Boy, Sanskrit),
    ("Ishaan", "Guardian of the north-east", "ईशान दिशा के स्वामी", Boy, Sanskrit),
    ("Jay", "Victory", "विजय", Boy, Sanskrit),
    ("Kabir", "Great, the saint-poet", "महान, संत कवि", Boy, Arabic),
    ("Krishna", "Dark, the divine cowherd", "श्याम, भगवान कृष्ण", Boy, Sanskrit),
    ("Laksh", "Aim, target", "लक्ष्य", Boy, Sanskrit),
    ("Manav", "Human, kind-hearted", "मानव, दयालु", Boy, Sanskrit),
    ("Nikhil", "Complete, whole", "संपूर्ण", Boy, Sanskrit),
    ("Om", "The sacred syllable", "पवित्र ध्वनि ॐ", Boy, Sanskrit),
    ("Pranav", "Sacred syllable Om", "ओंकार", Boy, Sanskrit),
    ("Rehan", "Sweet basil, fragrant", "सुगंधित तुलसी", Boy, Persian),
    ("Reyansh", "Ray of light", "प्रकाश की किरण", Boy, Modern),
    ("Rohan", "Ascending", "ऊपर चढ़ने वाला", Boy, Sanskrit),
    ("Rudra", "Lord Shiva", "भगवान शिव", Boy, Sanskrit),
    ("Sahil", "Shore, guide", "किनारा, मार्गदर्शक", Boy, Arabic),
    ("Shaurya", "Bravery", "शौर्य, वीरता", Boy, Sanskrit),
    ("Tanish", "Ambition", "महत्वाकांक्षा", Boy, Modern),
    ("Tejas", "Brilliance", "तेज, प्रतिभा", Boy, Sanskrit),
    ("Uday", "Rising, dawn", "उदय, भोर", Boy, Sanskrit),
    ("Vihaan", "Dawn, morning", "सुबह, प्रभात", Boy, Sanskrit),
    ("Vivaan", "Full of life", "जीवन से भरपूर", Boy, Sanskrit),
    ("Yash", "Fame, glory", "यश, कीर्ति", Boy, Sanskrit),
    ("Zayan", "Beautiful, graceful", "सुंदर, सुशोभित", Boy, Arabic),
    ("Gurpreet", "Love of the Guru", "गुरु का प्रेम", Boy, Punjabi),
    // Girls
    ("Aadhya", "First power, Goddess Durga", "आदि शक्ति, देवी दुर्गा", Girl, Sanskrit),
    ("Ananya", "Unique", "अद्वितीय", Girl, Sanskrit),
    ("Anika", "Grace, brilliance", "कृपा, तेज", Girl, Sanskrit),
    ("Avni", "Earth", "पृथ्वी", Girl, Sanskrit),
    ("Bhavna", "Feeling, emotion", "भावना", Girl, Sanskrit),
    ("Charvi", "Beautiful", "सुंदर", Girl, Sanskrit),
    ("Diya", "Lamp", "दीया", Girl, Hindi),
    ("Esha", "Desire, purity", "इच्छा, पवित्रता", Girl, Sanskrit),
    ("Gauri", "Goddess Parvati", "देवी पार्वती", Girl, Sanskrit),
    ("Hansika", "Swan", "हंसिनी", Girl, Sanskrit),
    ("Harleen", "Absorbed in God", "ईश्वर में लीन", Girl, Punjabi),
    ("Ishita", "Mastery, wealth", "प्रभुत्व, समृद्धि", Girl, Sanskrit),
    ("Jiya", "Heart, life", "हृदय, जीवन", Girl, Hindi),
    ("Kavya", "Poetry", "काव्य, कविता", Girl, Sanskrit),
    ("Kiara", "Bright, clear", "उज्ज्वल, स्पष्ट", Girl, Modern),
    ("Lavanya", "Grace, beauty", "लावण्य, सौंदर्य", Girl, Sanskrit),
    ("Meera", "Devotee of Krishna", "कृष्ण भक्त", Girl, Sanskrit),
    ("Myra", "Beloved", "प्रिय", Girl, Modern),
    ("Navya", "New, young", "नवीन, युवा", Girl, Sanskrit),
    ("Nisha", "Night", "रात्रि", Girl, Sanskrit),
    ("Pari", "Fairy", "परी", Girl, Persian),
    ("Pooja", "Worship", "पूजा, आराधना", Girl, Sanskrit),
    ("Riya", "Singer, graceful", "गायिका, सुशील", Girl, Sanskrit),
    ("Saanvi", "Goddess Lakshmi", "देवी लक्ष्मी", Girl, Sanskrit),
    ("Sara", "Princess, pure", "राजकुमारी, पवित्र", Girl, Arabic),
    ("Simran", "Remembrance of God", "ईश्वर का स्मरण", Girl, Punjabi),
    ("Tara", "Star", "तारा", Girl, Sanskrit),
    ("Trisha", "Thirst for knowledge", "ज्ञान की प्यास", Girl, Sanskrit),
    ("Vanya", "Gracious gift of God", "ईश्वर का कृपापूर्ण उपहार", Girl, Sanskrit),
    ("Zara", "Princess, blooming", "राजकुमारी, खिलती हुई", Girl, Arabic),
    ("Urvi", "Earth", "पृथ्वी", Girl, Sanskrit),
    ("Qirat", "Recitation", "पाठ, वाचन", Girl, Arabic),
    // Unisex
    ("Arya", "Noble", "श्रेष्ठ, आर्य", Unisex, Sanskrit),
    ("Ekam", "One, the Creator", "एक, सृष्टिकर्ता", Unisex, Punjabi),
    ("Jyoti", "Light, flame", "ज्योति, प्रकाश", Unisex, Sanskrit),
    ("Kiran", "Ray of light", "किरण", Unisex, Sanskrit),
    ("Noor", "Divine light", "दिव्य प्रकाश", Unisex, Arabic),
    ("Shubh", "Auspicious", "शुभ, मंगलकारी", Unisex, Sanskrit),
];

static CATALOG: Lazy<Vec<NameEntry>> = Lazy::new(|| {
    let entries: Vec<NameEntry> = ROWS
        .iter()
        .map(|&(name, en, hi, gender, origin)| NameEntry {
            name,
            meaning: T::new(en, hi),
            gender,
            origin,
            pythagorean_number: name_number(name, LetterSystem::Pythagorean),
            chaldean_number: name_number(name, LetterSystem::Chaldean),
        })
        .collect();
    log::debug!("name catalog built with {} entries", entries.len());
    entries
});

/// The full name catalog, in insertion order.
pub fn name_catalog() -> &'static [NameEntry] {
    &CATALOG
}

/// Look up a catalog entry by name, case-insensitive.
pub fn find_name(name: &str) -> Option<&'static NameEntry> {
    let wanted = name.trim();
    name_catalog()
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_numbers_match_computation() {
        for e in name_catalog() {
            assert_eq!(
                e.pythagorean_number,
                name_number(e.name, LetterSystem::Pythagorean),
                "{}",
                e.name
            );
            assert_eq!(
                e.chaldean_number,
                name_number(e.name, LetterSystem::Chaldean),
                "{}",
                e.name
            );
        }
    }

    #[test]
    fn names_unique() {
        let cat = name_catalog();
        for (i, a) in cat.iter().enumerate() {
            for b in &cat[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name), "duplicate {}", a.name);
            }
        }
    }

    #[test]
    fn every_gender_present() {
        for g in [Gender::Boy, Gender::Girl, Gender::Unisex] {
            assert!(name_catalog().iter().any(|e| e.gender == g));
        }
    }

    #[test]
    fn aarav_numbers() {
        // A1 A1 R9 A1 V4 = 16 → 7
        let e = find_name("aarav").unwrap();
        assert_eq!(e.pythagorean_number, 7);
        assert_eq!(e.initial(), 'A');
    }

    #[test]
    fn gender_suits() {
        assert!(Gender::Boy.suits(Gender::Boy));
        assert!(Gender::Unisex.suits(Gender::Girl));
        assert!(!Gender::Girl.suits(Gender::Boy));
        assert!(Gender::Girl.suits(Gender::Unisex));
    }

    #[test]
    fn gender_parse() {
        assert_eq!("Girl".parse::<Gender>(), Ok(Gender::Girl));
        assert!(matches!(
            "other".parse::<Gender>(),
            Err(NumerologyError::UnknownGender(_))
        ));
    }
}
