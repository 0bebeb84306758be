//! Colour catalog with the numbers and graha each colour resonates with.

use serde::Serialize;
use vastucart_core::{BilingualText as T, Graha};

/// One colour candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    pub name: T,
    pub hex: &'static str,
    pub numbers: &'static [u8],
    pub graha: Graha,
    pub effect: T,
}

pub static COLORS: [ColorEntry; 19] = [
    ColorEntry {
        name: T::new("Red", "लाल"),
        hex: "#D32F2F",
        numbers: &[9, 1],
        graha: Graha::Mangal,
        effect: T::new("Boosts courage and drive", "साहस और उत्साह बढ़ाता है"),
    },
    ColorEntry {
        name: T::new("Orange", "नारंगी"),
        hex: "#F57C00",
        numbers: &[1, 9],
        graha: Graha::Surya,
        effect: T::new("Brings confidence and vitality", "आत्मविश्वास और जीवन शक्ति लाता है"),
    },
    ColorEntry {
        name: T::new("Gold", "सुनहरा"),
        hex: "#FFC107",
        numbers: &[1, 3],
        graha: Graha::Surya,
        effect: T::new("Attracts recognition and authority", "मान-सम्मान और अधिकार आकर्षित करता है"),
    },
    ColorEntry {
        name: T::new("Yellow", "पीला"),
        hex: "#FBC02D",
        numbers: &[3, 1],
        graha: Graha::Guru,
        effect: T::new("Supports wisdom and learning", "ज्ञान और शिक्षा में सहायक"),
    },
    ColorEntry {
        name: T::new("Saffron", "केसरिया"),
        hex: "#FF9933",
        numbers: &[3, 9],
        graha: Graha::Guru,
        effect: T::new("Invites spiritual growth", "आध्यात्मिक उन्नति का आह्वान करता है"),
    },
    ColorEntry {
        name: T::new("White", "सफेद"),
        hex: "#FFFFFF",
        numbers: &[2, 6],
        graha: Graha::Chandra,
        effect: T::new("Calms the mind", "मन को शांत करता है"),
    },
    ColorEntry {
        name: T::new("Cream", "क्रीम"),
        hex: "#FFFDD0",
        numbers: &[2, 6],
        graha: Graha::Chandra,
        effect: T::new("Softens emotions", "भावनाओं को कोमल बनाता है"),
    },
    ColorEntry {
        name: T::new("Silver", "चांदी जैसा"),
        hex: "#C0C0C0",
        numbers: &[2, 7],
        graha: Graha::Chandra,
        effect: T::new("Enhances intuition", "अंतर्ज्ञान बढ़ाता है"),
    },
    ColorEntry {
        name: T::new("Green", "हरा"),
        hex: "#388E3C",
        numbers: &[5],
        graha: Graha::Buddh,
        effect: T::new("Sharpens intellect and trade", "बुद्धि और व्यापार को तेज करता है"),
    },
    ColorEntry {
        name: T::new("Light Green", "हल्का हरा"),
        hex: "#8BC34A",
        numbers: &[5, 7],
        graha: Graha::Buddh,
        effect: T::new("Encourages fresh starts", "नई शुरुआत को प्रोत्साहित करता है"),
    },
    ColorEntry {
        name: T::new("Pink", "गुलाबी"),
        hex: "#F48FB1",
        numbers: &[6, 2],
        graha: Graha::Shukra,
        effect: T::new("Draws love and affection", "प्रेम और स्नेह आकर्षित करता है"),
    },
    ColorEntry {
        name: T::new("Light Blue", "हल्का नीला"),
        hex: "#81D4FA",
        numbers: &[6, 5],
        graha: Graha::Shukra,
        effect: T::new("Brings peace and harmony", "शांति और सामंजस्य लाता है"),
    },
    ColorEntry {
        name: T::new("Dark Blue", "गहरा नीला"),
        hex: "#1A237E",
        numbers: &[8, 4],
        graha: Graha::Shani,
        effect: T::new("Builds discipline and focus", "अनुशासन और एकाग्रता बढ़ाता है"),
    },
    ColorEntry {
        name: T::new("Black", "काला"),
        hex: "#000000",
        numbers: &[8],
        graha: Graha::Shani,
        effect: T::new("Gives protection and depth", "सुरक्षा और गंभीरता देता है"),
    },
    ColorEntry {
        name: T::new("Grey", "स्लेटी"),
        hex: "#9E9E9E",
        numbers: &[4, 8],
        graha: Graha::Rahu,
        effect: T::new("Steadies sudden changes", "अचानक बदलावों को स्थिर करता है"),
    },
    ColorEntry {
        name: T::new("Electric Blue", "इलेक्ट्रिक नीला"),
        hex: "#2979FF",
        numbers: &[4, 5],
        graha: Graha::Rahu,
        effect: T::new("Sparks innovation", "नवाचार को प्रेरित करता है"),
    },
    ColorEntry {
        name: T::new("Smoky Grey", "धूसर"),
        hex: "#757575",
        numbers: &[7],
        graha: Graha::Ketu,
        effect: T::new("Aids detachment and meditation", "वैराग्य और ध्यान में सहायक"),
    },
    ColorEntry {
        name: T::new("Violet", "बैंगनी"),
        hex: "#7B1FA2",
        numbers: &[7, 3],
        graha: Graha::Ketu,
        effect: T::new("Deepens spiritual insight", "आध्यात्मिक अंतर्दृष्टि गहरी करता है"),
    },
    ColorEntry {
        name: T::new("Maroon", "मैरून"),
        hex: "#800000",
        numbers: &[9],
        graha: Graha::Mangal,
        effect: T::new("Grounds fiery energy", "उग्र ऊर्जा को संतुलित करता है"),
    },
];

/// First catalog colour ruled by `graha` (fallback: first entry).
pub fn color_for_graha(graha: Graha) -> &'static ColorEntry {
    COLORS.iter().find(|c| c.graha == graha).unwrap_or(&COLORS[0])
}
