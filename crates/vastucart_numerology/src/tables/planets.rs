//! Planetary associations of each numerology number.
//!
//! Day, gemstone, metal and colours follow the usual Vedic assignments of
//! the ruling graha.

use chrono::Weekday;
use serde::Serialize;
use vastucart_core::{BilingualText as T, Graha};

/// Static associations of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetProfile {
    pub graha: Graha,
    pub name: T,
    #[serde(skip)]
    pub weekdays: &'static [Weekday],
    pub days: &'static [T],
    pub gemstone: T,
    pub metal: T,
    pub colors: &'static [T],
    pub deity: T,
    pub mantra: &'static str,
}

static PLANETS: [PlanetProfile; 9] = [
    PlanetProfile {
        graha: Graha::Surya,
        name: T::new("Sun", "सूर्य"),
        weekdays: &[Weekday::Sun],
        days: &[T::new("Sunday", "रविवार")],
        gemstone: T::new("Ruby", "माणिक्य"),
        metal: T::new("Gold", "सोना"),
        colors: &[
            T::new("Orange", "नारंगी"),
            T::new("Gold", "सुनहरा"),
            T::new("Red", "लाल"),
        ],
        deity: T::new("Lord Surya", "भगवान सूर्य"),
        mantra: "Om Suryaya Namah",
    },
    PlanetProfile {
        graha: Graha::Chandra,
        name: T::new("Moon", "चंद्र"),
        weekdays: &[Weekday::Mon],
        days: &[T::new("Monday", "सोमवार")],
        gemstone: T::new("Pearl", "मोती"),
        metal: T::new("Silver", "चांदी"),
        colors: &[T::new("White", "सफेद"), T::new("Cream", "क्रीम")],
        deity: T::new("Lord Shiva", "भगवान शिव"),
        mantra: "Om Chandraya Namah",
    },
    PlanetProfile {
        graha: Graha::Mangal,
        name: T::new("Mars", "मंगल"),
        weekdays: &[Weekday::Tue],
        days: &[T::new("Tuesday", "मंगलवार")],
        gemstone: T::new("Red Coral", "मूंगा"),
        metal: T::new("Copper", "तांबा"),
        colors: &[T::new("Red", "लाल"), T::new("Maroon", "मैरून")],
        deity: T::new("Lord Hanuman", "भगवान हनुमान"),
        mantra: "Om Mangalaya Namah",
    },
    PlanetProfile {
        graha: Graha::Buddh,
        name: T::new("Mercury", "बुध"),
        weekdays: &[Weekday::Wed],
        days: &[T::new("Wednesday", "बुधवार")],
        gemstone: T::new("Emerald", "पन्ना"),
        metal: T::new("Bronze", "कांसा"),
        colors: &[T::new("Green", "हरा"), T::new("Light Green", "हल्का हरा")],
        deity: T::new("Lord Ganesha", "भगवान गणेश"),
        mantra: "Om Budhaya Namah",
    },
    PlanetProfile {
        graha: Graha::Guru,
        name: T::new("Jupiter", "गुरु"),
        weekdays: &[Weekday::Thu],
        days: &[T::new("Thursday", "गुरुवार")],
        gemstone: T::new("Yellow Sapphire", "पुखराज"),
        metal: T::new("Gold", "सोना"),
        colors: &[T::new("Yellow", "पीला"), T::new("Saffron", "केसरिया")],
        deity: T::new("Lord Vishnu", "भगवान विष्णु"),
        mantra: "Om Gurave Namah",
    },
    PlanetProfile {
        graha: Graha::Shukra,
        name: T::new("Venus", "शुक्र"),
        weekdays: &[Weekday::Fri],
        days: &[T::new("Friday", "शुक्रवार")],
        gemstone: T::new("Diamond", "हीरा"),
        metal: T::new("Silver", "चांदी"),
        colors: &[
            T::new("White", "सफेद"),
            T::new("Pink", "गुलाबी"),
            T::new("Light Blue", "हल्का नीला"),
        ],
        deity: T::new("Goddess Lakshmi", "देवी लक्ष्मी"),
        mantra: "Om Shukraya Namah",
    },
    PlanetProfile {
        graha: Graha::Shani,
        name: T::new("Saturn", "शनि"),
        weekdays: &[Weekday::Sat],
        days: &[T::new("Saturday", "शनिवार")],
        gemstone: T::new("Blue Sapphire", "नीलम"),
        metal: T::new("Iron", "लोहा"),
        colors: &[T::new("Dark Blue", "गहरा नीला"), T::new("Black", "काला")],
        deity: T::new("Lord Shani", "भगवान शनि"),
        mantra: "Om Shanaye Namah",
    },
    PlanetProfile {
        graha: Graha::Rahu,
        name: T::new("Rahu", "राहु"),
        weekdays: &[Weekday::Sat, Weekday::Sun],
        days: &[T::new("Saturday", "शनिवार"), T::new("Sunday", "रविवार")],
        gemstone: T::new("Hessonite", "गोमेद"),
        metal: T::new("Lead", "सीसा"),
        colors: &[T::new("Grey", "स्लेटी"), T::new("Electric Blue", "इलेक्ट्रिक नीला")],
        deity: T::new("Goddess Durga", "देवी दुर्गा"),
        mantra: "Om Rahave Namah",
    },
    PlanetProfile {
        graha: Graha::Ketu,
        name: T::new("Ketu", "केतु"),
        weekdays: &[Weekday::Mon, Weekday::Thu],
        days: &[T::new("Monday", "सोमवार"), T::new("Thursday", "गुरुवार")],
        gemstone: T::new("Cat's Eye", "लहसुनिया"),
        metal: T::new("Mixed metals", "मिश्र धातु"),
        colors: &[T::new("Smoky Grey", "धूसर"), T::new("Light Green", "हल्का हरा")],
        deity: T::new("Lord Ganesha", "भगवान गणेश"),
        mantra: "Om Ketave Namah",
    },
];

/// Associations of a graha.
pub fn planet_profile(graha: Graha) -> &'static PlanetProfile {
    &PLANETS[graha.index() as usize]
}

/// Associations of the graha ruling a numerology number (fallback: Sun).
pub fn planet_for_number(n: u8) -> &'static PlanetProfile {
    planet_profile(Graha::from_number(n))
}

/// Bilingual weekday name.
pub const fn weekday_name(day: Weekday) -> T {
    match day {
        Weekday::Mon => T::new("Monday", "सोमवार"),
        Weekday::Tue => T::new("Tuesday", "मंगलवार"),
        Weekday::Wed => T::new("Wednesday", "बुधवार"),
        Weekday::Thu => T::new("Thursday", "गुरुवार"),
        Weekday::Fri => T::new("Friday", "शुक्रवार"),
        Weekday::Sat => T::new("Saturday", "शनिवार"),
        Weekday::Sun => T::new("Sunday", "रविवार"),
    }
}

/// Graha lord of a weekday.
pub const fn weekday_lord(day: Weekday) -> Graha {
    match day {
        Weekday::Sun => Graha::Surya,
        Weekday::Mon => Graha::Chandra,
        Weekday::Tue => Graha::Mangal,
        Weekday::Wed => Graha::Buddh,
        Weekday::Thu => Graha::Guru,
        Weekday::Fri => Graha::Shukra,
        Weekday::Sat => Graha::Shani,
    }
}

/// Weekdays starting from Monday.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[cfg(test)]
mod tests {
    use super::*;
    use vastucart_core::ALL_GRAHAS;

    #[test]
    fn table_order_matches_graha_index() {
        for g in ALL_GRAHAS {
            assert_eq!(planet_profile(g).graha, g);
        }
    }

    #[test]
    fn every_number_has_planet() {
        for n in 1..=9u8 {
            assert_eq!(planet_for_number(n).graha.number(), n);
        }
        assert_eq!(planet_for_number(0).graha, Graha::Surya);
    }

    #[test]
    fn days_agree_with_weekdays() {
        for p in PLANETS.iter() {
            assert_eq!(p.days.len(), p.weekdays.len());
            for (label, day) in p.days.iter().zip(p.weekdays) {
                assert_eq!(*label, weekday_name(*day));
            }
        }
    }

    #[test]
    fn weekday_lords_are_sapta_grahas() {
        for d in WEEK {
            let lord = weekday_lord(d);
            assert!(!matches!(lord, Graha::Rahu | Graha::Ketu));
        }
    }
}
