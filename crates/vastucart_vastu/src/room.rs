//! Room types and their direction-suitability table.
//!
//! Each room splits the nine zones into four buckets. The buckets of one
//! room are disjoint and together cover every [`Direction`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use vastucart_core::BilingualText as T;

use crate::direction::Direction::{self, *};
use crate::error::VastuError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    MasterBedroom,
    Bedroom,
    ChildrenRoom,
    GuestRoom,
    Kitchen,
    LivingRoom,
    DiningRoom,
    PoojaRoom,
    Bathroom,
    StudyRoom,
    StoreRoom,
    MainEntrance,
}

pub const ALL_ROOMS: [RoomType; 12] = [
    RoomType::MasterBedroom,
    RoomType::Bedroom,
    RoomType::ChildrenRoom,
    RoomType::GuestRoom,
    RoomType::Kitchen,
    RoomType::LivingRoom,
    RoomType::DiningRoom,
    RoomType::PoojaRoom,
    RoomType::Bathroom,
    RoomType::StudyRoom,
    RoomType::StoreRoom,
    RoomType::MainEntrance,
];

impl RoomType {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::MasterBedroom => "master-bedroom",
            Self::Bedroom => "bedroom",
            Self::ChildrenRoom => "children-room",
            Self::GuestRoom => "guest-room",
            Self::Kitchen => "kitchen",
            Self::LivingRoom => "living-room",
            Self::DiningRoom => "dining-room",
            Self::PoojaRoom => "pooja-room",
            Self::Bathroom => "bathroom",
            Self::StudyRoom => "study-room",
            Self::StoreRoom => "store-room",
            Self::MainEntrance => "main-entrance",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::MasterBedroom => 0,
            Self::Bedroom => 1,
            Self::ChildrenRoom => 2,
            Self::GuestRoom => 3,
            Self::Kitchen => 4,
            Self::LivingRoom => 5,
            Self::DiningRoom => 6,
            Self::PoojaRoom => 7,
            Self::Bathroom => 8,
            Self::StudyRoom => 9,
            Self::StoreRoom => 10,
            Self::MainEntrance => 11,
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::MasterBedroom => T::new("Master Bedroom", "मुख्य शयनकक्ष"),
            Self::Bedroom => T::new("Bedroom", "शयनकक्ष"),
            Self::ChildrenRoom => T::new("Children's Room", "बच्चों का कमरा"),
            Self::GuestRoom => T::new("Guest Room", "अतिथि कक्ष"),
            Self::Kitchen => T::new("Kitchen", "रसोई"),
            Self::LivingRoom => T::new("Living Room", "बैठक"),
            Self::DiningRoom => T::new("Dining Room", "भोजन कक्ष"),
            Self::PoojaRoom => T::new("Pooja Room", "पूजा घर"),
            Self::Bathroom => T::new("Bathroom", "स्नानघर"),
            Self::StudyRoom => T::new("Study Room", "अध्ययन कक्ष"),
            Self::StoreRoom => T::new("Store Room", "भंडार कक्ष"),
            Self::MainEntrance => T::new("Main Entrance", "मुख्य द्वार"),
        }
    }

    /// Static vastu entry of this room.
    pub fn vastu(self) -> &'static RoomVastu {
        &ROOMS[self.index() as usize]
    }
}

impl Display for RoomType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for RoomType {
    type Err = VastuError;

    /// Accepts slugs and their snake/space/run-together variants
    /// (`living-room`, `living_room`, `livingroom`), plus a few aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '\''))
            .collect::<String>()
            .to_ascii_lowercase();
        let room = match key.as_str() {
            "masterbedroom" => Self::MasterBedroom,
            "bedroom" => Self::Bedroom,
            "childrenroom" | "childrensroom" | "kidsroom" => Self::ChildrenRoom,
            "guestroom" => Self::GuestRoom,
            "kitchen" => Self::Kitchen,
            "livingroom" | "drawingroom" | "hall" => Self::LivingRoom,
            "diningroom" | "dining" => Self::DiningRoom,
            "poojaroom" | "pujaroom" | "pooja" | "mandir" => Self::PoojaRoom,
            "bathroom" | "toilet" => Self::Bathroom,
            "studyroom" | "study" => Self::StudyRoom,
            "storeroom" | "store" => Self::StoreRoom,
            "mainentrance" | "entrance" | "maindoor" => Self::MainEntrance,
            _ => return Err(VastuError::UnknownRoom(s.to_string())),
        };
        Ok(room)
    }
}

/// Suitability bucket of a room in a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    Avoid,
    Acceptable,
    Good,
    Ideal,
}

impl Suitability {
    pub const fn score(self) -> u8 {
        match self {
            Self::Ideal => 95,
            Self::Good => 75,
            Self::Acceptable => 55,
            Self::Avoid => 30,
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::Ideal => T::new("Ideal", "आदर्श"),
            Self::Good => T::new("Good", "अच्छा"),
            Self::Acceptable => T::new("Acceptable", "स्वीकार्य"),
            Self::Avoid => T::new("Avoid", "वर्जित"),
        }
    }

    /// Whether remedies should be shown.
    pub const fn needs_remedy(self) -> bool {
        matches!(self, Self::Acceptable | Self::Avoid)
    }
}

/// Direction buckets, remedies and tips of one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomVastu {
    pub room: RoomType,
    pub ideal: &'static [Direction],
    pub good: &'static [Direction],
    pub acceptable: &'static [Direction],
    pub avoid: &'static [Direction],
    pub remedies: &'static [T],
    pub tips: &'static [T],
}

impl RoomVastu {
    /// Bucket of `direction`. The table is total; [`Suitability::Avoid`]
    /// is only returned by fallthrough for a malformed row.
    pub fn suitability(&self, direction: Direction) -> Suitability {
        if self.ideal.contains(&direction) {
            Suitability::Ideal
        } else if self.good.contains(&direction) {
            Suitability::Good
        } else if self.acceptable.contains(&direction) {
            Suitability::Acceptable
        } else {
            Suitability::Avoid
        }
    }
}

static ROOMS: [RoomVastu; 12] = [
    RoomVastu {
        room: RoomType::MasterBedroom,
        ideal: &[SouthWest],
        good: &[South, West],
        acceptable: &[North, NorthWest, East],
        avoid: &[NorthEast, SouthEast, Center],
        remedies: &[
            T::new("Sleep with your head towards the south", "सिर दक्षिण दिशा की ओर करके सोएं"),
            T::new("Use earthy tones and heavy furniture along the south-west wall", "दक्षिण-पश्चिम दीवार के साथ मिट्टी के रंग और भारी फर्नीचर रखें"),
            T::new("Place a pair of rose quartz or brass ducks for harmony", "सामंजस्य के लिए रोज़ क्वार्ट्ज़ या पीतल के हंसों का जोड़ा रखें"),
        ],
        tips: &[
            T::new("Keep the bed away from the room corners", "पलंग को कमरे के कोनों से दूर रखें"),
            T::new("Avoid mirrors facing the bed", "पलंग के सामने दर्पण न रखें"),
        ],
    },
    RoomVastu {
        room: RoomType::Bedroom,
        ideal: &[South, West],
        good: &[SouthWest, NorthWest],
        acceptable: &[North, East],
        avoid: &[NorthEast, SouthEast, Center],
        remedies: &[
            T::new("Place the bed so you sleep with your head to the south or east", "पलंग ऐसे रखें कि सिर दक्षिण या पूर्व की ओर हो"),
            T::new("Use soft, light colours on the walls", "दीवारों पर हल्के, कोमल रंगों का प्रयोग करें"),
        ],
        tips: &[
            T::new("Keep electronic devices away from the bed", "इलेक्ट्रॉनिक उपकरण पलंग से दूर रखें"),
            T::new("Let morning light in from the east", "पूर्व से सुबह की रोशनी आने दें"),
        ],
    },
    RoomVastu {
        room: RoomType::ChildrenRoom,
        ideal: &[West, NorthWest],
        good: &[East, North],
        acceptable: &[South, SouthWest],
        avoid: &[NorthEast, SouthEast, Center],
        remedies: &[
            T::new("Place the study desk so the child faces east or north", "अध्ययन मेज़ ऐसी रखें कि बच्चे का मुख पूर्व या उत्तर की ओर हो"),
            T::new("Hang a crystal near the window to spread light", "प्रकाश फैलाने के लिए खिड़की के पास क्रिस्टल लटकाएं"),
        ],
        tips: &[
            T::new("Use green and light blue for calm focus", "शांत एकाग्रता के लिए हरा और हल्का नीला रंग उपयोग करें"),
            T::new("Keep toys stored away from the north-east", "खिलौने उत्तर-पूर्व से दूर रखें"),
        ],
    },
    RoomVastu {
        room: RoomType::GuestRoom,
        ideal: &[NorthWest],
        good: &[West, North],
        acceptable: &[East, South],
        avoid: &[NorthEast, SouthEast, SouthWest, Center],
        remedies: &[
            T::new("Keep the room airy with a window towards the north-west", "उत्तर-पश्चिम की ओर खिड़की रखकर कमरे को हवादार रखें"),
            T::new("Place a small bowl of sea salt in a corner", "एक कोने में समुद्री नमक की छोटी कटोरी रखें"),
        ],
        tips: &[T::new("Keep the guest room simple and uncluttered", "अतिथि कक्ष को सरल और अव्यवस्था रहित रखें")],
    },
    RoomVastu {
        room: RoomType::Kitchen,
        ideal: &[SouthEast],
        good: &[NorthWest],
        acceptable: &[South, East, West],
        avoid: &[NorthEast, North, SouthWest, Center],
        remedies: &[
            T::new("Place the cooking stove in the south-east corner of the kitchen", "चूल्हा रसोई के दक्षिण-पूर्व कोने में रखें"),
            T::new("Cook facing east", "पूर्व की ओर मुख करके भोजन पकाएं"),
            T::new("Keep water and fire apart: sink and stove should not be side by side", "जल और अग्नि को अलग रखें: सिंक और चूल्हा साथ-साथ न हों"),
        ],
        tips: &[
            T::new("Use warm colours such as orange, red or yellow", "नारंगी, लाल या पीले जैसे गर्म रंगों का प्रयोग करें"),
            T::new("Keep the kitchen clean and well ventilated", "रसोई को साफ और हवादार रखें"),
        ],
    },
    RoomVastu {
        room: RoomType::LivingRoom,
        ideal: &[North, NorthEast, East],
        good: &[NorthWest, West],
        acceptable: &[South, Center],
        avoid: &[SouthWest, SouthEast],
        remedies: &[
            T::new("Place heavy sofas along the south and west walls", "भारी सोफे दक्षिण और पश्चिम दीवारों के साथ रखें"),
            T::new("Keep the north-east corner light and open", "उत्तर-पूर्व कोने को हल्का और खुला रखें"),
        ],
        tips: &[
            T::new("Family photos belong on the south-west wall", "पारिवारिक तस्वीरें दक्षिण-पश्चिम दीवार पर लगाएं"),
            T::new("Keep the room well lit in the evening", "शाम को कमरे में अच्छी रोशनी रखें"),
        ],
    },
    RoomVastu {
        room: RoomType::DiningRoom,
        ideal: &[West],
        good: &[East, North],
        acceptable: &[NorthWest, South, SouthEast],
        avoid: &[NorthEast, SouthWest, Center],
        remedies: &[
            T::new("Sit facing east or north while eating", "भोजन करते समय पूर्व या उत्तर की ओर मुख करके बैठें"),
            T::new("Use a square or rectangular dining table", "वर्गाकार या आयताकार भोजन मेज़ का प्रयोग करें"),
        ],
        tips: &[T::new("Hang a painting of fruits or a harvest scene", "फलों या फसल के दृश्य वाली चित्रकारी लगाएं")],
    },
    RoomVastu {
        room: RoomType::PoojaRoom,
        ideal: &[NorthEast],
        good: &[East, North],
        acceptable: &[West, Center],
        avoid: &[South, SouthWest, SouthEast, NorthWest],
        remedies: &[
            T::new("Place idols so you face east or north while praying", "मूर्तियां ऐसे रखें कि प्रार्थना करते समय मुख पूर्व या उत्तर की ओर हो"),
            T::new("Light a ghee lamp every morning and evening", "प्रतिदिन सुबह-शाम घी का दीपक जलाएं"),
        ],
        tips: &[
            T::new("Never place the pooja space under a staircase or next to a toilet", "पूजा स्थान सीढ़ियों के नीचे या शौचालय के पास न बनाएं"),
            T::new("Use white, cream or light yellow", "सफेद, क्रीम या हल्के पीले रंग का प्रयोग करें"),
        ],
    },
    RoomVastu {
        room: RoomType::Bathroom,
        ideal: &[NorthWest],
        good: &[West, South],
        acceptable: &[East, SouthEast, North],
        avoid: &[NorthEast, SouthWest, Center],
        remedies: &[
            T::new("Keep the bathroom door closed at all times", "स्नानघर का दरवाज़ा हमेशा बंद रखें"),
            T::new("Place a bowl of sea salt inside and change it weekly", "अंदर समुद्री नमक की कटोरी रखें और हर सप्ताह बदलें"),
            T::new("Fit an exhaust fan to keep air moving", "हवा चलती रहे इसके लिए एग्ज़ॉस्ट फैन लगाएं"),
        ],
        tips: &[T::new("Fix leaking taps promptly", "टपकते नलों को तुरंत ठीक करें")],
    },
    RoomVastu {
        room: RoomType::StudyRoom,
        ideal: &[East, NorthEast],
        good: &[North, West],
        acceptable: &[NorthWest, South],
        avoid: &[SouthWest, SouthEast, Center],
        remedies: &[
            T::new("Sit facing east or north while studying", "पढ़ते समय पूर्व या उत्तर की ओर मुख करके बैठें"),
            T::new("Place a picture of Goddess Saraswati on the east wall", "पूर्व दीवार पर देवी सरस्वती का चित्र लगाएं"),
        ],
        tips: &[
            T::new("Keep books in the south or west of the room", "किताबें कमरे के दक्षिण या पश्चिम में रखें"),
            T::new("Avoid a beam over the desk", "मेज़ के ऊपर बीम न हो"),
        ],
    },
    RoomVastu {
        room: RoomType::StoreRoom,
        ideal: &[SouthWest],
        good: &[South, West],
        acceptable: &[NorthWest, SouthEast],
        avoid: &[NorthEast, North, East, Center],
        remedies: &[
            T::new("Store heavy items against the south and west walls", "भारी सामान दक्षिण और पश्चिम दीवारों के साथ रखें"),
            T::new("Keep the store room dry and clean out unused items regularly", "भंडार कक्ष सूखा रखें और अनुपयोगी सामान नियमित हटाएं"),
        ],
        tips: &[T::new("Keep grain containers full, never empty", "अनाज के बर्तन भरे रखें, कभी खाली नहीं")],
    },
    RoomVastu {
        room: RoomType::MainEntrance,
        ideal: &[North, NorthEast, East],
        good: &[NorthWest, West],
        acceptable: &[SouthEast, South],
        avoid: &[SouthWest, Center],
        remedies: &[
            T::new("Fix a brass or copper swastika above the door", "दरवाज़े के ऊपर पीतल या तांबे का स्वस्तिक लगाएं"),
            T::new("Place a pair of Ganesha idols inside and outside the door", "दरवाज़े के अंदर और बाहर गणेश प्रतिमाओं का जोड़ा रखें"),
            T::new("Use a lead or copper strip under the threshold", "दहलीज़ के नीचे सीसे या तांबे की पट्टी लगाएं"),
        ],
        tips: &[
            T::new("Keep the entrance well lit and free of shoes", "प्रवेश द्वार को रोशन और जूतों से मुक्त रखें"),
            T::new("The main door should open inwards and clockwise", "मुख्य द्वार अंदर की ओर और दक्षिणावर्त खुलना चाहिए"),
        ],
    },
];

/// Extra remedies for combinations that need more than the room's defaults.
pub fn special_remedies(room: RoomType, direction: Direction) -> &'static [T] {
    match (room, direction) {
        (RoomType::Kitchen, NorthEast) => &KITCHEN_NORTH_EAST,
        (RoomType::Bathroom, NorthEast) => &BATHROOM_NORTH_EAST,
        _ => &[],
    }
}

static KITCHEN_NORTH_EAST: [T; 2] = [
    T::new(
        "Kitchen in the north-east: shift the stove to the south-east corner of the kitchen and paint the walls yellow",
        "उत्तर-पूर्व में रसोई: चूल्हे को रसोई के दक्षिण-पूर्व कोने में ले जाएं और दीवारों को पीला रंग दें",
    ),
    T::new(
        "Place a copper pyramid or Agni yantra near the stove",
        "चूल्हे के पास तांबे का पिरामिड या अग्नि यंत्र रखें",
    ),
];

static BATHROOM_NORTH_EAST: [T; 2] = [
    T::new(
        "Bathroom in the north-east: keep it spotless, use only light colours and place a bowl of rock salt",
        "उत्तर-पूर्व में स्नानघर: इसे पूरी तरह स्वच्छ रखें, केवल हल्के रंग उपयोग करें और सेंधा नमक की कटोरी रखें",
    ),
    T::new(
        "Fix a Vastu pyramid on the outer wall facing the north-east",
        "उत्तर-पूर्व की ओर बाहरी दीवार पर वास्तु पिरामिड लगाएं",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::ALL_DIRECTIONS;

    #[test]
    fn table_order_matches_index() {
        for r in ALL_ROOMS {
            assert_eq!(r.vastu().room, r);
        }
    }

    #[test]
    fn buckets_partition_directions() {
        for r in ALL_ROOMS {
            let v = r.vastu();
            for d in ALL_DIRECTIONS {
                let hits = [v.ideal, v.good, v.acceptable, v.avoid]
                    .iter()
                    .filter(|b| b.contains(&d))
                    .count();
                assert_eq!(hits, 1, "{r} / {d}");
            }
            assert!(!v.ideal.is_empty(), "{r} has no ideal direction");
            assert!(!v.remedies.is_empty());
            assert!(!v.tips.is_empty());
        }
    }

    #[test]
    fn scores() {
        assert_eq!(Suitability::Ideal.score(), 95);
        assert_eq!(Suitability::Good.score(), 75);
        assert_eq!(Suitability::Acceptable.score(), 55);
        assert_eq!(Suitability::Avoid.score(), 30);
        assert!(!Suitability::Good.needs_remedy());
        assert!(Suitability::Acceptable.needs_remedy());
    }

    #[test]
    fn room_parse() {
        for r in ALL_ROOMS {
            assert_eq!(r.slug().parse::<RoomType>(), Ok(r));
        }
        assert_eq!("Living Room".parse(), Ok(RoomType::LivingRoom));
        assert_eq!("children's room".parse(), Ok(RoomType::ChildrenRoom));
        assert!("garage".parse::<RoomType>().is_err());
    }

    #[test]
    fn special_cases() {
        assert!(!special_remedies(RoomType::Kitchen, NorthEast).is_empty());
        assert!(!special_remedies(RoomType::Bathroom, NorthEast).is_empty());
        assert!(special_remedies(RoomType::Kitchen, SouthEast).is_empty());
    }
}
