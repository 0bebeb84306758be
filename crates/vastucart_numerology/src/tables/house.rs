//! House (address) number profiles, keyed 1–9.

use serde::Serialize;
use vastucart_core::BilingualText as T;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseProfile {
    pub number: u8,
    pub energy: T,
    pub description: T,
    pub best_for: &'static [T],
    pub challenges: &'static [T],
    pub remedies: &'static [T],
}

static HOUSES: [HouseProfile; 9] = [
    HouseProfile {
        number: 1,
        energy: T::new("Independence and new beginnings", "स्वतंत्रता और नई शुरुआत"),
        description: T::new(
            "A home for self-starters; it supports careers, confidence and personal goals.",
            "आत्मनिर्भर लोगों का घर; यह करियर, आत्मविश्वास और व्यक्तिगत लक्ष्यों में सहायक है।",
        ),
        best_for: &[
            T::new("Entrepreneurs", "उद्यमी"),
            T::new("Single professionals", "अकेले पेशेवर"),
        ],
        challenges: &[T::new("Can feel lonely for large families", "बड़े परिवार के लिए अकेलापन महसूस हो सकता है")],
        remedies: &[
            T::new("Keep the entrance bright and well lit", "प्रवेश द्वार को उज्ज्वल और रोशन रखें"),
            T::new("Place a copper Sun symbol facing east", "पूर्व दिशा की ओर तांबे का सूर्य चिह्न लगाएं"),
        ],
    },
    HouseProfile {
        number: 2,
        energy: T::new("Partnership and harmony", "साझेदारी और सामंजस्य"),
        description: T::new(
            "A gentle, nurturing home well suited to couples and close relationships.",
            "एक कोमल, पोषण करने वाला घर जो दंपतियों और घनिष्ठ संबंधों के लिए उपयुक्त है।",
        ),
        best_for: &[
            T::new("Couples", "दंपति"),
            T::new("Artists and healers", "कलाकार और उपचारक"),
        ],
        challenges: &[T::new("Emotional ups and downs", "भावनात्मक उतार-चढ़ाव")],
        remedies: &[
            T::new("Keep a silver bowl of water in the north-west", "उत्तर-पश्चिम में पानी से भरा चांदी का कटोरा रखें"),
            T::new("Use paired decor items", "सजावट की वस्तुएं जोड़े में रखें"),
        ],
    },
    HouseProfile {
        number: 3,
        energy: T::new("Creativity and expression", "रचनात्मकता और अभिव्यक्ति"),
        description: T::new(
            "A lively, social home that encourages learning, art and celebrations.",
            "एक जीवंत, सामाजिक घर जो शिक्षा, कला और उत्सवों को प्रोत्साहित करता है।",
        ),
        best_for: &[
            T::new("Writers and teachers", "लेखक और शिक्षक"),
            T::new("Families with children", "बच्चों वाले परिवार"),
        ],
        challenges: &[T::new("Overspending on entertainment", "मनोरंजन पर अधिक खर्च")],
        remedies: &[
            T::new("Keep a yellow flower arrangement in the north-east", "उत्तर-पूर्व में पीले फूलों की सजावट रखें"),
            T::new("Maintain a small study corner", "एक छोटा अध्ययन कोना बनाए रखें"),
        ],
    },
    HouseProfile {
        number: 4,
        energy: T::new("Stability and hard work", "स्थिरता और परिश्रम"),
        description: T::new(
            "A grounded home for building security step by step.",
            "धीरे-धीरे सुरक्षा निर्माण के लिए एक स्थिर घर।",
        ),
        best_for: &[
            T::new("Savers and planners", "बचत करने वाले और योजनाकार"),
            T::new("Technical professionals", "तकनीकी पेशेवर"),
        ],
        challenges: &[T::new("Unexpected repairs and delays", "अप्रत्याशित मरम्मत और विलंब")],
        remedies: &[
            T::new("Hang a wind chime near the entrance", "प्रवेश द्वार के पास विंड चाइम लटकाएं"),
            T::new("Keep the south-west corner heavy and clutter-free", "दक्षिण-पश्चिम कोने को भारी और अव्यवस्था रहित रखें"),
        ],
    },
    HouseProfile {
        number: 5,
        energy: T::new("Change and adventure", "परिवर्तन और रोमांच"),
        description: T::new(
            "A dynamic home full of visitors, travel and fresh opportunities.",
            "आगंतुकों, यात्राओं और नए अवसरों से भरा एक गतिशील घर।",
        ),
        best_for: &[
            T::new("Traders and sales people", "व्यापारी और विक्रेता"),
            T::new("Frequent travellers", "अक्सर यात्रा करने वाले"),
        ],
        challenges: &[T::new("Restlessness and frequent moves", "बेचैनी और बार-बार स्थान परिवर्तन")],
        remedies: &[
            T::new("Keep green plants in the north", "उत्तर में हरे पौधे रखें"),
            T::new("Fix a regular family routine", "परिवार की नियमित दिनचर्या बनाएं"),
        ],
    },
    HouseProfile {
        number: 6,
        energy: T::new("Love and family comfort", "प्रेम और पारिवारिक सुख"),
        description: T::new(
            "A warm, beautiful home centred on family, hospitality and care.",
            "परिवार, आतिथ्य और देखभाल पर केंद्रित एक गर्मजोशी भरा सुंदर घर।",
        ),
        best_for: &[
            T::new("Growing families", "बढ़ते परिवार"),
            T::new("Designers and caregivers", "डिज़ाइनर और देखभालकर्ता"),
        ],
        challenges: &[T::new("Taking on too many responsibilities", "बहुत अधिक जिम्मेदारियां लेना")],
        remedies: &[
            T::new("Keep fresh flowers in the living room", "बैठक में ताजे फूल रखें"),
            T::new("Use soft pastel colours in the south-east", "दक्षिण-पूर्व में हल्के पेस्टल रंगों का प्रयोग करें"),
        ],
    },
    HouseProfile {
        number: 7,
        energy: T::new("Reflection and spirituality", "चिंतन और आध्यात्मिकता"),
        description: T::new(
            "A quiet home that supports study, meditation and inner growth.",
            "एक शांत घर जो अध्ययन, ध्यान और आंतरिक विकास में सहायक है।",
        ),
        best_for: &[
            T::new("Researchers and scholars", "शोधकर्ता और विद्वान"),
            T::new("Spiritual seekers", "आध्यात्मिक साधक"),
        ],
        challenges: &[T::new("Isolation and slow finances", "एकांत और धीमी आर्थिक प्रगति")],
        remedies: &[
            T::new("Set up a small prayer space in the north-east", "उत्तर-पूर्व में छोटा पूजा स्थान बनाएं"),
            T::new("Invite friends over regularly", "मित्रों को नियमित रूप से आमंत्रित करें"),
        ],
    },
    HouseProfile {
        number: 8,
        energy: T::new("Wealth and authority", "धन और अधिकार"),
        description: T::new(
            "A powerful home for building wealth through steady, disciplined effort.",
            "निरंतर और अनुशासित प्रयास से धन निर्माण के लिए एक शक्तिशाली घर।",
        ),
        best_for: &[
            T::new("Business owners", "व्यवसाय स्वामी"),
            T::new("Finance professionals", "वित्त पेशेवर"),
        ],
        challenges: &[T::new("Work pressure and delays", "काम का दबाव और विलंब")],
        remedies: &[
            T::new("Light a mustard-oil lamp on Saturdays", "शनिवार को सरसों के तेल का दीपक जलाएं"),
            T::new("Keep the west side clean and organised", "पश्चिम दिशा को साफ और व्यवस्थित रखें"),
        ],
    },
    HouseProfile {
        number: 9,
        energy: T::new("Compassion and completion", "करुणा और पूर्णता"),
        description: T::new(
            "An energetic, generous home suited to service and community life.",
            "सेवा और सामुदायिक जीवन के लिए उपयुक्त एक ऊर्जावान, उदार घर।",
        ),
        best_for: &[
            T::new("Social workers and healers", "सामाजिक कार्यकर्ता और उपचारक"),
            T::new("Athletes", "खिलाड़ी"),
        ],
        challenges: &[T::new("Heated arguments", "गरमागरम बहस")],
        remedies: &[
            T::new("Keep a red cloth or lamp in the south", "दक्षिण में लाल कपड़ा या दीपक रखें"),
            T::new("Donate regularly to a cause", "किसी उद्देश्य के लिए नियमित दान करें"),
        ],
    },
];

/// Profile for a house number; anything outside 1–9 falls back to 1.
pub fn house_profile(number: u8) -> &'static HouseProfile {
    if (1..=9).contains(&number) {
        &HOUSES[number as usize - 1]
    } else {
        &HOUSES[0]
    }
}
