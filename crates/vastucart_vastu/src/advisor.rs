//! Room advisor: suitability, score and remedies of a room placed in a
//! given zone.

use serde::Serialize;
use vastucart_core::{BilingualString, BilingualText as T, Graha};

use crate::direction::{ALL_DIRECTIONS, Direction, Element};
use crate::room::{RoomType, Suitability, special_remedies};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAdvice {
    pub room: RoomType,
    pub direction: Direction,
    pub suitability: Suitability,
    pub suitability_label: T,
    pub score: u8,
    pub ideal_directions: &'static [Direction],
    pub element: Element,
    pub deity: T,
    pub planet: Option<Graha>,
    /// Special-case remedies first, then the room's general ones. Empty for
    /// ideal and good placements.
    pub remedies: Vec<T>,
    pub tips: &'static [T],
    pub summary: BilingualString,
}

fn summary(room: RoomType, direction: Direction, s: Suitability) -> BilingualString {
    let (r, d) = (room.label(), direction.label());
    match s {
        Suitability::Ideal => BilingualString::new(
            format!("{} in the {} is ideal as per vastu.", r.en, d.en),
            format!("{} दिशा में {} वास्तु के अनुसार आदर्श है।", d.hi, r.hi),
        ),
        Suitability::Good => BilingualString::new(
            format!("{} in the {} is a good placement.", r.en, d.en),
            format!("{} दिशा में {} अच्छा स्थान है।", d.hi, r.hi),
        ),
        Suitability::Acceptable => BilingualString::new(
            format!("{} in the {} is acceptable with a few remedies.", r.en, d.en),
            format!("{} दिशा में {} कुछ उपायों के साथ स्वीकार्य है।", d.hi, r.hi),
        ),
        Suitability::Avoid => BilingualString::new(
            format!("{} in the {} should be avoided; apply the remedies below.", r.en, d.en),
            format!("{} दिशा में {} से बचना चाहिए; नीचे दिए उपाय अपनाएं।", d.hi, r.hi),
        ),
    }
}

/// Advice for `room` placed in `direction`.
pub fn advise_room(room: RoomType, direction: Direction) -> RoomAdvice {
    let vastu = room.vastu();
    let suitability = vastu.suitability(direction);

    let remedies: Vec<T> = if suitability.needs_remedy() {
        special_remedies(room, direction)
            .iter()
            .chain(vastu.remedies)
            .copied()
            .collect()
    } else {
        Vec::new()
    };

    log::debug!(
        "room {room} in {direction}: {suitability:?} ({}), {} remedies",
        suitability.score(),
        remedies.len()
    );

    RoomAdvice {
        room,
        direction,
        suitability,
        suitability_label: suitability.label(),
        score: suitability.score(),
        ideal_directions: vastu.ideal,
        element: direction.element(),
        deity: direction.deity(),
        planet: direction.planet(),
        remedies,
        tips: vastu.tips,
        summary: summary(room, direction, suitability),
    }
}

/// Ideal directions followed by good ones.
pub fn best_directions(room: RoomType) -> Vec<Direction> {
    let vastu = room.vastu();
    vastu.ideal.iter().chain(vastu.good).copied().collect()
}

/// Advice for every zone, in compass order.
pub fn room_report(room: RoomType) -> Vec<RoomAdvice> {
    ALL_DIRECTIONS
        .iter()
        .map(|&d| advise_room(room, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kitchen_south_east_ideal() {
        let a = advise_room(RoomType::Kitchen, Direction::SouthEast);
        assert_eq!(a.suitability, Suitability::Ideal);
        assert_eq!(a.score, 95);
        assert!(a.remedies.is_empty());
        assert_eq!(a.element, Element::Fire);
    }

    #[test]
    fn acceptable_gets_general_remedies() {
        let a = advise_room(RoomType::Kitchen, Direction::East);
        assert_eq!(a.suitability, Suitability::Acceptable);
        assert_eq!(a.score, 55);
        assert_eq!(a.remedies.as_slice(), RoomType::Kitchen.vastu().remedies);
    }

    #[test]
    fn best_directions_order() {
        assert_eq!(
            best_directions(RoomType::MasterBedroom),
            vec![Direction::SouthWest, Direction::South, Direction::West]
        );
    }

    #[test]
    fn summary_mentions_room() {
        let a = advise_room(RoomType::PoojaRoom, Direction::NorthEast);
        assert!(a.summary.en.contains("Pooja Room"));
        assert!(a.summary.hi.contains("पूजा घर"));
    }
}
