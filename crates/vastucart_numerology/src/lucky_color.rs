//! Lucky colours scored against a person's core numbers.

use serde::Serialize;
use vastucart_core::{BilingualString, BilingualText as T, Graha, Maitri, naisargika_maitri};

use crate::lucky_number::{CoreNumbers, LuckyNumberRequest};
use crate::tables::colors::{COLORS, ColorEntry, color_for_graha};
use crate::tables::planets::{WEEK, weekday_lord, weekday_name};

/// Colour carries the life-path root.
pub const LIFE_PATH_COLOR_POINTS: u8 = 40;
/// Colour carries the birth-day root.
pub const BIRTH_DAY_COLOR_POINTS: u8 = 30;
/// Colour carries the name root.
pub const NAME_COLOR_POINTS: u8 = 20;
/// Colour's graha is a natural friend of the ruler.
pub const FRIENDLY_PLANET_POINTS: u8 = 10;
pub const MAX_COLOR_SCORE: u8 = 100;
/// Size of the primary list.
pub const PRIMARY_COLOR_COUNT: usize = 5;

/// The lucky-colour calculator takes the same inputs as the lucky-number one.
pub type LuckyColorRequest = LuckyNumberRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredColor {
    pub color: &'static ColorEntry,
    pub score: u8,
    pub reason: BilingualString,
}

/// Colour to wear on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayColor {
    pub day: T,
    pub lord: Graha,
    pub color: &'static ColorEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyColorResult {
    pub numbers: CoreNumbers,
    pub ruling_planet: Graha,
    pub primary: Vec<ScoredColor>,
    pub avoid: Vec<&'static ColorEntry>,
    pub weekly: Vec<DayColor>,
}

fn score_color(color: &'static ColorEntry, numbers: &CoreNumbers, ruler: Graha) -> ScoredColor {
    let mut score: u32 = 0;
    let mut hits: Vec<T> = Vec::new();
    if color.numbers.contains(&numbers.life_path_root) {
        score += LIFE_PATH_COLOR_POINTS as u32;
        hits.push(T::new("life path", "मूलांक"));
    }
    if color.numbers.contains(&numbers.birth_day_root) {
        score += BIRTH_DAY_COLOR_POINTS as u32;
        hits.push(T::new("birth day", "जन्म दिवस"));
    }
    if numbers.name_root.is_some_and(|n| color.numbers.contains(&n)) {
        score += NAME_COLOR_POINTS as u32;
        hits.push(T::new("name number", "नामांक"));
    }
    if naisargika_maitri(ruler, color.graha) == Maitri::Friend {
        score += FRIENDLY_PLANET_POINTS as u32;
        hits.push(T::new("friendly planet", "मित्र ग्रह"));
    }
    let joined = BilingualString::join(hits.iter(), ", ");
    ScoredColor {
        color,
        score: score.min(MAX_COLOR_SCORE as u32) as u8,
        reason: BilingualString::new(
            format!("{}: {}", color.name.en, joined.en),
            format!("{}: {}", color.name.hi, joined.hi),
        ),
    }
}

/// Score every catalog colour and pick the top five, colours to avoid and a
/// weekday plan.
pub fn calculate_lucky_colors(req: &LuckyColorRequest) -> LuckyColorResult {
    let numbers = CoreNumbers::compute(req.birth_date, req.name.as_deref());
    let ruling_planet = numbers.ruling_graha();

    let mut scored: Vec<ScoredColor> = COLORS
        .iter()
        .map(|c| score_color(c, &numbers, ruling_planet))
        .filter(|s| s.score > 0)
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    for s in &scored {
        log::trace!("{} scored {}", s.color.name.en, s.score);
    }
    scored.truncate(PRIMARY_COLOR_COUNT);

    let avoid: Vec<&'static ColorEntry> = COLORS
        .iter()
        .filter(|c| naisargika_maitri(ruling_planet, c.graha) == Maitri::Enemy)
        .filter(|c| !scored.iter().any(|s| s.color.name == c.name))
        .collect();

    let weekly = WEEK
        .iter()
        .map(|&day| {
            let lord = weekday_lord(day);
            DayColor {
                day: weekday_name(day),
                lord,
                color: color_for_graha(lord),
            }
        })
        .collect();

    log::debug!(
        "lucky colours for {}: ruler {ruling_planet}, {} primary, {} to avoid",
        req.birth_date,
        scored.len(),
        avoid.len()
    );

    LuckyColorResult {
        numbers,
        ruling_planet,
        primary: scored,
        avoid,
        weekly,
    }
}
