//! Lucky numbers, days and dates from a birth date and optional name.

use serde::Serialize;
use vastucart_core::{
    BilingualString, BilingualText as T, BirthDate, Graha, LetterSystem, MasterPolicy,
    birth_day_number, enemy_numbers, friendly_numbers, life_path_number, name_number, reduce,
    root,
};

use crate::tables::planets::{PlanetProfile, planet_profile};

const LIFE_PATH_POLICY: MasterPolicy = MasterPolicy::ElevenTwentyTwo;

/// Inputs for [`calculate_lucky_numbers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuckyNumberRequest {
    pub birth_date: BirthDate,
    pub name: Option<String>,
}

impl LuckyNumberRequest {
    pub fn new(birth_date: BirthDate) -> Self {
        Self {
            birth_date,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Core numbers shared by the lucky-number and lucky-colour calculators.
///
/// The raw numbers keep master values; the `*_root` fields are the single
/// digits used as table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreNumbers {
    pub life_path: u8,
    pub birth_day: u8,
    pub name_number: Option<u8>,
    pub life_path_root: u8,
    pub birth_day_root: u8,
    pub name_root: Option<u8>,
}

impl CoreNumbers {
    pub fn compute(birth_date: BirthDate, name: Option<&str>) -> Self {
        let life_path = life_path_number(birth_date, LIFE_PATH_POLICY);
        let birth_day = birth_day_number(birth_date.day());
        // A name with no letters contributes nothing.
        let name_number = name
            .map(|n| name_number(n, LetterSystem::Pythagorean))
            .filter(|&n| n != 0);
        Self {
            life_path,
            birth_day,
            name_number,
            life_path_root: root(life_path),
            birth_day_root: root(birth_day),
            name_root: name_number.map(root),
        }
    }

    /// Life-path, birth-day and name roots, de-duplicated in that order.
    pub fn primary(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(3);
        for n in [
            Some(self.life_path_root),
            Some(self.birth_day_root),
            self.name_root,
        ]
        .into_iter()
        .flatten()
        {
            if !out.contains(&n) {
                out.push(n);
            }
        }
        out
    }

    /// Graha ruling the life-path root.
    pub fn ruling_graha(&self) -> Graha {
        Graha::from_number(self.life_path_root)
    }
}

/// Result of [`calculate_lucky_numbers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyNumberResult {
    pub numbers: CoreNumbers,
    pub lucky_numbers: Vec<u8>,
    pub unlucky_numbers: Vec<u8>,
    pub lucky_days: Vec<T>,
    pub lucky_dates: Vec<u8>,
    pub ruling_planet: Graha,
    pub planet: &'static PlanetProfile,
    pub gemstone: T,
    pub colors: &'static [T],
    pub summary: BilingualString,
}

/// Lucky numbers, days, dates and planetary associations.
pub fn calculate_lucky_numbers(req: &LuckyNumberRequest) -> LuckyNumberResult {
    let numbers = CoreNumbers::compute(req.birth_date, req.name.as_deref());
    let ruling_planet = numbers.ruling_graha();
    let planet = planet_profile(ruling_planet);
    let primary = numbers.primary();

    let mut lucky_numbers = primary.clone();
    for n in friendly_numbers(ruling_planet) {
        if !lucky_numbers.contains(&n) {
            lucky_numbers.push(n);
        }
    }

    let unlucky_numbers: Vec<u8> = enemy_numbers(ruling_planet)
        .into_iter()
        .filter(|n| !lucky_numbers.contains(n))
        .collect();

    let mut lucky_days: Vec<T> = planet.days.to_vec();
    for d in planet_profile(Graha::from_number(numbers.birth_day_root)).days {
        if !lucky_days.contains(d) {
            lucky_days.push(*d);
        }
    }

    let lucky_dates: Vec<u8> = (1u8..=31)
        .filter(|&d| primary.contains(&reduce(d as u32, MasterPolicy::None)))
        .collect();

    log::debug!(
        "lucky numbers for {}: {numbers:?}, ruler {ruling_planet}, lucky {lucky_numbers:?}",
        req.birth_date
    );

    let list = lucky_numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let summary = BilingualString::new(
        format!(
            "Your life path {} is ruled by {}. Your lucky numbers are {list}; wear {} for added strength.",
            numbers.life_path, planet.name.en, planet.gemstone.en
        ),
        format!(
            "आपका मूलांक {} {} द्वारा शासित है। आपके शुभ अंक {list} हैं; अतिरिक्त बल के लिए {} धारण करें।",
            numbers.life_path, planet.name.hi, planet.gemstone.hi
        ),
    );

    LuckyNumberResult {
        numbers,
        lucky_numbers,
        unlucky_numbers,
        lucky_days,
        lucky_dates,
        ruling_planet,
        planet,
        gemstone: planet.gemstone,
        colors: planet.colors,
        summary,
    }
}
