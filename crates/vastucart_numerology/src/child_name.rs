//! Child-name suggestions from the parents' numbers.
//!
//! Each parent contributes the compatible numbers of their life path and
//! birth-day numbers; desired qualities contribute their own numbers. Catalog
//! names are scored by which of these sets their Pythagorean number falls in,
//! with fixed point values capped at [`MAX_SCORE`].

use std::str::FromStr;

use serde::Serialize;
use vastucart_core::{
    BilingualString, BilingualText as T, BirthDate, MasterPolicy, birth_day_number,
    letters_for_number, life_path_number, reduce,
};

use crate::error::NumerologyError;
use crate::tables::compatibility::compatible_numbers;
use crate::tables::names::{Gender, NameEntry, NameOrigin, name_catalog};

/// Name number is in the ideal (union) set.
pub const IDEAL_NUMBER_POINTS: u8 = 30;
/// Name number matches a desired quality.
pub const QUALITY_POINTS: u8 = 25;
/// Name number is compatible with the father's numbers.
pub const FATHER_POINTS: u8 = 15;
/// Name number is compatible with the mother's numbers.
pub const MOTHER_POINTS: u8 = 15;
/// Name number equals the parents' harmony number.
pub const HARMONY_POINTS: u8 = 20;
/// Name starts with a recommended letter.
pub const LETTER_POINTS: u8 = 10;
/// Score cap.
pub const MAX_SCORE: u8 = 100;
/// Suggestions returned when the request does not say otherwise.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 15;
/// How many top ideal numbers feed the recommended letters.
pub const RECOMMENDED_NUMBER_COUNT: usize = 3;

const PARENT_POLICY: MasterPolicy = MasterPolicy::ElevenTwentyTwo;

/// A quality the parents would like the name to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Leadership,
    Creativity,
    Wisdom,
    Harmony,
    Prosperity,
    Compassion,
    Intelligence,
    Spirituality,
    Courage,
    Stability,
}

pub const ALL_QUALITIES: [Quality; 10] = [
    Quality::Leadership,
    Quality::Creativity,
    Quality::Wisdom,
    Quality::Harmony,
    Quality::Prosperity,
    Quality::Compassion,
    Quality::Intelligence,
    Quality::Spirituality,
    Quality::Courage,
    Quality::Stability,
];

impl Quality {
    /// Numbers that express this quality.
    pub const fn numbers(self) -> &'static [u8] {
        match self {
            Self::Leadership => &[1, 8],
            Self::Creativity => &[3, 5],
            Self::Wisdom => &[7, 9],
            Self::Harmony => &[2, 6],
            Self::Prosperity => &[4, 8],
            Self::Compassion => &[6, 9],
            Self::Intelligence => &[5, 7],
            Self::Spirituality => &[7, 9, 11],
            Self::Courage => &[1, 9],
            Self::Stability => &[4, 22],
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::Leadership => T::new("Leadership", "नेतृत्व"),
            Self::Creativity => T::new("Creativity", "रचनात्मकता"),
            Self::Wisdom => T::new("Wisdom", "ज्ञान"),
            Self::Harmony => T::new("Harmony", "सामंजस्य"),
            Self::Prosperity => T::new("Prosperity", "समृद्धि"),
            Self::Compassion => T::new("Compassion", "करुणा"),
            Self::Intelligence => T::new("Intelligence", "बुद्धिमत्ता"),
            Self::Spirituality => T::new("Spirituality", "आध्यात्मिकता"),
            Self::Courage => T::new("Courage", "साहस"),
            Self::Stability => T::new("Stability", "स्थिरता"),
        }
    }
}

impl FromStr for Quality {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_QUALITIES
            .iter()
            .copied()
            .find(|q| q.label().en.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| NumerologyError::UnknownQuality(s.to_string()))
    }
}

/// Inputs for [`calculate_child_name_suggestions`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChildNameRequest {
    pub father: BirthDate,
    pub mother: BirthDate,
    pub gender: Gender,
    pub starting_letter: Option<char>,
    pub qualities: Vec<Quality>,
    limit: usize,
}

impl ChildNameRequest {
    pub fn new(father: BirthDate, mother: BirthDate, gender: Gender) -> Self {
        Self {
            father,
            mother,
            gender,
            starting_letter: None,
            qualities: Vec::new(),
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Restrict suggestions to names starting with `letter` (A–Z).
    pub fn with_starting_letter(mut self, letter: char) -> Result<Self, NumerologyError> {
        if !letter.is_ascii_alphabetic() {
            return Err(NumerologyError::InvalidStartingLetter(letter));
        }
        self.starting_letter = Some(letter.to_ascii_uppercase());
        Ok(self)
    }

    pub fn with_qualities(mut self, qualities: impl IntoIterator<Item = Quality>) -> Self {
        self.qualities = qualities.into_iter().collect();
        self
    }

    /// Keep at most `limit` suggestions; zero is rejected.
    pub fn with_limit(mut self, limit: usize) -> Result<Self, NumerologyError> {
        if limit == 0 {
            return Err(NumerologyError::ZeroLimit);
        }
        self.limit = limit;
        Ok(self)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Numbers derived for one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentNumbers {
    pub life_path: u8,
    pub birth_day: u8,
    /// Union of the compatible numbers of `life_path` and `birth_day`.
    pub compatible: Vec<u8>,
}

impl ParentNumbers {
    pub fn from_date(date: BirthDate) -> Self {
        let life_path = life_path_number(date, PARENT_POLICY);
        let birth_day = birth_day_number(date.day());
        let mut compatible = Vec::new();
        extend_unique(&mut compatible, compatible_numbers(life_path));
        extend_unique(&mut compatible, compatible_numbers(birth_day));
        Self {
            life_path,
            birth_day,
            compatible,
        }
    }
}

/// A scoring criterion a suggestion satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchCriterion {
    IdealNumber,
    Quality,
    FatherCompatible,
    MotherCompatible,
    HarmonyNumber,
    RecommendedLetter,
}

impl MatchCriterion {
    pub const fn points(self) -> u8 {
        match self {
            Self::IdealNumber => IDEAL_NUMBER_POINTS,
            Self::Quality => QUALITY_POINTS,
            Self::FatherCompatible => FATHER_POINTS,
            Self::MotherCompatible => MOTHER_POINTS,
            Self::HarmonyNumber => HARMONY_POINTS,
            Self::RecommendedLetter => LETTER_POINTS,
        }
    }

    pub const fn label(self) -> T {
        match self {
            Self::IdealNumber => T::new("ideal number", "आदर्श अंक"),
            Self::Quality => T::new("desired quality", "इच्छित गुण"),
            Self::FatherCompatible => T::new("father's numbers", "पिता के अंक"),
            Self::MotherCompatible => T::new("mother's numbers", "माता के अंक"),
            Self::HarmonyNumber => T::new("family harmony number", "पारिवारिक सामंजस्य अंक"),
            Self::RecommendedLetter => T::new("lucky first letter", "शुभ प्रथम अक्षर"),
        }
    }
}

/// One suggested name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSuggestion {
    pub name: &'static str,
    pub meaning: T,
    pub gender: Gender,
    pub origin: NameOrigin,
    pub pythagorean_number: u8,
    pub chaldean_number: u8,
    pub score: u8,
    pub matched: Vec<MatchCriterion>,
    pub match_reason: BilingualString,
}

/// Result of [`calculate_child_name_suggestions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildNameResult {
    pub father: ParentNumbers,
    pub mother: ParentNumbers,
    pub harmony_number: u8,
    pub quality_numbers: Vec<u8>,
    /// Father ∪ mother ∪ quality numbers, ascending.
    pub ideal_numbers: Vec<u8>,
    pub recommended_numbers: Vec<u8>,
    pub recommended_letters: Vec<char>,
    /// True when no catalog name had the requested starting letter and the
    /// letter filter was dropped.
    pub letter_filter_relaxed: bool,
    pub candidates_considered: usize,
    pub suggestions: Vec<NameSuggestion>,
}

fn extend_unique(dst: &mut Vec<u8>, src: &[u8]) {
    for &n in src {
        if !dst.contains(&n) {
            dst.push(n);
        }
    }
}

/// Ideal numbers ranked by how many contributing sets contain them (ties by
/// ascending number); the first `RECOMMENDED_NUMBER_COUNT` are returned.
fn rank_ideal_numbers(ideal: &[u8], sets: &[&[u8]]) -> Vec<u8> {
    let mut ranked: Vec<(usize, u8)> = ideal
        .iter()
        .map(|&n| (sets.iter().filter(|s| s.contains(&n)).count(), n))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    ranked
        .into_iter()
        .take(RECOMMENDED_NUMBER_COUNT)
        .map(|(_, n)| n)
        .collect()
}

fn match_reason(number: u8, matched: &[MatchCriterion]) -> BilingualString {
    if matched.is_empty() {
        return BilingualString::new(
            format!("Number {number}: no direct match"),
            format!("अंक {number}: कोई सीधा मेल नहीं"),
        );
    }
    let labels: Vec<T> = matched.iter().map(|m| m.label()).collect();
    let joined = BilingualString::join(labels.iter(), ", ");
    BilingualString::new(
        format!("Number {number} matches {}", joined.en),
        format!("अंक {number} का मेल: {}", joined.hi),
    )
}

struct Scorer<'a> {
    ideal: &'a [u8],
    quality: &'a [u8],
    father: &'a [u8],
    mother: &'a [u8],
    harmony: u8,
    letters: &'a [char],
}

impl Scorer<'_> {
    fn score(&self, entry: &'static NameEntry) -> NameSuggestion {
        let n = entry.pythagorean_number;
        let checks = [
            (MatchCriterion::IdealNumber, self.ideal.contains(&n)),
            (MatchCriterion::Quality, self.quality.contains(&n)),
            (MatchCriterion::FatherCompatible, self.father.contains(&n)),
            (MatchCriterion::MotherCompatible, self.mother.contains(&n)),
            (MatchCriterion::HarmonyNumber, n == self.harmony),
            (
                MatchCriterion::RecommendedLetter,
                self.letters.contains(&entry.initial()),
            ),
        ];
        let matched: Vec<MatchCriterion> = checks
            .iter()
            .filter(|(_, hit)| *hit)
            .map(|(c, _)| *c)
            .collect();
        let total: u32 = matched.iter().map(|c| c.points() as u32).sum();
        let score = total.min(MAX_SCORE as u32) as u8;
        log::trace!("{} ({n}) scored {score} via {matched:?}", entry.name);
        NameSuggestion {
            name: entry.name,
            meaning: entry.meaning,
            gender: entry.gender,
            origin: entry.origin,
            pythagorean_number: entry.pythagorean_number,
            chaldean_number: entry.chaldean_number,
            score,
            match_reason: match_reason(n, &matched),
            matched,
        }
    }
}

/// Suggest catalog names for a child from the parents' birth dates.
pub fn calculate_child_name_suggestions(req: &ChildNameRequest) -> ChildNameResult {
    let father = ParentNumbers::from_date(req.father);
    let mother = ParentNumbers::from_date(req.mother);

    let mut quality_numbers = Vec::new();
    for q in &req.qualities {
        extend_unique(&mut quality_numbers, q.numbers());
    }

    let mut ideal_numbers = Vec::new();
    extend_unique(&mut ideal_numbers, &father.compatible);
    extend_unique(&mut ideal_numbers, &mother.compatible);
    extend_unique(&mut ideal_numbers, &quality_numbers);
    ideal_numbers.sort_unstable();

    let harmony_number = reduce(
        father.life_path as u32 + mother.life_path as u32,
        PARENT_POLICY,
    );

    let recommended_numbers = rank_ideal_numbers(
        &ideal_numbers,
        &[&father.compatible, &mother.compatible, &quality_numbers],
    );
    let mut recommended_letters: Vec<char> = Vec::new();
    for &n in &recommended_numbers {
        for &c in letters_for_number(n) {
            if !recommended_letters.contains(&c) {
                recommended_letters.push(c);
            }
        }
    }

    log::debug!(
        "child names: father {:?}, mother {:?}, harmony {harmony_number}, ideal {ideal_numbers:?}",
        father,
        mother
    );

    let by_gender: Vec<&'static NameEntry> = name_catalog()
        .iter()
        .filter(|e| e.gender.suits(req.gender))
        .collect();
    let by_letter: Vec<&'static NameEntry> = match req.starting_letter {
        Some(letter) => by_gender
            .iter()
            .copied()
            .filter(|e| e.initial() == letter.to_ascii_uppercase())
            .collect(),
        None => by_gender.clone(),
    };
    let letter_filter_relaxed = by_letter.is_empty() && req.starting_letter.is_some();
    let candidates = if letter_filter_relaxed {
        by_gender
    } else {
        by_letter
    };

    let scorer = Scorer {
        ideal: &ideal_numbers,
        quality: &quality_numbers,
        father: &father.compatible,
        mother: &mother.compatible,
        harmony: harmony_number,
        letters: &recommended_letters,
    };
    let mut suggestions: Vec<NameSuggestion> =
        candidates.iter().map(|&e| scorer.score(e)).collect();
    // Stable: equal scores keep catalog order.
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(req.limit);

    ChildNameResult {
        candidates_considered: candidates.len(),
        father,
        mother,
        harmony_number,
        quality_numbers,
        ideal_numbers,
        recommended_numbers,
        recommended_letters,
        letter_filter_relaxed,
        suggestions,
    }
}
