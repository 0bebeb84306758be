//! Core numbers derived from a birth date or a name.

use crate::date::BirthDate;
use crate::letters::{LetterSystem, consonant_sum, name_number, vowel_sum};
use crate::reduce::{MasterPolicy, Reduction, digit_sum, reduce, reduce_with_steps};

/// Sum of every digit of day, month and full year.
pub fn birth_date_digit_sum(date: BirthDate) -> u32 {
    date.digits().iter().sum()
}

/// Life path number: all birth-date digits summed as one string, reduced.
///
/// 1990-07-15 → 1+5+7+1+9+9+0 = 32 → 5.
pub fn life_path_number(date: BirthDate, policy: MasterPolicy) -> u8 {
    reduce(birth_date_digit_sum(date), policy)
}

/// Life path number with the intermediate sums.
pub fn life_path_reduction(date: BirthDate, policy: MasterPolicy) -> Reduction {
    reduce_with_steps(birth_date_digit_sum(date), policy)
}

/// Birth-day number: day of month reduced, keeping 11 and 22.
pub fn birth_day_number(day: u32) -> u8 {
    reduce(day, MasterPolicy::ElevenTwentyTwo)
}

/// Attitude number: day and month digits, reduced to a single digit.
pub fn attitude_number(date: BirthDate) -> u8 {
    reduce(digit_sum(date.day()) + digit_sum(date.month()), MasterPolicy::None)
}

/// Personal year number for `year`, using the birth day and month.
pub fn personal_year_number(date: BirthDate, year: i32) -> u8 {
    let sum = digit_sum(date.day()) + digit_sum(date.month()) + digit_sum(year.unsigned_abs());
    reduce(sum, MasterPolicy::None)
}

/// Expression (destiny) number: all letters of the full name.
pub fn expression_number(name: &str, system: LetterSystem) -> u8 {
    name_number(name, system)
}

/// Soul urge (heart's desire) number: vowels only.
pub fn soul_urge_number(name: &str, system: LetterSystem) -> u8 {
    reduce(vowel_sum(name, system), MasterPolicy::All)
}

/// Personality number: consonants only.
pub fn personality_number(name: &str, system: LetterSystem) -> u8 {
    reduce(consonant_sum(name, system), MasterPolicy::All)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> BirthDate {
        BirthDate::new(d, m, y).unwrap()
    }

    #[test]
    fn life_path_worked_example() {
        let d = date(15, 7, 1990);
        assert_eq!(birth_date_digit_sum(d), 32);
        assert_eq!(life_path_number(d, MasterPolicy::All), 5);
        let r = life_path_reduction(d, MasterPolicy::All);
        assert_eq!(r.start, 32);
        assert_eq!(r.steps, vec![5]);
    }

    #[test]
    fn life_path_master_kept_or_reduced() {
        let d = date(1, 3, 1988); // 1+3+1+9+8+8 = 30 → 3
        assert_eq!(life_path_number(d, MasterPolicy::All), 3);
        let d = date(8, 3, 1980); // 8+3+1+9+8+0 = 29 → 11
        assert_eq!(life_path_number(d, MasterPolicy::All), 11);
        assert_eq!(life_path_number(d, MasterPolicy::ElevenTwentyTwo), 11);
        assert_eq!(life_path_number(d, MasterPolicy::None), 2);
    }

    #[test]
    fn birth_day_keeps_11_and_22() {
        assert_eq!(birth_day_number(11), 11);
        assert_eq!(birth_day_number(22), 22);
        assert_eq!(birth_day_number(29), 11);
        assert_eq!(birth_day_number(31), 4);
        assert_eq!(birth_day_number(7), 7);
    }

    #[test]
    fn attitude_and_personal_year() {
        let d = date(15, 7, 1990);
        assert_eq!(attitude_number(d), 4); // 1+5+7 = 13 → 4
        assert_eq!(personal_year_number(d, 2026), 5); // 6 + 7 + 10 = 23 → 5
    }

    #[test]
    fn name_numbers_partition() {
        let name = "JOHN SMITH";
        // vowels O, I = 6 + 9 = 15 → 6; consonants 44 - 15 = 29 → 11
        assert_eq!(expression_number(name, LetterSystem::Pythagorean), 8);
        assert_eq!(soul_urge_number(name, LetterSystem::Pythagorean), 6);
        assert_eq!(personality_number(name, LetterSystem::Pythagorean), 11);
    }
}
