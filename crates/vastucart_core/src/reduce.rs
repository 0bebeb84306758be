//! Digit reduction (repeated digit summing) with master-number handling.
//!
//! Every numerology number is produced here. A value is summed digit by digit
//! until it is a single digit or a master number that the caller's
//! [`MasterPolicy`] recognises.

use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// Which master numbers stop the reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MasterPolicy {
    /// Always reduce to a single digit (33 → 6).
    None,
    /// Keep 11 and 22.
    ElevenTwentyTwo,
    /// Keep 11, 22 and 33.
    #[default]
    All,
}

impl MasterPolicy {
    /// Master numbers recognised by this policy.
    pub const fn masters(self) -> &'static [u32] {
        match self {
            Self::None => &[],
            Self::ElevenTwentyTwo => &[11, 22],
            Self::All => &[11, 22, 33],
        }
    }
}

impl FromStr for MasterPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "single" => Ok(Self::None),
            "11-22" | "11/22" | "eleven-twenty-two" => Ok(Self::ElevenTwentyTwo),
            "all" | "11-22-33" => Ok(Self::All),
            _ => Err(CoreError::UnknownMasterPolicy(s.to_string())),
        }
    }
}

/// All master numbers.
pub const MASTER_NUMBERS: [u8; 3] = [11, 22, 33];

/// Reduction result with intermediate sums, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reduction {
    /// The value the reduction started from.
    pub start: u32,
    /// Sums produced after `start`, ending with `final_number`.
    pub steps: Vec<u32>,
    pub final_number: u8,
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// True if `n` is a master number under `policy`.
pub fn is_master(n: u32, policy: MasterPolicy) -> bool {
    policy.masters().contains(&n)
}

/// Reduce `n` to a single digit or a recognised master number.
pub fn reduce(n: u32, policy: MasterPolicy) -> u8 {
    let mut value = n;
    while value > 9 && !is_master(value, policy) {
        value = digit_sum(value);
    }
    value as u8
}

/// Like [`reduce`], recording every intermediate sum.
pub fn reduce_with_steps(n: u32, policy: MasterPolicy) -> Reduction {
    let mut steps = Vec::new();
    let mut value = n;
    while value > 9 && !is_master(value, policy) {
        value = digit_sum(value);
        steps.push(value);
    }
    log::trace!("reduce {n} ({policy:?}) via {steps:?}");
    Reduction {
        start: n,
        steps,
        final_number: value as u8,
    }
}

/// Plain single-digit root: master numbers fold to their digit sum (11 → 2,
/// 22 → 4, 33 → 6). Used where tables are keyed by 1–9 only.
pub fn root(n: u8) -> u8 {
    reduce(n as u32, MasterPolicy::None)
}

/// True for every value [`reduce`] can return (0 only for input 0).
pub fn is_numerology_number(n: u8) -> bool {
    (1..=9).contains(&n) || MASTER_NUMBERS.contains(&n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sum_basic() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(4_294_967_295), 57);
    }

    #[test]
    fn single_digit_unchanged() {
        for n in 0..=9 {
            assert_eq!(reduce(n, MasterPolicy::All), n as u8);
            assert!(reduce_with_steps(n, MasterPolicy::All).steps.is_empty());
        }
    }

    #[test]
    fn two_step_reduction() {
        // 38 → 11 → 2 without masters
        let r = reduce_with_steps(38, MasterPolicy::None);
        assert_eq!(r.steps, vec![11, 2]);
        assert_eq!(r.final_number, 2);
    }

    #[test]
    fn master_short_circuits_mid_reduction() {
        // 38 → 11, kept
        let r = reduce_with_steps(38, MasterPolicy::ElevenTwentyTwo);
        assert_eq!(r.steps, vec![11]);
        assert_eq!(r.final_number, 11);
    }

    #[test]
    fn master_start_is_returned_unchanged() {
        let r = reduce_with_steps(22, MasterPolicy::All);
        assert!(r.steps.is_empty());
        assert_eq!(r.final_number, 22);
    }

    #[test]
    fn thirty_three_depends_on_policy() {
        assert_eq!(reduce(33, MasterPolicy::All), 33);
        assert_eq!(reduce(33, MasterPolicy::ElevenTwentyTwo), 6);
        assert_eq!(reduce(33, MasterPolicy::None), 6);
        assert_eq!(reduce(123, MasterPolicy::All), 6);
    }

    #[test]
    fn root_folds_masters() {
        assert_eq!(root(11), 2);
        assert_eq!(root(22), 4);
        assert_eq!(root(33), 6);
        assert_eq!(root(7), 7);
    }

    #[test]
    fn policy_parse() {
        assert_eq!("none".parse::<MasterPolicy>(), Ok(MasterPolicy::None));
        assert_eq!("11-22".parse::<MasterPolicy>(), Ok(MasterPolicy::ElevenTwentyTwo));
        assert_eq!("ALL".parse::<MasterPolicy>(), Ok(MasterPolicy::All));
        assert!("12".parse::<MasterPolicy>().is_err());
    }
}
