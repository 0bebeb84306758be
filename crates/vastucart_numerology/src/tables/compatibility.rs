//! Number compatibility tables.
//!
//! - `compatible_numbers`: numbers that sit well with a given number, used
//!   when choosing names for a child.
//! - `compatibility_score`: 0–100 score for a pair of numbers. Only the upper
//!   triangle of the 9×9 matrix is stored; lookups order the pair first, so
//!   the score is symmetric by construction.

use vastucart_core::root;

const COMPATIBLE: [(u8, &[u8]); 12] = [
    (1, &[1, 2, 3, 5, 8, 9]),
    (2, &[1, 2, 6, 7, 11]),
    (3, &[1, 3, 5, 6, 9]),
    (4, &[1, 4, 6, 8, 22]),
    (5, &[1, 3, 5, 6, 7]),
    (6, &[2, 3, 4, 6, 9]),
    (7, &[2, 5, 7]),
    (8, &[1, 4, 6, 8]),
    (9, &[1, 3, 6, 9]),
    (11, &[2, 6, 11, 22]),
    (22, &[4, 8, 11, 22]),
    (33, &[3, 6, 9, 33]),
];

/// Numbers compatible with `n`. Unknown numbers use the entry for 1.
pub fn compatible_numbers(n: u8) -> &'static [u8] {
    COMPATIBLE
        .iter()
        .find(|(k, _)| *k == n)
        .map(|(_, v)| *v)
        .unwrap_or(COMPATIBLE[0].1)
}

/// Upper-triangle pair scores; row = smaller number − 1.
#[rustfmt::skip]
const PAIR_SCORES: [[u8; 9]; 9] = [
    //  1   2   3   4   5   6   7   8   9
    [  70, 80, 85, 55, 80, 60, 65, 50, 85 ], // 1
    [   0, 75, 70, 65, 55, 90, 85, 70, 60 ], // 2
    [   0,  0, 70, 50, 80, 85, 60, 55, 90 ], // 3
    [   0,  0,  0, 65, 60, 80, 70, 85, 50 ], // 4
    [   0,  0,  0,  0, 70, 65, 80, 60, 70 ], // 5
    [   0,  0,  0,  0,  0, 80, 55, 75, 90 ], // 6
    [   0,  0,  0,  0,  0,  0, 70, 55, 65 ], // 7
    [   0,  0,  0,  0,  0,  0,  0, 65, 50 ], // 8
    [   0,  0,  0,  0,  0,  0,  0,  0, 75 ], // 9
];

fn matrix_key(n: u8) -> usize {
    let r = root(n);
    if (1..=9).contains(&r) { r as usize - 1 } else { 0 }
}

/// Pair score in 0–100. Master numbers use their root; out-of-range
/// numbers are treated as 1.
pub fn compatibility_score(a: u8, b: u8) -> u8 {
    let (i, j) = (matrix_key(a), matrix_key(b));
    let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
    PAIR_SCORES[lo][hi]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_triangle_populated() {
        for i in 0..9 {
            for j in i..9 {
                assert!(PAIR_SCORES[i][j] > 0, "({}, {}) missing", i + 1, j + 1);
                assert!(PAIR_SCORES[i][j] <= 100);
            }
        }
    }

    #[test]
    fn symmetric() {
        for a in 1..=9 {
            for b in 1..=9 {
                assert_eq!(compatibility_score(a, b), compatibility_score(b, a));
            }
        }
    }

    #[test]
    fn known_pairs() {
        assert_eq!(compatibility_score(2, 6), 90);
        assert_eq!(compatibility_score(6, 2), 90);
        assert_eq!(compatibility_score(8, 9), 50);
        assert_eq!(compatibility_score(11, 6), 90);
    }

    #[test]
    fn compatible_sets() {
        assert!(compatible_numbers(1).contains(&1));
        assert!(compatible_numbers(1).contains(&8));
        assert_eq!(compatible_numbers(6), &[2, 3, 4, 6, 9]);
        assert_eq!(compatible_numbers(0), compatible_numbers(1));
        for n in vastucart_core::MASTER_NUMBERS {
            assert!(compatible_numbers(n).contains(&n));
        }
    }
}
