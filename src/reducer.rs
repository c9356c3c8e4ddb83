// 🔢 Digit Reducer - digital roots with master-number fixed points
//
// reduce(n): while n > 9 and n is not 11/22/33, replace n with its digit sum.
// The master check runs BEFORE every step, so a transient 11/22/33 stops the loop.

use crate::error::{Result, ScannerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Terminal multi-digit results
pub const MASTER_NUMBERS: [u8; 3] = [11, 22, 33];

// ============================================================================
// DIGITAL ROOT
// ============================================================================

/// A reduced numerology number: always one of {1..9, 11, 22, 33}.
///
/// The only ways to build one are [`DigitalRoot::reduce`] and the checked
/// `TryFrom<u8>`, so every value in circulation is already in the closed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DigitalRoot(u8);

impl DigitalRoot {
    /// Every value of the closed domain, in table order
    pub const ALL: [DigitalRoot; 12] = [
        DigitalRoot(1),
        DigitalRoot(2),
        DigitalRoot(3),
        DigitalRoot(4),
        DigitalRoot(5),
        DigitalRoot(6),
        DigitalRoot(7),
        DigitalRoot(8),
        DigitalRoot(9),
        DigitalRoot(11),
        DigitalRoot(22),
        DigitalRoot(33),
    ];

    /// Reduce a positive integer. Total over `NonZeroU64`.
    pub fn reduce(n: NonZeroU64) -> Self {
        let mut n = n.get();
        while n > 9 && !is_master(n) {
            n = digit_sum(n);
        }
        // digit_sum of a positive number is positive, and the loop exits at <= 9 or a master
        DigitalRoot(n as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_master(self) -> bool {
        is_master(self.0 as u64)
    }

    /// Position in [`DigitalRoot::ALL`]
    pub fn index(self) -> usize {
        match self.0 {
            11 => 9,
            22 => 10,
            33 => 11,
            n => (n - 1) as usize,
        }
    }
}

impl TryFrom<u8> for DigitalRoot {
    type Error = ScannerError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1..=9 | 11 | 22 | 33 => Ok(DigitalRoot(value)),
            other => Err(ScannerError::InvalidNumber(other as u64)),
        }
    }
}

impl From<DigitalRoot> for u8 {
    fn from(root: DigitalRoot) -> u8 {
        root.0
    }
}

impl fmt::Display for DigitalRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Reduce any integer, rejecting 0.
pub fn reduce_digits(n: u64) -> Result<DigitalRoot> {
    let n = NonZeroU64::new(n).ok_or(ScannerError::NonPositive(n))?;
    Ok(DigitalRoot::reduce(n))
}

/// Parse decimal text and reduce it. Signs and fractions are rejected.
pub fn reduce_str(text: &str) -> Result<DigitalRoot> {
    let n: u64 = text
        .trim()
        .parse()
        .map_err(|_| ScannerError::NotANumber(text.trim().to_string()))?;
    reduce_digits(n)
}

/// Sum of base-10 digits
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

fn is_master(n: u64) -> bool {
    MASTER_NUMBERS.iter().any(|&m| m as u64 == n)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits_are_fixed_points() {
        for n in 1..=9 {
            assert_eq!(reduce_digits(n).unwrap().value(), n as u8);
        }
    }

    #[test]
    fn test_master_numbers_are_fixed_points() {
        for m in MASTER_NUMBERS {
            let root = reduce_digits(m as u64).unwrap();
            assert_eq!(root.value(), m);
            assert!(root.is_master());
        }
    }

    #[test]
    fn test_stops_at_transient_master() {
        // 29 -> 11, not 2
        assert_eq!(reduce_digits(29).unwrap().value(), 11);
        // 499 -> 22, not 4
        assert_eq!(reduce_digits(499).unwrap().value(), 22);
        // 6999 -> 33, not 6
        assert_eq!(reduce_digits(6999).unwrap().value(), 33);
        // 38 -> 11
        assert_eq!(reduce_digits(38).unwrap().value(), 11);
    }

    #[test]
    fn test_multi_step_reduction() {
        assert_eq!(reduce_digits(31).unwrap().value(), 4);
        assert_eq!(reduce_digits(15).unwrap().value(), 6);
        // 99999 -> 45 -> 9
        assert_eq!(reduce_digits(99999).unwrap().value(), 9);
        // 10 -> 1
        assert_eq!(reduce_digits(10).unwrap().value(), 1);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(matches!(reduce_digits(0), Err(ScannerError::NonPositive(0))));
    }

    #[test]
    fn test_reduce_str() {
        assert_eq!(reduce_str(" 29 ").unwrap().value(), 11);
        assert!(matches!(reduce_str("0"), Err(ScannerError::NonPositive(0))));
        assert!(matches!(reduce_str("-5"), Err(ScannerError::NotANumber(_))));
        assert!(matches!(reduce_str("4.5"), Err(ScannerError::NotANumber(_))));
    }

    #[test]
    fn test_try_from_closed_domain() {
        assert!(DigitalRoot::try_from(7).is_ok());
        assert!(DigitalRoot::try_from(22).is_ok());
        assert!(DigitalRoot::try_from(0).is_err());
        assert!(DigitalRoot::try_from(10).is_err());
        assert!(DigitalRoot::try_from(44).is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, root) in DigitalRoot::ALL.iter().enumerate() {
            assert_eq!(root.index(), i);
        }
    }

    #[test]
    fn test_serde_as_plain_number() {
        let root = reduce_digits(29).unwrap();
        assert_eq!(serde_json::to_string(&root).unwrap(), "11");

        let parsed: DigitalRoot = serde_json::from_str("33").unwrap();
        assert_eq!(parsed.value(), 33);
        assert!(serde_json::from_str::<DigitalRoot>("12").is_err());
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(571990), 31);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
    }
}
