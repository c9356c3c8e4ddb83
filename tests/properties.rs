//! Property-based tests for the digit reducer, the numerology core and the zodiac classifier

use destiny_scanner::{
    destiny_number, digit_sum, mulank, numerology_profile, power_number, reduce_digits,
    validate_month_day, zodiac_sign, DigitalRoot, ZodiacSign, MASTER_NUMBERS,
};
use proptest::prelude::*;

fn is_master(v: u64) -> bool {
    MASTER_NUMBERS.iter().any(|&m| m as u64 == v)
}

/// Plain digit-sum chain down to a single digit, ignoring masters
fn digit_sum_chain(mut n: u64) -> Vec<u64> {
    let mut chain = vec![n];
    while n > 9 {
        n = digit_sum(n);
        chain.push(n);
    }
    chain
}

fn date_strategy() -> impl Strategy<Value = (i32, u32, u32)> {
    (1i32..=9999, 1u32..=12, 1u32..=28)
}

/// Property: a reduction ends in 1..9 unless a master number shows up along the way.
#[test]
fn prop_reduction_lands_in_single_digits_without_masters() {
    proptest!(|(n in 10u64..=999_999)| {
        prop_assume!(!is_master(n));

        let root = reduce_digits(n).unwrap().value() as u64;
        let first_master = digit_sum_chain(n).into_iter().find(|&v| is_master(v));

        match first_master {
            // The reducer stops at the first master it meets
            Some(master) => prop_assert_eq!(root, master),
            None => prop_assert!((1..=9).contains(&root), "{} reduced to {}", n, root),
        }
    });
}

/// Property: the result always stays in the closed domain and keeps n's residue mod 9.
#[test]
fn prop_reduction_preserves_residue() {
    proptest!(|(n in 1u64..=u64::MAX / 2)| {
        let root = reduce_digits(n).unwrap();
        prop_assert!(DigitalRoot::ALL.contains(&root));
        prop_assert_eq!(root.value() as u64 % 9, n % 9);
    });
}

/// Property: reducing a root again changes nothing.
#[test]
fn prop_reduction_is_idempotent() {
    proptest!(|(n in 1u64..=10_000_000)| {
        let once = reduce_digits(n).unwrap();
        let twice = reduce_digits(once.value() as u64).unwrap();
        prop_assert_eq!(once, twice);
    });
}

#[test]
fn test_master_numbers_are_fixed() {
    for m in MASTER_NUMBERS {
        assert_eq!(reduce_digits(m as u64).unwrap().value(), m);
    }
}

/// Property: the destiny number depends on the date alone.
#[test]
fn prop_destiny_number_is_deterministic() {
    proptest!(|((year, month, day) in date_strategy())| {
        let a = destiny_number(year, month, day).unwrap();
        let b = destiny_number(year, month, day).unwrap();
        prop_assert_eq!(a, b);
    });
}

/// Property: any valid date yields a complete profile.
#[test]
fn prop_profile_is_complete() {
    proptest!(|((year, month, day) in date_strategy())| {
        let profile = numerology_profile(year, month, day).unwrap();

        prop_assert_eq!(profile.mulank.number, mulank(day).unwrap());
        prop_assert_eq!(
            profile.power_number.number,
            power_number(profile.mulank.number, profile.bhagyank.number)
        );
        prop_assert!(!profile.bhagyank.meaning.is_empty());
        prop_assert!(!profile.career_paths.is_empty());
        prop_assert!(!profile.health_traits.is_empty());
        prop_assert!(!profile.compatible_numbers.is_empty());
    });
}

/// Property: every valid (month, day) falls in exactly one sign range.
#[test]
fn prop_zodiac_partitions_the_year() {
    proptest!(|(month in 1u32..=12, day in 1u32..=31)| {
        let valid = validate_month_day(month, day).is_ok();
        let result = zodiac_sign(month, day);
        prop_assert_eq!(result.is_ok(), valid);

        if let Ok(record) = result {
            let covering = ZodiacSign::ALL
                .iter()
                .filter(|s| s.record().contains(month, day))
                .count();
            prop_assert_eq!(covering, 1);
            prop_assert!(record.contains(month, day));
        }
    });
}

#[test]
fn test_reference_values() {
    assert_eq!(destiny_number(1990, 5, 7).unwrap().value(), 4);
    assert_eq!(mulank(29).unwrap().value(), 11);

    assert_eq!(zodiac_sign(4, 19).unwrap().sign, ZodiacSign::Aries);
    assert_eq!(zodiac_sign(4, 20).unwrap().sign, ZodiacSign::Taurus);
    assert_eq!(zodiac_sign(2, 19).unwrap().sign, ZodiacSign::Pisces);
    assert_eq!(zodiac_sign(3, 20).unwrap().sign, ZodiacSign::Pisces);
    assert_eq!(zodiac_sign(3, 21).unwrap().sign, ZodiacSign::Aries);

    let eleven = DigitalRoot::try_from(11).unwrap();
    let four = DigitalRoot::try_from(4).unwrap();
    assert_eq!(power_number(eleven, four).value(), 6);
}
