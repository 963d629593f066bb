//! Property-based tests for checksum validation and generation.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(all(feature = "cpf", feature = "voter"))]

use cadastro::voter::Uf;
use cadastro::{DocumentError, WeightWindow, cpf, voter, weighted_sum};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// A valid CPF derived from a seed.
fn arb_cpf() -> impl Strategy<Value = String> {
    any::<u64>().prop_map(|seed| cpf::generate_with(&mut StdRng::seed_from_u64(seed)).unwrap())
}

fn arb_uf() -> impl Strategy<Value = Uf> {
    (0..Uf::ALL.len()).prop_map(|i| Uf::ALL[i])
}

fn replace_digit(doc: &str, pos: usize, digit: u8) -> String {
    let mut bytes = doc.as_bytes().to_vec();
    bytes[pos] = b'0' + digit;
    String::from_utf8(bytes).unwrap()
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Every generated CPF validates and formats as ddd.ddd.ddd-dd.
    #[test]
    fn generated_cpf_validates_and_formats(doc in arb_cpf()) {
        prop_assert!(cpf::validate(&doc).is_ok());
        let formatted = cpf::format(&doc).unwrap();
        let b = formatted.as_bytes();
        prop_assert_eq!(b.len(), 14);
        for (i, c) in b.iter().enumerate() {
            match i {
                3 | 7 => prop_assert_eq!(*c, b'.'),
                11 => prop_assert_eq!(*c, b'-'),
                _ => prop_assert!(c.is_ascii_digit()),
            }
        }
    }

    /// Changing either check digit is always detected.
    #[test]
    fn cpf_check_digit_corruption_detected(doc in arb_cpf(), pos in 9usize..11, delta in 1u8..10) {
        let original = doc.as_bytes()[pos] - b'0';
        let corrupted = replace_digit(&doc, pos, (original + delta) % 10);
        let is_mismatch = matches!(
            cpf::validate(&corrupted),
            Err(DocumentError::ChecksumMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    /// Changing a base digit is detected whenever the first sum's remainder
    /// maps to a unique check digit (remainder 0 and 1 both map to 0).
    #[test]
    fn cpf_base_corruption_detected(doc in arb_cpf(), pos in 0usize..9, delta in 1u8..10) {
        let digits: Vec<u8> = doc.bytes().map(|b| b - b'0').collect();
        let sum = weighted_sum(&digits[..9], WeightWindow::descending(10, 2)).unwrap();
        prop_assume!(sum % 11 >= 2);

        let corrupted = replace_digit(&doc, pos, (digits[pos] + delta) % 10);
        let is_mismatch = matches!(
            cpf::validate(&corrupted),
            Err(DocumentError::ChecksumMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    /// Any digit string of the wrong length is rejected with InvalidLength.
    #[test]
    fn wrong_length_rejected(s in "[0-9]{0,20}") {
        if s.len() != 11 {
            let is_length = matches!(cpf::validate(&s), Err(DocumentError::InvalidLength { .. }));
            prop_assert!(is_length);
        }
        if s.len() != 12 {
            let is_length = matches!(voter::validate(&s), Err(DocumentError::InvalidLength { .. }));
            prop_assert!(is_length);
        }
    }

    /// Validation never panics on arbitrary input.
    #[test]
    fn validate_never_panics(s in ".*") {
        let _ = cpf::validate(&s);
        let _ = voter::validate(&s);
        let _ = cpf::format(&s);
    }

    /// Generated voter registrations validate and decode to the requested UF.
    #[test]
    fn generated_voter_round_trips_uf(uf in arb_uf(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let doc = voter::generate_with(&mut rng, Some(uf.as_str())).unwrap();
        prop_assert!(voter::validate(&doc).is_ok());
        prop_assert_eq!(voter::region_of(&doc).unwrap(), uf);
    }
}
