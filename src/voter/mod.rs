//! Título de Eleitor (voter registration number).
//!
//! 12 digits: an 8-digit sequential block, a 2-digit region code
//! identifying the [`Uf`], and two check digits.
//!
//! ```text
//! 1 2 3 4 5 6 7 8 | 0 1 | 2 | 7
//! sequential        UF    dv1 dv2
//! ```
//!
//! # Example
//!
//! ```rust
//! use cadastro::voter::{self, Uf};
//!
//! assert!(voter::validate("1234 5678 0127").is_ok());
//! assert_eq!(voter::region_of("123456780127").unwrap(), Uf::Sp);
//!
//! let generated = voter::generate(Some("MG")).unwrap();
//! assert_eq!(voter::region_of(&generated).unwrap(), Uf::Mg);
//! ```

mod uf;

use rand::Rng;

pub use uf::{Uf, is_known_region_code};

use crate::core::{
    CheckDigitRule, DocumentSpec, Reduction, RegionField, VoterError, WeightWindow,
    digits_to_string,
};

/// Digit count of a voter registration.
pub const VOTER_LENGTH: usize = 12;

static VOTER_RULES: &[CheckDigitRule] = &[
    CheckDigitRule {
        block: 0..8,
        window: WeightWindow::ascending(2, 9),
        reduction: Reduction::Capped,
        position: 10,
    },
    CheckDigitRule {
        block: 8..11,
        window: WeightWindow::ascending(7, 9),
        reduction: Reduction::Capped,
        position: 11,
    },
];

/// Layout of a voter registration number.
pub static VOTER_SPEC: DocumentSpec = DocumentSpec {
    name: "voter registration",
    length: VOTER_LENGTH,
    rules: VOTER_RULES,
    region: Some(RegionField {
        block: 8..10,
        is_known: is_known_region_code,
    }),
};

/// Validate a voter registration number. Non-digit characters are ignored.
///
/// Checks length, then the region code, then both check digits.
pub fn validate(raw: &str) -> Result<(), VoterError> {
    VOTER_SPEC.validate(raw).map(|_| ())
}

/// Returns true if `raw` is a valid voter registration number.
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_ok()
}

/// Validate and return the federative unit encoded in the number.
pub fn region_of(raw: &str) -> Result<Uf, VoterError> {
    let digits = VOTER_SPEC.validate(raw)?;
    let code = digits_to_string(&digits[8..10]);
    Uf::from_code(&code).ok_or(VoterError::UnknownRegion(code))
}

/// Voter registrations have no established display grouping: a valid
/// number formats to an empty string. Invalid input reports its error.
pub fn format(raw: &str) -> Result<String, VoterError> {
    validate(raw)?;
    Ok(String::new())
}

/// Generate a random valid voter registration using the thread-local RNG.
///
/// `uf` is a two-letter abbreviation. Letters are case-insensitive and
/// surrounding whitespace is ignored, so `" sp "` selects São Paulo. `None`,
/// an empty or an all-whitespace string picks a region uniformly at random.
/// An abbreviation missing from the table fails with `UnknownRegion`.
pub fn generate(uf: Option<&str>) -> Result<String, VoterError> {
    generate_with(&mut rand::thread_rng(), uf)
}

/// Generate a random valid voter registration from a caller-supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, uf: Option<&str>) -> Result<String, VoterError> {
    let uf = match uf.map(str::trim).filter(|s| !s.is_empty()) {
        Some(letters) => letters.parse::<Uf>()?,
        None => Uf::ALL[rng.gen_range(0..Uf::ALL.len())],
    };
    VOTER_SPEC.generate(rng, Some(uf.code()))
}
