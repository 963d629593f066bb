//! CPF (Cadastro de Pessoas Físicas).
//!
//! 11 digits: a 9-digit base followed by two modulo-11 check digits. The
//! first check digit weights the base 10 down to 2, the second weights the
//! base plus the first check digit 11 down to 2.
//!
//! # Example
//!
//! ```rust
//! use cadastro::cpf;
//!
//! assert!(cpf::validate("111.444.777-35").is_ok());
//! assert_eq!(cpf::format("11144477735").unwrap(), "111.444.777-35");
//!
//! let generated = cpf::generate().unwrap();
//! assert!(cpf::is_valid(&generated));
//! ```

use rand::Rng;

use crate::core::{CheckDigitRule, CpfError, DocumentSpec, Reduction, WeightWindow};

/// Digit count of a CPF.
pub const CPF_LENGTH: usize = 11;

static CPF_RULES: &[CheckDigitRule] = &[
    CheckDigitRule {
        block: 0..9,
        window: WeightWindow::descending(10, 2),
        reduction: Reduction::Modulo,
        position: 9,
    },
    CheckDigitRule {
        block: 0..10,
        window: WeightWindow::descending(11, 2),
        reduction: Reduction::Modulo,
        position: 10,
    },
];

/// Layout of a CPF.
pub static CPF_SPEC: DocumentSpec = DocumentSpec {
    name: "cpf",
    length: CPF_LENGTH,
    rules: CPF_RULES,
    region: None,
};

/// Validate a CPF. Dots, dashes and any other non-digits are ignored.
pub fn validate(raw: &str) -> Result<(), CpfError> {
    CPF_SPEC.validate(raw).map(|_| ())
}

/// Returns true if `raw` is a valid CPF.
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_ok()
}

/// Format a valid CPF as `ddd.ddd.ddd-dd`.
pub fn format(raw: &str) -> Result<String, CpfError> {
    let digits = CPF_SPEC.validate(raw)?;
    let mut out = String::with_capacity(14);
    for (i, d) in digits.iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(char::from(b'0' + d));
    }
    Ok(out)
}

/// Generate a random valid CPF (digits only) using the thread-local RNG.
pub fn generate() -> Result<String, CpfError> {
    generate_with(&mut rand::thread_rng())
}

/// Generate a random valid CPF from a caller-supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Result<String, CpfError> {
    CPF_SPEC.generate(rng, None)
}

/// Generate a random valid CPF already formatted as `ddd.ddd.ddd-dd`.
pub fn generate_formatted() -> Result<String, CpfError> {
    format(&generate()?)
}
