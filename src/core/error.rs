use thiserror::Error;

/// Errors that can occur while validating or generating a document number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// Digit count after stripping separators does not match the document length.
    #[error("invalid length: expected {expected} digits, got {found}")]
    InvalidLength { expected: usize, found: usize },

    /// A computed check digit disagrees with the digit found in the input.
    #[error("check digit mismatch at position {position}: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// Zero-based index of the check digit.
        position: usize,
        expected: u8,
        found: u8,
    },

    /// A digit sequence holds a value outside `0..=9`.
    #[error("value {value} at position {position} is not a decimal digit")]
    NotADigit { position: usize, value: u8 },

    /// Region code (numeric or UF letters) is not in the region table.
    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    /// Weighted sum requested over an empty digit block.
    #[error("cannot weight an empty digit sequence")]
    EmptyInput,

    /// Weight window whose first weight exceeds its last.
    #[error("invalid weight range {first}..={last}")]
    InvalidWeightRange { first: u32, last: u32 },

    /// A generated document failed its own re-validation.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// CPF operations report the shared document error.
pub type CpfError = DocumentError;

/// Voter registration operations report the shared document error.
pub type VoterError = DocumentError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocumentError>;
