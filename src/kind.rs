//! Dispatch over the supported document types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{DocumentError, DocumentSpec, Result, clean};
use crate::{cpf, voter};

/// Supported Brazilian document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Cpf,
    VoterRegistration,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Cpf, DocumentKind::VoterRegistration];

    /// Checksum layout of this document type.
    pub fn spec(self) -> &'static DocumentSpec {
        match self {
            DocumentKind::Cpf => &cpf::CPF_SPEC,
            DocumentKind::VoterRegistration => &voter::VOTER_SPEC,
        }
    }

    /// Guess the document type from the digit count of `raw`.
    pub fn detect(raw: &str) -> Option<DocumentKind> {
        let len = clean(raw).len();
        Self::ALL.into_iter().find(|k| k.spec().length == len)
    }

    pub fn validate(self, raw: &str) -> Result<()> {
        match self {
            DocumentKind::Cpf => cpf::validate(raw),
            DocumentKind::VoterRegistration => voter::validate(raw),
        }
    }

    pub fn format(self, raw: &str) -> Result<String> {
        match self {
            DocumentKind::Cpf => cpf::format(raw),
            DocumentKind::VoterRegistration => voter::format(raw),
        }
    }

    /// Generate a random document. A voter registration picks any region.
    pub fn generate(self) -> Result<String> {
        match self {
            DocumentKind::Cpf => cpf::generate(),
            DocumentKind::VoterRegistration => voter::generate(None),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Cpf => f.write_str("CPF"),
            DocumentKind::VoterRegistration => f.write_str("Título de Eleitor"),
        }
    }
}

/// Detect the document type of `raw` and validate it.
///
/// When the digit count matches no document type, `InvalidLength` reports
/// the closest supported length (the shorter one on a tie).
pub fn validate_any(raw: &str) -> Result<DocumentKind> {
    let found = clean(raw).len();
    let kind = DocumentKind::detect(raw).ok_or_else(|| DocumentError::InvalidLength {
        expected: closest_length(found),
        found,
    })?;
    kind.validate(raw)?;
    Ok(kind)
}

fn closest_length(found: usize) -> usize {
    DocumentKind::ALL
        .iter()
        .map(|k| k.spec().length)
        .min_by_key(|&len| (len.abs_diff(found), len))
        .unwrap_or(cpf::CPF_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_by_length() {
        assert_eq!(DocumentKind::detect("111.444.777-35"), Some(DocumentKind::Cpf));
        assert_eq!(
            DocumentKind::detect("1234 5678 0127"),
            Some(DocumentKind::VoterRegistration)
        );
        assert_eq!(DocumentKind::detect("123"), None);
    }

    #[test]
    fn validate_any_dispatches() {
        assert_eq!(validate_any("111.444.777-35").unwrap(), DocumentKind::Cpf);
        assert_eq!(
            validate_any("123456780127").unwrap(),
            DocumentKind::VoterRegistration
        );
        assert_eq!(
            validate_any("12345"),
            Err(DocumentError::InvalidLength {
                expected: 11,
                found: 5
            })
        );
    }

    #[test]
    fn validate_any_reports_closest_length() {
        assert_eq!(
            validate_any("1234567890123"),
            Err(DocumentError::InvalidLength {
                expected: 12,
                found: 13
            })
        );
        assert_eq!(
            validate_any("1234567890"),
            Err(DocumentError::InvalidLength {
                expected: 11,
                found: 10
            })
        );
        assert_eq!(
            validate_any(""),
            Err(DocumentError::InvalidLength {
                expected: 11,
                found: 0
            })
        );
    }

    #[test]
    fn generate_each_kind() {
        for kind in DocumentKind::ALL {
            let doc = kind.generate().unwrap();
            assert_eq!(DocumentKind::detect(&doc), Some(kind));
            assert!(kind.validate(&doc).is_ok());
            assert!(kind.format(&doc).is_ok());
        }
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&DocumentKind::VoterRegistration).unwrap(),
            "\"voter-registration\""
        );
        assert_eq!(
            serde_json::from_str::<DocumentKind>("\"cpf\"").unwrap(),
            DocumentKind::Cpf
        );
    }
}
