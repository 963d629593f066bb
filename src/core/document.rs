//! Data-driven description of a weighted-checksum document.
//!
//! A [`DocumentSpec`] lists the digit length, the check-digit rules in the
//! order they must be computed, and an optional region field validated
//! against a side table. Validation and generation are written once here
//! and shared by every document type.

use std::ops::Range;

use super::error::{DocumentError, Result};
use super::random::DigitSource;
use super::weights::{Reduction, WeightWindow, weighted_sum};

/// One check digit: which digits feed it, how they are weighted and reduced,
/// and where the result lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDigitRule {
    /// Source digits (may include check digits computed by earlier rules).
    pub block: Range<usize>,
    pub window: WeightWindow,
    pub reduction: Reduction,
    /// Zero-based index of the check digit.
    pub position: usize,
}

/// A block of digits that must resolve through a lookup table.
#[derive(Debug, Clone)]
pub struct RegionField {
    pub block: Range<usize>,
    /// Returns true if the numeric code is present in the table.
    pub is_known: fn(&str) -> bool,
}

/// Layout of a fixed-length document protected by weighted check digits.
#[derive(Debug, Clone)]
pub struct DocumentSpec {
    /// Short human-readable name, used in log events.
    pub name: &'static str,
    /// Number of digits once separators are removed.
    pub length: usize,
    /// Check-digit rules, in computation order.
    pub rules: &'static [CheckDigitRule],
    pub region: Option<RegionField>,
}

/// Strip every character that is not an ASCII digit.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

impl DocumentSpec {
    /// Normalize `raw` and return its digits, checking only the length.
    pub fn parse(&self, raw: &str) -> Result<Vec<u8>> {
        let digits: Vec<u8> = clean(raw).bytes().map(|b| b - b'0').collect();
        if digits.len() != self.length {
            return Err(DocumentError::InvalidLength {
                expected: self.length,
                found: digits.len(),
            });
        }
        Ok(digits)
    }

    /// Normalize and fully validate `raw`, returning its digits on success.
    pub fn validate(&self, raw: &str) -> Result<Vec<u8>> {
        let digits = self.parse(raw)?;
        self.validate_digits(&digits)?;
        Ok(digits)
    }

    /// Validate an already-normalized digit sequence.
    ///
    /// Every value must be in `0..=9`.
    pub fn validate_digits(&self, digits: &[u8]) -> Result<()> {
        if digits.len() != self.length {
            return Err(DocumentError::InvalidLength {
                expected: self.length,
                found: digits.len(),
            });
        }
        if let Some((position, &value)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(DocumentError::NotADigit { position, value });
        }

        if let Some(region) = &self.region {
            let code = digits_to_string(&digits[region.block.clone()]);
            if !(region.is_known)(&code) {
                return Err(DocumentError::UnknownRegion(code));
            }
        }

        for rule in self.rules {
            let expected = self.check_digit(digits, rule)?;
            let found = digits[rule.position];
            if expected != found {
                return Err(DocumentError::ChecksumMismatch {
                    position: rule.position,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Compute the check digit `rule` prescribes for `digits`.
    pub fn check_digit(&self, digits: &[u8], rule: &CheckDigitRule) -> Result<u8> {
        let block = digits
            .get(rule.block.clone())
            .ok_or_else(|| DocumentError::InvariantViolation(format!(
                "{}: rule block {:?} outside {} digits",
                self.name,
                rule.block,
                digits.len()
            )))?;
        let sum = weighted_sum(block, rule.window)?;
        Ok(rule.reduction.apply(sum))
    }

    /// Generate a document satisfying every rule.
    ///
    /// Free positions are drawn from `source`; the region block (if the
    /// layout has one) is filled with `region_code`, which must be known to
    /// the table. The result is re-validated before it is returned.
    pub fn generate<S: DigitSource + ?Sized>(
        &self,
        source: &mut S,
        region_code: Option<&str>,
    ) -> Result<String> {
        let mut digits = vec![0u8; self.length];

        let reserved = |i: usize| {
            self.rules.iter().any(|r| r.position == i)
                || self.region.as_ref().is_some_and(|f| f.block.contains(&i))
        };
        let free: Vec<usize> = (0..self.length).filter(|&i| !reserved(i)).collect();
        for (i, d) in free.iter().zip(source.digits(free.len())) {
            digits[*i] = d;
        }

        match (&self.region, region_code) {
            (Some(field), Some(code)) => {
                let code_digits: Vec<u8> = code.bytes().map(|b| b.wrapping_sub(b'0')).collect();
                if code_digits.len() != field.block.len()
                    || code_digits.iter().any(|&d| d > 9)
                    || !(field.is_known)(code)
                {
                    return Err(DocumentError::UnknownRegion(code.to_string()));
                }
                digits[field.block.clone()].copy_from_slice(&code_digits);
            }
            (Some(_), None) => return Err(DocumentError::UnknownRegion(String::new())),
            (None, Some(code)) => {
                return Err(DocumentError::InvariantViolation(format!(
                    "{} has no region field, got region code '{code}'",
                    self.name
                )));
            }
            (None, None) => {}
        }

        for rule in self.rules {
            digits[rule.position] = self.check_digit(&digits, rule)?;
        }

        let document = digits_to_string(&digits);
        if let Err(err) = self.validate_digits(&digits) {
            tracing::error!(kind = self.name, %document, %err, "generated document failed re-validation");
            return Err(DocumentError::InvariantViolation(format!(
                "generated {} {document} is invalid: {err}",
                self.name
            )));
        }

        tracing::debug!(kind = self.name, region = region_code, "generated document");
        Ok(document)
    }
}
