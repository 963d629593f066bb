//! Weighted modulo-11 check digit arithmetic.
//!
//! Both CPF and Título de Eleitor derive their check digits from
//! `Σ digit[i] * weight[i]`, reduced modulo 11. They differ in the weight
//! order (CPF descends, voter registration ascends) and in how the
//! remainder becomes a single digit.

use serde::{Deserialize, Serialize};

use super::error::{DocumentError, Result};

/// Order in which weights are handed out to digits, front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightOrder {
    /// First digit gets `first`, then `first + 1`, … up to `last`.
    Ascending,
    /// First digit gets `last`, then `last - 1`, … down to `first`.
    Descending,
}

/// Inclusive range of multipliers applied positionally to a digit block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightWindow {
    /// Smallest weight in the window.
    pub first: u32,
    /// Largest weight in the window.
    pub last: u32,
    pub order: WeightOrder,
}

impl WeightWindow {
    /// Weights `first, first + 1, …, last` applied front to back.
    pub const fn ascending(first: u32, last: u32) -> Self {
        Self {
            first,
            last,
            order: WeightOrder::Ascending,
        }
    }

    /// Weights `high, high - 1, …, low` applied front to back.
    pub const fn descending(high: u32, low: u32) -> Self {
        Self {
            first: low,
            last: high,
            order: WeightOrder::Descending,
        }
    }

    /// Number of weights in the window.
    pub const fn len(&self) -> usize {
        if self.first > self.last {
            0
        } else {
            (self.last - self.first + 1) as usize
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How a weighted sum is reduced to one check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reduction {
    /// `r < 2 → 0`, otherwise `11 - r`. Used by CPF.
    Modulo,
    /// `r < 2 || r > 9 → 0`, otherwise `11 - r`. Used by voter registration.
    Capped,
}

impl Reduction {
    /// Reduce `sum` to a check digit.
    pub fn apply(self, sum: u32) -> u8 {
        match self {
            Reduction::Modulo => check_digit_modulo(sum),
            Reduction::Capped => check_digit_capped(sum),
        }
    }
}

/// Compute `Σ digits[i] * weight[i]` over a weight window.
///
/// Weighting stops as soon as either the digits or the window run out, so a
/// block longer than the window leaves its trailing digits unweighted.
pub fn weighted_sum(digits: &[u8], window: WeightWindow) -> Result<u32> {
    if digits.is_empty() {
        return Err(DocumentError::EmptyInput);
    }
    if window.first > window.last {
        return Err(DocumentError::InvalidWeightRange {
            first: window.first,
            last: window.last,
        });
    }

    let sum: u32 = match window.order {
        WeightOrder::Ascending => digits
            .iter()
            .zip(window.first..=window.last)
            .map(|(&d, w)| u32::from(d) * w)
            .sum(),
        WeightOrder::Descending => digits
            .iter()
            .zip((window.first..=window.last).rev())
            .map(|(&d, w)| u32::from(d) * w)
            .sum(),
    };
    Ok(sum)
}

/// `r = sum mod 11`; `0` when `r < 2`, else `11 - r`.
pub fn check_digit_modulo(sum: u32) -> u8 {
    let r = (sum % 11) as u8;
    if r < 2 { 0 } else { 11 - r }
}

/// Like [`check_digit_modulo`] but remainder 10 also maps to `0`.
///
/// The two rules diverge only at `r == 10` (modulo yields `1`).
pub fn check_digit_capped(sum: u32) -> u8 {
    let r = (sum % 11) as u8;
    if !(2..=9).contains(&r) { 0 } else { 11 - r }
}
