//! Unidades Federativas and their Título de Eleitor region codes.
//!
//! 27 federative units plus `ZZ` (registrations made abroad). The pairing
//! is a fixed bijection stored as a constant table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::DocumentError;

/// Brazilian federative unit as used in voter registration numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Uf {
    Sp,
    Mg,
    Rj,
    Rs,
    Ba,
    Pr,
    Ce,
    Pe,
    Sc,
    Go,
    Ma,
    Pb,
    Pa,
    Es,
    Pi,
    Rn,
    Al,
    Ms,
    Mt,
    Df,
    Se,
    Am,
    Ro,
    Ac,
    Ap,
    Rr,
    To,
    /// Registrations of voters living abroad.
    Zz,
}

/// (UF, letters, numeric code), ordered by numeric code.
static TABLE: &[(Uf, &str, &str)] = &[
    (Uf::Sp, "SP", "01"),
    (Uf::Mg, "MG", "02"),
    (Uf::Rj, "RJ", "03"),
    (Uf::Rs, "RS", "04"),
    (Uf::Ba, "BA", "05"),
    (Uf::Pr, "PR", "06"),
    (Uf::Ce, "CE", "07"),
    (Uf::Pe, "PE", "08"),
    (Uf::Sc, "SC", "09"),
    (Uf::Go, "GO", "10"),
    (Uf::Ma, "MA", "11"),
    (Uf::Pb, "PB", "12"),
    (Uf::Pa, "PA", "13"),
    (Uf::Es, "ES", "14"),
    (Uf::Pi, "PI", "15"),
    (Uf::Rn, "RN", "16"),
    (Uf::Al, "AL", "17"),
    (Uf::Ms, "MS", "18"),
    (Uf::Mt, "MT", "19"),
    (Uf::Df, "DF", "20"),
    (Uf::Se, "SE", "21"),
    (Uf::Am, "AM", "22"),
    (Uf::Ro, "RO", "23"),
    (Uf::Ac, "AC", "24"),
    (Uf::Ap, "AP", "25"),
    (Uf::Rr, "RR", "26"),
    (Uf::To, "TO", "27"),
    (Uf::Zz, "ZZ", "28"),
];

impl Uf {
    /// Every UF, ordered by numeric code.
    pub const ALL: [Uf; 28] = [
        Uf::Sp,
        Uf::Mg,
        Uf::Rj,
        Uf::Rs,
        Uf::Ba,
        Uf::Pr,
        Uf::Ce,
        Uf::Pe,
        Uf::Sc,
        Uf::Go,
        Uf::Ma,
        Uf::Pb,
        Uf::Pa,
        Uf::Es,
        Uf::Pi,
        Uf::Rn,
        Uf::Al,
        Uf::Ms,
        Uf::Mt,
        Uf::Df,
        Uf::Se,
        Uf::Am,
        Uf::Ro,
        Uf::Ac,
        Uf::Ap,
        Uf::Rr,
        Uf::To,
        Uf::Zz,
    ];

    fn entry(self) -> &'static (Uf, &'static str, &'static str) {
        // ALL and TABLE share the same order, indexed by discriminant.
        &TABLE[self as usize]
    }

    /// Two-letter abbreviation, e.g. "SP".
    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// Two-digit region code embedded in voter registrations, e.g. "01".
    pub fn code(self) -> &'static str {
        self.entry().2
    }

    /// Look up a UF by its two-digit region code.
    pub fn from_code(code: &str) -> Option<Uf> {
        TABLE.iter().find(|(_, _, c)| *c == code).map(|(uf, _, _)| *uf)
    }

    /// Look up a UF by its two-letter abbreviation (case-insensitive).
    pub fn from_abbreviation(letters: &str) -> Option<Uf> {
        TABLE
            .iter()
            .find(|(_, l, _)| l.eq_ignore_ascii_case(letters.trim()))
            .map(|(uf, _, _)| *uf)
    }
}

/// Returns true if `code` is a known two-digit region code.
pub fn is_known_region_code(code: &str) -> bool {
    Uf::from_code(code).is_some()
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uf::from_abbreviation(s).ok_or_else(|| DocumentError::UnknownRegion(s.to_string()))
    }
}
