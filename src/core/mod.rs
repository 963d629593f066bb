//! Shared checksum machinery, errors and random digit source.
//!
//! Every document type in this crate is a [`DocumentSpec`]: a fixed digit
//! length plus weighted modulo-11 check-digit rules, optionally with a
//! region block resolved through a lookup table.

mod document;
mod error;
mod random;
mod weights;

pub use document::*;
pub use error::*;
pub use random::DigitSource;
pub use weights::*;
