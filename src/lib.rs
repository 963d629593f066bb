//! # cadastro
//!
//! Validation, formatting and generation of Brazilian document numbers:
//! the CPF (individual taxpayer number, 11 digits) and the Título de
//! Eleitor (voter registration number, 12 digits).
//!
//! Both are weighted modulo-11 checksum documents. Their layouts are
//! described as data ([`core::DocumentSpec`]) and share one validator and
//! one generator.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::{cpf, voter};
//!
//! assert!(cpf::validate("111.444.777-35").is_ok());
//! assert!(cpf::validate("111.444.777-36").is_err());
//! assert_eq!(cpf::format("11144477735").unwrap(), "111.444.777-35");
//!
//! let titulo = voter::generate(Some("SP")).unwrap();
//! assert_eq!(voter::region_of(&titulo).unwrap(), voter::Uf::Sp);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Checksum arithmetic, document layouts, errors |
//! | `cpf` (default) | CPF validate/format/generate |
//! | `voter` (default) | Título de Eleitor validate/generate, UF table |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "cpf")]
pub mod cpf;

#[cfg(feature = "voter")]
pub mod voter;

#[cfg(all(feature = "cpf", feature = "voter"))]
mod kind;

#[cfg(all(feature = "cpf", feature = "voter"))]
pub use kind::{DocumentKind, validate_any};

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
