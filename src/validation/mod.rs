//! IBAN, BIC and Creditor Identifier validation.
//!
//! A [`CountryRule`] describes one country's identifier layouts as data:
//! exact length, a character-class grammar and whether letters take part
//! in the MOD 97-10 checksum. Rules are collected in a [`Registry`] and
//! applied through the [`Validator`] facade, which also normalizes input
//! and honours the active [`ValidationLevel`](crate::core::ValidationLevel).

pub mod checksum;
mod countries;
mod registry;
mod rule;
mod validator;

pub use countries::DEFAULT_COUNTRIES;
pub use registry::Registry;
pub use rule::{CharClass, CiFormat, CountryRule, Grammar, IdentifierFormat, Segment, is_bic_format};
pub use validator::Validator;
