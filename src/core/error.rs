use std::fmt;

use bitflags::bitflags;
use serde::Serialize;
use thiserror::Error;

/// Misconfiguration of the validation machinery.
///
/// These are never the result of bad payment data. They mean the caller
/// wired the crate up incorrectly and should not be handled like a
/// validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A rule for this country is already registered.
    #[error("validation for country {0} already defined")]
    DuplicateCountry(String),

    /// A rule was registered under a key that differs from its own country.
    #[error("rule for country {rule} cannot be registered as {requested}")]
    CountryMismatch { requested: String, rule: String },

    /// No built-in rule exists for the requested country.
    #[error("no built-in validation rule for country {0}")]
    UnknownRule(String),

    /// The error-message catalog could not be read.
    #[error("invalid error message catalog: {0}")]
    Catalog(String),
}

/// Errors returned by IBAN validation. The pipeline stops at the first failing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IbanError {
    /// No rule is registered for the country prefix, or the prefix differs from the rule's country.
    #[error("the country code of the IBAN is not supported")]
    InvalidCountry,
    /// Character count differs from the country's IBAN length.
    #[error("invalid length of the IBAN")]
    InvalidLength,
    /// A character violates the country's IBAN grammar.
    #[error("the IBAN contains invalid characters")]
    InvalidFormat,
    /// Check digits do not match the MOD 97-10 result.
    #[error("invalid IBAN checksum")]
    Checksum,
}

impl IbanError {
    /// Stable numeric code used by the message catalog.
    pub fn code(self) -> u16 {
        match self {
            Self::InvalidCountry => 1,
            Self::InvalidLength => 2,
            Self::InvalidFormat => 3,
            Self::Checksum => 4,
        }
    }
}

/// Errors returned by BIC validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BicError {
    /// Not 4 letters, a 2-letter country, 2 alphanumerics and an optional 3-character branch.
    #[error("invalid BIC")]
    InvalidFormat,
    /// The country at positions 5 and 6 has no registered rule, or differs from the rule's country.
    #[error("the country code of the BIC is not supported")]
    InvalidCountry,
}

impl BicError {
    pub fn code(self) -> u16 {
        match self {
            Self::InvalidFormat => 10,
            Self::InvalidCountry => 11,
        }
    }
}

/// Errors returned by Creditor Identifier validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CiError {
    /// No rule is registered for the country prefix, or the prefix differs from the rule's country.
    #[error("the country code of the CI is not supported")]
    InvalidCountry,
    /// Character count is not one of the country's CI lengths.
    #[error("invalid length of the CI")]
    InvalidLength,
    /// A character violates the country's CI grammar.
    #[error("the CI contains invalid characters")]
    InvalidFormat,
    /// Check digits do not match the MOD 97-10 result over the body after the business code.
    #[error("invalid CI checksum")]
    Checksum,
}

impl CiError {
    pub fn code(self) -> u16 {
        match self {
            Self::InvalidCountry => 20,
            Self::InvalidLength => 21,
            Self::InvalidFormat => 22,
            Self::Checksum => 23,
        }
    }
}

/// Umbrella error for callers that want a single `?`-able type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SepaError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Iban(#[from] IbanError),
    #[error(transparent)]
    Bic(#[from] BicError),
    #[error(transparent)]
    Ci(#[from] CiError),
    #[error("payment instruction rejected: {0}")]
    PaymentInfo(PmtInfErrors),
    #[error("transaction rejected: {0}")]
    Transaction(TxErrors),
}

bitflags! {
    /// Accumulated payment-instruction validation failures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    #[serde(transparent)]
    pub struct PmtInfErrors: u16 {
        const NAME_MISSING = 0x0001;
        const IBAN_MISSING = 0x0002;
        const BIC_MISSING = 0x0004;
        const CI_MISSING = 0x0008;
        const INVALID_IBAN = 0x0010;
        const INVALID_BIC = 0x0020;
        const INVALID_CI = 0x0040;
        const SEQ_TYPE_MISSING = 0x0080;
        const INVALID_SEQ_TYPE = 0x0100;
    }
}

bitflags! {
    /// Accumulated transaction validation failures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    #[serde(transparent)]
    pub struct TxErrors: u16 {
        const NAME_MISSING = 0x0001;
        const IBAN_MISSING = 0x0002;
        const BIC_MISSING = 0x0004;
        const INVALID_IBAN = 0x0010;
        const INVALID_BIC = 0x0020;
        const MANDATE_ID_MISSING = 0x0200;
        const MANDATE_DATE_MISSING = 0x0400;
        const DESCRIPTION_MISSING = 0x0800;
        const ZERO_VALUE = 0x1000;
        /// Transaction type differs from the owning document.
        const INVALID_TYPE = 0x2000;
        const INVALID_MANDATE_DATE = 0x4000;
        /// Accepting the value would overflow the control sum.
        const VALUE_OVERFLOW = 0x8000;
    }
}

macro_rules! mask_helpers {
    ($($name:ident),*) => {$(
        impl $name {
            pub const OK: Self = Self::empty();

            /// Build a mask from its raw bits. Unknown bits are kept.
            pub fn from_code(code: u16) -> Self {
                Self::from_bits_retain(code)
            }

            /// Raw bit value.
            pub fn code(self) -> u16 {
                self.bits()
            }

            pub fn is_ok(self) -> bool {
                self.is_empty()
            }

            /// Convert to `Ok(())` when no bit is set.
            pub fn into_result(self) -> Result<(), Self> {
                if self.is_ok() { Ok(()) } else { Err(self) }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::OK
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_ok() {
                    return f.write_str("OK");
                }
                let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
                write!(f, "{} (0x{:04X})", names.join(" | "), self.bits())
            }
        }

        impl std::error::Error for $name {}
    )*};
}

mask_helpers!(PmtInfErrors, TxErrors);
