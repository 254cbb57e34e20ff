use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Payment kind of a document. Fixed for the lifetime of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// SEPA credit transfer (pain.001).
    #[serde(rename = "TRF")]
    CreditTransfer,
    /// SEPA core direct debit (pain.008).
    #[serde(rename = "DD")]
    DirectDebit,
}

impl TransactionType {
    /// Payment method code written into the instruction block.
    pub fn code(self) -> &'static str {
        match self {
            Self::CreditTransfer => "TRF",
            Self::DirectDebit => "DD",
        }
    }

    /// Root element below `Document` for this payment kind.
    pub fn root_element(self) -> &'static str {
        match self {
            Self::CreditTransfer => "CstmrCdtTrfInitn",
            Self::DirectDebit => "CstmrDrctDbtInitn",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Direct-debit sequence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceType {
    #[serde(rename = "FRST")]
    First,
    #[serde(rename = "RCUR")]
    Recurring,
    #[serde(rename = "OOFF")]
    OneOff,
    #[serde(rename = "FNAL")]
    Final,
}

impl SequenceType {
    pub fn code(self) -> &'static str {
        match self {
            Self::First => "FRST",
            Self::Recurring => "RCUR",
            Self::OneOff => "OOFF",
            Self::Final => "FNAL",
        }
    }

    /// Parse a sequence type code (`FRST`, `RCUR`, `OOFF`, `FNAL`). Case sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FRST" => Some(Self::First),
            "RCUR" => Some(Self::Recurring),
            "OOFF" => Some(Self::OneOff),
            "FNAL" => Some(Self::Final),
            _ => None,
        }
    }

    /// Number of TARGET2 business days between submission and collection.
    pub fn lead_days(self) -> u32 {
        match self {
            Self::Recurring => 3,
            Self::First | Self::OneOff | Self::Final => 6,
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// SEPA protocol version. Only affects the emitted schema identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SepaVersion {
    /// Version 2.6 (2012).
    V26,
    /// Version 2.9 (2015).
    V29,
    /// Version 3.0 (2016).
    #[default]
    V30,
}

impl SepaVersion {
    /// pain message identifier, e.g. `pain.008.001.02`.
    pub fn pain_version(self, kind: TransactionType) -> &'static str {
        use TransactionType::*;
        match (self, kind) {
            (Self::V26, CreditTransfer) => "pain.001.002.03",
            (Self::V26, DirectDebit) => "pain.008.002.02",
            (Self::V29, CreditTransfer) => "pain.001.003.03",
            (Self::V29, DirectDebit) => "pain.008.003.02",
            (Self::V30, CreditTransfer) => "pain.001.001.03",
            (Self::V30, DirectDebit) => "pain.008.001.02",
        }
    }

    /// XML namespace of the pain message.
    pub fn namespace(self, kind: TransactionType) -> String {
        format!("urn:iso:std:iso:20022:tech:xsd:{}", self.pain_version(kind))
    }

    /// Year the version was published.
    pub fn year(self) -> u16 {
        match self {
            Self::V26 => 2012,
            Self::V29 => 2015,
            Self::V30 => 2016,
        }
    }
}

bitflags! {
    /// Bit flags selecting which checks to bypass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ValidationLevel: u16 {
        const NO_IBAN = 0x0001;
        const NO_BIC = 0x0002;
        const NO_CI = 0x0004;
        /// Accept identifiers of countries without a registered rule.
        const IGNORE_MISSING_COUNTRY = 0x0008;
        /// Do not report missing mandatory values.
        const IGNORE_MISSING_VALUE = 0x0010;
        /// No validation at all.
        const NONE = Self::NO_IBAN.bits()
            | Self::NO_BIC.bits()
            | Self::NO_CI.bits()
            | Self::IGNORE_MISSING_COUNTRY.bits()
            | Self::IGNORE_MISSING_VALUE.bits();
    }
}

impl ValidationLevel {
    /// Full validation.
    pub const FULL: Self = Self::empty();

    /// True if any bit of `flag` is set.
    pub fn skips(self, flag: Self) -> bool {
        self.intersects(flag)
    }
}

impl Default for ValidationLevel {
    fn default() -> Self {
        Self::FULL
    }
}
