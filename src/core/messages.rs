//! Numeric error code → human-readable message lookup.
//!
//! The validation core only produces codes. Rendering them into prose is
//! the job of a [`MessageCatalog`], which ships with English and German
//! tables and can be replaced from JSON (feature `json`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{PmtInfErrors, TxErrors};

/// Localized error messages keyed by numeric code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageCatalog {
    pub iban: BTreeMap<u16, String>,
    pub bic: BTreeMap<u16, String>,
    pub ci: BTreeMap<u16, String>,
    pub payment_info: BTreeMap<u16, String>,
    pub transaction: BTreeMap<u16, String>,
}

fn table(entries: &[(u16, &str)]) -> BTreeMap<u16, String> {
    entries.iter().map(|(code, msg)| (*code, msg.to_string())).collect()
}

impl MessageCatalog {
    /// Built-in English messages.
    pub fn english() -> Self {
        Self {
            iban: table(&[
                (1, "The country code of the IBAN is not supported!"),
                (2, "Invalid length of the IBAN!"),
                (3, "The IBAN contains invalid characters!"),
                (4, "Invalid IBAN checksum!"),
            ]),
            bic: table(&[
                (10, "Invalid BIC!"),
                (11, "The country code of the BIC is not supported!"),
            ]),
            ci: table(&[
                (20, "The country code of the CI is not supported!"),
                (21, "Invalid length of the CI!"),
                (22, "The CI contains invalid characters!"),
                (23, "Invalid CI checksum!"),
            ]),
            payment_info: table(&[
                (PmtInfErrors::NAME_MISSING.code(), "Name missing"),
                (PmtInfErrors::IBAN_MISSING.code(), "IBAN missing"),
                (PmtInfErrors::BIC_MISSING.code(), "BIC missing"),
                (PmtInfErrors::CI_MISSING.code(), "CI missing"),
                (PmtInfErrors::INVALID_IBAN.code(), "Invalid IBAN"),
                (PmtInfErrors::INVALID_BIC.code(), "Invalid BIC"),
                (PmtInfErrors::INVALID_CI.code(), "Invalid CI"),
                (PmtInfErrors::SEQ_TYPE_MISSING.code(), "Sequence type missing"),
                (PmtInfErrors::INVALID_SEQ_TYPE.code(), "Invalid sequence type"),
            ]),
            transaction: table(&[
                (TxErrors::NAME_MISSING.code(), "Name missing"),
                (TxErrors::IBAN_MISSING.code(), "IBAN missing"),
                (TxErrors::BIC_MISSING.code(), "BIC missing"),
                (TxErrors::INVALID_IBAN.code(), "Invalid IBAN"),
                (TxErrors::INVALID_BIC.code(), "Invalid BIC"),
                (TxErrors::MANDATE_ID_MISSING.code(), "SEPA mandate missing"),
                (TxErrors::MANDATE_DATE_MISSING.code(), "Invalid date of the SEPA mandate"),
                (TxErrors::DESCRIPTION_MISSING.code(), "Usage text missing"),
                (TxErrors::ZERO_VALUE.code(), "The value is 0.0 EUR"),
                (TxErrors::INVALID_TYPE.code(), "Invalid transaction type"),
                (TxErrors::INVALID_MANDATE_DATE.code(), "Invalid date value"),
                (TxErrors::VALUE_OVERFLOW.code(), "The value exceeds the control sum range"),
            ]),
        }
    }

    /// Built-in German messages.
    pub fn german() -> Self {
        Self {
            iban: table(&[
                (1, "Der Ländercode der IBAN wird nicht unterstützt!"),
                (2, "Ungültige Länge der IBAN!"),
                (3, "Die IBAN enthält ungültige Zeichen!"),
                (4, "Ungültige Prüfsumme der IBAN!"),
            ]),
            bic: table(&[
                (10, "Ungültige BIC!"),
                (11, "Der Ländercode der BIC wird nicht unterstützt!"),
            ]),
            ci: table(&[
                (20, "Der Ländercode der Gläubiger-ID wird nicht unterstützt!"),
                (21, "Ungültige Länge der Gläubiger-ID!"),
                (22, "Die Gläubiger-ID enthält ungültige Zeichen!"),
                (23, "Ungültige Prüfsumme der Gläubiger-ID!"),
            ]),
            payment_info: table(&[
                (PmtInfErrors::NAME_MISSING.code(), "Name fehlt"),
                (PmtInfErrors::IBAN_MISSING.code(), "IBAN fehlt"),
                (PmtInfErrors::BIC_MISSING.code(), "BIC fehlt"),
                (PmtInfErrors::CI_MISSING.code(), "Gläubiger-ID fehlt"),
                (PmtInfErrors::INVALID_IBAN.code(), "Ungültige IBAN"),
                (PmtInfErrors::INVALID_BIC.code(), "Ungültige BIC"),
                (PmtInfErrors::INVALID_CI.code(), "Ungültige Gläubiger-ID"),
                (PmtInfErrors::SEQ_TYPE_MISSING.code(), "Sequenztyp fehlt"),
                (PmtInfErrors::INVALID_SEQ_TYPE.code(), "Ungültiger Sequenztyp"),
            ]),
            transaction: table(&[
                (TxErrors::NAME_MISSING.code(), "Name fehlt"),
                (TxErrors::IBAN_MISSING.code(), "IBAN fehlt"),
                (TxErrors::BIC_MISSING.code(), "BIC fehlt"),
                (TxErrors::INVALID_IBAN.code(), "Ungültige IBAN"),
                (TxErrors::INVALID_BIC.code(), "Ungültige BIC"),
                (TxErrors::MANDATE_ID_MISSING.code(), "SEPA-Mandat fehlt"),
                (TxErrors::MANDATE_DATE_MISSING.code(), "Datum des SEPA-Mandats fehlt"),
                (TxErrors::DESCRIPTION_MISSING.code(), "Verwendungszweck fehlt"),
                (TxErrors::ZERO_VALUE.code(), "Der Betrag ist 0,00 EUR"),
                (TxErrors::INVALID_TYPE.code(), "Ungültiger Transaktionstyp"),
                (TxErrors::INVALID_MANDATE_DATE.code(), "Ungültiges Datum"),
                (TxErrors::VALUE_OVERFLOW.code(), "Der Betrag überschreitet den Wertebereich der Kontrollsumme"),
            ]),
        }
    }

    /// Load a catalog from JSON.
    ///
    /// Every section is optional; missing sections stay empty. Keys are the
    /// numeric codes as strings:
    ///
    /// ```json
    /// { "iban": { "1": "..." }, "transaction": { "4096": "..." } }
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, super::error::ConfigError> {
        serde_json::from_str(json).map_err(|e| super::error::ConfigError::Catalog(e.to_string()))
    }

    /// Message for an IBAN, BIC or CI error code.
    pub fn identifier_message(&self, code: u16) -> String {
        self.iban
            .get(&code)
            .or_else(|| self.bic.get(&code))
            .or_else(|| self.ci.get(&code))
            .cloned()
            .unwrap_or_else(|| format!("unknown Error ({code})!"))
    }

    /// Messages for every bit set in a payment-instruction mask, joined by `separator`.
    pub fn payment_info_message(&self, errors: PmtInfErrors, separator: &str) -> String {
        join_mask(&self.payment_info, errors.code(), separator)
    }

    /// Messages for every bit set in a transaction mask, joined by `separator`.
    pub fn transaction_message(&self, errors: TxErrors, separator: &str) -> String {
        join_mask(&self.transaction, errors.code(), separator)
    }
}

fn join_mask(messages: &BTreeMap<u16, String>, mask: u16, separator: &str) -> String {
    (0..16)
        .map(|bit| 1u16 << bit)
        .filter(|flag| mask & flag != 0)
        .filter_map(|flag| messages.get(&flag).map(String::as_str))
        .collect::<Vec<_>>()
        .join(separator)
}
