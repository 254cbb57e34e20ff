use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{TextKind, TransactionType, TxErrors, ValidationLevel, create_uid, format_amount, valid_string};
use crate::validation::Validator;

/// Payment id of credit transfers. The receiving institution assigns the real one.
pub const NOT_PROVIDED: &str = "NOTPROVIDED";

/// A single credit transfer or direct debit.
///
/// Built with [`TransactionBuilder`], which cleans free text to the SEPA
/// character set. Fields stay public so values can be fixed up before the
/// transaction is handed to an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Must match the type of the document the transaction is added to.
    pub kind: TransactionType,
    /// Debtor (direct debit) or creditor (transfer) name.
    pub name: String,
    pub iban: String,
    pub bic: String,
    /// Amount in EUR. Must be positive.
    pub value: Decimal,
    /// Remittance information.
    pub description: String,
    /// Direct debit only.
    pub mandate_id: String,
    /// Direct debit only, `YYYY-MM-DD`.
    pub date_of_signature: String,
    /// Ultimate debtor or creditor, informational.
    pub ultimate_name: String,
    /// End-to-end id. Generated on successful validation when empty.
    pub payment_id: String,
    /// ISO 20022 ExternalPurpose1Code, not checked.
    pub purpose: String,
}

impl Transaction {
    pub fn builder(kind: TransactionType) -> TransactionBuilder {
        TransactionBuilder::new(kind)
    }

    /// Run every transaction check and collect the failures.
    ///
    /// IBAN and BIC are normalized in place. On success a missing payment id
    /// is generated: a fresh uid for direct debits, [`NOT_PROVIDED`] for
    /// transfers.
    pub fn validate(&mut self, validator: &Validator) -> Result<(), TxErrors> {
        let mut err = TxErrors::OK;
        if !validator.skips(ValidationLevel::NO_IBAN) {
            if self.iban.is_empty() {
                err |= TxErrors::IBAN_MISSING;
            } else if validator.validate_iban(&mut self.iban).is_err() {
                err |= TxErrors::INVALID_IBAN;
            }
        }
        if !validator.skips(ValidationLevel::NO_BIC) {
            if self.bic.is_empty() {
                err |= TxErrors::BIC_MISSING;
            } else if validator.validate_bic(&mut self.bic).is_err() {
                err |= TxErrors::INVALID_BIC;
            }
        }
        if !validator.skips(ValidationLevel::IGNORE_MISSING_VALUE) {
            err |= self.check_mandatory();
        }
        err.into_result()?;

        if self.payment_id.is_empty() {
            self.payment_id = match self.kind {
                TransactionType::DirectDebit => create_uid(),
                TransactionType::CreditTransfer => NOT_PROVIDED.to_string(),
            };
        }
        Ok(())
    }

    fn check_mandatory(&self) -> TxErrors {
        let mut err = TxErrors::OK;
        if self.name.is_empty() {
            err |= TxErrors::NAME_MISSING;
        }
        if self.description.is_empty() {
            err |= TxErrors::DESCRIPTION_MISSING;
        }
        if self.value <= Decimal::ZERO {
            err |= TxErrors::ZERO_VALUE;
        }
        if self.kind == TransactionType::DirectDebit {
            if self.mandate_id.is_empty() {
                err |= TxErrors::MANDATE_ID_MISSING;
            }
            if self.date_of_signature.is_empty() {
                err |= TxErrors::MANDATE_DATE_MISSING;
            } else if self.signature_date().is_none() {
                err |= TxErrors::INVALID_MANDATE_DATE;
            }
        }
        err
    }

    /// Mandate signature date, if `date_of_signature` starts with a valid `YYYY-MM-DD`.
    pub fn signature_date(&self) -> Option<NaiveDate> {
        let prefix = self.date_of_signature.get(..10)?;
        let shaped = prefix.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
        if !shaped {
            return None;
        }
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }

    /// Amount with two decimal places, as written to `InstdAmt`.
    pub fn formatted_value(&self) -> String {
        format_amount(self.value)
    }
}

/// Builder for [`Transaction`].
///
/// ```
/// use sepakit::core::TransactionType;
/// use sepakit::document::TransactionBuilder;
/// use rust_decimal_macros::dec;
///
/// let tx = TransactionBuilder::new(TransactionType::DirectDebit)
///     .name("Müller, Jürgen")
///     .iban("DE71664500500070143559")
///     .bic("SOLADES1OFG")
///     .value(dec!(104.45))
///     .description("Mitgliedsbeitrag 2024 [Müller]")
///     .mandate_id("ABC-0815_X")
///     .date_of_signature("2018-04-03")
///     .build();
///
/// assert_eq!(tx.name, "Mueller, Juergen");
/// assert_eq!(tx.description, "Mitgliedsbeitrag 2024 (Mueller)");
/// assert_eq!(tx.mandate_id, "ABC-0815-X");
/// ```
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    pub fn new(kind: TransactionType) -> Self {
        Self {
            tx: Transaction {
                kind,
                name: String::new(),
                iban: String::new(),
                bic: String::new(),
                value: Decimal::ZERO,
                description: String::new(),
                mandate_id: String::new(),
                date_of_signature: String::new(),
                ultimate_name: String::new(),
                payment_id: String::new(),
                purpose: String::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.tx.name = valid_string(name, TextKind::Max70);
        self
    }

    /// Stored as given. Normalized during validation.
    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.tx.iban = iban.into();
        self
    }

    /// Stored as given. Normalized during validation.
    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.tx.bic = bic.into();
        self
    }

    pub fn value(mut self, value: Decimal) -> Self {
        self.tx.value = value;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.tx.description = valid_string(description, TextKind::Max140);
        self
    }

    pub fn mandate_id(mut self, id: &str) -> Self {
        self.tx.mandate_id = valid_string(id, TextKind::Id2);
        self
    }

    /// Raw signature date. Checked for `YYYY-MM-DD` during validation.
    pub fn date_of_signature(mut self, date: impl Into<String>) -> Self {
        self.tx.date_of_signature = date.into();
        self
    }

    pub fn signature_date(mut self, date: NaiveDate) -> Self {
        self.tx.date_of_signature = date.format("%Y-%m-%d").to_string();
        self
    }

    pub fn ultimate_name(mut self, name: &str) -> Self {
        self.tx.ultimate_name = valid_string(name, TextKind::Max70);
        self
    }

    pub fn payment_id(mut self, id: &str) -> Self {
        self.tx.payment_id = valid_string(id, TextKind::Id1);
        self
    }

    /// First four characters, uppercased.
    pub fn purpose(mut self, code: &str) -> Self {
        self.tx.purpose = code.chars().take(4).flat_map(char::to_uppercase).collect();
        self
    }

    pub fn build(self) -> Transaction {
        self.tx
    }
}
