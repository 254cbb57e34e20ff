use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::doc::Document;
use super::totals::ControlTotals;
use super::transaction::Transaction;
use crate::core::{
    PmtInfErrors, SequenceType, TextKind, TransactionType, TxErrors, ValidationLevel, calc_collection_date,
    create_uid, valid_string,
};
use crate::validation::Validator;

/// Execution date reported for credit transfers. The debtor's bank picks the real date.
pub const TRANSFER_EXECUTION_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1999, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Payment instruction ("PmtInf"): one creditor (direct debit) or debtor
/// (transfer) account and the transactions booked against it.
///
/// Created for a specific [`Document`] with [`PaymentInstructionBuilder`]
/// and owned by that document once attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentInstruction {
    id: String,
    #[serde(skip)]
    document_id: String,
    kind: TransactionType,
    pub name: String,
    pub iban: String,
    pub bic: String,
    /// Creditor Identifier, direct debit only.
    pub ci: String,
    /// Raw sequence type code (`FRST`, `RCUR`, `OOFF`, `FNAL`).
    pub sequence_type: String,
    totals: ControlTotals,
    transactions: Vec<Transaction>,
}

impl PaymentInstruction {
    pub fn builder(document: &Document) -> PaymentInstructionBuilder {
        PaymentInstructionBuilder::new(document)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the document the instruction was created for.
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn totals(&self) -> ControlTotals {
        self.totals
    }

    pub fn tx_count(&self) -> usize {
        self.totals.count()
    }

    pub fn control_sum(&self) -> Decimal {
        self.totals.sum()
    }

    /// Accepted transactions in the order they were added.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn seq_type(&self) -> Option<SequenceType> {
        SequenceType::from_code(&self.sequence_type)
    }

    /// Run every instruction check and collect the failures.
    ///
    /// Works on copies of the identifiers, so repeated calls on an unchanged
    /// instruction give the same result.
    pub fn validate(&self, validator: &Validator) -> Result<(), PmtInfErrors> {
        let mut err = PmtInfErrors::OK;
        if !validator.skips(ValidationLevel::NO_IBAN) {
            if self.iban.is_empty() {
                err |= PmtInfErrors::IBAN_MISSING;
            } else if validator.validate_iban(&mut self.iban.clone()).is_err() {
                err |= PmtInfErrors::INVALID_IBAN;
            }
        }
        if !validator.skips(ValidationLevel::NO_BIC) {
            if self.bic.is_empty() {
                err |= PmtInfErrors::BIC_MISSING;
            } else if validator.validate_bic(&mut self.bic.clone()).is_err() {
                err |= PmtInfErrors::INVALID_BIC;
            }
        }
        if !validator.skips(ValidationLevel::NO_CI) {
            if self.ci.is_empty() {
                err |= PmtInfErrors::CI_MISSING;
            } else if validator.validate_ci(&mut self.ci.clone()).is_err() {
                err |= PmtInfErrors::INVALID_CI;
            }
        }
        if !validator.skips(ValidationLevel::IGNORE_MISSING_VALUE) {
            if self.name.is_empty() {
                err |= PmtInfErrors::NAME_MISSING;
            }
            if self.sequence_type.is_empty() {
                err |= PmtInfErrors::SEQ_TYPE_MISSING;
            } else if self.seq_type().is_none() {
                err |= PmtInfErrors::INVALID_SEQ_TYPE;
            }
        }
        err.into_result()
    }

    /// Requested collection date for direct debits, counted in TARGET2 business
    /// days from `today`: 3 for recurring debits, 6 otherwise.
    ///
    /// Credit transfers report [`TRANSFER_EXECUTION_DATE`].
    pub fn collection_date(&self, today: NaiveDate) -> NaiveDate {
        match self.kind {
            TransactionType::DirectDebit => {
                let days = self.seq_type().map_or(SequenceType::First.lead_days(), SequenceType::lead_days);
                calc_collection_date(days, today)
            }
            TransactionType::CreditTransfer => TRANSFER_EXECUTION_DATE,
        }
    }

    pub(super) fn rebind(&mut self, document_id: &str) {
        self.document_id = document_id.to_string();
    }

    pub(crate) fn normalize_identifiers(&mut self) {
        self.iban = Validator::normalize(&self.iban);
        self.bic = Validator::normalize_bic(&self.bic);
        self.ci = Validator::normalize(&self.ci);
    }
}

/// Builder for [`PaymentInstruction`].
#[derive(Debug, Clone)]
pub struct PaymentInstructionBuilder {
    pmt: PaymentInstruction,
}

impl PaymentInstructionBuilder {
    /// Start an instruction for `document`, inheriting its transaction type.
    pub fn new(document: &Document) -> Self {
        Self {
            pmt: PaymentInstruction {
                id: create_uid(),
                document_id: document.id().to_string(),
                kind: document.kind(),
                name: String::new(),
                iban: String::new(),
                bic: String::new(),
                ci: String::new(),
                sequence_type: String::new(),
                totals: ControlTotals::default(),
                transactions: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.pmt.name = valid_string(name, TextKind::Max70);
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.pmt.iban = iban.into();
        self
    }

    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.pmt.bic = bic.into();
        self
    }

    pub fn ci(mut self, ci: impl Into<String>) -> Self {
        self.pmt.ci = ci.into();
        self
    }

    pub fn sequence_type(mut self, seq: SequenceType) -> Self {
        self.pmt.sequence_type = seq.code().to_string();
        self
    }

    /// Raw sequence type code, checked during validation.
    pub fn sequence_type_code(mut self, code: impl Into<String>) -> Self {
        self.pmt.sequence_type = code.into();
        self
    }

    pub fn build(self) -> PaymentInstruction {
        self.pmt
    }
}

/// Mutable view of an attached instruction together with the totals of its
/// document.
///
/// Obtained from [`Document::instruction_mut`]. Every accepted transaction
/// updates the instruction's and the document's totals in the same call.
pub struct InstructionGroup<'a> {
    pub(super) validator: &'a Validator,
    pub(super) kind: TransactionType,
    pub(super) instruction: &'a mut PaymentInstruction,
    pub(super) document_totals: &'a mut ControlTotals,
    pub(super) invalid_count: &'a mut usize,
}

impl InstructionGroup<'_> {
    pub fn instruction(&self) -> &PaymentInstruction {
        self.instruction
    }

    /// Validate `tx` and book it into the instruction and the document.
    ///
    /// A transaction of the wrong type is refused with
    /// [`TxErrors::INVALID_TYPE`] and is not counted as invalid. Any other
    /// failure, including a value that would overflow either control sum,
    /// increments the document's invalid count and leaves all totals
    /// untouched.
    pub fn add_transaction(&mut self, tx: Transaction) -> Result<&Transaction, TxErrors> {
        let index = self.book(tx)?;
        Ok(&self.instruction.transactions[index])
    }

    /// Returns the index of the booked transaction.
    pub(super) fn book(&mut self, mut tx: Transaction) -> Result<usize, TxErrors> {
        if tx.kind != self.kind {
            warn!(
                instruction = %self.instruction.id,
                expected = %self.kind,
                actual = %tx.kind,
                "transaction type does not match document"
            );
            return Err(TxErrors::INVALID_TYPE);
        }
        if let Err(err) = tx.validate(self.validator) {
            *self.invalid_count += 1;
            warn!(instruction = %self.instruction.id, code = err.code(), errors = %err, "transaction rejected");
            return Err(err);
        }

        let booked = self
            .instruction
            .totals
            .checked_add(tx.value)
            .zip(self.document_totals.checked_add(tx.value));
        let Some((instruction_totals, document_totals)) = booked else {
            *self.invalid_count += 1;
            warn!(instruction = %self.instruction.id, value = %tx.value, "control sum overflow");
            return Err(TxErrors::VALUE_OVERFLOW);
        };
        self.instruction.totals = instruction_totals;
        *self.document_totals = document_totals;
        debug!(
            instruction = %self.instruction.id,
            payment_id = %tx.payment_id,
            value = %tx.value,
            "transaction accepted"
        );
        self.instruction.transactions.push(tx);
        Ok(self.instruction.transactions.len() - 1)
    }
}
