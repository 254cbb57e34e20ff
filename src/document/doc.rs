use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::instruction::{InstructionGroup, PaymentInstruction};
use super::totals::ControlTotals;
use super::transaction::Transaction;
use crate::core::{PmtInfErrors, SepaVersion, TextKind, TransactionType, TxErrors, create_uid, valid_string};
use crate::validation::Validator;

/// Group header data (`GrpHdr`). The message id is the document id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupHeader {
    pub message_id: String,
    pub created_at: DateTime<Utc>,
    /// Initiating party name.
    pub initiating_party: String,
}

impl GroupHeader {
    /// Creation time as written to `CreDtTm`, e.g. `2024-06-17T09:30:00Z`.
    pub fn creation_timestamp(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Reference to an instruction attached to a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstructionHandle {
    document_id: String,
    index: usize,
}

/// A SEPA payment document: group header, payment instructions and the
/// running totals over all accepted transactions.
///
/// ```
/// use std::sync::Arc;
/// use rust_decimal_macros::dec;
/// use sepakit::core::{SequenceType, TransactionType};
/// use sepakit::document::{Document, PaymentInstructionBuilder, TransactionBuilder};
/// use sepakit::validation::Validator;
///
/// let mut doc = Document::new(Arc::new(Validator::with_defaults()), TransactionType::DirectDebit);
/// doc.create_group_header("Musterverein e.V.");
///
/// let pmt = PaymentInstructionBuilder::new(&doc)
///     .name("Musterverein e.V.")
///     .iban("DE71664500500070143559")
///     .bic("SOLADES1OFG")
///     .ci("DE79ZZZ01234567890")
///     .sequence_type(SequenceType::Recurring)
///     .build();
/// let handle = doc.add_payment_instruction(pmt).unwrap();
///
/// let tx = TransactionBuilder::new(TransactionType::DirectDebit)
///     .name("Max Mustermann")
///     .iban("DE11682900000009215808")
///     .bic("GENODE61LAH")
///     .value(dec!(104.45))
///     .description("Beitrag 2024")
///     .mandate_id("M-0815")
///     .date_of_signature("2018-04-03")
///     .build();
/// doc.add_transaction(&handle, tx).unwrap();
///
/// assert_eq!(doc.tx_count(), 1);
/// assert_eq!(doc.control_sum(), dec!(104.45));
/// ```
#[derive(Debug, Serialize)]
pub struct Document {
    #[serde(skip)]
    validator: Arc<Validator>,
    id: String,
    kind: TransactionType,
    version: SepaVersion,
    header: Option<GroupHeader>,
    totals: ControlTotals,
    invalid_count: usize,
    instructions: Vec<PaymentInstruction>,
}

impl Document {
    pub fn new(validator: Arc<Validator>, kind: TransactionType) -> Self {
        Self {
            validator,
            id: create_uid(),
            kind,
            version: SepaVersion::default(),
            header: None,
            totals: ControlTotals::default(),
            invalid_count: 0,
            instructions: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: SepaVersion) -> Self {
        self.version = version;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn version(&self) -> SepaVersion {
        self.version
    }

    /// pain message identifier for the document's type and version.
    pub fn pain_version(&self) -> &'static str {
        self.version.pain_version(self.kind)
    }

    pub fn namespace(&self) -> String {
        self.version.namespace(self.kind)
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Establish the group header, timestamped now. Returns the message id.
    pub fn create_group_header(&mut self, initiating_party: &str) -> &str {
        self.create_group_header_at(initiating_party, Utc::now())
    }

    /// Establish the group header with an explicit creation time.
    ///
    /// Calling it again replaces the header. Returns the message id.
    pub fn create_group_header_at(&mut self, initiating_party: &str, created_at: DateTime<Utc>) -> &str {
        self.header = Some(GroupHeader {
            message_id: self.id.clone(),
            created_at,
            initiating_party: valid_string(initiating_party, TextKind::Max70),
        });
        &self.id
    }

    pub fn header(&self) -> Option<&GroupHeader> {
        self.header.as_ref()
    }

    /// Validate `pmt` and attach it.
    ///
    /// On success the instruction's identifiers are stored normalized and a
    /// handle for adding transactions is returned.
    ///
    /// # Panics
    ///
    /// If the group header has not been created, or `pmt` was built for
    /// another document.
    pub fn add_payment_instruction(&mut self, mut pmt: PaymentInstruction) -> Result<InstructionHandle, PmtInfErrors> {
        assert!(
            self.header.is_some(),
            "create_group_header must be called before attaching payment instructions"
        );
        assert_eq!(
            pmt.document_id(),
            self.id,
            "payment instruction was created for another document"
        );
        if let Err(err) = pmt.validate(&self.validator) {
            warn!(document = %self.id, code = err.code(), errors = %err, "payment instruction rejected");
            return Err(err);
        }

        pmt.normalize_identifiers();
        debug!(document = %self.id, instruction = %pmt.id(), "payment instruction attached");
        self.instructions.push(pmt);
        Ok(InstructionHandle {
            document_id: self.id.clone(),
            index: self.instructions.len() - 1,
        })
    }

    /// # Panics
    ///
    /// If `handle` belongs to another document.
    pub fn instruction(&self, handle: &InstructionHandle) -> &PaymentInstruction {
        self.check_handle(handle);
        &self.instructions[handle.index]
    }

    /// Mutable group view for adding transactions to an attached instruction.
    ///
    /// # Panics
    ///
    /// If `handle` belongs to another document.
    pub fn instruction_mut(&mut self, handle: &InstructionHandle) -> InstructionGroup<'_> {
        self.check_handle(handle);
        InstructionGroup {
            validator: &self.validator,
            kind: self.kind,
            instruction: &mut self.instructions[handle.index],
            document_totals: &mut self.totals,
            invalid_count: &mut self.invalid_count,
        }
    }

    /// Shortcut for `instruction_mut(handle).add_transaction(tx)`.
    pub fn add_transaction(&mut self, handle: &InstructionHandle, tx: Transaction) -> Result<&Transaction, TxErrors> {
        let index = self.instruction_mut(handle).book(tx)?;
        Ok(&self.instructions[handle.index].transactions()[index])
    }

    /// Attached instructions in attachment order.
    pub fn instructions(&self) -> &[PaymentInstruction] {
        &self.instructions
    }

    pub fn totals(&self) -> ControlTotals {
        self.totals
    }

    /// Number of accepted transactions.
    pub fn tx_count(&self) -> usize {
        self.totals.count()
    }

    /// Sum of all accepted transaction values.
    pub fn control_sum(&self) -> Decimal {
        self.totals.sum()
    }

    /// Number of transactions that failed validation.
    pub fn invalid_count(&self) -> usize {
        self.invalid_count
    }

    fn check_handle(&self, handle: &InstructionHandle) {
        assert_eq!(
            handle.document_id, self.id,
            "instruction handle belongs to another document"
        );
    }
}

/// The copy is a separate document: it gets a fresh id, and its header and
/// instructions are rebound to it. Handles of the original do not apply.
impl Clone for Document {
    fn clone(&self) -> Self {
        let id = create_uid();
        let header = self.header.as_ref().map(|header| GroupHeader {
            message_id: id.clone(),
            ..header.clone()
        });
        let instructions = self
            .instructions
            .iter()
            .map(|pmt| {
                let mut pmt = pmt.clone();
                pmt.rebind(&id);
                pmt
            })
            .collect();
        Self {
            validator: Arc::clone(&self.validator),
            id,
            kind: self.kind,
            version: self.version,
            header,
            totals: self.totals,
            invalid_count: self.invalid_count,
            instructions,
        }
    }
}
