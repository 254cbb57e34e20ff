//! Payment document assembly.
//!
//! A [`Document`] owns its payment instructions. Instructions are validated
//! and attached through the document, transactions are booked through an
//! [`InstructionGroup`] view so that instruction and document totals can
//! never drift apart.

mod doc;
mod instruction;
mod totals;
mod transaction;

pub use doc::{Document, GroupHeader, InstructionHandle};
pub use instruction::{InstructionGroup, PaymentInstruction, PaymentInstructionBuilder, TRANSFER_EXECUTION_DATE};
pub use totals::ControlTotals;
pub use transaction::{NOT_PROVIDED, Transaction, TransactionBuilder};
