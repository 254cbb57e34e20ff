//! # sepakit
//!
//! SEPA identifier validation and payment document assembly: IBAN, BIC and
//! Creditor Identifier checks under per-country rules, and the
//! document / payment instruction / transaction model behind pain.001
//! credit transfers and pain.008 direct debits.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Check digits follow ISO 7064 MOD 97-10.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use rust_decimal_macros::dec;
//! use sepakit::core::*;
//! use sepakit::document::{Document, PaymentInstructionBuilder, TransactionBuilder};
//! use sepakit::validation::Validator;
//!
//! let validator = Arc::new(Validator::with_defaults());
//!
//! let mut ci = "DE79 ZZZ 0123 4567 890".to_string();
//! assert!(validator.validate_ci(&mut ci).is_ok());
//!
//! let mut doc = Document::new(validator, TransactionType::DirectDebit);
//! doc.create_group_header("Musterverein e.V.");
//! let handle = doc
//!     .add_payment_instruction(
//!         PaymentInstructionBuilder::new(&doc)
//!             .name("Musterverein e.V.")
//!             .iban("DE71664500500070143559")
//!             .bic("SOLADES1OFG")
//!             .ci(ci)
//!             .sequence_type(SequenceType::Recurring)
//!             .build(),
//!     )
//!     .unwrap();
//!
//! for value in [dec!(104.45), dec!(205.67)] {
//!     let tx = TransactionBuilder::new(TransactionType::DirectDebit)
//!         .name("Max Mustermann")
//!         .iban("DE11682900000009215808")
//!         .bic("GENODE61LAH")
//!         .value(value)
//!         .description("Mitgliedsbeitrag")
//!         .mandate_id("M-0815")
//!         .date_of_signature("2018-04-03")
//!         .build();
//!     doc.add_transaction(&handle, tx).unwrap();
//! }
//!
//! assert_eq!(doc.tx_count(), 2);
//! assert_eq!(doc.control_sum(), dec!(310.12));
//! assert_eq!(doc.pain_version(), "pain.008.001.02");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Identifier validation, document assembly, calendar, bank directory |
//! | `json` | Load error message catalogs from JSON |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod validation;

#[cfg(feature = "core")]
pub mod document;

#[cfg(feature = "core")]
pub mod directory;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
