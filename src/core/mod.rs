//! Shared vocabulary: error codes, enums, text hygiene, ids and the business-day calendar.
//!
//! Everything here is free of validation state. The country rules and the
//! document model build on top of it.

pub mod calendar;
mod error;
mod messages;
mod text;
mod types;
mod uid;

pub use calendar::{calc_collection_date, easter_sunday, is_business_day, is_target2_holiday};
pub use error::*;
pub use messages::MessageCatalog;
pub use text::{TextKind, format_amount, replace_special_chars, valid_string};
pub use types::*;
pub use uid::{create_uid, is_uid};
