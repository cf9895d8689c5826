//! tally-core: transaction model, loosely-typed CSV rows, and display formatting

pub mod coerce;
pub mod format;
pub mod record;
pub mod transaction;

pub use coerce::{coerce_number, trim_field};
pub use format::{INVALID_DATE, format_currency, format_date};
pub use record::{FieldValue, Record};
pub use transaction::Transaction;
