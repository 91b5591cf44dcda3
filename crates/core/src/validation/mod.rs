//! Per-row validation.
//!
//! Each import format has its own rule set. The CSV rules require the
//! example sentence to contain the English term. The JSON rules only
//! constrain the shape of the `examples` array.

pub mod csv_row;
pub mod evaluator;
pub mod json_entry;
pub mod rules;

pub use evaluator::validate_rows;
pub use rules::{ValidationStrategy, ValidationVerdict};
