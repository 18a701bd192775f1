//! Best-effort validation of raw API records.
//!
//! Each element of the response array is parsed independently; a record that
//! fails the schema is collected with its error and raw payload so the
//! caller can log it, and never aborts the batch.

use serde_json::Value;

use crate::types::LocationRecord;

/// A raw element that failed schema validation, kept for diagnostics.
#[derive(Debug)]
pub struct ValidationFailure {
    pub error: serde_json::Error,
    pub raw: Value,
}

/// Splits raw elements into validated records and failures, preserving
/// source order on both sides.
#[must_use]
pub fn validate_records(raw: Vec<Value>) -> (Vec<LocationRecord>, Vec<ValidationFailure>) {
    let mut kept = Vec::with_capacity(raw.len());
    let mut dropped = Vec::new();

    for value in raw {
        match serde_json::from_value::<LocationRecord>(value.clone()) {
            Ok(record) => kept.push(record),
            Err(error) => dropped.push(ValidationFailure { error, raw: value }),
        }
    }

    (kept, dropped)
}
