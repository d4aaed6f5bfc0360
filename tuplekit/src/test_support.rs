//! Test-only helpers for constructing sequences.

use std::ops::Range;

use serde_json::Value;

use crate::core::sequence::Sequence;

/// Sequence of consecutive integers.
pub fn ints(range: Range<i64>) -> Sequence<i64> {
    range.collect()
}

/// Heterogeneous sequence from a JSON array literal.
///
/// Panics if `array` is not a JSON array.
pub fn json_seq(array: Value) -> Sequence<Value> {
    match array {
        Value::Array(items) => Sequence::from(items),
        other => panic!("expected a JSON array, got {other}"),
    }
}

/// Sequence of sequences, one per inner vector.
pub fn nested<T>(parts: Vec<Vec<T>>) -> Sequence<Sequence<T>> {
    parts.into_iter().map(Sequence::from).collect()
}
