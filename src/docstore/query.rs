//! Query Matching
//!
//! Exact-match, conjunctive query evaluation and the `$set` update operator.
//! No ranges, regexes, or nested paths.

use serde_json::{Map, Number, Value};

use crate::docstore::SET_OPERATOR;

/// A stored document: field name to arbitrary JSON value.
pub type Record = Map<String, Value>;

// == Matching ==
/// Returns true if every field in `query` equals the same field in `record`.
///
/// Extra fields on the record are ignored, and an empty query matches
/// everything. A `null` query value matches a field that is missing.
pub fn matches(record: &Record, query: &Record) -> bool {
    query.iter().all(|(field, expected)| {
        let actual = record.get(field).unwrap_or(&Value::Null);
        values_equal(actual, expected)
    })
}

/// JSON equality where numbers compare by value, so `123` equals `123.0`.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    match (integer_of(x), integer_of(y)) {
        (Some(a), Some(b)) => a == b,
        (Some(a), None) => float_equals_integer(y.as_f64(), a),
        (None, Some(b)) => float_equals_integer(x.as_f64(), b),
        (None, None) => x.as_f64() == y.as_f64(),
    }
}

fn integer_of(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Exact int/float comparison: the float must be integral, within the JSON
/// integer range, and convert to the very same integer.
fn float_equals_integer(float: Option<f64>, integer: i128) -> bool {
    const MIN: f64 = -9_223_372_036_854_775_808.0; // -2^63
    const LIMIT: f64 = 18_446_744_073_709_551_616.0; // 2^64

    match float {
        Some(f) if f.fract() == 0.0 && (MIN..LIMIT).contains(&f) => f as i128 == integer,
        _ => false,
    }
}

// == Update ==
/// Merges the fields under `$set` into `record`.
///
/// Other update keys are ignored, as is a `$set` that is not an object.
pub fn apply_set(record: &mut Record, update: &Record) {
    if let Some(Value::Object(fields)) = update.get(SET_OPERATOR) {
        for (field, value) in fields {
            record.insert(field.clone(), value.clone());
        }
    }
}
