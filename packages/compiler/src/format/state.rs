//! State Snapshot Formatting
//!
//! Prepares raw state dictionaries for client synchronization: temporal leaf
//! values are rewritten to their canonical textual form while the key set,
//! ordering and nesting of every scope are preserved verbatim.

use indexmap::IndexMap;

use crate::chars;
use crate::format::json::temporal_token;
use crate::util;
use crate::value::Value;

/// Recursively canonicalize the leaves of a state snapshot.
///
/// Mappings and sequences recurse; date, datetime, time and duration leaves
/// become their canonical strings; every other scalar passes through
/// unchanged.
pub fn format_state(value: &Value) -> Value {
    match value {
        Value::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), format_state(value)))
                .collect(),
        ),
        Value::List(items) => Value::List(items.iter().map(format_state).collect()),
        other => match temporal_token(other) {
            Some(text) => Value::Str(text),
            None => other.clone(),
        },
    }
}

/// Extract the query params from router data, snake-casing hyphenated keys.
///
/// Router data without a `query` scope is a contract violation.
pub fn format_query_params(router_data: &IndexMap<String, Value>) -> IndexMap<String, Value> {
    let params = match router_data.get("query") {
        Some(Value::Map(params)) => params,
        _ => util::error("router data has no query scope"),
    };
    params
        .iter()
        .map(|(key, value)| (key.replace(chars::MINUS, "_"), value.clone()))
        .collect()
}
