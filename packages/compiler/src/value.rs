//! Host Values
//!
//! The closed set of host-language values accepted by the formatter layer.
//! Every formatter matches [`Value`] exhaustively, so a value shape without
//! a formatting rule cannot be constructed in the first place.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use indexmap::IndexMap;

use crate::event::EventChain;
use crate::format::json;
use crate::vars::{Var, VarType};

/// A host value entering the formatter layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered sequence; element order is preserved in output.
    List(Vec<Value>),
    /// Keyed mapping; insertion order is preserved in output.
    Map(IndexMap<String, Value>),
    /// Reactive variable reference.
    Var(Var),
    /// Event chain compiled into a callable expression.
    EventChain(EventChain),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
    /// Wall-clock time with an optional UTC offset.
    Time(NaiveTime, Option<FixedOffset>),
    Duration(TimeDelta),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Var> for Value {
    fn from(value: Var) -> Self {
        Value::Var(value)
    }
}

impl From<EventChain> for Value {
    fn from(value: EventChain) -> Self {
        Value::EventChain(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Value::Map(value)
    }
}

impl Var {
    /// Derive a literal-backed var from a host value: the name is the raw
    /// text for string values and the JSON literal otherwise.
    ///
    /// Passing a var or event chain is a contract violation; those are
    /// already expressions, not literals.
    pub fn literal(value: &Value) -> Var {
        let (name, type_) = match value {
            Value::Str(s) => (s.clone(), VarType::Str),
            Value::Bool(b) => (b.to_string(), VarType::Bool),
            Value::Int(i) => (i.to_string(), VarType::Int),
            Value::Float(f) => (json::float_token(*f), VarType::Float),
            other => (json::json_dumps(other), VarType::Any),
        };
        Var {
            name,
            type_,
            is_local: true,
            is_string: false,
        }
    }
}
