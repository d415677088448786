//! Deterministic JSON Serializer
//!
//! Renders host values to JSON text matching the embedded language's literal
//! syntax: `", "`/`": "` separators, lowercase keywords, insertion-ordered
//! keys and floats that always keep a decimal point. Temporal values are
//! pre-converted to their canonical textual form and quoted.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Timelike};
use indexmap::IndexMap;

use crate::chars;
use crate::util;
use crate::value::Value;

/// Render a host value as JSON text.
///
/// Variable references and event chains have no JSON representation;
/// passing one is a contract violation and fails loudly.
pub fn json_dumps(value: &Value) -> String {
    let mut out = String::new();
    write_json(&mut out, value);
    out
}

fn write_json(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Float(f) => out.push_str(&float_token(*f)),
        Value::Str(s) => out.push_str(&quote(s)),
        Value::List(items) => {
            out.push(chars::LBRACKET);
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_json(out, item);
            }
            out.push(chars::RBRACKET);
        }
        Value::Map(entries) => {
            out.push(chars::LBRACE);
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&quote(key));
                out.push_str(": ");
                write_json(out, item);
            }
            out.push(chars::RBRACE);
        }
        Value::Date(d) => out.push_str(&quote(&date_token(d))),
        Value::DateTime(dt) => out.push_str(&quote(&datetime_token(dt))),
        Value::Time(t, offset) => out.push_str(&quote(&time_token(t, offset.as_ref()))),
        Value::Duration(td) => out.push_str(&quote(&duration_token(td))),
        Value::Var(var) => util::error(&format!(
            "var `{}` has no JSON representation",
            var.name
        )),
        Value::EventChain(_) => util::error("an event chain has no JSON representation"),
    }
}

/// Quote a string with JSON escapes; non-ASCII text passes through raw.
pub(crate) fn quote(s: &str) -> String {
    serde_json::to_string(s).expect("string serialization is infallible")
}

/// Canonical decimal text for a float, always keeping a fractional digit.
pub(crate) fn float_token(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

/// Canonical text for a temporal scalar, `None` for every other shape.
pub(crate) fn temporal_token(value: &Value) -> Option<String> {
    match value {
        Value::Date(d) => Some(date_token(d)),
        Value::DateTime(dt) => Some(datetime_token(dt)),
        Value::Time(t, offset) => Some(time_token(t, offset.as_ref())),
        Value::Duration(td) => Some(duration_token(td)),
        _ => None,
    }
}

pub(crate) fn date_token(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub(crate) fn datetime_token(dt: &DateTime<FixedOffset>) -> String {
    if dt.timestamp_subsec_micros() == 0 {
        dt.format("%Y-%m-%d %H:%M:%S%:z").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S%.6f%:z").to_string()
    }
}

pub(crate) fn time_token(t: &NaiveTime, offset: Option<&FixedOffset>) -> String {
    let base = if t.nanosecond() == 0 {
        t.format("%H:%M:%S").to_string()
    } else {
        t.format("%H:%M:%S%.6f").to_string()
    };
    match offset {
        Some(offset) => format!("{}{}", base, offset),
        None => base,
    }
}

/// Duration text in the host language's canonical form:
/// `D day(s), H:MM:SS[.ffffff]` with days floor-normalized so the
/// time-of-day part is always non-negative.
pub(crate) fn duration_token(td: &TimeDelta) -> String {
    const MICROS_PER_DAY: i64 = 86_400_000_000;
    let (days, rem_micros) = match td.num_microseconds() {
        Some(us) => (us.div_euclid(MICROS_PER_DAY), us.rem_euclid(MICROS_PER_DAY)),
        // Sub-microsecond precision overflows i64 only past ~292k years;
        // fall back to whole seconds there.
        None => {
            let secs = td.num_seconds();
            (secs.div_euclid(86_400), secs.rem_euclid(86_400) * 1_000_000)
        }
    };
    let secs = rem_micros / 1_000_000;
    let micros = rem_micros % 1_000_000;
    let (hh, mm, ss) = (secs / 3600, secs % 3600 / 60, secs % 60);

    let mut out = String::new();
    if days != 0 {
        let plural = if days.abs() != 1 { "s" } else { "" };
        out.push_str(&format!("{} day{}, ", days, plural));
    }
    out.push_str(&format!("{}:{:02}:{:02}", hh, mm, ss));
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}
