//! Prop & Value Formatting
//!
//! Renders host values as embedded-expression literals and as JSX attribute
//! values. Two rendering contexts exist: the expression context (top-level
//! literals) and the container context (elements of sequences and mappings),
//! which follows JSON syntax and unwraps embedded expressions.

use indexmap::IndexMap;

use crate::chars;
use crate::format::events::format_event_chain;
use crate::format::json::{
    date_token, datetime_token, duration_token, float_token, quote, time_token,
};
use crate::util;
use crate::value::Value;
use crate::vars::{Var, VarType};

/// Format a string as a JS template literal wrapped for JSX: ``{`text`}``.
pub fn format_string(string: &str) -> String {
    let escaped = util::escape_js_string(string);
    util::wrap(&util::wrap(&escaped, chars::BT), chars::LBRACE)
}

/// Format a variable reference for splicing into rendered markup.
pub fn format_var(var: &Var) -> String {
    if !var.is_local || var.is_string {
        return var.str_token();
    }
    if var.type_ == VarType::Str {
        return format_string(&var.name);
    }
    if util::is_wrapped(&var.name, chars::LBRACE) {
        return var.name.clone();
    }
    quote(&var.name)
}

/// Render a host value as an embedded-expression literal.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => float_token(*f),
        Value::Str(s) => quote(s),
        Value::List(items) => list_token(items),
        Value::Map(entries) => map_token(entries),
        Value::Var(var) => {
            if var.is_string {
                var.unwrapped_token()
            } else if !var.is_local {
                format!("${{{}}}", var.name)
            } else {
                var.name.clone()
            }
        }
        Value::EventChain(chain) => format_event_chain(chain),
        Value::Date(d) => quote(&date_token(d)),
        Value::DateTime(dt) => quote(&datetime_token(dt)),
        Value::Time(t, offset) => quote(&time_token(t, offset.as_ref())),
        Value::Duration(td) => quote(&duration_token(td)),
    }
}

fn list_token(items: &[Value]) -> String {
    let elements: Vec<String> = items.iter().map(element_token).collect();
    format!("[{}]", elements.join(", "))
}

fn map_token(entries: &IndexMap<String, Value>) -> String {
    let pairs: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{}: {}", quote(key), element_token(value)))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

/// Render a value as a container element.
///
/// Strings that arrive already brace-wrapped are embedded expressions, not
/// data: they are unwrapped to their raw text. Variable references render
/// backticked when string-flagged, bare when non-local, and like plain
/// string data when local.
fn element_token(value: &Value) -> String {
    match value {
        Value::Str(s) => unwrap_or_quote(s),
        Value::Var(var) => {
            if var.is_string {
                var.unwrapped_token()
            } else if !var.is_local {
                var.name.clone()
            } else {
                unwrap_or_quote(&var.name)
            }
        }
        Value::List(items) => list_token(items),
        Value::Map(entries) => map_token(entries),
        other => format_value(other),
    }
}

fn unwrap_or_quote(s: &str) -> String {
    if util::is_wrapped(s, chars::LBRACE) {
        s[1..s.len() - 1].to_string()
    } else {
        quote(s)
    }
}

/// Format a value as a JSX attribute value.
///
/// Plain strings render as quoted attribute text; everything else is wrapped
/// in braces so the output is always one valid attribute value. Mappings
/// keep their object-literal braces inside the wrapping pair.
pub fn format_prop(prop: &Value) -> String {
    match prop {
        Value::Var(var) => {
            if !var.is_local || var.is_string {
                var.str_token()
            } else if var.type_ == VarType::Str {
                format_string(&var.name)
            } else {
                util::wrap_with(&var.name, chars::LBRACE, false, 1)
            }
        }
        Value::Str(s) => {
            if util::is_wrapped(s, chars::LBRACE) {
                s.clone()
            } else {
                quote(s)
            }
        }
        Value::EventChain(chain) => {
            util::wrap_with(&format_event_chain(chain), chars::LBRACE, false, 1)
        }
        other => util::wrap_with(&format_value(other), chars::LBRACE, false, 1),
    }
}

/// Format keyed and single props into the tag's attribute list.
///
/// Keyed entries come first in mapping order, rendered as `name={prop}` with
/// null values skipped; single props follow verbatim in their given order.
pub fn format_props(
    single_props: &[&str],
    key_value_props: &IndexMap<String, Value>,
) -> Vec<String> {
    let mut out: Vec<String> = key_value_props
        .iter()
        .filter(|(_, prop)| !matches!(prop, Value::Null))
        .map(|(name, prop)| format!("{}={}", name, format_prop(prop)))
        .collect();
    out.extend(single_props.iter().map(|prop| prop.to_string()));
    out
}
