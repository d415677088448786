//! Conditional & Match Compilation
//!
//! Renders ternary conditionals and multi-case match expressions. Match
//! expressions compile to an immediately-invoked function that dispatches on
//! a canonical serialization of the discriminant, so that container values
//! compare by content.

use crate::chars;
use crate::error::FormatError;
use crate::format::props::format_value;
use crate::util;
use crate::value::Value;
use crate::vars::Var;

/// One arm of a match expression: the discriminant values and the result
/// they map to. A case with no conditions is the catch-all and is only
/// legal in last position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCase {
    pub conditions: Vec<Var>,
    pub value: Var,
}

impl MatchCase {
    pub fn new(conditions: Vec<Var>, value: Var) -> Self {
        MatchCase { conditions, value }
    }

    /// The catch-all case.
    pub fn fallback(value: Var) -> Self {
        MatchCase {
            conditions: Vec::new(),
            value,
        }
    }
}

/// Format an inline ternary conditional.
///
/// With `is_prop` unset the output is a braced JSX expression whose branches
/// render in markup mode: plain strings pass through as raw markup and
/// variable references interpolate. With `is_prop` set the output is a bare
/// ternary whose branches are coerced to template literals unless they are
/// variable references, which pass through unwrapped.
pub fn format_cond(condition: &str, true_value: &Value, false_value: &Value, is_prop: bool) -> String {
    let cond = format!("isTrue({})", condition);
    if is_prop {
        return format!(
            "{} ? {} : {}",
            cond,
            prop_branch_token(true_value),
            prop_branch_token(false_value)
        );
    }
    util::wrap(
        &format!(
            "{} ? {} : {}",
            cond,
            node_branch_token(true_value),
            node_branch_token(false_value)
        ),
        chars::LBRACE,
    )
}

fn node_branch_token(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        Value::Var(var) => var.fstring_token(),
        other => format_value(other),
    }
}

fn prop_branch_token(value: &Value) -> String {
    match value {
        Value::Str(s) => util::wrap(&util::escape_js_string(s), chars::BT),
        Value::Var(var) => var.unwrapped_token(),
        other => format_value(other),
    }
}

/// Format a match expression as an immediately-invoked switch.
///
/// The discriminant is serialized once with `JSON.stringify`; each condition
/// value becomes one `case` label and consecutive cases sharing a result var
/// merge into a single fallthrough label group. The explicit `default` wins;
/// without one, a trailing conditions-free case supplies it. Every `return`
/// is followed by an unreachable `break;` since downstream golden files
/// depend on the exact text.
pub fn format_match(
    condition: &str,
    cases: &[MatchCase],
    default: Option<&Var>,
) -> Result<String, FormatError> {
    let mut cases = cases.to_vec();
    let default = match default {
        Some(var) => var.clone(),
        None => {
            let last_is_fallback = cases.last().is_some_and(|last| last.conditions.is_empty());
            if !last_is_fallback {
                return Err(FormatError::MissingDefaultCase);
            }
            match cases.pop() {
                Some(case) => case.value,
                None => return Err(FormatError::MissingDefaultCase),
            }
        }
    };

    // Merge consecutive cases that share a result into one fallthrough group.
    let mut groups: Vec<MatchCase> = Vec::new();
    for case in cases {
        if case.conditions.is_empty() {
            return Err(FormatError::MisplacedDefaultCase);
        }
        match groups.last_mut() {
            Some(group) if group.value == case.value => {
                group.conditions.extend(case.conditions)
            }
            _ => groups.push(case),
        }
    }

    let mut code = format!("(() => {{ switch (JSON.stringify({})) {{", condition);
    for group in &groups {
        let labels: Vec<String> = group
            .conditions
            .iter()
            .map(|condition| format!("case JSON.stringify({}):", condition.unwrapped_token()))
            .collect();
        code.push_str(&format!(
            "{}  return ({});  break;",
            labels.join(" "),
            group.value.unwrapped_token()
        ));
    }
    code.push_str(&format!(
        "default:  return ({});  break;",
        default.unwrapped_token()
    ));
    code.push_str("};})()");
    Ok(code)
}
