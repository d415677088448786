//! Event Compilation
//!
//! Renders event invocations and chains into callable expressions that
//! forward captured arguments and dispatch modifiers to the runtime event
//! queue.

use crate::chars;
use crate::event::{ArgsSpec, EventChain, EventHandler, EventSpec};
use crate::format::json::quote;
use crate::util;

/// The fully qualified dotted path of a handler; a handler with no owning
/// state renders as the bare method name.
pub fn format_event_handler(handler: &EventHandler) -> String {
    if handler.state_full_name.is_empty() {
        handler.name.clone()
    } else {
        format!("{}.{}", handler.state_full_name, handler.name)
    }
}

/// The (state qualifier, method name) pair of a handler.
pub fn get_event_handler_parts(handler: &EventHandler) -> (&str, &str) {
    (&handler.state_full_name, &handler.name)
}

/// Render one event invocation: `Event("handler", {arg:expr})`.
///
/// Argument expressions arrive pre-formatted and are not re-escaped;
/// string-flagged argument values render as template literals.
pub fn format_event(spec: &EventSpec) -> String {
    let args: Vec<String> = spec
        .args
        .iter()
        .map(|(name, value)| format!("{}{}{}", name, chars::COLON, value.unwrapped_token()))
        .collect();
    format!(
        "Event({}, {})",
        util::wrap(&format_event_handler(&spec.handler), chars::DQ),
        util::wrap(&args.join(","), chars::LBRACE)
    )
}

/// Compile an event chain into one callable expression.
///
/// Without an args spec (or with a fixed spec of zero parameters) the chain
/// renders in the inline form `addEvents([...])`. A variadic spec produces a
/// rest-parameter wrapper forwarding `args`; a fixed spec binds each declared
/// parameter positionally. The trailing argument carries the event-action
/// flags in declaration order.
pub fn format_event_chain(chain: &EventChain) -> String {
    let events: Vec<String> = chain.events.iter().map(format_event).collect();
    let events = events.join(",");
    match &chain.args_spec {
        None => format!("addEvents([{}])", events),
        Some(ArgsSpec::Fixed(names)) if names.is_empty() => {
            format!("addEvents([{}])", events)
        }
        Some(ArgsSpec::Variadic) => format!(
            "(...args) => addEvents([{}], args, {})",
            events,
            event_actions_token(chain)
        ),
        Some(ArgsSpec::Fixed(names)) => {
            let params: Vec<String> = names.iter().map(|name| format!("_{}", name)).collect();
            let params = params.join(",");
            format!(
                "({}) => addEvents([{}], [{}], {})",
                params,
                events,
                params,
                event_actions_token(chain)
            )
        }
    }
}

fn event_actions_token(chain: &EventChain) -> String {
    let entries: Vec<String> = chain
        .event_actions
        .iter()
        .map(|(name, value)| format!("{}: {}", quote(name), value))
        .collect();
    util::wrap_with(&entries.join(", "), chars::LBRACE, false, 1)
}
