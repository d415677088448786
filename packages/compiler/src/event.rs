//! Event Bindings
//!
//! Data model for event invocations as produced by the event-binding DSL:
//! a handler reference with bound arguments, and ordered chains of those
//! invocations together with their dispatch modifiers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vars::Var;

/// Reference to a named event handler, qualified by its owning state.
///
/// The qualified owner name is a precomputed string supplied at
/// construction; local handlers carry an empty qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHandler {
    /// Fully qualified name of the owning state, empty for local handlers.
    #[serde(default)]
    pub state_full_name: String,
    /// Method name of the handler.
    pub name: String,
}

impl EventHandler {
    /// A handler with no owning state.
    pub fn local(name: impl Into<String>) -> Self {
        EventHandler {
            state_full_name: String::new(),
            name: name.into(),
        }
    }

    /// A handler owned by the state with the given qualified name.
    pub fn of_state(state_full_name: impl Into<String>, name: impl Into<String>) -> Self {
        EventHandler {
            state_full_name: state_full_name.into(),
            name: name.into(),
        }
    }
}

/// One handler invocation with bound arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSpec {
    pub handler: EventHandler,
    /// Ordered (argument name, value expression) pairs.
    #[serde(default)]
    pub args: Vec<(String, Var)>,
}

impl EventSpec {
    pub fn new(handler: EventHandler) -> Self {
        EventSpec {
            handler,
            args: Vec::new(),
        }
    }

    pub fn with_args(handler: EventHandler, args: Vec<(String, Var)>) -> Self {
        EventSpec { handler, args }
    }
}

/// Number of positional arguments the generated wrapper function accepts.
///
/// An explicit arity descriptor attached at construction time; the compiler
/// never inspects callables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArgsSpec {
    /// Forward whatever the runtime passes: `(...args) => ...`.
    Variadic,
    /// Bind the declared parameters positionally.
    Fixed(Vec<String>),
}

/// An ordered list of event invocations compiled into one callable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventChain {
    pub events: Vec<EventSpec>,
    /// Arity of the generated wrapper; `None` renders the inline form.
    #[serde(default)]
    pub args_spec: Option<ArgsSpec>,
    /// Dispatch modifier flags, e.g. `stopPropagation`, in declaration order.
    #[serde(default)]
    pub event_actions: IndexMap<String, bool>,
}

impl EventChain {
    pub fn new(events: Vec<EventSpec>, args_spec: Option<ArgsSpec>) -> Self {
        EventChain {
            events,
            args_spec,
            event_actions: IndexMap::new(),
        }
    }

    /// Copy of this chain with the given dispatch modifier enabled.
    pub fn with_action(mut self, name: impl Into<String>, value: bool) -> Self {
        self.event_actions.insert(name.into(), value);
        self
    }
}
