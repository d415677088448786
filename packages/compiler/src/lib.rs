#![deny(clippy::all)]

//! Reflow Compiler
//!
//! Code-generation layer of the Reflow framework. The formatters here take
//! typed host values (reactive variable references, literals, containers,
//! conditional and match branches, event chains, state snapshots) and
//! deterministically render them into strings that are valid JavaScript/JSX
//! fragments for the browser runtime.
//!
//! Every operation is a pure function: no I/O, no shared state, and no
//! mutation of the inputs.

#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

// Core modules (root level)
pub mod chars;
pub mod error;
pub mod event;
pub mod util;
pub mod value;
pub mod vars;

// Formatter entry points
pub mod format;

// Re-exports
pub use error::FormatError;
pub use event::{ArgsSpec, EventChain, EventHandler, EventSpec};
pub use format::cond::MatchCase;
pub use value::Value;
pub use vars::{Var, VarType};

/// Get compiler version
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Format a page route for the routing table
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn format_route(route: String, format_case: Option<bool>) -> String {
    format::names::format_route(&route, format_case.unwrap_or(true))
}

/// Format a ref name for the ref registry
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn format_ref(ref_name: String) -> String {
    format::names::format_ref(&ref_name)
}

/// Strip the version suffix from a library name
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn format_library_name(library_fullname: String) -> String {
    format::names::format_library_name(&library_fullname)
}

/// Convert a string to snake case
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn to_snake_case(text: String) -> String {
    util::to_snake_case(&text)
}

/// Convert a string to camel case
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn to_camel_case(text: String) -> String {
    util::to_camel_case(&text)
}

/// Convert a string to kebab case
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn to_kebab_case(text: String) -> String {
    util::to_kebab_case(&text)
}
