//! Route & Name Sanitizers
//!
//! Ancillary string entry points consumed by the routing table, the ref
//! system and the asset pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chars;
use crate::util;
use crate::vars::Var;

/// Runs of characters that cannot appear in a JS identifier
static NON_IDENTIFIER_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]+").unwrap());

/// Route name of the default page.
pub const INDEX_ROUTE: &str = "index";

/// Format a page route: strip surrounding slashes, optionally kebab-case,
/// and map the empty route to the index route.
pub fn format_route(route: &str, format_case: bool) -> String {
    let route = route.trim_matches(chars::SLASH);
    let route = if format_case {
        util::to_kebab_case(route)
    } else {
        route.to_string()
    };
    if route.is_empty() {
        return INDEX_ROUTE.to_string();
    }
    route
}

/// Format a ref name: non-identifier runs collapse to underscores.
pub fn format_ref(ref_name: &str) -> String {
    format!("ref_{}", NON_IDENTIFIER_REGEXP.replace_all(ref_name, "_"))
}

/// Format a ref to an array of elements, indexed when an index var is given.
pub fn format_array_ref(ref_name: &str, index: Option<&Var>) -> String {
    let clean_ref = NON_IDENTIFIER_REGEXP.replace_all(ref_name, "_");
    match index {
        Some(index) => format!("refs_{}[{}]", clean_ref, index.fstring_token()),
        None => format!("refs_{}", clean_ref),
    }
}

/// Breadcrumbs for a route: one (segment, cumulative path) pair per segment.
pub fn format_breadcrumbs(route: &str) -> Vec<(String, String)> {
    let parts: Vec<&str> = route
        .trim_start_matches(chars::SLASH)
        .split(chars::SLASH)
        .collect();
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| (part.to_string(), format!("/{}", parts[..=i].join("/"))))
        .collect()
}

/// Strip the version suffix from a library name, keeping a leading scope
/// marker: `@scope/lib@^1.2.3` becomes `@scope/lib`.
pub fn format_library_name(library_fullname: &str) -> String {
    match library_fullname.rfind(chars::AT) {
        Some(idx) if idx > 0 => library_fullname[..idx].to_string(),
        _ => library_fullname.to_string(),
    }
}
