//! Utility Functions
//!
//! Shared string transforms used by every formatter: naming-convention
//! conversion, bracket wrapping and template-literal escaping.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chars;

/// Boundary between a lowercase run and a capitalized hump
static CAMEL_HUMP_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());

/// Boundary between a lowercase/digit character and an uppercase character
static UPPER_BOUNDARY_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Template-string interpolation span, e.g. `${state.value}`
static INTERPOLATION_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{.*?\}").unwrap());

/// Internal error function for programming-contract violations
pub fn error(msg: &str) -> ! {
    panic!("Internal Error: {}", msg)
}

/// Convert a string to snake case.
pub fn to_snake_case(text: &str) -> String {
    let s1 = CAMEL_HUMP_REGEXP.replace_all(text, "${1}_${2}");
    UPPER_BOUNDARY_REGEXP
        .replace_all(&s1, "${1}_${2}")
        .to_lowercase()
        .replace(chars::MINUS, "_")
}

/// Convert a string to camel case.
///
/// A leading run of underscores or hyphens is preserved verbatim; a leading
/// colon is forwarded, capitalizing the next segment when a delimiter
/// directly follows the colon.
pub fn to_camel_case(text: &str) -> String {
    let leading: String = text
        .chars()
        .take_while(|c| *c == chars::UNDERSCORE || *c == chars::MINUS)
        .collect();
    let stripped = &text[leading.len()..];
    let mut words = stripped.split(|c| c == chars::UNDERSCORE || c == chars::MINUS);
    let first = words.next().unwrap_or("").to_string();
    let rest: String = words.map(capitalize).collect();
    format!("{}{}{}", leading, first, rest)
}

/// Convert a string from snake case to title case.
pub fn to_title_case(text: &str) -> String {
    text.split(chars::UNDERSCORE).map(capitalize).collect()
}

/// Convert a string to kebab case.
pub fn to_kebab_case(text: &str) -> String {
    to_snake_case(text).replace(chars::UNDERSCORE, "-")
}

fn capitalize(word: &str) -> String {
    let mut cs = word.chars();
    match cs.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &cs.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Get the matching close character for an open character.
///
/// Passing a character with no close pair is a contract violation.
pub fn get_close_char(open: char) -> char {
    match open {
        chars::LBRACE => chars::RBRACE,
        chars::LPAREN => chars::RPAREN,
        chars::LBRACKET => chars::RBRACKET,
        chars::LT => chars::GT,
        chars::DQ => chars::DQ,
        chars::SQ => chars::SQ,
        chars::BT => chars::BT,
        _ => error(&format!("Invalid open character: {}", open)),
    }
}

/// Check whether the given text is wrapped in the open character and its
/// close pair. A lone bracket character does not count as wrapped.
pub fn is_wrapped(text: &str, open: char) -> bool {
    text.len() >= 2 && text.starts_with(open) && text.ends_with(get_close_char(open))
}

/// Wrap the text in a single layer of the given bracket pair, skipping the
/// wrap when the text is already wrapped in that pair.
pub fn wrap(text: &str, open: char) -> String {
    wrap_with(text, open, true, 1)
}

/// Wrap the text in `num` nested layers of the given bracket pair.
///
/// When `check_first` is set and the text is already wrapped in this exact
/// pair, the text is returned unchanged regardless of `num`.
pub fn wrap_with(text: &str, open: char, check_first: bool, num: usize) -> String {
    if check_first && is_wrapped(text, open) {
        return text.to_string();
    }
    let close = get_close_char(open);
    let mut out = String::with_capacity(text.len() + 2 * num);
    for _ in 0..num {
        out.push(open);
    }
    out.push_str(text);
    for _ in 0..num {
        out.push(close);
    }
    out
}

/// Escape backticks for use inside a JS template literal.
///
/// Backticks inside `${...}` interpolation spans are left untouched; outside
/// those spans, already-escaped backticks are normalized first so that no
/// double escapes arise.
pub fn escape_js_string(string: &str) -> String {
    fn escape_outside_segment(segment: &str) -> String {
        segment.replace("\\`", "`").replace(chars::BT, "\\`")
    }

    let mut out = String::with_capacity(string.len());
    let mut last = 0;
    for span in INTERPOLATION_REGEXP.find_iter(string) {
        out.push_str(&escape_outside_segment(&string[last..span.start()]));
        out.push_str(span.as_str());
        last = span.end();
    }
    out.push_str(&escape_outside_segment(&string[last..]));
    out
}

/// Indent the given text by the given number of spaces.
///
/// Single-line texts pass through unchanged; multi-line output is
/// newline-terminated.
pub fn indent(text: &str, indent_level: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return text.to_string();
    }
    let prefix = " ".repeat(indent_level);
    lines
        .iter()
        .map(|line| format!("{}{}\n", prefix, line))
        .collect()
}
