//! Reactive Variable References
//!
//! A [`Var`] is a typed handle to a piece of reactive state or a literal,
//! produced by the variable system before it enters the formatter layer.
//! Formatting is a pure read: every rendering below is computed into a fresh
//! string and the flags of the original are never written back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chars;
use crate::format::props::format_string;
use crate::util;

/// Declared type of a reactive variable.
///
/// Only [`VarType::Str`] affects formatting (string-literal coercion); the
/// remaining variants are carried for the component tree's benefit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    Str,
    Int,
    Float,
    Bool,
    #[default]
    Any,
}

/// A typed handle to a piece of reactive state or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Var {
    /// Raw expression text, e.g. a state attribute path.
    pub name: String,
    /// Declared type of the referenced value.
    #[serde(rename = "type")]
    pub type_: VarType,
    /// Render as a bare expression rather than an interpolated reference.
    pub is_local: bool,
    /// Force string-literal rendering regardless of locality.
    pub is_string: bool,
}

impl Var {
    /// A reference to a state attribute; renders interpolated.
    pub fn reference(name: impl Into<String>, type_: VarType) -> Self {
        Var {
            name: name.into(),
            type_,
            is_local: false,
            is_string: false,
        }
    }

    /// A var backed by literal string text; renders as a bare expression.
    pub fn create(name: impl Into<String>) -> Self {
        Var {
            name: name.into(),
            type_: VarType::Str,
            is_local: true,
            is_string: false,
        }
    }

    /// Copy of this var with the given string-literal flag.
    pub fn with_string(mut self, is_string: bool) -> Self {
        self.is_string = is_string;
        self
    }

    /// Copy of this var with the given locality.
    pub fn with_local(&self, is_local: bool) -> Self {
        Var {
            is_local,
            ..self.clone()
        }
    }

    /// The var as it appears spliced into rendered markup: string-flagged
    /// vars become wrapped template literals, local vars stay bare and
    /// non-local vars are brace-wrapped.
    pub fn str_token(&self) -> String {
        if self.is_string {
            return format_string(&self.name);
        }
        if self.is_local {
            self.name.clone()
        } else {
            util::wrap(&self.name, chars::LBRACE)
        }
    }

    /// The var as it appears inside a surrounding template literal: non-local
    /// vars gain the `$` interpolation marker.
    pub fn fstring_token(&self) -> String {
        if self.is_local {
            self.str_token()
        } else {
            format!("{}{}", chars::DOLLAR, self.str_token())
        }
    }

    /// The var without any brace wrapping: backtick-delimited when
    /// string-flagged, the bare expression text otherwise.
    pub fn unwrapped_token(&self) -> String {
        if self.is_string {
            util::wrap(&util::escape_js_string(&self.name), chars::BT)
        } else {
            self.name.clone()
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.str_token())
    }
}
