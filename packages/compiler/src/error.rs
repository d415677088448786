//! Formatter Errors

use thiserror::Error;

/// Errors raised by formatting entry points whose contract depends on the
/// shape of runtime data rather than on types alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A match expression needs an explicit default value or a trailing
    /// conditions-free case.
    #[error("match expression has no default case")]
    MissingDefaultCase,

    /// A conditions-free case may only appear in last position.
    #[error("catch-all match case is only allowed in last position")]
    MisplacedDefaultCase,
}
