//! Protocol-level errors for reading logwire wire structs
//!
//! These surface when bytes are interpreted as headers, tags or payload
//! references. Each variant carries enough context to locate the bad byte.

use thiserror::Error;

/// Result alias for wire-struct parsing
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;

/// Errors raised while interpreting raw record bytes
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Buffer is too small to contain the expected wire struct
    #[error("Record too small: need {need} bytes, got {got} (context: {context})")]
    MessageTooSmall {
        need: usize,
        got: usize,
        context: &'static str,
    },

    /// Field kind byte is not part of the registry
    #[error("Unknown field kind {0:#04x}: valid kinds are 0x00-0x10")]
    UnknownFieldKind(u8),

    /// Severity byte is outside the defined levels
    #[error("Invalid severity {0}: valid levels are 0 (trace) to 6 (critical)")]
    InvalidSeverity(u8),

    /// Header overflow byte must be a boolean
    #[error("Invalid overflow flag {0}: expected 0 or 1")]
    InvalidOverflowFlag(u8),
}

impl ProtocolError {
    /// Create a MessageTooSmall error with parsing context
    pub fn message_too_small(need: usize, got: usize, context: &'static str) -> Self {
        Self::MessageTooSmall { need, got, context }
    }
}
