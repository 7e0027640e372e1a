//! Encoder errors
//!
//! Two families share one enum. Capacity conditions (buffer too small, record
//! full, encoder disabled) are runtime outcomes the hot path tolerates: the
//! encoder degrades by truncating instead of failing the log call. Contract
//! violations (wrong call order, zero arity, oversized blobs) are programmer
//! errors surfaced as values instead of debug-only assertions.

use crate::encoder::EncoderState;
use thiserror::Error;

/// Result alias for encoder operations
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Declared record size is below the header plus format field
    #[error("Buffer too small: need at least {need} bytes, got {got}")]
    BufferTooSmall { need: usize, got: usize },

    /// Declared record size exceeds the buffer handed in
    #[error("Declared size {declared} exceeds buffer length {available}")]
    BufferShorterThanDeclared { declared: usize, available: usize },

    /// Declared record size cannot be stored in the header length field
    #[error("Record size {size} exceeds maximum {max}")]
    LengthUnrepresentable { size: usize, max: usize },

    /// The encoder has no buffer bound; nothing was written
    #[error("Encoder is not bound to a buffer")]
    Unbound,

    /// The field does not fit; the record is truncated from here on
    #[error("Record full: field needs {needed} bytes, {remaining} remaining")]
    Overflow { needed: usize, remaining: usize },

    /// Operation invoked in a state that does not allow it
    #[error("{op} called in {state:?} state")]
    OutOfOrder {
        op: &'static str,
        state: EncoderState,
    },

    /// A record must declare at least one value field
    #[error("Declared arity must be at least 1")]
    ZeroArity,

    /// More values were put than the record declared
    #[error("All {declared} declared fields already written")]
    TooManyFields { declared: usize },

    /// The record was finished before every declared field was put
    #[error("Finished after {written} of {declared} declared fields without overflow")]
    MissingFields { declared: usize, written: usize },

    /// Blob length does not fit the length counter
    #[error("Blob of {len} bytes exceeds counter maximum {max}")]
    BlobTooLarge { len: usize, max: usize },

    /// String reference length does not fit the reference payload
    #[error("String of {len} bytes cannot be referenced")]
    StrTooLong { len: usize },
}

impl EncodeError {
    /// True for programmer errors in the producer protocol
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            EncodeError::OutOfOrder { .. }
                | EncodeError::ZeroArity
                | EncodeError::TooManyFields { .. }
                | EncodeError::MissingFields { .. }
                | EncodeError::BlobTooLarge { .. }
                | EncodeError::StrTooLong { .. }
        )
    }

    /// True for space-related outcomes the encoder degrades around
    pub fn is_capacity(&self) -> bool {
        !self.is_contract_violation()
    }
}
