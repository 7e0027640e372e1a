//! # Logwire Record Protocol
//!
//! ## Purpose
//!
//! Wire definitions shared by every producer and consumer of logwire records:
//! the fixed [`message::header::MessageHeader`], the [`field`] registry with its
//! tag and payload structs, the [`severity::Severity`] levels and the size
//! [`constants`] the encoder and size calculator are built from.
//!
//! ## Architecture Role
//!
//! ```text
//! Call site → [codec: sizes + encoder] → record bytes → (external) decoder
//!                      ↑
//!              [types: wire layout]
//! ```

pub mod constants;
pub mod field;
pub mod message;
pub mod severity;

pub use constants::*;
pub use field::{FieldKind, FieldTag, PayloadLayout};
pub use message::header::MessageHeader;
pub use severity::Severity;
