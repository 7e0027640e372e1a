//! # Record Envelope
//!
//! ## Purpose
//!
//! Defines the fixed header that opens every logwire record.
//!
//! ```text
//! Message := Header FormatField ValueField*
//! Header  := length:u16 arity:u8 severity:u8 overflow:u8
//! ```
//!
//! ## Header Field Details
//!
//! ### Length (2 bytes)
//! - Total record bytes, header included
//! - Bounds the largest record at 65535 bytes
//!
//! ### Arity (1 byte)
//! - Number of value fields, excluding the format field
//!
//! ### Severity (1 byte)
//! - [`crate::Severity`] level, 0 (trace) to 6 (critical)
//!
//! ### Overflow (1 byte)
//! - 1 when the encoder ran out of space and dropped trailing fields

pub mod header;

pub use header::*;
