//! # Logwire Wire Types
//!
//! Wire-level type definitions for logwire binary log records.
//!
//! ## Design Philosophy
//!
//! - **Byte-Exact Layout**: Every wire struct is `#[repr(C)]` over alignment-1
//!   little-endian fields, so the format never depends on native padding or byte order
//! - **Closed Kind Set**: [`FieldKind`] is the complete registry of encodable values
//! - **Pure Data**: No encoding rules live here; the codec crate owns those
//!
//! ## Record Layout
//!
//! ```text
//! ┌──────────────┬──────────────────┬─────────────┬─────────────┐
//! │ MessageHeader│ Format field     │ Value field │ ...         │
//! │ (5 bytes)    │ (tag + StrRef)   │ (tag + ...) │             │
//! └──────────────┴──────────────────┴─────────────┴─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use logwire_types::{FieldKind, FieldTag, MessageHeader, Severity};
//!
//! let header = MessageHeader::new(27, 2, Severity::Info, false);
//! assert_eq!(header.length(), 27);
//!
//! let tag = FieldTag::boolean(true);
//! assert_eq!(tag.kind().unwrap(), FieldKind::Bool);
//! assert!(tag.bool_value());
//! ```

pub mod common;
pub mod protocol;

pub use common::errors::{ProtocolError, ProtocolResult};
pub use protocol::constants::*;
pub use protocol::field::{BlobCounter, CStrRef, FieldKind, FieldTag, PayloadLayout, StrRef};
pub use protocol::message::header::MessageHeader;
pub use protocol::severity::Severity;
