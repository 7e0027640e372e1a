//! # Record Fields
//!
//! Every value in a record is a field: a [`FieldTag`] followed by a payload
//! whose shape is fixed by the tag's [`FieldKind`].
//!
//! ```text
//! Field   := Tag Payload?
//! Tag     := kind:u8 flags:u8
//! Payload := Fixed bytes | BlobCounter bytes[len] | StrRef | CStrRef | (none)
//! ```

pub mod kind;
pub mod payload;
pub mod tag;

pub use kind::{FieldKind, PayloadLayout};
pub use payload::{BlobCounter, CStrRef, StrRef};
pub use tag::FieldTag;
