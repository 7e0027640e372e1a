//! # Wire Constants
//!
//! Sizes of every fixed wire struct and the limits imposed by the width of the
//! header and blob counter fields. These values are part of the byte-exact
//! contract with decoders and must stay stable.

use super::field::{BlobCounter, CStrRef, FieldTag, StrRef};
use super::message::header::MessageHeader;
use std::mem::size_of;

/// Header bytes: `length: u16`, `arity: u8`, `severity: u8`, `overflow: u8`
pub const HEADER_SIZE: usize = 5;

/// Field tag bytes: `kind: u8`, `flags: u8`
pub const TAG_SIZE: usize = 2;

/// Length counter preceding deep-copied blob bytes
pub const BLOB_COUNTER_SIZE: usize = 2;

/// String reference payload: `addr: u64`, `len: u32`
pub const STR_REF_SIZE: usize = 12;

/// Whole-program C string reference payload: `addr: u64`
pub const CSTR_REF_SIZE: usize = 8;

/// The mandatory format-literal field
pub const FORMAT_FIELD_SIZE: usize = TAG_SIZE + STR_REF_SIZE;

/// Smallest buffer an encoder accepts: header plus format field
pub const MIN_MESSAGE_SIZE: usize = HEADER_SIZE + FORMAT_FIELD_SIZE;

/// Largest record length the header can describe
pub const MAX_MESSAGE_SIZE: usize = u16::MAX as usize;

/// Largest blob the length counter can describe
pub const MAX_BLOB_LEN: usize = u16::MAX as usize;

/// Largest arity the header can describe
pub const MAX_ARITY: usize = u8::MAX as usize;

// Layout guards: the wire structs must match the documented sizes exactly.
const _: () = assert!(size_of::<MessageHeader>() == HEADER_SIZE);
const _: () = assert!(size_of::<FieldTag>() == TAG_SIZE);
const _: () = assert!(size_of::<BlobCounter>() == BLOB_COUNTER_SIZE);
const _: () = assert!(size_of::<StrRef>() == STR_REF_SIZE);
const _: () = assert!(size_of::<CStrRef>() == CSTR_REF_SIZE);
