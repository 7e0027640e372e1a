//! # Size Calculator
//!
//! ## Purpose
//!
//! Pure functions mapping a value to the exact number of bytes its field will
//! occupy in a record (tag plus payload). Call sites sum these to presize the
//! buffer they bind to the [`crate::Encoder`]; the encoder uses the same
//! functions to decide whether a field still fits.
//!
//! ## Cost Table
//!
//! | Kind                       | Bytes                                   |
//! |----------------------------|-----------------------------------------|
//! | integers, floats           | `TAG_SIZE + width`                      |
//! | bool                       | `TAG_SIZE`                              |
//! | raw / byte stream          | `TAG_SIZE + BLOB_COUNTER_SIZE + len`    |
//! | string literal, format     | `TAG_SIZE + STR_REF_SIZE`               |
//! | whole-program C string     | `TAG_SIZE + CSTR_REF_SIZE`              |
//! | placeholder                | `0`                                     |
//!
//! A null blob contributes no payload bytes whatever length was declared.

use crate::value::{Blob, Int, Value};
use logwire_types::{
    FieldKind, BLOB_COUNTER_SIZE, CSTR_REF_SIZE, FORMAT_FIELD_SIZE, MIN_MESSAGE_SIZE,
    STR_REF_SIZE, TAG_SIZE,
};

/// Field size of any kind with a value-independent payload
///
/// Counted kinds have no fixed size and return the tag plus counter only.
#[inline(always)]
pub const fn fixed_field_bytes(kind: FieldKind) -> usize {
    match kind.fixed_payload_size() {
        Some(payload) => TAG_SIZE + payload,
        None => TAG_SIZE + BLOB_COUNTER_SIZE,
    }
}

#[inline(always)]
pub fn int_bytes(int: Int) -> usize {
    fixed_field_bytes(int.kind())
}

#[inline(always)]
pub const fn f32_bytes() -> usize {
    fixed_field_bytes(FieldKind::F32)
}

#[inline(always)]
pub const fn f64_bytes() -> usize {
    fixed_field_bytes(FieldKind::F64)
}

/// Booleans live in the tag flags, so only the tag is written
#[inline(always)]
pub const fn bool_bytes() -> usize {
    TAG_SIZE
}

#[inline(always)]
pub fn blob_bytes(blob: &Blob<'_>) -> usize {
    TAG_SIZE + BLOB_COUNTER_SIZE + blob.encoded_len()
}

#[inline(always)]
pub const fn str_literal_bytes() -> usize {
    TAG_SIZE + STR_REF_SIZE
}

#[inline(always)]
pub const fn static_cstr_bytes() -> usize {
    TAG_SIZE + CSTR_REF_SIZE
}

#[inline(always)]
pub const fn format_bytes() -> usize {
    FORMAT_FIELD_SIZE
}

/// Smallest valid buffer: header plus format field
#[inline(always)]
pub const fn min_message_bytes() -> usize {
    MIN_MESSAGE_SIZE
}

/// Exact bytes `value` occupies once encoded
#[inline]
pub fn required_bytes(value: &Value<'_>) -> usize {
    match value {
        Value::Int(int, _) => int_bytes(*int),
        Value::F32(_) => f32_bytes(),
        Value::F64(_) => f64_bytes(),
        Value::Bool(_) => bool_bytes(),
        Value::Raw(blob) | Value::ByteStream(blob) => blob_bytes(blob),
        Value::StrLiteral(_) => str_literal_bytes(),
        Value::StaticCStr(_) => static_cstr_bytes(),
        Value::Placeholder => 0,
    }
}

/// Header, format field and every value: the buffer size a full record needs
pub fn required_message_bytes<'v, 'a: 'v, I>(values: I) -> usize
where
    I: IntoIterator<Item = &'v Value<'a>>,
{
    values
        .into_iter()
        .fold(min_message_bytes(), |total, value| total + required_bytes(value))
}
