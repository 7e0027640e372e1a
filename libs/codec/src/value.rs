//! # Encodable Values
//!
//! ## Purpose
//!
//! The closed set of argument values a call site can hand to the encoder.
//! Each [`Value`] maps onto exactly one [`FieldKind`]; conversions from the
//! primitive types let call sites write `session.put(42u32.into())`.
//!
//! ## Deep Copy vs Reference
//!
//! - [`Blob`] values (raw memory, byte streams) are copied into the record
//! - `&'static str` and `&'static CStr` values are recorded by address only;
//!   the `'static` bound is what makes that sound for the decoder

use bitflags::bitflags;
use logwire_types::FieldKind;
use std::ffi::CStr;

bitflags! {
    /// Presentation hints for integer values, carried in the tag flags
    ///
    /// The encoder transports these untouched; decoders use them when
    /// rendering the value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct IntFlags: u8 {
        const HEX = 0x01;
        const OCTAL = 0x02;
        const UPPERCASE = 0x04;
        const SHOW_SIGN = 0x08;
        const ZERO_PAD = 0x10;
    }
}

/// Fixed-width integer value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Int {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
}

impl Int {
    pub fn kind(self) -> FieldKind {
        match self {
            Int::U8(_) => FieldKind::U8,
            Int::U16(_) => FieldKind::U16,
            Int::U32(_) => FieldKind::U32,
            Int::U64(_) => FieldKind::U64,
            Int::I8(_) => FieldKind::I8,
            Int::I16(_) => FieldKind::I16,
            Int::I32(_) => FieldKind::I32,
            Int::I64(_) => FieldKind::I64,
        }
    }

    /// Little-endian payload bytes; only the first `len` bytes are meaningful
    pub(crate) fn to_le_bytes(self) -> ([u8; 8], usize) {
        let mut out = [0u8; 8];
        let len = match self {
            Int::U8(v) => copy_le(&mut out, &v.to_le_bytes()),
            Int::U16(v) => copy_le(&mut out, &v.to_le_bytes()),
            Int::U32(v) => copy_le(&mut out, &v.to_le_bytes()),
            Int::U64(v) => copy_le(&mut out, &v.to_le_bytes()),
            Int::I8(v) => copy_le(&mut out, &v.to_le_bytes()),
            Int::I16(v) => copy_le(&mut out, &v.to_le_bytes()),
            Int::I32(v) => copy_le(&mut out, &v.to_le_bytes()),
            Int::I64(v) => copy_le(&mut out, &v.to_le_bytes()),
        };
        (out, len)
    }
}

#[inline(always)]
fn copy_le(out: &mut [u8; 8], bytes: &[u8]) -> usize {
    out[..bytes.len()].copy_from_slice(bytes);
    bytes.len()
}

/// Caller-owned memory to deep copy into the record
///
/// A blob may be null. A null blob keeps its declared length for diagnostics
/// but always encodes as empty: zero counter, zero payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blob<'a> {
    mem: Option<&'a [u8]>,
    declared_len: usize,
}

impl<'a> Blob<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            mem: Some(bytes),
            declared_len: bytes.len(),
        }
    }

    /// A blob without backing memory
    pub fn null(declared_len: usize) -> Self {
        Self {
            mem: None,
            declared_len,
        }
    }

    /// Build a blob from a raw pointer and length, mapping null to [`Blob::null`]
    ///
    /// # Safety
    /// If `ptr` is non-null it must be valid for reads of `len` bytes for `'a`,
    /// and the memory must not be mutated during `'a`.
    pub unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Self {
        if ptr.is_null() {
            Self::null(len)
        } else {
            Self::new(std::slice::from_raw_parts(ptr, len))
        }
    }

    pub fn is_null(&self) -> bool {
        self.mem.is_none()
    }

    /// Length the caller declared, regardless of nullness
    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    /// Number of payload bytes this blob contributes to the record
    pub fn encoded_len(&self) -> usize {
        self.mem.map_or(0, <[u8]>::len)
    }

    /// Bytes to copy; empty for a null blob
    pub fn bytes(&self) -> &'a [u8] {
        self.mem.unwrap_or(&[])
    }
}

/// A single log argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Int(Int, IntFlags),
    F32(f32),
    F64(f64),
    Bool(bool),
    /// Deep-copied raw memory
    Raw(Blob<'a>),
    /// Deep-copied byte stream
    ByteStream(Blob<'a>),
    /// String literal, recorded by address
    StrLiteral(&'static str),
    /// Whole-program C string, recorded by address
    StaticCStr(&'static CStr),
    /// Unused argument slot: zero bytes, not counted toward arity
    Placeholder,
}

impl<'a> Value<'a> {
    /// Field kind this value encodes as; `None` for [`Value::Placeholder`]
    pub fn kind(&self) -> Option<FieldKind> {
        Some(match self {
            Value::Int(int, _) => int.kind(),
            Value::F32(_) => FieldKind::F32,
            Value::F64(_) => FieldKind::F64,
            Value::Bool(_) => FieldKind::Bool,
            Value::Raw(_) => FieldKind::Raw,
            Value::ByteStream(_) => FieldKind::ByteStream,
            Value::StrLiteral(_) => FieldKind::StrLiteral,
            Value::StaticCStr(_) => FieldKind::StaticCStr,
            Value::Placeholder => return None,
        })
    }

    /// Integer value with presentation flags
    pub fn flagged(int: Int, flags: IntFlags) -> Self {
        Value::Int(int, flags)
    }

    pub fn raw(bytes: &'a [u8]) -> Self {
        Value::Raw(Blob::new(bytes))
    }

    pub fn byte_stream(bytes: &'a [u8]) -> Self {
        Value::ByteStream(Blob::new(bytes))
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Value::Placeholder)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Int {
                fn from(v: $ty) -> Self {
                    Int::$variant(v)
                }
            }

            impl From<$ty> for Value<'_> {
                fn from(v: $ty) -> Self {
                    Value::Int(Int::$variant(v), IntFlags::empty())
                }
            }
        )*
    };
}

impl_from_int!(
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
);

impl From<f32> for Value<'_> {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&'static str> for Value<'_> {
    fn from(v: &'static str) -> Self {
        Value::StrLiteral(v)
    }
}

impl From<&'static CStr> for Value<'_> {
    fn from(v: &'static CStr) -> Self {
        Value::StaticCStr(v)
    }
}

impl<'a> From<Blob<'a>> for Value<'a> {
    fn from(v: Blob<'a>) -> Self {
        Value::Raw(v)
    }
}
