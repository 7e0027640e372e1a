//! # Field-Kind Registry
//!
//! ## Purpose
//!
//! The closed set of value kinds a logwire record can carry. Every encoded value
//! is preceded by a [`super::FieldTag`] whose `kind` byte is one of these codes,
//! and the kind alone determines how many payload bytes follow.
//!
//! ## Payload Layouts
//!
//! - **Empty**: terminator marker, no payload
//! - **Inline**: the value lives in the tag flags (booleans)
//! - **Fixed**: numeric values and static references, constant payload width
//! - **Counted**: deep-copied blobs, `u16` counter followed by that many bytes
//!
//! Reference kinds (`StrLiteral`, `StaticCStr`, `Format`) embed addresses of
//! `'static` data and never copy the referenced bytes.

use crate::common::errors::{ProtocolError, ProtocolResult};
use crate::protocol::constants::{CSTR_REF_SIZE, STR_REF_SIZE};
use num_enum::TryFromPrimitive;

/// How a field kind lays out its payload after the tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadLayout {
    /// No payload and no value
    Empty,
    /// No payload; the value is stored in the tag flags
    Inline,
    /// Constant-width payload
    Fixed(usize),
    /// Length counter followed by that many raw bytes
    Counted,
}

/// Registry of encodable value kinds
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum FieldKind {
    Terminator = 0x00,
    U8 = 0x01,
    U16 = 0x02,
    U32 = 0x03,
    U64 = 0x04,
    I8 = 0x05,
    I16 = 0x06,
    I32 = 0x07,
    I64 = 0x08,
    F32 = 0x09,
    F64 = 0x0A,
    Bool = 0x0B,
    /// Deep-copied raw memory
    Raw = 0x0C,
    /// Deep-copied byte stream
    ByteStream = 0x0D,
    /// Reference to a `&'static str`
    StrLiteral = 0x0E,
    /// Reference to a NUL-terminated string with whole-program lifetime
    StaticCStr = 0x0F,
    /// The record's format literal, always the first field
    Format = 0x10,
}

impl FieldKind {
    /// Decode a tag kind byte
    pub fn from_wire(value: u8) -> ProtocolResult<Self> {
        Self::try_from(value).map_err(|_| ProtocolError::UnknownFieldKind(value))
    }

    /// Every registered kind in code order
    pub fn all() -> [FieldKind; 17] {
        use FieldKind::*;
        [
            Terminator, U8, U16, U32, U64, I8, I16, I32, I64, F32, F64, Bool, Raw,
            ByteStream, StrLiteral, StaticCStr, Format,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Terminator => "Terminator",
            FieldKind::U8 => "U8",
            FieldKind::U16 => "U16",
            FieldKind::U32 => "U32",
            FieldKind::U64 => "U64",
            FieldKind::I8 => "I8",
            FieldKind::I16 => "I16",
            FieldKind::I32 => "I32",
            FieldKind::I64 => "I64",
            FieldKind::F32 => "F32",
            FieldKind::F64 => "F64",
            FieldKind::Bool => "Bool",
            FieldKind::Raw => "Raw",
            FieldKind::ByteStream => "ByteStream",
            FieldKind::StrLiteral => "StrLiteral",
            FieldKind::StaticCStr => "StaticCStr",
            FieldKind::Format => "Format",
        }
    }

    /// Payload layout following the tag
    pub const fn payload_layout(self) -> PayloadLayout {
        match self {
            FieldKind::Terminator => PayloadLayout::Empty,
            FieldKind::Bool => PayloadLayout::Inline,
            FieldKind::U8 | FieldKind::I8 => PayloadLayout::Fixed(1),
            FieldKind::U16 | FieldKind::I16 => PayloadLayout::Fixed(2),
            FieldKind::U32 | FieldKind::I32 | FieldKind::F32 => PayloadLayout::Fixed(4),
            FieldKind::U64 | FieldKind::I64 | FieldKind::F64 => PayloadLayout::Fixed(8),
            FieldKind::StrLiteral | FieldKind::Format => PayloadLayout::Fixed(STR_REF_SIZE),
            FieldKind::StaticCStr => PayloadLayout::Fixed(CSTR_REF_SIZE),
            FieldKind::Raw | FieldKind::ByteStream => PayloadLayout::Counted,
        }
    }

    /// Payload width for kinds whose size does not depend on the value
    ///
    /// Returns `None` for counted (deep-copy) kinds.
    pub const fn fixed_payload_size(self) -> Option<usize> {
        match self.payload_layout() {
            PayloadLayout::Empty | PayloadLayout::Inline => Some(0),
            PayloadLayout::Fixed(size) => Some(size),
            PayloadLayout::Counted => None,
        }
    }

    /// True for kinds whose bytes are copied into the record
    pub const fn is_deep_copy(self) -> bool {
        matches!(self.payload_layout(), PayloadLayout::Counted)
    }

    /// True for kinds that embed the address of `'static` data
    pub const fn is_reference(self) -> bool {
        matches!(
            self,
            FieldKind::StrLiteral | FieldKind::StaticCStr | FieldKind::Format
        )
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            FieldKind::U8
                | FieldKind::U16
                | FieldKind::U32
                | FieldKind::U64
                | FieldKind::I8
                | FieldKind::I16
                | FieldKind::I32
                | FieldKind::I64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for kind in FieldKind::all() {
            assert_eq!(FieldKind::from_wire(kind as u8).unwrap(), kind);
        }
        assert_eq!(FieldKind::all().len(), 17);
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            FieldKind::from_wire(0x11),
            Err(ProtocolError::UnknownFieldKind(0x11))
        );
        assert!(FieldKind::from_wire(0xFF).is_err());
    }

    #[test]
    fn test_payload_layouts() {
        assert_eq!(FieldKind::U8.payload_layout(), PayloadLayout::Fixed(1));
        assert_eq!(FieldKind::I64.payload_layout(), PayloadLayout::Fixed(8));
        assert_eq!(FieldKind::F32.payload_layout(), PayloadLayout::Fixed(4));
        assert_eq!(FieldKind::Bool.payload_layout(), PayloadLayout::Inline);
        assert_eq!(FieldKind::Raw.payload_layout(), PayloadLayout::Counted);
        assert_eq!(FieldKind::Format.payload_layout(), PayloadLayout::Fixed(12));
        assert_eq!(FieldKind::StaticCStr.payload_layout(), PayloadLayout::Fixed(8));
        assert_eq!(FieldKind::Terminator.fixed_payload_size(), Some(0));
        assert_eq!(FieldKind::ByteStream.fixed_payload_size(), None);
    }

    #[test]
    fn test_classification() {
        assert!(FieldKind::Raw.is_deep_copy());
        assert!(FieldKind::ByteStream.is_deep_copy());
        assert!(!FieldKind::StrLiteral.is_deep_copy());

        assert!(FieldKind::StrLiteral.is_reference());
        assert!(FieldKind::StaticCStr.is_reference());
        assert!(FieldKind::Format.is_reference());
        assert!(!FieldKind::U32.is_reference());

        let integers = FieldKind::all().iter().filter(|k| k.is_integer()).count();
        assert_eq!(integers, 8);
        assert_eq!(FieldKind::ByteStream.name(), "ByteStream");
    }
}
