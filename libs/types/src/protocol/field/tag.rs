//! Field tag: the two bytes preceding every encoded value.

use super::kind::FieldKind;
use crate::common::errors::{ProtocolError, ProtocolResult};
use crate::protocol::constants::TAG_SIZE;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// Field tag (2 bytes)
///
/// ```text
/// ┌──────────┬──────────┐
/// │ kind (1) │ flags (1)│
/// └──────────┴──────────┘
/// ```
///
/// `flags` is kind-specific. Booleans store their value in bit 0 and carry no
/// payload; integers store presentation flags; every other kind writes 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
pub struct FieldTag {
    pub kind: u8,
    pub flags: u8,
}

impl FieldTag {
    pub const SIZE: usize = TAG_SIZE;

    /// Flag bit holding a boolean's value
    pub const BOOL_VALUE_BIT: u8 = 0x01;

    pub const fn new(kind: FieldKind, flags: u8) -> Self {
        Self {
            kind: kind as u8,
            flags,
        }
    }

    /// Tag for a boolean, with the value embedded in the flags
    pub const fn boolean(value: bool) -> Self {
        Self::new(
            FieldKind::Bool,
            if value { Self::BOOL_VALUE_BIT } else { 0 },
        )
    }

    pub fn kind(&self) -> ProtocolResult<FieldKind> {
        FieldKind::from_wire(self.kind)
    }

    pub fn bool_value(&self) -> bool {
        self.flags & Self::BOOL_VALUE_BIT != 0
    }

    /// Read and validate a tag from the start of `bytes`
    pub fn parse(bytes: &[u8]) -> ProtocolResult<Self> {
        let tag = Self::read_from_prefix(bytes).ok_or_else(|| {
            ProtocolError::message_too_small(Self::SIZE, bytes.len(), "FieldTag parsing")
        })?;
        tag.kind()?;
        Ok(tag)
    }
}
