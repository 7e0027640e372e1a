//! Fixed payload structs written after a field tag.
//!
//! All integers are little-endian `zerocopy::byteorder` types so the structs
//! have alignment 1 and no padding.

use crate::common::errors::{ProtocolError, ProtocolResult};
use crate::protocol::constants::{BLOB_COUNTER_SIZE, CSTR_REF_SIZE, STR_REF_SIZE};
use std::ffi::CStr;
use zerocopy::byteorder::{LittleEndian, U16, U32, U64};
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// Length counter preceding deep-copied blob bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
pub struct BlobCounter {
    pub len: U16<LittleEndian>,
}

impl BlobCounter {
    pub const SIZE: usize = BLOB_COUNTER_SIZE;

    pub fn new(len: u16) -> Self {
        Self { len: U16::new(len) }
    }

    pub fn get(&self) -> u16 {
        self.len.get()
    }

    pub fn parse(bytes: &[u8]) -> ProtocolResult<Self> {
        Self::read_from_prefix(bytes).ok_or_else(|| {
            ProtocolError::message_too_small(Self::SIZE, bytes.len(), "BlobCounter parsing")
        })
    }
}

/// Reference to string data with process lifetime: address plus byte length
///
/// Used for string literals and the format literal. Only the address is
/// recorded; the decoder reads the bytes from the same process image.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
pub struct StrRef {
    pub addr: U64<LittleEndian>,
    pub len: U32<LittleEndian>,
}

impl StrRef {
    pub const SIZE: usize = STR_REF_SIZE;

    /// Reference a static string; `None` if its length exceeds `u32`
    pub fn from_static(s: &'static str) -> Option<Self> {
        let len = u32::try_from(s.len()).ok()?;
        Some(Self {
            addr: U64::new(s.as_ptr() as usize as u64),
            len: U32::new(len),
        })
    }

    pub fn addr(&self) -> u64 {
        self.addr.get()
    }

    pub fn len(&self) -> u32 {
        self.len.get()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn parse(bytes: &[u8]) -> ProtocolResult<Self> {
        Self::read_from_prefix(bytes).ok_or_else(|| {
            ProtocolError::message_too_small(Self::SIZE, bytes.len(), "StrRef parsing")
        })
    }
}

/// Address of a NUL-terminated string with whole-program lifetime
///
/// The `'static` bound on [`CStrRef::from_static`] is the lifetime contract:
/// transient buffers cannot be referenced this way.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
pub struct CStrRef {
    pub addr: U64<LittleEndian>,
}

impl CStrRef {
    pub const SIZE: usize = CSTR_REF_SIZE;

    pub fn from_static(s: &'static CStr) -> Self {
        Self {
            addr: U64::new(s.as_ptr() as usize as u64),
        }
    }

    pub fn addr(&self) -> u64 {
        self.addr.get()
    }

    pub fn parse(bytes: &[u8]) -> ProtocolResult<Self> {
        Self::read_from_prefix(bytes).ok_or_else(|| {
            ProtocolError::message_too_small(Self::SIZE, bytes.len(), "CStrRef parsing")
        })
    }
}
