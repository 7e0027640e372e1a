//! Message Header Implementation
//!
//! The header is the first struct of every record. The encoder writes it once
//! up front and, when a record is truncated, rewrites it in place.

use crate::common::errors::{ProtocolError, ProtocolResult};
use crate::protocol::constants::HEADER_SIZE;
use crate::protocol::severity::Severity;
use zerocopy::byteorder::{LittleEndian, U16};
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// Message Header (5 bytes)
///
/// ```text
/// ┌─────────────┬───────────┬──────────────┬──────────────┐
/// │ length (2)  │ arity (1) │ severity (1) │ overflow (1) │
/// └─────────────┴───────────┴──────────────┴──────────────┘
/// ```
///
/// `length` counts every byte of the record including the header. `arity`
/// counts value fields only; the format field is not included. When
/// `overflow` is 1 both describe the truncated record actually present.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsBytes, FromBytes, FromZeroes)]
pub struct MessageHeader {
    pub length: U16<LittleEndian>,
    pub arity: u8,
    pub severity: u8,
    pub overflow: u8,
}

impl MessageHeader {
    /// Header size in bytes
    pub const SIZE: usize = HEADER_SIZE;

    pub fn new(length: u16, arity: u8, severity: Severity, overflow: bool) -> Self {
        Self {
            length: U16::new(length),
            arity,
            severity: severity as u8,
            overflow: overflow as u8,
        }
    }

    pub fn length(&self) -> u16 {
        self.length.get()
    }

    pub fn set_length(&mut self, length: u16) {
        self.length = U16::new(length);
    }

    pub fn severity(&self) -> ProtocolResult<Severity> {
        Severity::from_wire(self.severity)
    }

    pub fn is_overflow(&self) -> bool {
        self.overflow != 0
    }

    /// Validate the header fields that have a restricted range
    pub fn validate(&self) -> ProtocolResult<()> {
        self.severity()?;
        if self.overflow > 1 {
            return Err(ProtocolError::InvalidOverflowFlag(self.overflow));
        }
        Ok(())
    }

    /// Read and validate a header from the start of `bytes`
    pub fn parse(bytes: &[u8]) -> ProtocolResult<Self> {
        let header = Self::read_from_prefix(bytes).ok_or_else(|| {
            ProtocolError::message_too_small(Self::SIZE, bytes.len(), "MessageHeader parsing")
        })?;
        header.validate()?;
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_size() {
        assert_eq!(std::mem::size_of::<MessageHeader>(), MessageHeader::SIZE);
        assert_eq!(MessageHeader::SIZE, 5);
    }

    #[test]
    fn test_header_bytes_are_little_endian() {
        let header = MessageHeader::new(0x1234, 3, Severity::Warning, true);
        assert_eq!(header.as_bytes(), &[0x34, 0x12, 3, 4, 1]);
    }

    #[test]
    fn test_header_parse() {
        let header = MessageHeader::new(27, 2, Severity::Info, false);
        let parsed = MessageHeader::parse(header.as_bytes()).unwrap();

        assert_eq!(parsed.length(), 27);
        assert_eq!(parsed.arity, 2);
        assert_eq!(parsed.severity().unwrap(), Severity::Info);
        assert!(!parsed.is_overflow());
    }

    #[test]
    fn test_header_validation() {
        assert_eq!(
            MessageHeader::parse(&[19, 0, 1, 9, 0]),
            Err(ProtocolError::InvalidSeverity(9))
        );
        assert_eq!(
            MessageHeader::parse(&[19, 0, 1, 2, 2]),
            Err(ProtocolError::InvalidOverflowFlag(2))
        );
        assert!(matches!(
            MessageHeader::parse(&[19, 0]),
            Err(ProtocolError::MessageTooSmall { need: 5, got: 2, .. })
        ));
    }

    #[test]
    fn test_set_length() {
        let mut header = MessageHeader::new(100, 1, Severity::Error, false);
        header.set_length(42);
        assert_eq!(header.length(), 42);
    }
}
