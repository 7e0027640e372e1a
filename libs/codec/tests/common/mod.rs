//! Minimal record reader for integration tests
//!
//! Walks an encoded record using the wire layout types from `logwire_types`,
//! independently of the encoder internals.

#![allow(dead_code)]

use logwire_types::{
    BlobCounter, CStrRef, FieldKind, FieldTag, MessageHeader, ProtocolError, ProtocolResult,
    Severity, StrRef, BLOB_COUNTER_SIZE, CSTR_REF_SIZE, STR_REF_SIZE, TAG_SIZE,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Format { addr: u64, len: u32 },
    Unsigned(FieldKind, u8, u64),
    Signed(FieldKind, u8, i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Raw(Vec<u8>),
    ByteStream(Vec<u8>),
    StrLiteral { addr: u64, len: u32 },
    StaticCStr { addr: u64 },
}

#[derive(Debug)]
pub struct Record {
    pub header: MessageHeader,
    pub severity: Severity,
    pub fields: Vec<Field>,
}

impl Record {
    /// Value fields, without the leading format field
    pub fn values(&self) -> &[Field] {
        &self.fields[1..]
    }
}

fn take<'a>(bytes: &'a [u8], pos: &mut usize, n: usize) -> ProtocolResult<&'a [u8]> {
    let slice = bytes
        .get(*pos..*pos + n)
        .ok_or_else(|| {
            ProtocolError::message_too_small(n, bytes.len().saturating_sub(*pos), "field")
        })?;
    *pos += n;
    Ok(slice)
}

fn le_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

fn sign_extend(raw: u64, width: usize) -> i64 {
    let shift = 64 - width * 8;
    ((raw << shift) as i64) >> shift
}

/// Decode a whole record; fails on any byte beyond the header length
pub fn read_record(bytes: &[u8]) -> ProtocolResult<Record> {
    let header = MessageHeader::parse(bytes)?;
    let severity = header.severity()?;
    let end = header.length() as usize;
    let record = bytes
        .get(..end)
        .ok_or_else(|| ProtocolError::message_too_small(end, bytes.len(), "record"))?;

    let mut pos = MessageHeader::SIZE;
    let mut fields = Vec::new();
    while pos < record.len() {
        let tag = FieldTag::parse(take(record, &mut pos, TAG_SIZE)?)?;
        let kind = tag.kind()?;
        let field = match kind {
            FieldKind::Format | FieldKind::StrLiteral => {
                let r = StrRef::parse(take(record, &mut pos, STR_REF_SIZE)?)?;
                if kind == FieldKind::Format {
                    Field::Format { addr: r.addr(), len: r.len() }
                } else {
                    Field::StrLiteral { addr: r.addr(), len: r.len() }
                }
            }
            FieldKind::StaticCStr => {
                let r = CStrRef::parse(take(record, &mut pos, CSTR_REF_SIZE)?)?;
                Field::StaticCStr { addr: r.addr() }
            }
            FieldKind::Bool => Field::Bool(tag.bool_value()),
            FieldKind::F32 => {
                let raw = le_u64(take(record, &mut pos, 4)?);
                Field::F32(f32::from_bits(raw as u32))
            }
            FieldKind::F64 => Field::F64(f64::from_bits(le_u64(take(record, &mut pos, 8)?))),
            FieldKind::Raw | FieldKind::ByteStream => {
                let counter = BlobCounter::parse(take(record, &mut pos, BLOB_COUNTER_SIZE)?)?;
                let data = take(record, &mut pos, counter.get() as usize)?.to_vec();
                if kind == FieldKind::Raw {
                    Field::Raw(data)
                } else {
                    Field::ByteStream(data)
                }
            }
            FieldKind::U8 | FieldKind::U16 | FieldKind::U32 | FieldKind::U64 => {
                let width = kind.fixed_payload_size().unwrap_or(0);
                Field::Unsigned(kind, tag.flags, le_u64(take(record, &mut pos, width)?))
            }
            FieldKind::I8 | FieldKind::I16 | FieldKind::I32 | FieldKind::I64 => {
                let width = kind.fixed_payload_size().unwrap_or(0);
                let raw = le_u64(take(record, &mut pos, width)?);
                Field::Signed(kind, tag.flags, sign_extend(raw, width))
            }
            FieldKind::Terminator => return Err(ProtocolError::UnknownFieldKind(tag.kind)),
        };
        fields.push(field);
    }

    Ok(Record {
        header,
        severity,
        fields,
    })
}
