//! # Record Encoder - Fixed-Buffer Binary Log Records
//!
//! ## Purpose
//!
//! Serializes one record into one caller-supplied buffer: the header, the
//! format field and each value field in order, never past the buffer end,
//! never allocating.
//!
//! ## Encoder and Session
//!
//! [`Encoder`] holds the configuration and outlives any buffer. Each record
//! is built through a [`Session`] returned by [`Encoder::bind`], which borrows
//! the buffer for that record only. The encoder is free for the next buffer
//! as soon as the session is finished or dropped; dropping an unfinished
//! session discards the partial record.
//!
//! ## State Machine
//!
//! ```text
//!            bind ok            begin               put (fits)
//!   Idle ───────────────▶ Bound ──────▶ Encoding ◀────────────┐
//!    ▲                                    │   └───────────────┘
//!    │ bind rejected                      │ put (does not fit)
//!    │ (session stays Idle)               ▼
//!    └────────────── finish ──────── Overflowed (sticky)
//! ```
//!
//! ## Overflow Policy
//!
//! When a field does not fit, it and every later field are dropped and the
//! record is still delivered: `finish` rewrites the header in place with the
//! length and arity actually written and sets the overflow flag.
//!
//! ## Producer Protocol
//!
//! 1. Sum [`crate::sizes`] costs to presize the buffer
//! 2. [`Encoder::bind`] the buffer
//! 3. [`Session::begin`] once with severity, arity and format literal
//! 4. [`Session::put`] each argument in format order
//! 5. [`Session::finish`] once and use the returned length

use crate::config::EncoderConfig;
use crate::cursor::WriteCursor;
use crate::error::{EncodeError, EncodeResult};
use crate::sizes::required_bytes;
use crate::value::{Blob, Value};
use logwire_types::{
    BlobCounter, CStrRef, FieldKind, FieldTag, MessageHeader, Severity, StrRef, MAX_BLOB_LEN,
    MIN_MESSAGE_SIZE,
};
use tracing::{debug, warn};
use zerocopy::{AsBytes, FromZeroes};

/// Lifecycle state of a [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderState {
    /// No buffer bound; every operation is a no-op
    Idle,
    /// Buffer bound, header not yet written
    Bound,
    /// Header and format written, value fields being appended
    Encoding,
    /// A field did not fit; no further bytes will be written
    Overflowed,
}

/// A finished record handed back by [`Session::finish`]
#[derive(Debug)]
pub struct EncodedMessage<'b> {
    /// The record: exactly the bytes written, starting at the buffer start
    pub bytes: &'b mut [u8],
    /// Value fields present in the record
    pub arity: u8,
    pub severity: Severity,
    /// True if trailing fields were dropped
    pub overflowed: bool,
}

impl EncodedMessage<'_> {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true for a record that made it through `begin`
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }
}

/// Fixed-buffer record encoder
///
/// Never owns a buffer. One encoder serves one producer and runs one
/// [`Session`] at a time; it can be reused for any number of buffers with
/// unrelated lifetimes.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Bind the first `total_size` bytes of `buf` for one record
    ///
    /// A rejected buffer still yields a session, but a disabled one:
    /// `can_encode()` is false, [`Session::rejection`] holds the reason, and
    /// `begin`/`put`/`finish` return [`EncodeError::Unbound`] without writing.
    pub fn bind<'b>(&mut self, buf: &'b mut [u8], total_size: usize) -> Session<'_, 'b> {
        let mut session = Session {
            encoder: self,
            cursor: None,
            rejection: None,
            state: EncoderState::Idle,
            header: MessageHeader::new_zeroed(),
            severity: Severity::Trace,
            declared: 0,
            written: 0,
        };

        if let Err(err) = session.encoder.check_bind(buf.len(), total_size) {
            if session.encoder.config.log_rejections {
                warn!(total_size, buffer_len = buf.len(), error = %err, "encoder disabled: buffer rejected");
            }
            session.rejection = Some(err);
            return session;
        }

        let (record, _) = buf.split_at_mut(total_size);
        session.cursor = Some(WriteCursor::new(record));
        session.state = EncoderState::Bound;
        debug!(total_size, "buffer bound");
        session
    }

    fn check_bind(&self, available: usize, total_size: usize) -> EncodeResult<()> {
        if total_size < MIN_MESSAGE_SIZE {
            return Err(EncodeError::BufferTooSmall {
                need: MIN_MESSAGE_SIZE,
                got: total_size,
            });
        }
        if total_size > available {
            return Err(EncodeError::BufferShorterThanDeclared {
                declared: total_size,
                available,
            });
        }
        let max = self.config.size_limit();
        if total_size > max {
            return Err(EncodeError::LengthUnrepresentable {
                size: total_size,
                max,
            });
        }
        Ok(())
    }
}

/// One record being encoded into a bound buffer
///
/// Borrows the encoder for `'e` and the buffer for `'b`. Dropping a session
/// without calling [`Session::finish`] discards the record.
#[derive(Debug)]
pub struct Session<'e, 'b> {
    encoder: &'e mut Encoder,
    cursor: Option<WriteCursor<'b>>,
    rejection: Option<EncodeError>,
    state: EncoderState,
    header: MessageHeader,
    severity: Severity,
    declared: u8,
    written: u8,
}

impl<'e, 'b> Session<'e, 'b> {
    #[inline(always)]
    pub fn state(&self) -> EncoderState {
        self.state
    }

    /// False when `bind` rejected the buffer
    #[inline(always)]
    pub fn can_encode(&self) -> bool {
        self.state != EncoderState::Idle
    }

    /// Why `bind` rejected the buffer, if it did
    pub fn rejection(&self) -> Option<&EncodeError> {
        self.rejection.as_ref()
    }

    /// Value fields written so far
    #[inline(always)]
    pub fn written(&self) -> u8 {
        self.written
    }

    /// Arity declared by `begin`
    #[inline(always)]
    pub fn declared_arity(&self) -> u8 {
        self.declared
    }

    /// Bytes left in the bound buffer
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.cursor.as_ref().map_or(0, WriteCursor::remaining)
    }

    /// Write the header placeholder and the format field
    ///
    /// `arity` counts value fields only and must be at least 1.
    pub fn begin(&mut self, severity: Severity, arity: u8, format: &'static str) -> EncodeResult<()> {
        match self.state {
            EncoderState::Bound => {}
            EncoderState::Idle => return Err(EncodeError::Unbound),
            state => return Err(EncodeError::OutOfOrder { op: "begin", state }),
        }
        if arity == 0 {
            return Err(EncodeError::ZeroArity);
        }
        let format_ref =
            StrRef::from_static(format).ok_or(EncodeError::StrTooLong { len: format.len() })?;

        let cursor = self.cursor.as_mut().ok_or(EncodeError::Unbound)?;
        let capacity = cursor.capacity();
        let length = u16::try_from(capacity).map_err(|_| EncodeError::LengthUnrepresentable {
            size: capacity,
            max: u16::MAX as usize,
        })?;

        // Length starts as the full capacity; finish corrects it if needed
        self.header = MessageHeader::new(length, arity, severity, false);
        cursor.write_struct(&self.header)?;
        cursor.write_struct(&FieldTag::new(FieldKind::Format, 0))?;
        cursor.write_struct(&format_ref)?;

        self.severity = severity;
        self.declared = arity;
        self.written = 0;
        self.state = EncoderState::Encoding;
        debug!(%severity, arity, capacity, "record started");
        Ok(())
    }

    /// Append one value field
    ///
    /// Checked in this order: call order, placeholder (always a no-op),
    /// value contract (oversized blob or string), sticky overflow, declared
    /// arity, space. Contract violations therefore surface even after the
    /// record has overflowed. Returns [`EncodeError::Overflow`] when the
    /// field does not fit; the session then stays overflowed and every later
    /// `put` fails the same way without touching the buffer.
    pub fn put(&mut self, value: Value<'_>) -> EncodeResult<()> {
        match self.state {
            EncoderState::Encoding | EncoderState::Overflowed => {}
            EncoderState::Idle => return Err(EncodeError::Unbound),
            state => return Err(EncodeError::OutOfOrder { op: "put", state }),
        }
        if value.is_placeholder() {
            return Ok(());
        }
        check_value_contract(&value)?;

        let needed = required_bytes(&value);
        if self.state == EncoderState::Overflowed {
            return Err(EncodeError::Overflow {
                needed,
                remaining: self.remaining(),
            });
        }
        if self.written == self.declared {
            return Err(EncodeError::TooManyFields {
                declared: self.declared as usize,
            });
        }

        let cursor = self.cursor.as_mut().ok_or(EncodeError::Unbound)?;
        let remaining = cursor.remaining();
        if needed > remaining {
            self.header.overflow = 1;
            self.state = EncoderState::Overflowed;
            debug!(
                needed,
                remaining,
                written = self.written,
                declared = self.declared,
                "record full, dropping remaining fields"
            );
            return Err(EncodeError::Overflow { needed, remaining });
        }

        write_field(cursor, &value)?;
        self.written += 1;
        Ok(())
    }

    /// Close the record and hand the buffer back
    ///
    /// If fields were dropped, or the buffer was larger than the fields
    /// needed, the header is rewritten in place so `length` and `arity`
    /// describe exactly what is present. The session is consumed whatever the
    /// outcome, leaving the encoder free for the next buffer.
    pub fn finish(self) -> EncodeResult<EncodedMessage<'b>> {
        let Session {
            encoder,
            cursor,
            state,
            mut header,
            severity,
            declared,
            written,
            ..
        } = self;

        let mut cursor = match (state, cursor) {
            (EncoderState::Encoding | EncoderState::Overflowed, Some(cursor)) => cursor,
            (EncoderState::Bound, _) => {
                return Err(EncodeError::OutOfOrder { op: "finish", state })
            }
            _ => return Err(EncodeError::Unbound),
        };

        let overflowed = state == EncoderState::Overflowed;
        if !overflowed && written < declared {
            return Err(EncodeError::MissingFields {
                declared: declared as usize,
                written: written as usize,
            });
        }

        let length = cursor.position();
        if overflowed || length != cursor.capacity() {
            let wire_length = u16::try_from(length).map_err(|_| {
                EncodeError::LengthUnrepresentable {
                    size: length,
                    max: u16::MAX as usize,
                }
            })?;
            header.set_length(wire_length);
            header.arity = written;
            header.overflow = overflowed as u8;
            cursor.patch_at(0, header.as_bytes())?;

            if overflowed && encoder.config.log_truncation {
                warn!(declared, written, length, %severity, "record truncated");
            }
        }

        Ok(EncodedMessage {
            bytes: cursor.into_written(),
            arity: written,
            severity,
            overflowed,
        })
    }
}

fn check_value_contract(value: &Value<'_>) -> EncodeResult<()> {
    match value {
        Value::Raw(blob) | Value::ByteStream(blob) if blob.encoded_len() > MAX_BLOB_LEN => {
            Err(EncodeError::BlobTooLarge {
                len: blob.encoded_len(),
                max: MAX_BLOB_LEN,
            })
        }
        Value::StrLiteral(s) if u32::try_from(s.len()).is_err() => {
            Err(EncodeError::StrTooLong { len: s.len() })
        }
        _ => Ok(()),
    }
}

/// Write tag and payload; the caller has already checked the space
#[inline(always)]
fn write_field(cursor: &mut WriteCursor<'_>, value: &Value<'_>) -> EncodeResult<()> {
    match *value {
        Value::Int(int, flags) => {
            cursor.write_struct(&FieldTag::new(int.kind(), flags.bits()))?;
            let (bytes, len) = int.to_le_bytes();
            cursor.write_bytes(&bytes[..len])
        }
        Value::F32(v) => {
            cursor.write_struct(&FieldTag::new(FieldKind::F32, 0))?;
            cursor.write_bytes(&v.to_le_bytes())
        }
        Value::F64(v) => {
            cursor.write_struct(&FieldTag::new(FieldKind::F64, 0))?;
            cursor.write_bytes(&v.to_le_bytes())
        }
        Value::Bool(v) => cursor.write_struct(&FieldTag::boolean(v)),
        Value::Raw(blob) => write_blob(cursor, FieldKind::Raw, &blob),
        Value::ByteStream(blob) => write_blob(cursor, FieldKind::ByteStream, &blob),
        Value::StrLiteral(s) => {
            let str_ref = StrRef::from_static(s).ok_or(EncodeError::StrTooLong { len: s.len() })?;
            cursor.write_struct(&FieldTag::new(FieldKind::StrLiteral, 0))?;
            cursor.write_struct(&str_ref)
        }
        Value::StaticCStr(s) => {
            cursor.write_struct(&FieldTag::new(FieldKind::StaticCStr, 0))?;
            cursor.write_struct(&CStrRef::from_static(s))
        }
        Value::Placeholder => Ok(()),
    }
}

fn write_blob(cursor: &mut WriteCursor<'_>, kind: FieldKind, blob: &Blob<'_>) -> EncodeResult<()> {
    let bytes = blob.bytes();
    let len = u16::try_from(bytes.len()).map_err(|_| EncodeError::BlobTooLarge {
        len: bytes.len(),
        max: MAX_BLOB_LEN,
    })?;
    cursor.write_struct(&FieldTag::new(kind, 0))?;
    cursor.write_struct(&BlobCounter::new(len))?;
    cursor.write_bytes(bytes)
}
