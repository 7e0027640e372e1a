//! One-call record encoding
//!
//! [`encode_record`] runs the whole producer protocol for a slice of values:
//! presize, bind, begin, put each value, finish. Overflow is absorbed so a
//! record that does not fit is delivered truncated; contract errors still
//! propagate.

use crate::encoder::{EncodedMessage, Encoder};
use crate::error::{EncodeError, EncodeResult};
use crate::sizes::required_message_bytes;
use crate::value::Value;
use logwire_types::{Severity, MAX_ARITY};

/// Encode `values` as one record at the start of `buf`
///
/// The record is sized exactly when `buf` is large enough, and truncated to
/// `buf.len()` (or the configured size limit) otherwise. Placeholders are
/// skipped and do not count towards the arity.
pub fn encode_record<'b>(
    encoder: &mut Encoder,
    buf: &'b mut [u8],
    severity: Severity,
    format: &'static str,
    values: &[Value<'_>],
) -> EncodeResult<EncodedMessage<'b>> {
    let arity = values.iter().filter(|v| !v.is_placeholder()).count();
    let arity = u8::try_from(arity).map_err(|_| EncodeError::TooManyFields {
        declared: MAX_ARITY,
    })?;

    let total = required_message_bytes(values)
        .min(buf.len())
        .min(encoder.config().size_limit());

    let mut session = encoder.bind(buf, total);
    if let Some(err) = session.rejection() {
        return Err(err.clone());
    }
    session.begin(severity, arity, format)?;

    for value in values {
        match session.put(*value) {
            Ok(()) | Err(EncodeError::Overflow { .. }) => {}
            Err(err) => return Err(err),
        }
    }

    session.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Blob;
    use logwire_types::MessageHeader;

    #[test]
    fn test_exact_record() {
        let mut buf = [0u8; 128];
        let mut encoder = Encoder::new();
        let msg = encode_record(
            &mut encoder,
            &mut buf,
            Severity::Info,
            "x",
            &[7u32.into(), true.into()],
        )
        .unwrap();

        assert_eq!(msg.len(), 27);
        assert_eq!(msg.arity, 2);
        assert!(!msg.overflowed);
    }

    #[test]
    fn test_truncates_to_buffer() {
        let mut buf = [0u8; 26];
        let mut encoder = Encoder::new();
        let msg = encode_record(
            &mut encoder,
            &mut buf,
            Severity::Info,
            "x",
            &[7u32.into(), true.into()],
        )
        .unwrap();

        assert_eq!(msg.len(), 25);
        assert_eq!(msg.arity, 1);
        assert!(msg.overflowed);
        let header = MessageHeader::parse(msg.as_bytes()).unwrap();
        assert!(header.is_overflow());
    }

    #[test]
    fn test_placeholders_not_counted() {
        let mut buf = [0u8; 64];
        let mut encoder = Encoder::new();
        let msg = encode_record(
            &mut encoder,
            &mut buf,
            Severity::Notice,
            "{} {}",
            &[Value::Placeholder, 1u8.into(), Value::Placeholder],
        )
        .unwrap();
        assert_eq!(msg.arity, 1);
        assert_eq!(msg.len(), 22);
    }

    #[test]
    fn test_contract_errors_propagate() {
        let big = vec![0u8; 70_000];
        let mut buf = [0u8; 64];
        let mut encoder = Encoder::new();
        let err = encode_record(
            &mut encoder,
            &mut buf,
            Severity::Info,
            "x",
            &[Value::Raw(Blob::new(&big))],
        )
        .unwrap_err();
        assert!(matches!(err, EncodeError::BlobTooLarge { .. }));

        let mut buf = [0u8; 64];
        let err = encode_record(&mut encoder, &mut buf, Severity::Info, "x", &[]).unwrap_err();
        assert_eq!(err, EncodeError::ZeroArity);
    }

    #[test]
    fn test_contract_error_after_overflow_not_absorbed() {
        let big = vec![0u8; 70_000];
        let mut buf = [0u8; 23];
        let mut encoder = Encoder::new();
        let err = encode_record(
            &mut encoder,
            &mut buf,
            Severity::Info,
            "x",
            &[1u8.into(), 2u64.into(), Value::byte_stream(&big)],
        )
        .unwrap_err();
        assert_eq!(err, EncodeError::BlobTooLarge { len: 70_000, max: 65_535 });
    }

    #[test]
    fn test_too_many_values() {
        let values = vec![Value::from(true); 256];
        let mut buf = vec![0u8; 1024];
        let mut encoder = Encoder::new();
        assert_eq!(
            encode_record(&mut encoder, &mut buf, Severity::Info, "x", &values).unwrap_err(),
            EncodeError::TooManyFields { declared: 255 }
        );
    }

    #[test]
    fn test_undersized_buffer_rejected() {
        let mut buf = [0u8; 8];
        let mut encoder = Encoder::new();
        assert!(matches!(
            encode_record(&mut encoder, &mut buf, Severity::Info, "x", &[1u8.into()]),
            Err(EncodeError::BufferTooSmall { .. })
        ));
    }
}
