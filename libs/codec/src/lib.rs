//! # Logwire Codec - Fixed-Buffer Log Record Encoder
//!
//! ## Purpose
//!
//! The producer half of a binary logging pipeline. A call site hands the
//! encoder a severity, a static format literal and a list of typed values;
//! the encoder serializes them into a caller-supplied buffer as one compact,
//! self-describing record. A separate consumer decodes and renders records
//! later, outside the hot path.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → ring buffer / file / socket
//!     ↑           ↓
//! Wire Layout  Size calculation
//! Constants    Record encoding
//! ```
//!
//! ## What This Crate Contains
//! - [`Value`]: the closed set of encodable argument values
//! - [`sizes`]: exact byte cost of each field, for presizing buffers
//! - [`Encoder`] and [`Session`]: the bind / begin / put / finish state machine
//! - [`encode_record`]: the whole protocol in one call
//! - [`EncoderConfig`]: TOML-loadable size limit and diagnostics switches
//!
//! ## What This Crate Does NOT Contain
//! - Record decoding or text rendering
//! - Buffer allocation, transport or persistence
//!
//! ## Guarantees
//!
//! - Never writes past the bound region
//! - Never allocates
//! - A record that does not fit is delivered truncated with its header
//!   rewritten to describe exactly what is present
//!
//! ```
//! use logwire_codec::{Encoder, Severity};
//!
//! let mut encoder = Encoder::new();
//! for answer in [42u32, 43] {
//!     let mut buf = [0u8; 64];
//!     let mut session = encoder.bind(&mut buf, 27);
//!     session.begin(Severity::Info, 2, "answer={} ok={}").unwrap();
//!     session.put(answer.into()).unwrap();
//!     session.put(true.into()).unwrap();
//!     let record = session.finish().unwrap();
//!     assert_eq!(record.len(), 27);
//! }
//! ```

pub mod config;
pub mod cursor;
pub mod encoder;
pub mod error;
pub mod record;
pub mod sizes;
pub mod value;

pub use config::{ConfigError, EncoderConfig};
pub use encoder::{EncodedMessage, Encoder, EncoderState, Session};
pub use error::{EncodeError, EncodeResult};
pub use record::encode_record;
pub use sizes::{required_bytes, required_message_bytes};
pub use value::{Blob, Int, IntFlags, Value};

// Wire layout types, re-exported so producers need only this crate
pub use logwire_types::{
    FieldKind, FieldTag, MessageHeader, Severity, HEADER_SIZE, MAX_ARITY, MAX_BLOB_LEN,
    MAX_MESSAGE_SIZE, MIN_MESSAGE_SIZE, TAG_SIZE,
};
