//! Encode a few records and print their bytes
//!
//! Run with `RUST_LOG=logwire_codec=debug` to see bind rejections and
//! truncation diagnostics.

use logwire_codec::{
    encode_record, required_message_bytes, Encoder, EncoderConfig, Int, IntFlags, Severity,
    Value,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONNECT_FMT: &str = "connected to {} port={} retries={} secure={}";
static HOST: &str = "db.internal";

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match EncoderConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => EncoderConfig::default(),
    };

    let values = [
        Value::from(HOST),
        Value::flagged(Int::U16(5432), IntFlags::empty()),
        Value::from(3u8),
        Value::from(true),
    ];
    let required = required_message_bytes(&values);
    info!(required, "sized connect record");

    let mut encoder = Encoder::with_config(config);

    let mut full = vec![0u8; required];
    match encode_record(&mut encoder, &mut full, Severity::Notice, CONNECT_FMT, &values) {
        Ok(msg) => println!(
            "full      ({:>2} bytes, arity {}): {}",
            msg.len(),
            msg.arity,
            hex(msg.as_bytes())
        ),
        Err(e) => eprintln!("encode failed: {e}"),
    }

    let mut short = vec![0u8; required - 3];
    match encode_record(&mut encoder, &mut short, Severity::Notice, CONNECT_FMT, &values) {
        Ok(msg) => println!(
            "truncated ({:>2} bytes, arity {}): {}",
            msg.len(),
            msg.arity,
            hex(msg.as_bytes())
        ),
        Err(e) => eprintln!("encode failed: {e}"),
    }

    let mut tiny = [0u8; 8];
    let session = encoder.bind(&mut tiny, 8);
    if let Some(e) = session.rejection() {
        println!("rejected: {e} (can_encode = {})", session.can_encode());
    }
}
