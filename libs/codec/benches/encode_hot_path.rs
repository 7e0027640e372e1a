//! Hot path encoding benchmarks
//!
//! Covers the per-call cost a logging call site pays: sizing, a full record,
//! a truncated record and a rejected bind.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logwire_codec::{
    encode_record, required_message_bytes, Encoder, EncoderConfig, Severity, Value,
};

const FORMAT: &str = "order {} filled {} @ {} venue={} ok={}";

fn typical_values(payload: &[u8]) -> [Value<'_>; 5] {
    [
        Value::from(918_273_645u64),
        Value::from(250i32),
        Value::from(101.25f64),
        Value::raw(payload),
        Value::from(true),
    ]
}

fn quiet_config() -> EncoderConfig {
    EncoderConfig {
        log_rejections: false,
        log_truncation: false,
        ..EncoderConfig::default()
    }
}

fn bench_sizing(c: &mut Criterion) {
    let payload = [0x42u8; 16];
    let values = typical_values(&payload);

    c.bench_function("required_message_bytes", |b| {
        b.iter(|| black_box(required_message_bytes(black_box(&values))));
    });
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_record");
    let payload = [0x42u8; 16];
    let values = typical_values(&payload);
    let required = required_message_bytes(&values);

    let mut encoder = Encoder::with_config(quiet_config());

    let mut exact = vec![0u8; required];
    group.bench_function("exact_fit", |b| {
        b.iter(|| {
            let msg = encode_record(&mut encoder, &mut exact, Severity::Info, FORMAT, black_box(&values));
            black_box(msg.map(|m| m.len()))
        });
    });

    let mut short = vec![0u8; required - 8];
    group.bench_function("truncated", |b| {
        b.iter(|| {
            let msg = encode_record(&mut encoder, &mut short, Severity::Info, FORMAT, black_box(&values));
            black_box(msg.map(|m| m.overflowed))
        });
    });

    let mut tiny = vec![0u8; 8];
    group.bench_function("rejected_bind", |b| {
        b.iter(|| black_box(encoder.bind(&mut tiny, black_box(8)).can_encode()));
    });

    group.finish();
}

fn bench_manual_protocol(c: &mut Criterion) {
    let mut buf = vec![0u8; 64];
    let mut encoder = Encoder::with_config(quiet_config());

    c.bench_function("manual_bind_begin_put_finish", |b| {
        b.iter(|| {
            let mut session = encoder.bind(&mut buf, black_box(27));
            let _ = session.begin(Severity::Debug, 2, "x={} y={}");
            let _ = session.put(black_box(7u32).into());
            let _ = session.put(black_box(true).into());
            black_box(session.finish().map(|m| m.len()))
        });
    });
}

criterion_group!(benches, bench_sizing, bench_encoding, bench_manual_protocol);
criterion_main!(benches);
