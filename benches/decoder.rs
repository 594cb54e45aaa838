//! Decoder and icon pipeline benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wintitle::icon::{convert_block, select_icon};
use wintitle::{decode_title, CellMeasure};

fn bench_decode_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoder");
    let measure = CellMeasure::default();

    let payload = br#"{"windowtitle":"~/src/wintitle - nvim","xcb_window_id":20971523,"is_pango_markup":false}"#;
    group.throughput(Throughput::Bytes(payload.len() as u64));

    group.bench_function("typical_payload", |b| {
        b.iter(|| black_box(decode_title(black_box(payload), &measure)))
    });

    // Long title with unknown fields the decoder has to skip
    let noisy = format!(
        r#"{{"extra":{{"a":[1,2,3],"b":{{"c":null}}}},"windowtitle":"{}","is_pango_markup":true}}"#,
        "<b>title</b> ".repeat(200)
    );
    group.throughput(Throughput::Bytes(noisy.len() as u64));

    group.bench_function("noisy_markup_payload", |b| {
        b.iter(|| black_box(decode_title(black_box(noisy.as_bytes()), &measure)))
    });

    group.finish();
}

fn bench_icon_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("icon");

    // Typical application icon set
    let mut blob = Vec::new();
    for size in [16u32, 22, 24, 32, 48, 64, 128, 256] {
        blob.extend_from_slice(&size.to_ne_bytes());
        blob.extend_from_slice(&size.to_ne_bytes());
        for i in 0..size * size {
            blob.extend_from_slice(&(0x80000000 | i).to_ne_bytes());
        }
    }
    group.throughput(Throughput::Bytes(blob.len() as u64));

    group.bench_function("select_and_convert", |b| {
        b.iter(|| {
            let block = select_icon(black_box(&blob), 40);
            black_box(block.and_then(|block| convert_block(&block)))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode_payload, bench_icon_pipeline);
criterion_main!(benches);
