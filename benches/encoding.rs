use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use proquint::{DecodeOptions, EncodeOptions, PaddingMode, decode_bytes, encode_bytes, encode_u64};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn bench_encode_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_bytes");

    for hyphens in [false, true] {
        let options = EncodeOptions::new(hyphens, PaddingMode::HyphenTerminator);
        let label = if hyphens { "hyphens" } else { "compact" };

        for size in SIZES {
            group.throughput(Throughput::Bytes(size as u64));
            let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();

            group.bench_with_input(BenchmarkId::new(label, size), &data, |b, data| {
                b.iter(|| encode_bytes(black_box(data), black_box(options)));
            });
        }
    }

    group.finish();
}

fn bench_decode_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_bytes");
    let options = DecodeOptions::new(PaddingMode::HyphenTerminator);

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
        let encoded = encode_bytes(&data, EncodeOptions::new(true, PaddingMode::HyphenTerminator))
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode_bytes(black_box(encoded), black_box(options)));
        });
    }

    group.finish();
}

fn bench_encode_u64(c: &mut Criterion) {
    c.bench_function("encode_u64", |b| {
        b.iter(|| encode_u64(black_box(0x6782_123B_F00D_BEEF), black_box(true)));
    });
}

criterion_group!(
    benches,
    bench_encode_bytes,
    bench_decode_bytes,
    bench_encode_u64
);
criterion_main!(benches);
