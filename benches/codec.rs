//! Benchmarks for lzss compression and decompression throughput.
//!
//! Tests various data patterns and sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzss::{compress, compress_files, decompress, CodecConfig};

/// Generate random (incompressible) data
fn generate_random_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    for i in 0..size {
        i.hash(&mut hasher);
        data.push((hasher.finish() & 0xFF) as u8);
    }
    data
}

/// Generate repetitive (highly compressible) data
fn generate_repetitive_data(size: usize) -> Vec<u8> {
    let pattern = b"ABCDABCDABCDABCD";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let remaining = size - data.len();
        let chunk_size = remaining.min(pattern.len());
        data.extend_from_slice(&pattern[..chunk_size]);
    }
    data
}

/// Generate text-like data (word alphabet, frequent short repeats)
fn generate_text_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let words: [&[u8]; 8] =
        [b"the ", b"window ", b"slides ", b"over ", b"bytes ", b"and ", b"matches ", b"runs "];
    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();

    let mut i = 0usize;
    while data.len() < size {
        i.hash(&mut hasher);
        data.extend_from_slice(words[(hasher.finish() % words.len() as u64) as usize]);
        i += 1;
    }
    data.truncate(size);
    data
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    // Test different data sizes
    for size in [1024, 64 * 1024, 256 * 1024].iter() {
        let data = generate_text_data(*size);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("text_data", size), &data, |b, data| {
            b.iter(|| compress(data));
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for size in [1024, 64 * 1024, 256 * 1024].iter() {
        let container = compress(&generate_text_data(*size));

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("text_data", size), &container, |b, container| {
            b.iter(|| decompress(container).unwrap());
        });
    }

    group.finish();
}

fn bench_data_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_patterns");
    let size = 256 * 1024; // 256KB

    let random_data = generate_random_data(size);
    let repetitive_data = generate_repetitive_data(size);
    let text_data = generate_text_data(size);

    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("random", |b| b.iter(|| compress(&random_data)));
    group.bench_function("repetitive", |b| b.iter(|| compress(&repetitive_data)));
    group.bench_function("text", |b| b.iter(|| compress(&text_data)));

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<_> = (0..8)
        .map(|i| {
            let path = dir.path().join(format!("input{i}"));
            std::fs::write(&path, generate_text_data(128 * 1024)).unwrap();
            path
        })
        .collect();

    group.throughput(Throughput::Bytes(8 * 128 * 1024));

    for threads in [1, 2, 4].iter() {
        group.bench_with_input(BenchmarkId::new("threads", threads), &paths, |b, paths| {
            let config = CodecConfig { num_threads: *threads, ..Default::default() };
            b.iter(|| compress_files(paths, &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_data_patterns, bench_batch);
criterion_main!(benches);
