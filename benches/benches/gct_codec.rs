//! Benchmark suite for GCT encoding and decoding
//!
//! This benchmark measures full-image encode and decode throughput on
//! synthetic gradients, plus header parsing on its own.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gct_benches::{generate_gradient_image, sizes};
use gct_types::file::gct::{self, Header, SUPPORTED_FLAGS};
use std::hint::black_box;

/// Benchmark full-image encoding on synthetic gradients
fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("gct_encode");

	for (name, (width, height)) in
		[("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM)]
	{
		let header = Header::new(width as i32, height as i32, SUPPORTED_FLAGS).unwrap();
		let pixels = generate_gradient_image(width, height);

		group.throughput(Throughput::Elements((width * height) as u64));
		group.bench_with_input(BenchmarkId::new("encode", name), &pixels, |b, pixels| {
			b.iter(|| {
				let file = gct::encode(&header, black_box(pixels));
				black_box(file)
			});
		});
	}

	group.finish();
}

/// Benchmark full-image decoding of encoder output
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("gct_decode");

	for (name, (width, height)) in
		[("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM)]
	{
		let header = Header::new(width as i32, height as i32, SUPPORTED_FLAGS).unwrap();
		let pixels = generate_gradient_image(width, height);
		let file = gct::encode(&header, &pixels).unwrap();

		group.throughput(Throughput::Elements((width * height) as u64));
		group.bench_with_input(BenchmarkId::new("decode", name), &file, |b, file| {
			b.iter(|| {
				let decoded = gct::decode(black_box(file));
				black_box(decoded)
			});
		});
	}

	group.finish();
}

/// Benchmark header parsing separately
fn bench_header_parsing(c: &mut Criterion) {
	let header = Header::new(1024, 768, SUPPORTED_FLAGS).unwrap();
	let bytes = header.to_bytes();

	c.bench_function("gct_header/from_bytes", |b| {
		b.iter(|| {
			let parsed = Header::from_bytes(black_box(&bytes));
			black_box(parsed)
		});
	});
}

criterion_group!(benches, bench_encode, bench_decode, bench_header_parsing);
criterion_main!(benches);
