//! Criterion benchmarks for fragmenting and reassembling datagrams.
//!
//! Sizes span a single unfragmented frame up to the 1280-byte IPv6 minimum
//! MTU, the largest datagram the default configuration accepts.

use criterion::{BenchmarkId, Criterion, Throughput, black_box};
use meshfrag::{FragmentationEngine, MeshAddress};
use meshfrag_testing::{collect_frames, feed_frames, sequential_datagram, shuffled};

const HOP: MeshAddress = MeshAddress::from_static(&[0x00, 0x01]);
const SIZES: [usize; 4] = [96, 256, 640, 1280];
const HEADER_LEN: usize = 40;

fn benchmark_fragment(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/fragment");
    let engine = FragmentationEngine::default();

    for size in SIZES {
        let datagram = sequential_datagram(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &datagram, |b, datagram| {
            b.iter(|| black_box(collect_frames(&engine, &HOP, datagram, HEADER_LEN)));
        });
    }

    group.finish();
}

fn benchmark_reassemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/reassemble");
    let engine = FragmentationEngine::default();

    for size in SIZES {
        let frames = collect_frames(
            &FragmentationEngine::default(),
            &HOP,
            &sequential_datagram(size),
            HEADER_LEN,
        );
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("in_order", size), &frames, |b, frames| {
            b.iter(|| black_box(feed_frames(&engine, &HOP, frames.iter().cloned())));
        });
        let reversed: Vec<_> = frames.iter().rev().cloned().collect();
        group.bench_with_input(BenchmarkId::new("reversed", size), &reversed, |b, frames| {
            b.iter(|| black_box(feed_frames(&engine, &HOP, frames.iter().cloned())));
        });
        let scrambled = shuffled(frames, 0x5EED);
        group.bench_with_input(BenchmarkId::new("shuffled", size), &scrambled, |b, frames| {
            b.iter(|| black_box(feed_frames(&engine, &HOP, frames.iter().cloned())));
        });
    }

    group.finish();
}

/// Entrypoint for fragmentation and reassembly benchmarks.
fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    benchmark_fragment(&mut criterion);
    benchmark_reassemble(&mut criterion);
    criterion.final_summary();
}
