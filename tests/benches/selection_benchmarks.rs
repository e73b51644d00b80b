//! # Block Production Benchmarks
//!
//! | Case | Claim | Target |
//! |------|-------|--------|
//! | Random mempool | O(n log n) ordering + O(n + e) admission | < 50ms at 100k |
//! | Rising chain | Cascade depth does not grow the call stack | linear in n |
//! | Snapshot parse | One pass over the file | < 1µs per record |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qc_06_mempool::SnapshotReader;
use qc_17_block_production::{SelectionMode, TransactionSelector};
use qc_tests::fixtures::{random_mempool, rising_chain, to_snapshot, MempoolShape};
use std::io::Cursor;
use std::time::Duration;

const MAX_BLOCK_WEIGHT: u64 = 4_000_000;

fn bench_random_mempool(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-17-selection");
    group.measurement_time(Duration::from_secs(10));

    for size in [1_000, 10_000, 100_000] {
        let txs = random_mempool(
            42,
            MempoolShape {
                size,
                ..Default::default()
            },
        );
        group.throughput(Throughput::Elements(size as u64));

        for mode in [SelectionMode::Cascading, SelectionMode::Strict] {
            let selector = TransactionSelector::new(MAX_BLOCK_WEIGHT, mode);
            group.bench_with_input(BenchmarkId::new(mode.to_string(), size), &txs, |b, txs| {
                b.iter(|| black_box(selector.select(txs).map(|o| o.block.len())))
            });
        }
    }

    group.finish();
}

fn bench_rising_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-17-cascade");

    for len in [1_000, 100_000] {
        let chain = rising_chain(len);
        let selector = TransactionSelector::new(u64::MAX, SelectionMode::Cascading);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("rising_chain", len), &chain, |b, chain| {
            b.iter(|| black_box(selector.select(chain).map(|o| o.block.len())))
        });
    }

    group.finish();
}

fn bench_snapshot_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-06-snapshot");
    let snapshot = to_snapshot(&random_mempool(7, MempoolShape::default()));
    let reader = SnapshotReader::default();

    group.throughput(Throughput::Elements(MempoolShape::default().size as u64));
    group.bench_function("read_1000", |b| {
        b.iter(|| black_box(reader.read(Cursor::new(snapshot.as_bytes())).map(|txs| txs.len())))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_random_mempool,
    bench_rising_chain,
    bench_snapshot_parse
);
criterion_main!(benches);
