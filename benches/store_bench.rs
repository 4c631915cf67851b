//! Benchmarks for the chart store
//!
//! Run with: cargo bench

use chartboard::persist::{attach_persistence, decode, encode, MemoryStore, DEFAULT_KEY};
use chartboard::store::{ChartDataset, ChartEntry, ChartStore};
use chartboard::pie_slices;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_test_dataset(count: usize) -> ChartDataset {
    (0..count)
        .map(|i| ChartEntry::new(format!("entry-{}", i), i as f64, "#36a2eb"))
        .collect()
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    for size in [10, 100, 1000] {
        let dataset = create_test_dataset(size);

        group.bench_function(format!("add_remove_front_{}", size), |b| {
            let mut store = ChartStore::with_dataset(dataset.clone());
            b.iter(|| {
                store.add(black_box(ChartEntry::new("x", 1.0, "red")));
                store.remove(0).unwrap()
            })
        });

        group.bench_function(format!("add_persisted_{}", size), |b| {
            let mut store = ChartStore::with_dataset(dataset.clone());
            attach_persistence(&mut store, MemoryStore::new(), DEFAULT_KEY);
            b.iter(|| {
                store.add(black_box(ChartEntry::new("x", 1.0, "red")));
                let last = store.count() - 1;
                store.remove(last).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in [10, 100, 1000] {
        let dataset = create_test_dataset(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("encode_{}", size), |b| {
            b.iter(|| encode(black_box(&dataset)).unwrap())
        });

        let raw = encode(&dataset).unwrap();
        group.bench_function(format!("decode_{}", size), |b| {
            b.iter(|| decode(black_box(&raw)).unwrap())
        });

        group.bench_function(format!("pie_slices_{}", size), |b| {
            b.iter(|| pie_slices(black_box(&dataset)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mutations, bench_snapshot);
criterion_main!(benches);
