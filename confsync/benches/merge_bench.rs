use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use confsync::{
    merge_documents, ConfigDocument, ConfigId, MemoryStore, ReconcileOptions, Reconciler,
};

const DOCUMENT_WIDTHS: &[usize] = &[10, 100, 500];

/// Builds a document with `width` top-level keys, each holding a small
/// nested mapping.
fn synthetic_document(width: usize, marker: &str) -> ConfigDocument {
    let mut yaml = String::new();
    for index in 0..width {
        yaml.push_str(&format!(
            "entry_{index}:\n  label: {marker}-{index}\n  weight: {index}\n  flags:\n    enabled: true\n"
        ));
    }
    ConfigDocument::from_yaml_str(&yaml).expect("failed to build synthetic document")
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_documents");

    for &width in DOCUMENT_WIDTHS {
        let current = synthetic_document(width, "current");
        let desired = synthetic_document(width / 2, "desired");

        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| {
                let merged = merge_documents(black_box(&current), black_box(&desired));
                black_box(merged);
            });
        });
    }

    group.finish();
}

fn bench_canonical_yaml(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_yaml");

    for &width in DOCUMENT_WIDTHS {
        let document = synthetic_document(width, "canonical");

        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| {
                let text = document.canonical_yaml().expect("serialization failed");
                black_box(text);
            });
        });
    }

    group.finish();
}

fn bench_reconcile_no_op(c: &mut Criterion) {
    // The steady-state cost: repeated reconciliations that find no drift.
    let store = MemoryStore::new();
    let id = ConfigId::new("bench.settings").expect("valid id");
    let document = synthetic_document(100, "steady");
    store.seed(&id, document.clone());

    let options = ReconcileOptions::new(id, document);
    let reconciler = Reconciler::new(&store);

    c.bench_function("reconcile_no_op", |b| {
        b.iter(|| {
            let outcome = reconciler
                .reconcile(black_box(&options))
                .expect("reconcile failed");
            black_box(outcome);
        });
    });
}

criterion_group!(
    merge_bench,
    bench_merge,
    bench_canonical_yaml,
    bench_reconcile_no_op
);
criterion_main!(merge_bench);
