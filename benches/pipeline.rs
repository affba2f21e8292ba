use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rdfkb::core::LabelPolicy;
use rdfkb::loading::load_seed_data;
use rdfkb::output::render_artifact;
use rdfkb::projection::project;
use rdfkb::rendering::render_chunks;
use rdfkb::store::TripleStore;

fn seed_store() -> TripleStore {
    let mut store = TripleStore::new();
    load_seed_data(&mut store).unwrap();
    store
}

fn load_benchmark(c: &mut Criterion) {
    c.bench_function("load_seed_graph", |b| {
        b.iter(|| {
            let store = seed_store();
            black_box(store.len());
        });
    });
}

fn projection_benchmark(c: &mut Criterion) {
    let store = seed_store();

    for policy in [LabelPolicy::Declared, LabelPolicy::Lexical] {
        c.bench_function(&format!("project_seed_{}", policy), |b| {
            b.iter(|| {
                let records = project(black_box(&store), policy);
                black_box(records.len());
            });
        });
    }
}

fn render_benchmark(c: &mut Criterion) {
    let records = project(&seed_store(), LabelPolicy::Declared);
    let generated_at = chrono::Local::now().naive_local();

    c.bench_function("render_seed_chunks", |b| {
        b.iter(|| {
            let chunks = render_chunks(black_box(&records));
            black_box(chunks.len());
        });
    });

    let chunks = render_chunks(&records);
    c.bench_function("render_artifact_text", |b| {
        b.iter(|| {
            let text = render_artifact(black_box(&chunks), generated_at);
            black_box(text.len());
        });
    });
}

criterion_group!(benches, load_benchmark, projection_benchmark, render_benchmark);
criterion_main!(benches);
