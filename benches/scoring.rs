//! Criterion benchmarks for the overlap scorer and top-k search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use legal_qa_engine::scoring::{score, search};
use legal_qa_engine::{text, Document, KnowledgeStore};

fn bench_score(c: &mut Criterion) {
    let store = KnowledgeStore::builtin();
    let document = &store.documents()[0];
    let folded = text::fold("What is Section 302 IPC and what is the punishment for murder?");

    c.bench_function("score_single_document", |b| {
        b.iter(|| score(black_box(document), black_box(&folded)))
    });
}

fn bench_search(c: &mut Criterion) {
    // A few hundred short records, the upper end of the expected corpus size
    let documents: Vec<Document> = (0..300)
        .map(|i| Document {
            id: format!("doc_{}", i),
            title: format!("Section {} - Sample Provision", i),
            content: "Whoever commits the offense shall be punished with imprisonment \
                      or fine as the court directs."
                .to_string(),
            keywords: vec![format!("section {}", i), "imprisonment".to_string()],
            accuracy_score: 95,
        })
        .collect();
    let store = KnowledgeStore::from_documents(documents);

    c.bench_function("search_300_documents", |b| {
        b.iter(|| search(black_box(&store), black_box("section 150 imprisonment"), 3))
    });
}

criterion_group!(benches, bench_score, bench_search);
criterion_main!(benches);
