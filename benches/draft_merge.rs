//! Benchmarks for draft merging and checklist computation.
//!
//! The review checklist is recomputed on every render, so both operations
//! sit on the hot path of the UI loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use fake::Fake;
use freeness_tui::profile::{City, FreelancerDraft, FreelancerPatch};
use freeness_tui::wizard::review::{checklist, is_complete};

fn patches(count: usize) -> Vec<FreelancerPatch> {
    (0..count)
        .map(|i| match i % 4 {
            0 => FreelancerPatch::city(City::Sfax),
            1 => FreelancerPatch::skills(Words(3..8).fake()),
            2 => FreelancerPatch::title(Sentence(2..5).fake()),
            _ => FreelancerPatch::bio(Paragraph(3..6).fake()),
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let patches = patches(100);
    c.bench_function("merge_100_patches", |b| {
        b.iter(|| {
            let mut draft = FreelancerDraft::default();
            for patch in patches.iter().cloned() {
                draft.merge(black_box(patch));
            }
            draft
        })
    });
}

fn bench_checklist(c: &mut Criterion) {
    let mut draft = FreelancerDraft::default();
    for patch in patches(8) {
        draft.merge(patch);
    }
    c.bench_function("checklist", |b| b.iter(|| checklist(black_box(&draft))));
    c.bench_function("is_complete", |b| b.iter(|| is_complete(black_box(&draft))));
}

criterion_group!(benches, bench_merge, bench_checklist);
criterion_main!(benches);
