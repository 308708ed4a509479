// SPDX-FileCopyrightText: 2026 Shortlist Contributors
// SPDX-License-Identifier: LicenseRef-Shortlist-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Shortlist and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use shortlist::detect::{detect, DetectorConfig};
use shortlist::format::parse_document;

mod fixtures;

// Benchmark identity (keep stable):
// - Group names in this file: `parse.document`, `detect.pass`
// - Case IDs must remain stable across refactors so results stay
//   comparable over time (e.g. `cards_100`, `bare_1000`).
fn benches_detect(c: &mut Criterion) {
    let cards_100 = fixtures::listing_html(100);
    let cards_1000 = fixtures::listing_html(1000);
    let bare_1000 = fixtures::bare_listing_html(1000);

    let mut group = c.benchmark_group("parse.document");
    group.throughput(Throughput::Bytes(cards_1000.len() as u64));
    group.bench_function("cards_1000", |b| {
        b.iter(|| parse_document(black_box(&cards_1000)));
    });
    group.finish();

    let config = DetectorConfig::default();
    let doc_100 = parse_document(&cards_100);
    let doc_1000 = parse_document(&cards_1000);
    let doc_bare = parse_document(&bare_1000);

    let mut group = c.benchmark_group("detect.pass");
    group.throughput(Throughput::Elements(100));
    group.bench_function("cards_100", |b| {
        b.iter(|| detect(black_box(&doc_100), black_box(&config)));
    });
    group.throughput(Throughput::Elements(1000));
    group.bench_function("cards_1000", |b| {
        b.iter(|| detect(black_box(&doc_1000), black_box(&config)));
    });
    // Falls through strategies 1 and 2 before the link-parent pass.
    group.throughput(Throughput::Elements(1000));
    group.bench_function("bare_1000", |b| {
        b.iter(|| detect(black_box(&doc_bare), black_box(&config)));
    });
    group.finish();
}

criterion_group!(benches, benches_detect);
criterion_main!(benches);
