use criterion::{Criterion, criterion_group, criterion_main};
use page_range::prelude::*;
use std::hint::black_box;

fn benchmark_paginate(c: &mut Criterion) {
    let listing: InMemoryListing<u32> = (0..100_000).collect();
    let paginator = Paginator::with_providers(PaginatorConfig::default(), listing.clone(), listing);

    c.bench_function("paginate_middle_page", |b| {
        b.iter(|| {
            let page = paginator.paginate(black_box(5_000)).unwrap();
            black_box(page);
        })
    });

    c.bench_function("paginate_past_the_end", |b| {
        b.iter(|| {
            let page = paginator.paginate(black_box(i64::MAX)).unwrap();
            black_box(page);
        })
    });
}

criterion_group!(benches, benchmark_paginate);
criterion_main!(benches);
