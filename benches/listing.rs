// benches/listing.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crypto_tracker::scrape::extract_prices;
use crypto_tracker::specs::listing::listing_rows;

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/listing.html"))
        .expect("read tests/fixtures/listing.html")
}

fn bench_listing(c: &mut Criterion) {
    let doc = load_sample();

    c.bench_function("listing_rows_top10", |b| {
        b.iter(|| black_box(listing_rows(black_box(&doc), 10).len()))
    });

    c.bench_function("extract_prices_all", |b| {
        b.iter(|| black_box(extract_prices(black_box(&doc), usize::MAX, "ts", None).len()))
    });
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
