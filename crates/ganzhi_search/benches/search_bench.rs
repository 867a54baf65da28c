use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_search::{SolarTermConfig, next_solar_term, prev_lichun, search_solar_terms};

fn solar_term_bench(c: &mut Criterion) {
    let utc = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let config = SolarTermConfig::standard();

    let mut group = c.benchmark_group("search_solar_term");
    group.sample_size(50);
    group.bench_function("next_solar_term", |b| {
        b.iter(|| {
            next_solar_term(black_box(&utc), black_box(&config)).expect("search should succeed")
        })
    });
    group.bench_function("prev_lichun", |b| {
        b.iter(|| prev_lichun(black_box(&utc), black_box(&config)).expect("search should succeed"))
    });
    group.finish();
}

fn range_bench(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let config = SolarTermConfig::standard();

    let mut group = c.benchmark_group("search_solar_term_range");
    group.sample_size(20);
    group.bench_function("one_year", |b| {
        b.iter(|| {
            search_solar_terms(black_box(&start), black_box(&end), black_box(&config))
                .expect("search should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, solar_term_bench, range_bench);
criterion_main!(benches);
