use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pdga_rating_processor::{
    model::aggregator::compute_new_rating, utils::test_utils::generate_round_ratings
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let newest = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let mut group = c.benchmark_group("compute_new_rating");
    for size in [8usize, 64, 512, 4096] {
        let ratings: Vec<i32> = generate_round_ratings(size, 950, 40, newest)
            .iter()
            .map(|round| round.rating)
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &ratings, |b, ratings| {
            b.iter(|| compute_new_rating(ratings, &[], 950).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
