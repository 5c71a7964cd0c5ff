//! Performance benchmarks for the payroll calendar engine.
//!
//! This benchmark suite covers:
//! - Single month computation
//! - Full year computation from sliced data
//! - Year request through the router with a warm cache
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_calendar::api::{AppState, create_router};
use payroll_calendar::calculation::{compute_month_payroll, compute_year_payroll};
use payroll_calendar::calendar::{
    CalendarQuery, CalendarSliceProvider, CalendarSource, MemoryCache, days_in_year,
};
use payroll_calendar::config::{ConfigLoader, PayrollPolicy};
use payroll_calendar::error::EngineResult;
use payroll_calendar::models::{MonthSlice, YearCalendar, YearSlices};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Serves a Monday-to-Friday calendar for any year.
struct WeekdaySource;

impl CalendarSource for WeekdaySource {
    fn fetch(&self, query: CalendarQuery) -> EngineResult<String> {
        let days = match query.month {
            Some(_) => 31,
            None => days_in_year(query.year),
        };
        Ok(weekdays(days))
    }
}

fn weekdays(days: usize) -> String {
    "0000011".chars().cycle().take(days).collect()
}

fn year_slices(year: i32) -> YearSlices {
    let calendar = YearCalendar::parse(year, &weekdays(days_in_year(year))).unwrap();
    YearSlices::from_calendar(&calendar).with_next_january(MonthSlice::new(weekdays(31)))
}

/// Benchmark: One month from its slice and the next.
fn bench_single_month(c: &mut Criterion) {
    let slice = MonthSlice::new(weekdays(31));
    let next = MonthSlice::new(weekdays(30));
    let policy = PayrollPolicy::default();
    let salary = Decimal::new(30000, 0);

    c.bench_function("single_month", |b| {
        b.iter(|| {
            black_box(
                compute_month_payroll(
                    black_box(&slice),
                    Some(&next),
                    3,
                    2024,
                    salary,
                    &policy,
                )
                .unwrap(),
            )
        })
    });
}

/// Benchmark: Twelve months from pre-sliced data.
fn bench_year(c: &mut Criterion) {
    let policy = PayrollPolicy::default();
    let salary = Decimal::new(30000, 0);

    let mut group = c.benchmark_group("year");
    group.throughput(Throughput::Elements(12));

    for year in [2023, 2024] {
        let slices = year_slices(year);
        group.bench_with_input(BenchmarkId::new("compute", year), &slices, |b, slices| {
            b.iter(|| black_box(compute_year_payroll(slices, salary, &policy).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: Year request through the router with the calendar cached.
fn bench_router_warm_cache(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
    let provider = CalendarSliceProvider::new(Arc::new(WeekdaySource))
        .with_cache(Arc::new(MemoryCache::new(4)));
    let router = create_router(AppState::new(config, provider));

    c.bench_function("router_year_warm_cache", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .uri("/api/30000/2024")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_month,
    bench_year,
    bench_router_warm_cache,
);
criterion_main!(benches);
