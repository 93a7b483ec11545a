use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use slot_engine::{generate_slots, AvailabilityWindow, ExceptionInterval, TimeOfDay};
use std::hint::black_box;

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn bench_full_day(c: &mut Criterion) {
    let window = AvailabilityWindow {
        start: t("00:00"),
        end: t("23:59"),
        slot_duration_minutes: 5,
    };
    let exceptions: Vec<ExceptionInterval> = (0..24)
        .map(|h| ExceptionInterval {
            start: TimeOfDay::from_hms(h, 20, 0).unwrap(),
            end: TimeOfDay::from_hms(h, 35, 0).unwrap(),
        })
        .collect();
    let none: Vec<ExceptionInterval> = Vec::new();
    let date = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();

    c.bench_function("full_day_5min_no_exceptions", |b| {
        b.iter(|| generate_slots(black_box(&window), black_box(&none), date))
    });

    c.bench_function("full_day_5min_hourly_exceptions", |b| {
        b.iter(|| generate_slots(black_box(&window), black_box(&exceptions), date))
    });
}

criterion_group!(benches, bench_full_day);
criterion_main!(benches);
