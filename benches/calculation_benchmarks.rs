//! Performance benchmarks for the Compensation Calculation Engine.
//!
//! One invocation is a handful of integer operations plus at most one
//! relationship lookup, so a single calculation should stay well under a
//! microsecond against an in-memory lookup.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use compensation_engine::calculation::CompensationEngine;
use compensation_engine::lookup::InMemoryLookup;
use compensation_engine::models::{CompensationRecord, Field};

fn clergy_lookup() -> InMemoryLookup {
    InMemoryLookup::new()
        .with_clergy_indicator("440005", "CLERGY")
        .with_compensation_party("991213", "440005")
}

fn full_record() -> CompensationRecord {
    CompensationRecord::new()
        .with(Field::CashStipend, "1000.00")
        .with(Field::Utilities, "50.00")
        .with(Field::DepTuitionPaid, "100.00")
        .with(Field::SsTaxReimbursement, "50.00")
        .with(Field::OtherTaxableIncome, "10.00")
        .with(Field::HousingEquity, "20.00")
        .with(Field::ErPaid403b, "80.00")
        .with(Field::HousingCashCompReceived, "250.00")
        .with(Field::ReceivesChurchHousing, "Y")
        .with(Field::ReceivesMeals, "Y")
        .with(Field::ORelPartyId, "440005")
}

fn bench_single_calculation(c: &mut Criterion) {
    let engine = CompensationEngine::new(clergy_lookup());
    let record = full_record();

    c.bench_function("calculate_full_record", |b| {
        b.iter(|| engine.calculate(black_box(record.clone())))
    });

    let override_record = full_record().with(Field::IsClergy, "Y");
    c.bench_function("calculate_with_override_no_lookup", |b| {
        b.iter(|| engine.calculate(black_box(override_record.clone())))
    });
}

fn bench_json_round_trip(c: &mut Criterion) {
    let engine = CompensationEngine::new(clergy_lookup());
    let payload = serde_json::to_string(&full_record()).unwrap();

    c.bench_function("calculate_from_json_payload", |b| {
        b.iter(|| {
            let record: CompensationRecord = serde_json::from_str(black_box(&payload)).unwrap();
            serde_json::to_string(&engine.calculate(record)).unwrap()
        })
    });
}

fn bench_batches(c: &mut Criterion) {
    let engine = CompensationEngine::new(clergy_lookup());
    let record = full_record();

    let mut group = c.benchmark_group("calculate_batch");
    for batch_size in [100usize, 1000] {
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &size| {
                b.iter(|| {
                    for _ in 0..size {
                        black_box(engine.calculate(black_box(record.clone())));
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_json_round_trip,
    bench_batches
);
criterion_main!(benches);
