// Benchmarks for the contact aggregation pipeline.
//
// Inputs are synthetic: a fixed population of entities with contacts every
// 20 time units, where each pair goes quiet for a stretch now and then so that
// intervals actually split.

use contact_intervals::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const ENTITIES: i64 = 40;

fn synthetic_records(steps: i64) -> Vec<ContactRecord> {
    let mut records = Vec::new();
    for step in 0..steps {
        for a in 0..ENTITIES {
            let b = (a * 7 + step) % ENTITIES;
            // Pairs fall silent for 50 steps out of every 200
            if (step + a * 13) % 200 < 150 {
                records.push(ContactRecord::new(step * 20, a, b));
            }
        }
    }
    records
}

fn to_lines(records: &[ContactRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}\t{}\t{}\t1A\t1B\n", r.time, r.pair.low(), r.pair.high()))
        .collect()
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    for steps in [100, 1_000, 5_000] {
        let records = synthetic_records(steps);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &records, |b, records| {
            let pipeline = ContactPipeline::new(AggregatorConfig::default());
            b.iter(|| pipeline.process(black_box(records.clone())).unwrap())
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    let input = to_lines(&synthetic_records(1_000));
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("parse_and_write", |b| {
        let pipeline = ContactPipeline::new(AggregatorConfig::default());
        b.iter(|| {
            let mut out = Vec::new();
            pipeline.run(black_box(input.as_bytes()), &mut out).unwrap();
            out
        })
    });
    group.finish();
}

criterion_group!(benches, bench_process, bench_run);
criterion_main!(benches);
