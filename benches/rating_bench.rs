use criterion::{criterion_group, criterion_main, Criterion};
use msdcalc::calc::{IntervalPlan, RatingContext};
use msdcalc::config::CalcParams;
use msdcalc::{compute_difficulty_at, compute_difficulty_curve, NoteEvent};
use std::hint::black_box;

// Two minutes of mixed stream and jumpstream
fn setup_chart() -> Vec<NoteEvent> {
    let masks = [0b0001, 0b0100, 0b0010, 0b1000, 0b0101, 0b0010, 0b1010, 0b0001];
    let mut notes = Vec::new();
    let mut t = 0.0;
    for i in 0..1200 {
        notes.push(NoteEvent::new(t, masks[i % masks.len()]));
        t += if (i / 64) % 2 == 0 { 0.1 } else { 0.08 };
    }
    notes
}

fn criterion_benchmark(c: &mut Criterion) {
    let notes = setup_chart();
    let params = CalcParams::default();

    c.bench_function("interval_plan (1200 rows)", |b| {
        b.iter(|| IntervalPlan::build(black_box(&notes), black_box(1.0)))
    });

    c.bench_function("rating_context (1200 rows)", |b| {
        let plan = IntervalPlan::build(&notes, 1.0).expect("plan");
        b.iter(|| RatingContext::new(black_box(&plan), &params))
    });

    c.bench_function("compute_difficulty_at (1200 rows)", |b| {
        b.iter(|| compute_difficulty_at(black_box(&notes), black_box(1.0), black_box(0.93)))
    });

    c.bench_function("compute_difficulty_curve (1200 rows)", |b| {
        b.iter(|| compute_difficulty_curve(black_box(&notes)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
