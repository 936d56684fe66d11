use msdcalc::calc::plan::{interval_count, interval_index, IntervalPlan, MAX_GAP_MS};
use msdcalc::NoteEvent;
use rstest::rstest;

#[rstest]
#[case(10.0, 1.0, 20)]
#[case(10.0, 2.0, 10)]
#[case(10.1, 1.0, 21)]
#[case(0.0, 1.0, 1)] // single row at t = 0 still gets one interval
fn test_interval_count(#[case] last: f32, #[case] rate: f32, #[case] expected: usize) {
    assert_eq!(interval_count(last, rate), expected);
}

#[rstest]
#[case(0.0, 1.0, 0)]
#[case(0.49, 1.0, 0)]
#[case(0.5, 1.0, 1)]
#[case(9.99, 1.0, 19)]
#[case(10.0, 1.0, 19)] // final boundary folds into the last interval
#[case(3.0, 2.0, 3)]
fn test_interval_index(#[case] ts: f32, #[case] rate: f32, #[case] expected: usize) {
    assert_eq!(interval_index(ts, rate, 20), expected);
}

#[test]
fn test_empty_chart_has_no_plan() {
    assert!(IntervalPlan::build(&[], 1.0).is_none());
}

#[test]
fn test_plan_buckets_rows_and_gaps() {
    let notes = vec![
        NoteEvent::new(0.0, 0b0001),
        NoteEvent::new(0.25, 0b0001),
        NoteEvent::new(0.75, 0b0010),
        NoteEvent::new(1.0, 0b0000),
    ];
    let plan = IntervalPlan::build(&notes, 1.0).expect("plan");

    assert_eq!(plan.interval_count, 2);
    // empty rows are not members of any interval
    assert_eq!(plan.rows, vec![vec![0, 1], vec![2]]);

    // first tap of a column is measured from t = -5s, then clamped
    assert_eq!(plan.fingers[0].intervals[0].len(), 2);
    assert_eq!(plan.fingers[0].intervals[0][0], MAX_GAP_MS);
    assert!((plan.fingers[0].intervals[0][1] - 250.0).abs() < 1e-3);
    assert!(plan.fingers[0].intervals[1].is_empty());

    assert_eq!(plan.fingers[1].intervals[1], vec![MAX_GAP_MS]);
    assert!(plan.fingers[2].intervals.iter().all(Vec::is_empty));

    assert_eq!(plan.taps_in(0, 1, 0), 2);
    assert_eq!(plan.taps_in(0, 1, 1), 1);
}

#[test]
fn test_rate_compresses_gaps() {
    let notes = vec![
        NoteEvent::new(0.0, 0b0100),
        NoteEvent::new(0.5, 0b0100),
        NoteEvent::new(0.51, 0b0100),
    ];
    let plan = IntervalPlan::build(&notes, 2.0).expect("plan");

    assert_eq!(plan.interval_count, 1);
    let gaps: Vec<f32> = plan.fingers[2].intervals.concat();
    assert!((gaps[1] - 250.0).abs() < 1e-2);
    // 5ms after the rate change, floored at 40ms
    assert_eq!(gaps[2], 40.0);
}
