mod common;

use msdcalc::calc::hand::{ms_estimate, stamina_multipliers, Hand, BASE_SCALER, STAM_CEIL};
use msdcalc::calc::{ChiselType, IntervalPlan};
use msdcalc::config::CalcParams;
use rstest::rstest;

#[test]
fn test_base_scaler_value() {
    assert!((BASE_SCALER - 3.672_9).abs() < 1e-3, "got {}", BASE_SCALER);
}

#[rstest]
#[case(vec![], 0.0)]
#[case(vec![250.0], 5.5)]
#[case(vec![125.0, 125.0], 11.0)]
#[case(vec![100.0; 8], 13.75)] // only the six smallest count
#[case(vec![100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 5000.0], 13.75)]
fn test_ms_estimate(#[case] gaps: Vec<f32>, #[case] expected: f32) {
    assert!((ms_estimate(&gaps) - expected).abs() < 1e-3);
}

#[test]
fn test_stamina_multiplier_non_decreasing_on_ramp() {
    let skill = 10.0;
    // every interval well above 75% of skill
    let diff: Vec<f32> = (0..60).map(|i| 10.0 + i as f32 * 0.5).collect();
    let mults = stamina_multipliers(skill, &diff);

    for pair in mults.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-6, "{:?}", pair);
    }
    assert!(mults.iter().all(|&m| (1.0..=STAM_CEIL + 1e-6).contains(&m)));
    assert!(*mults.last().unwrap() > 1.0);
}

#[test]
fn test_stamina_leaves_easy_sections_alone() {
    let diff = vec![2.0; 40];
    let mults = stamina_multipliers(20.0, &diff);
    assert!(mults.iter().all(|&m| m == 1.0));
}

#[test]
fn test_hand_series_lengths_and_points() {
    let notes = common::stream(8.0, 20.0);
    let plan = IntervalPlan::build(&notes, 1.0).unwrap();
    let params = CalcParams::default();

    let (left, left_bias) = Hand::new(&plan, 0, 1, &params);
    let (right, _) = Hand::new(&plan, 2, 3, &params);

    let n = plan.interval_count;
    for series in [
        &left.nps_diff,
        &left.ms_diff,
        &left.ohjump_scale,
        &left.anchor_scale,
        &left.roll_scale,
        &left.hs_scale,
        &left.jump_scale,
    ] {
        assert_eq!(series.len(), n);
    }
    assert_eq!(left.points.len(), n);
    assert_eq!(left_bias.len(), n);

    // one tap per row, spread evenly over the four columns
    let taps: u32 = notes.iter().map(|r| r.tap_count()).sum();
    assert_eq!(left.max_points() + right.max_points(), taps);
    assert_eq!(left.max_points(), taps / 2);
}

#[test]
fn test_skill_above_every_interval_collects_all_points() {
    let notes = common::stream(6.0, 20.0);
    let plan = IntervalPlan::build(&notes, 1.0).unwrap();
    let (hand, _) = Hand::new(&plan, 0, 1, &CalcParams::default());

    let full = hand.max_points() as f32;
    let got = hand.calc_internal(1000.0, ChiselType::Stream, false);
    assert!((got - full).abs() < 1e-3);

    let weak = hand.calc_internal(1.0, ChiselType::Stream, false);
    assert!(weak < full);
    // stamina drain only ever costs points
    let drained = hand.calc_internal(8.0, ChiselType::Stream, true);
    let fresh = hand.calc_internal(8.0, ChiselType::Stream, false);
    assert!(drained <= fresh + 1e-3);
}

#[test]
fn test_smoothing_toggles() {
    let notes = common::ramp(4.0, 14.0, 30.0);
    let plan = IntervalPlan::build(&notes, 1.0).unwrap();

    let (smoothed, _) = Hand::new(&plan, 0, 1, &CalcParams::default());
    let raw_params = CalcParams {
        smooth_patterns: false,
        smooth_difficulty: false,
    };
    let (raw, _) = Hand::new(&plan, 0, 1, &raw_params);

    assert_ne!(smoothed.ms_diff, raw.ms_diff);
    assert_ne!(smoothed.anchor_scale, raw.anchor_scale);
    // the nps series is smoothed either way
    assert_eq!(smoothed.nps_diff, raw.nps_diff);
    // first raw ms value is halved by the 2-point average
    assert!((smoothed.ms_diff[0] - raw.ms_diff[0] / 2.0).abs() < 1e-4);
}
