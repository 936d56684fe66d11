use msdcalc::calc::metrics::{clamp, cv, downscale_low_accuracy, mean, smooth, smooth_pair};
use rstest::rstest;

#[rstest]
#[case(5.0, 0.0, 1.0, 1.0)]
#[case(-1.0, 0.0, 1.0, 0.0)]
#[case(0.5, 0.0, 1.0, 0.5)]
#[case(3.0, 2.0, 1.0, 1.0)] // inverted bounds, above hi
#[case(0.5, 2.0, 1.0, 2.0)] // inverted bounds, below lo
fn test_clamp(#[case] x: f32, #[case] lo: f32, #[case] hi: f32, #[case] expected: f32) {
    assert_eq!(clamp(x, lo, hi), expected);
}

#[test]
fn test_smooth_uses_neutral_prefix() {
    let mut values = vec![3.0, 3.0, 3.0];
    smooth(&mut values, 0.0);
    assert_eq!(values, vec![1.0, 2.0, 3.0]);

    let mut neutral = vec![1.0; 5];
    smooth(&mut neutral, 1.0);
    assert_eq!(neutral, vec![1.0; 5]);
}

#[test]
fn test_smooth_pair() {
    let mut values = vec![2.0, 4.0, 4.0];
    smooth_pair(&mut values);
    assert_eq!(values, vec![1.0, 3.0, 4.0]);
}

#[test]
fn test_mean_and_cv() {
    assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(cv(&[5.0, 5.0, 5.0]), 0.0);

    // population sd of [1, 3] is 1, mean is 2
    assert!((cv(&[1.0, 3.0]) - 0.5).abs() < 1e-6);
}

#[rstest]
#[case(10.0, 0.93, 10.0)]
#[case(10.0, 0.97, 10.0)]
#[case(10.0, 0.89, 9.8)]
#[case(0.1, 0.5, 0.0)]
fn test_downscale_low_accuracy(#[case] x: f32, #[case] goal: f32, #[case] expected: f32) {
    let got = downscale_low_accuracy(x, goal);
    assert!((got - expected).abs() < 1e-4, "got {} expected {}", got, expected);
}
