/// Clamps `x` into `[lo, hi]`.
///
/// Unlike `f32::clamp` this never panics when `lo > hi`: values above `hi`
/// map to `hi`, anything else below `lo` maps to `lo`.
#[inline(always)]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    if x > hi {
        hi
    } else if x < lo {
        lo
    } else {
        x
    }
}

#[inline(always)]
pub fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}

/// Coefficient of variation (population standard deviation over mean).
pub fn cv(values: &[f32]) -> f32 {
    let avg = mean(values);
    let sd: f32 = values.iter().map(|&v| (v - avg) * (v - avg)).sum();
    (sd / values.len() as f32).sqrt() / avg
}

/// 3-point trailing moving average. `neutral` stands in for the two values
/// before the start of the series.
pub fn smooth(values: &mut [f32], neutral: f32) {
    let mut f2 = neutral;
    let mut f3 = neutral;

    for v in values.iter_mut() {
        let f1 = f2;
        f2 = f3;
        f3 = *v;
        *v = (f1 + f2 + f3) / 3.0;
    }
}

/// 2-point trailing moving average with a neutral value of zero.
pub fn smooth_pair(values: &mut [f32]) {
    let mut f2 = 0.0;

    for v in values.iter_mut() {
        let f1 = f2;
        f2 = *v;
        *v = (f1 + f2) / 2.0;
    }
}

/// Accuracy goal at and above which ratings are left untouched.
pub const LOW_ACCURACY_THRESHOLD: f32 = 0.93;

/// Lowers a rating for goals below 93%: `x - sqrt(0.93 - goal)`, floored at 0.
#[inline(always)]
pub fn downscale_low_accuracy(x: f32, score_goal: f32) -> f32 {
    if score_goal >= LOW_ACCURACY_THRESHOLD {
        return x;
    }
    clamp(x - (LOW_ACCURACY_THRESHOLD - score_goal).sqrt(), 0.0, 100.0)
}
