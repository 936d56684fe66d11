use statrs::function::erf::erfc;

/// Rounds used when inverting score → skill.
pub const CHISEL_ITERATIONS: u32 = 7;
/// Rounds used when aggregating skillsets into one number.
pub const AGGREGATE_ITERATIONS: u32 = 11;
/// Candidates above this value abort a bounded search.
pub const SEARCH_LIMIT: f32 = 100.0;
/// Saturation threshold of the aggregation curve.
pub const AGGREGATE_THRESHOLD: f32 = 3.0;

/// Coarse-to-fine search for the smallest value at which `is_too_low` turns
/// false.
///
/// Each round steps upward by `resolution` while the predicate holds, backs
/// off one step and halves the step. The result is the first value the final
/// round saw the predicate fail at. With `limit_at_100` the search gives up
/// and returns the current candidate once it passes 100.
pub fn approximate<F>(
    mut value: f32,
    mut resolution: f32,
    iterations: u32,
    mut is_too_low: F,
    limit_at_100: bool,
) -> f32
where
    F: FnMut(f32) -> bool,
{
    for _ in 0..iterations {
        while is_too_low(value) {
            if limit_at_100 && value > SEARCH_LIMIT {
                return value;
            }
            value += resolution;
        }
        value -= resolution;
        resolution /= 2.0;
    }

    value + 2.0 * resolution
}

/// Step size of the last round of [`approximate`].
pub fn final_step(resolution: f32, iterations: u32) -> f32 {
    resolution / 2f32.powi(iterations.saturating_sub(1) as i32)
}

/// Folds skillset values into one overall number.
///
/// Each value contributes `2 / erfc((v - r) / 2) - 1`; the result is the
/// smallest `r` (to the final step) at which the contributions sum to at
/// most 3.
pub fn aggregate_scores(skillsets: &[f32], floor: f32, resolution: f32) -> f32 {
    let is_too_low = |rating: f32| {
        let sum: f32 = skillsets
            .iter()
            .map(|&v| 2.0 / erfc_f32(0.5 * (v - rating)) - 1.0)
            .sum();
        AGGREGATE_THRESHOLD < sum
    };
    approximate(floor, resolution, AGGREGATE_ITERATIONS, is_too_low, false)
}

#[inline(always)]
fn erfc_f32(x: f32) -> f32 {
    erfc(x as f64) as f32
}
