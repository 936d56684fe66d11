//! Pattern downscalers.
//!
//! Each function looks at the composition of every interval and returns one
//! multiplier per interval. Multipliers near 1 leave the raw difficulty alone;
//! smaller values mark patterns that are easier than their note density
//! suggests. Intervals without taps always get 1.

use super::hand::PreparedGaps;
use super::metrics::{clamp, cv, mean, smooth};
use super::plan::IntervalPlan;
use tracing::trace;

/// Jumps reaching this share of a hand's taps drive the OHJump scaler to 0.
pub const OHJUMP_PROPORTION_SCALE: f32 = 1.6;
pub const OHJUMP_EXPONENT: f32 = 0.25;

pub const ANCHOR_RATIO_DIVISOR: f32 = 4.45;
pub const ANCHOR_MIN: f32 = 0.8;
pub const ANCHOR_MAX: f32 = 1.05;

pub const JUMP_PROPORTION_DIVISOR: f32 = 3.0;

/// A gap is replaced by the interval mean when `mean / gap` drops below this,
/// i.e. when the gap is a pause rather than part of the roll.
pub const ROLL_SHORT_GAP_RATIO: f32 = 0.6;
pub const ROLL_CV_OFFSET: f32 = 0.85;
pub const ROLL_MAX: f32 = 1.075;

/// Anchor multipliers plus this hand's share of the chart-wide fingerbias.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorScale {
    pub scalers: Vec<f32>,
    /// `(larger + 2) / (smaller + 1)` for every interval, in order.
    pub bias_terms: Vec<f32>,
}

fn finish(mut output: Vec<f32>, smooth_patterns: bool, name: &str) -> Vec<f32> {
    for v in &output {
        trace!("{} {}", name, v);
    }
    if smooth_patterns {
        smooth(&mut output, 1.0);
    }
    output
}

/// Penalizes one-hand jumps: rows hitting both columns of a hand.
///
/// Each jump row counts its two taps twice, so a hand that only plays jumps
/// sits at a jump proportion of 0.25.
pub fn ohjump_downscaler(plan: &IntervalPlan, first: u8, second: u8, smooth_patterns: bool) -> Vec<f32> {
    let output = (0..plan.interval_count)
        .map(|itv| {
            let mut taps = 0u32;
            let mut jumps = 0u32;
            for row in plan.rows_in(itv) {
                let mut columns = 0;
                if row.columns & first != 0 {
                    columns += 1;
                }
                if row.columns & second != 0 {
                    columns += 1;
                }
                if columns == 2 {
                    jumps += 1;
                    taps += 2;
                }
                taps += columns;
            }

            if taps == 0 {
                1.0
            } else {
                let jump_proportion = jumps as f32 / taps as f32;
                (1.0 - OHJUMP_PROPORTION_SCALE * jump_proportion).powf(OHJUMP_EXPONENT)
            }
        })
        .collect();

    finish(output, smooth_patterns, "ohj")
}

/// Penalizes evenly split hands; rewards anchors (one column carrying the hand).
pub fn anchor_scaler(plan: &IntervalPlan, first: u8, second: u8, smooth_patterns: bool) -> AnchorScale {
    let mut bias_terms = Vec::with_capacity(plan.interval_count);
    let mut output = Vec::with_capacity(plan.interval_count);

    for itv in 0..plan.interval_count {
        let mut lcol = 0u32;
        let mut rcol = 0u32;
        for row in plan.rows_in(itv) {
            if row.columns & first != 0 {
                lcol += 1;
            }
            if row.columns & second != 0 {
                rcol += 1;
            }
        }

        let smaller = lcol.min(rcol) as f32;
        let larger = lcol.max(rcol) as f32;

        if lcol == 0 || rcol == 0 {
            output.push(1.0);
        } else {
            // ~0.881 for an even split, approaching 1 as one column dominates
            output.push(clamp(
                (1.0 - smaller / larger / ANCHOR_RATIO_DIVISOR).sqrt(),
                ANCHOR_MIN,
                ANCHOR_MAX,
            ));
        }

        bias_terms.push((larger + 2.0) / (smaller + 1.0));
    }

    AnchorScale {
        scalers: finish(output, smooth_patterns, "an"),
        bias_terms,
    }
}

/// Share of taps in rows of exactly `chord_size` taps, per interval, fed
/// through `f`. Rows are counted once each, not per tap.
fn chord_downscaler<F>(plan: &IntervalPlan, chord_size: u32, f: F) -> Vec<f32>
where
    F: Fn(f32) -> f32,
{
    (0..plan.interval_count)
        .map(|itv| {
            let mut taps = 0u32;
            let mut chords = 0u32;
            for row in plan.rows_in(itv) {
                let n = row.tap_count();
                taps += n;
                if n == chord_size {
                    chords += 1;
                }
            }

            if taps == 0 {
                1.0
            } else {
                f(chords as f32 / taps as f32)
            }
        })
        .collect()
}

/// Penalizes handstream density. The hand proportion never exceeds 1/3, so
/// the multiplier stays above ~0.903.
pub fn hs_downscaler(plan: &IntervalPlan, smooth_patterns: bool) -> Vec<f32> {
    let output = chord_downscaler(plan, 3, |hand_proportion| (1.0 - hand_proportion).sqrt().sqrt());
    finish(output, smooth_patterns, "hs")
}

/// Penalizes jump density. The jump proportion never exceeds 1/2, so the
/// multiplier stays above ~0.955.
pub fn jump_downscaler(plan: &IntervalPlan, smooth_patterns: bool) -> Vec<f32> {
    let output = chord_downscaler(plan, 2, |jump_proportion| {
        (1.0 - jump_proportion / JUMP_PROPORTION_DIVISOR).sqrt().sqrt()
    });
    finish(output, smooth_patterns, "ju")
}

/// Penalizes rolls and trills, which read as dense but alternate fingers at a
/// steady pace. Irregular gaps (high coefficient of variation) raise the
/// multiplier slightly above 1.
pub fn roll_downscaler(f1: &PreparedGaps, f2: &PreparedGaps, smooth_patterns: bool) -> Vec<f32> {
    let output = f1
        .intervals
        .iter()
        .zip(&f2.intervals)
        .map(|(g1, g2)| {
            if g1.len() + g2.len() <= 1 {
                return 1.0;
            }

            let mut hand_gaps: Vec<f32> = g1.iter().chain(g2.iter()).copied().collect();
            let interval_mean = mean(&hand_gaps);
            for gap in hand_gaps.iter_mut() {
                if interval_mean / *gap < ROLL_SHORT_GAP_RATIO {
                    *gap = interval_mean;
                }
            }

            let interval_cv = cv(&hand_gaps) + ROLL_CV_OFFSET;
            if interval_cv >= 1.0 {
                interval_cv.sqrt().sqrt().min(ROLL_MAX)
            } else {
                interval_cv * interval_cv * interval_cv
            }
        })
        .collect();

    finish(output, smooth_patterns, "ro")
}
