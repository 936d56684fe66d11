use crate::calc::plan::{INTERVAL_SPAN, MAX_INTERVALS};
use crate::calc::{IntervalPlan, Rating, RatingContext};
use crate::chart::NoteEvent;
use crate::config::CalcParams;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Number of rates in a difficulty curve.
pub const CURVE_LEN: usize = 14;
/// Accuracy goal every curve entry is rated at.
pub const CURVE_SCORE_GOAL: f32 = 0.93;

/// Playback rate of curve entry `index`: 0.7, 0.8, ... 2.0.
#[inline(always)]
pub fn curve_rate(index: usize) -> f32 {
    (7 + index) as f32 / 10.0
}

/// Rating entry point with configurable smoothing.
///
/// Holds no per-chart state; one `Calc` can rate any number of charts, from
/// any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Calc {
    pub params: CalcParams,
}

impl Calc {
    pub fn new(params: CalcParams) -> Self {
        Self { params }
    }

    /// Rates `notes` at playback `rate` for accuracy `score_goal`.
    ///
    /// Degenerate input yields the all-zero rating: no rows, no taps, an
    /// unusable rate or goal, or a chart too long to lay out at `rate`.
    pub fn rate_chart(&self, notes: &[NoteEvent], rate: f32, score_goal: f32) -> Rating {
        if notes.is_empty() {
            return Rating::default();
        }
        if !rate.is_finite() || rate <= 0.0 {
            warn!("Rate {} is not a positive finite number; returning zero rating", rate);
            return Rating::default();
        }
        if !score_goal.is_finite() {
            warn!("Score goal {} is not finite; returning zero rating", score_goal);
            return Rating::default();
        }
        if notes.iter().all(|n| n.tap_count() == 0) {
            warn!("Chart has {} rows but no taps; returning zero rating", notes.len());
            return Rating::default();
        }

        let last_timestamp = notes.last().map_or(0.0, |n| n.timestamp);
        let span = last_timestamp / (rate * INTERVAL_SPAN);
        if !span.is_finite() || span > MAX_INTERVALS as f32 {
            warn!(
                "Last row at {}s spans {} intervals at {}x (limit {}); returning zero rating",
                last_timestamp, span, rate, MAX_INTERVALS
            );
            return Rating::default();
        }

        let Some(plan) = IntervalPlan::build(notes, rate) else {
            return Rating::default();
        };
        debug!(
            "Rating {} rows at {}x, goal {}: {} intervals",
            notes.len(),
            rate,
            score_goal,
            plan.interval_count
        );

        RatingContext::new(&plan, &self.params).rate(score_goal)
    }

    /// Rates `notes` at every curve rate, in parallel.
    pub fn rate_curve(&self, notes: &[NoteEvent]) -> Vec<Rating> {
        if notes.is_empty() {
            return vec![Rating::default(); CURVE_LEN];
        }

        (0..CURVE_LEN)
            .into_par_iter()
            .map(|i| self.rate_chart(notes, curve_rate(i), CURVE_SCORE_GOAL))
            .collect()
    }
}

/// Rating of `notes` at one rate and goal, with default parameters.
pub fn compute_difficulty_at(notes: &[NoteEvent], rate: f32, score_goal: f32) -> Rating {
    Calc::default().rate_chart(notes, rate, score_goal)
}

/// Ratings of `notes` at rates 0.7 through 2.0 in steps of 0.1, goal 0.93.
pub fn compute_difficulty_curve(notes: &[NoteEvent]) -> Vec<Rating> {
    Calc::default().rate_curve(notes)
}

/// Version tag of the difficulty model.
pub fn engine_version() -> i32 {
    -1
}
