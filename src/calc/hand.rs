use super::metrics::{clamp, smooth, smooth_pair};
use super::patterns::{anchor_scaler, hs_downscaler, jump_downscaler, ohjump_downscaler, roll_downscaler};
use super::plan::{FingerTrack, IntervalPlan};
use super::types::ChiselType;
use crate::config::CalcParams;

/// Multiplier standardizing the raw difficulty baseline. The last factor is
/// applied in double precision.
pub const BASE_SCALER: f32 = ((2.564_f32 * 1.05 * 1.1 * 1.10 * 1.10) as f64 * 1.025) as f32;

/// nps difficulty per tap in an interval.
pub const NPS_PER_TAP: f32 = 1.6;

/// Inflation applied to the smallest gap of an interval, which is biased low
/// by the first note of a burst.
pub const FIRST_GAP_INFLATION: f32 = 1.066;
pub const MS_ESTIMATE_SAMPLE: usize = 6;
pub const MS_ESTIMATE_NUMERATOR: f32 = 1375.0;

/// Exponent of the point-loss curve below the required skill.
pub const POINT_LOSS_EXPONENT: f32 = 1.8;

// stamina model
pub const STAM_CEIL: f32 = 1.08;
pub const STAM_MAG: f32 = 355.0;
pub const STAM_FLOOR_SCALE: f32 = 2000.0;
pub const STAM_PROP: f32 = 0.75;

/// Per-interval gap lists of one column as seen by the ms estimate: sorted
/// ascending with the smallest gap inflated. The roll downscaler reads these
/// same lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedGaps {
    pub intervals: Vec<Vec<f32>>,
}

impl PreparedGaps {
    pub fn from_track(track: &FingerTrack) -> Self {
        let intervals = track
            .intervals
            .iter()
            .map(|gaps| {
                let mut gaps = gaps.clone();
                gaps.sort_by(f32::total_cmp);
                if let Some(first) = gaps.first_mut() {
                    *first *= FIRST_GAP_INFLATION;
                }
                gaps
            })
            .collect();
        Self { intervals }
    }
}

/// Rough difficulty of one interval from its smallest gaps: 1375 over the
/// mean of up to six smallest (prepared) gaps. 0 for an empty interval.
pub fn ms_estimate(prepared: &[f32]) -> f32 {
    if prepared.is_empty() {
        return 0.0;
    }
    let length = prepared.len().min(MS_ESTIMATE_SAMPLE);
    let avg_interval_ms = prepared[..length].iter().sum::<f32>() / length as f32;
    MS_ESTIMATE_NUMERATOR / avg_interval_ms
}

/// The difficulty model of one physical hand (two columns).
///
/// Hands are modeled independently; a chart's difficulty for an interval is
/// not a single number but one per hand.
#[derive(Debug, Clone)]
pub struct Hand {
    pub nps_diff: Vec<f32>,
    pub ms_diff: Vec<f32>,
    /// Taps per interval across both columns.
    pub points: Vec<u32>,

    pub ohjump_scale: Vec<f32>,
    pub anchor_scale: Vec<f32>,
    pub roll_scale: Vec<f32>,
    pub hs_scale: Vec<f32>,
    pub jump_scale: Vec<f32>,
}

impl Hand {
    /// Builds the hand owning columns `f1` and `f2`. The second value holds
    /// the hand's per-interval fingerbias terms from the anchor scaler.
    pub fn new(plan: &IntervalPlan, f1: usize, f2: usize, params: &CalcParams) -> (Self, Vec<f32>) {
        let finger1 = PreparedGaps::from_track(&plan.fingers[f1]);
        let finger2 = PreparedGaps::from_track(&plan.fingers[f2]);

        let (nps_diff, ms_diff) = init_diff(&finger1, &finger2, params.smooth_difficulty);
        let points = (0..plan.interval_count)
            .map(|i| plan.taps_in(f1, f2, i) as u32)
            .collect();

        let (m1, m2) = (1u8 << f1, 1u8 << f2);
        let smooth_patterns = params.smooth_patterns;
        let anchor = anchor_scaler(plan, m1, m2, smooth_patterns);

        let hand = Self {
            nps_diff,
            ms_diff,
            points,
            ohjump_scale: ohjump_downscaler(plan, m1, m2, smooth_patterns),
            anchor_scale: anchor.scalers,
            roll_scale: roll_downscaler(&finger1, &finger2, smooth_patterns),
            hs_scale: hs_downscaler(plan, smooth_patterns),
            jump_scale: jump_downscaler(plan, smooth_patterns),
        };
        (hand, anchor.bias_terms)
    }

    pub fn max_points(&self) -> u32 {
        self.points.iter().sum()
    }

    /// Per-interval difficulty a skill solve of `chisel_type` plays against,
    /// with every applicable pattern downscaler folded in.
    pub fn adjusted_diff(&self, chisel_type: ChiselType) -> Vec<f32> {
        let base = if chisel_type.uses_nps() {
            &self.nps_diff
        } else {
            &self.ms_diff
        };

        base.iter()
            .enumerate()
            .map(|(i, &d)| {
                let d = d * (self.anchor_scale[i] * self.roll_scale[i]);
                let ohj = self.ohjump_scale[i];
                let hs = self.hs_scale[i];
                let jump = self.jump_scale[i];
                match chisel_type {
                    ChiselType::Handstream => d * (ohj.sqrt() * jump),
                    ChiselType::Jumpstream => d * (hs * hs * ohj.sqrt() * jump),
                    ChiselType::Stream | ChiselType::Jack => {
                        d * (hs * hs * hs * ohj * ohj * jump * jump)
                    }
                    ChiselType::Technical => d * ohj.sqrt(),
                }
            })
            .collect()
    }

    /// Expected points a player of skill `skill` collects on this hand.
    pub fn calc_internal(&self, skill: f32, chisel_type: ChiselType, stamina: bool) -> f32 {
        let mut diff = self.adjusted_diff(chisel_type);
        if stamina {
            stam_adjust(skill, &mut diff);
        }

        diff.iter()
            .zip(&self.points)
            .map(|(&d, &p)| {
                let achievable = p as f32;
                if skill <= d {
                    achievable * (skill / d).powf(POINT_LOSS_EXPONENT)
                } else {
                    achievable
                }
            })
            .sum()
    }
}

fn init_diff(f1: &PreparedGaps, f2: &PreparedGaps, smooth_difficulty: bool) -> (Vec<f32>, Vec<f32>) {
    let len = f1.intervals.len();
    let mut nps_diff = Vec::with_capacity(len);
    let mut ms_diff = Vec::with_capacity(len);

    for (g1, g2) in f1.intervals.iter().zip(&f2.intervals) {
        let nps = NPS_PER_TAP * (g1.len() + g2.len()) as f32;
        let ms = ms_estimate(g1).max(ms_estimate(g2));

        nps_diff.push(BASE_SCALER * nps);
        ms_diff.push(BASE_SCALER * (5.0 * ms + 4.0 * nps) / 9.0);
    }

    smooth(&mut nps_diff, 0.0);
    if smooth_difficulty {
        smooth_pair(&mut ms_diff);
    }
    (nps_diff, ms_diff)
}

/// Applies stamina drain to `diff` in place for a player of skill `skill`.
///
/// `floor` only ever rises: sections above 75% of the player's skill wear the
/// player down for the rest of the chart. `mod` tracks the local load on top.
pub fn stam_adjust(skill: f32, diff: &mut [f32]) {
    let mut floor = 1.0;
    let mut modifier = 1.0;
    let mut last_diff = 0.0;

    for d in diff.iter_mut() {
        let diff_avg = (last_diff + *d) / 2.0;
        last_diff = *d;

        let tax = diff_avg / (STAM_PROP * skill);
        modifier += (tax - 1.0) / STAM_MAG;

        if modifier > 1.0 {
            floor += (modifier - 1.0) / STAM_FLOOR_SCALE;
        }

        modifier = clamp(modifier, floor, STAM_CEIL);
        *d *= modifier;
    }
}

/// Multipliers `stam_adjust` would apply to `diff`, one per interval.
pub fn stamina_multipliers(skill: f32, diff: &[f32]) -> Vec<f32> {
    let mut adjusted = diff.to_vec();
    stam_adjust(skill, &mut adjusted);
    adjusted
        .iter()
        .zip(diff)
        .map(|(&a, &d)| if d == 0.0 { 1.0 } else { a / d })
        .collect()
}
