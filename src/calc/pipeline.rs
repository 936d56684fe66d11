use super::hand::Hand;
use super::jack::{jack_loss, sequence_jack};
use super::metrics::{clamp, downscale_low_accuracy, mean};
use super::plan::IntervalPlan;
use super::solver::{aggregate_scores, approximate, CHISEL_ITERATIONS};
use super::types::{ChiselType, Rating};
use crate::chart::{chord_proportion, NoteEvent, COLUMN_COUNT};
use crate::config::CalcParams;
use tracing::debug;

pub const SKILL_FLOOR: f32 = 0.1;
pub const SKILL_RESOLUTION: f32 = 10.24;
pub const STAM_RESOLUTION: f32 = 2.56;
/// Stamina solves start this far below the skillset they refine.
pub const STAM_HEADROOM: f32 = 0.1;

/// Chart-wide correction factors derived from chord composition and length.
///
/// Proportions are shares of all taps that sit in rows of 2 (`jump`), 3
/// (`hand`) or 4 (`quad`) taps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScalers {
    pub jump_prop: f32,
    pub hand_prop: f32,
    pub quad_prop: f32,

    pub grindscaler: f32,
    pub shortstam: f32,
    pub nojumps: f32,
    pub manyjumps: f32,
    pub nohands: f32,
    pub allhands: f32,
    pub lotquads: f32,
    pub jumpthrill: f32,
}

impl ChartScalers {
    /// `last_row_time` is the unscaled timestamp of the final row.
    pub fn new(notes: &[NoteEvent], last_row_time: f32) -> Self {
        // 30s -> 0.93, 60s -> 1.0
        let mut grindscaler = 0.93 + 0.07 * clamp(last_row_time / 30.0 - 1.0, 0.0, 1.0);
        // 9.8s -> 0.87, 234.8s -> 1.0
        grindscaler *= clamp(0.873 + (0.13 * (last_row_time / 15.0 - 1.0)), 0.87, 1.0);

        // 150s -> 0.9, 300s -> 1.0
        let shortstam = clamp(0.9 + (0.1 * (last_row_time - 150.0) / 150.0), 0.9, 1.0);

        let jump_prop = chord_proportion(notes, 2);
        let hand_prop = chord_proportion(notes, 3);
        let quad_prop = chord_proportion(notes, 4);

        Self {
            jump_prop,
            hand_prop,
            quad_prop,
            grindscaler,
            shortstam,
            // 0 -> 0.9, 0.5 -> 1
            nojumps: clamp(0.8 + (0.2 * (jump_prop + 0.5)), 0.8, 1.0),
            // 0.43 -> 1, 0.58 -> 0.85
            manyjumps: clamp(1.43 - jump_prop, 0.85, 1.0),
            // 0 -> 0.95, 0.25 -> 1
            nohands: clamp(0.8 + (0.2 * (hand_prop + 0.75)), 0.8, 1.0),
            // 0.23 -> 1, 0.38 -> 0.85
            allhands: clamp(1.23 - hand_prop, 0.85, 1.0),
            // 0.13 -> 1, 0.28 -> 0.85
            lotquads: clamp(1.13 - quad_prop, 0.85, 1.0),
            // jump + hand: 0.625 -> 1, 0.775 -> 0.85
            jumpthrill: clamp(1.625 - jump_prop - hand_prop, 0.85, 1.0),
        }
    }

    /// Chordjack strength relative to handstream.
    pub fn chordjack_scale(&self) -> f32 {
        clamp(self.quad_prop + self.hand_prop + self.jump_prop + 0.2, 0.5, 1.0) * 1.025
    }
}

/// Per-invocation model state: both hands, the four jack sequences and the
/// chart-wide totals. Immutable once built; every solve only reads it.
#[derive(Debug, Clone)]
pub struct RatingContext {
    pub left: Hand,
    pub right: Hand,
    pub jacks: [Vec<f32>; COLUMN_COUNT],
    pub max_points: f32,
    /// Mean anchor imbalance over both hands and all intervals.
    pub fingerbias: f32,
    pub scalers: ChartScalers,
}

impl RatingContext {
    pub fn new(plan: &IntervalPlan, params: &CalcParams) -> Self {
        let (left, left_bias) = Hand::new(plan, 0, 1, params);
        let (right, right_bias) = Hand::new(plan, 2, 3, params);

        let jacks = std::array::from_fn(|column| sequence_jack(plan.notes, column, plan.rate));

        let mut max_points = 0.0;
        for (l, r) in left.points.iter().zip(&right.points) {
            max_points += (l + r) as f32;
        }

        // accumulated left hand first, then right, as one running sum
        let bias_sum: f32 = left_bias.iter().chain(&right_bias).sum();
        let fingerbias = bias_sum / (2 * plan.interval_count) as f32;

        let last_row_time = plan.notes.last().map_or(0.0, |n| n.timestamp);
        let scalers = ChartScalers::new(plan.notes, last_row_time);

        debug!(
            "Context: {} intervals, {} points, fingerbias {:.4}",
            plan.interval_count, max_points, fingerbias
        );

        Self {
            left,
            right,
            jacks,
            max_points,
            fingerbias,
            scalers,
        }
    }

    /// Fraction of the chart's points a player of `skill` is expected to get.
    pub fn score_for_skill(&self, skill: f32, chisel_type: ChiselType, stamina: bool) -> f32 {
        let achieved = if chisel_type == ChiselType::Jack {
            let mut points = self.max_points;
            for seq in &self.jacks {
                points -= jack_loss(seq, skill);
            }
            points
        } else {
            self.left.calc_internal(skill, chisel_type, stamina)
                + self.right.calc_internal(skill, chisel_type, stamina)
        };

        achieved / self.max_points
    }

    /// Skill needed to reach `score_goal`, searched upward from `skill_floor`.
    pub fn chisel(
        &self,
        skill_floor: f32,
        resolution: f32,
        score_goal: f32,
        chisel_type: ChiselType,
        stamina: bool,
    ) -> f32 {
        let is_too_low = |skill: f32| self.score_for_skill(skill, chisel_type, stamina) < score_goal;
        approximate(skill_floor, resolution, CHISEL_ITERATIONS, is_too_low, true)
    }

    fn solve(&self, score_goal: f32, chisel_type: ChiselType) -> f32 {
        self.chisel(SKILL_FLOOR, SKILL_RESOLUTION, score_goal, chisel_type, false)
    }

    /// Runs every skill solve and the corrective passes.
    pub fn rate(&self, score_goal: f32) -> Rating {
        let sc = &self.scalers;

        let stream = self.solve(score_goal, ChiselType::Stream);
        let mut js = self.solve(score_goal, ChiselType::Jumpstream);
        let mut hs = self.solve(score_goal, ChiselType::Handstream);
        let mut tech = self.solve(score_goal, ChiselType::Technical);
        let jack = self.solve(score_goal, ChiselType::Jack);
        debug!(
            "Solved: stream {:.4} js {:.4} hs {:.4} tech {:.4} jack {:.4}",
            stream, js, hs, tech, jack
        );

        let techbase = stream.max(jack);
        tech *= clamp(tech / techbase, 0.85, 1.0);

        let (stam_base, stam_type) = if stream > tech || js > tech || hs > tech {
            if stream > js && stream > hs {
                (stream, ChiselType::Stream)
            } else if js > hs {
                (js, ChiselType::Jumpstream)
            } else {
                (hs, ChiselType::Handstream)
            }
        } else {
            (tech, ChiselType::Technical)
        };
        let mut stam = self.chisel(stam_base - STAM_HEADROOM, STAM_RESOLUTION, score_goal, stam_type, true);
        debug!("Stamina solved from {}: {:.4}", stam_type, stam);

        js *= 0.95;
        hs *= 0.95;
        stam *= 0.9;
        tech *= 0.95;

        let chordjack = jack * 0.75;

        let mut r = Rating {
            overall: 0.0,
            stream: downscale_low_accuracy(stream, score_goal),
            jumpstream: downscale_low_accuracy(js, score_goal),
            handstream: downscale_low_accuracy(hs, score_goal),
            stamina: downscale_low_accuracy(stam, score_goal),
            jack: downscale_low_accuracy(jack, score_goal),
            chordjack: downscale_low_accuracy(chordjack, score_goal),
            technical: downscale_low_accuracy(tech, score_goal),
        };

        let chordjack_base = r.handstream;

        r.stream *= sc.allhands * sc.manyjumps * sc.lotquads;
        r.jumpstream *= sc.nojumps * sc.allhands * sc.lotquads;
        r.handstream *= sc.nohands * sc.allhands * 1.015 * sc.manyjumps * sc.lotquads;
        r.stamina *= sc.shortstam * 0.985 * sc.lotquads;
        r.technical *= sc.allhands * sc.manyjumps * sc.lotquads * 1.01;

        // keep stamina from running away from the skillsets it was solved on
        let max_stream_jack_hs_js = r.stream.max(r.jack).max(r.jumpstream.max(r.handstream));
        r.stamina = clamp(r.stamina, 1.0, max_stream_jack_hs_js * 1.1);

        let chordjack = chordjack_base * sc.chordjack_scale();
        let downscale_chordjack_at_end = if chordjack > r.jack {
            r.chordjack = chordjack;
            false
        } else {
            true
        };

        // fingerbias: 2.55 -> 1, 2.7 -> 0.85
        let finger_bias_scaling = clamp(3.55 - self.fingerbias, 0.85, 1.0);
        r.technical *= finger_bias_scaling;
        if finger_bias_scaling <= 0.95 {
            r.jack *= 1.0 + (1.0 - finger_bias_scaling.sqrt());
        }

        // js/hs rating bleeds into stream; take some of it back
        let max_js_hs = r.handstream.max(r.jumpstream);
        if r.stream < max_js_hs {
            r.stream -= (max_js_hs - r.stream).sqrt();
        }

        let overall = aggregate_scores(&r.to_vec(), 0.0, SKILL_RESOLUTION);
        r.overall = downscale_low_accuracy(overall, score_goal);

        let avg_cap = mean(&r.to_vec()) * 1.2;
        let grind = sc.grindscaler;
        r.overall = downscale_low_accuracy(r.overall.min(avg_cap) * grind, score_goal);
        r.stream = downscale_low_accuracy(r.stream.min(avg_cap * 1.0416) * grind, score_goal);
        r.jumpstream = downscale_low_accuracy(r.jumpstream.min(avg_cap * 1.0416) * grind, score_goal);
        r.handstream = downscale_low_accuracy(r.handstream.min(avg_cap) * grind, score_goal);
        r.stamina = downscale_low_accuracy(r.stamina.min(avg_cap) * grind, score_goal);
        r.jack = downscale_low_accuracy(r.jack.min(avg_cap) * grind, score_goal);
        r.chordjack = downscale_low_accuracy(r.chordjack.min(avg_cap) * grind, score_goal);
        r.technical = downscale_low_accuracy(r.technical.min(avg_cap * 1.0416) * grind, score_goal);

        r.jumpstream *= sc.jumpthrill;
        r.handstream *= sc.jumpthrill;
        r.stamina *= sc.jumpthrill.sqrt() * 0.996;
        r.technical *= sc.jumpthrill.sqrt();

        let highest = r.overall.max(r.highest_skillset());

        r.overall = aggregate_scores(&r.to_vec(), 0.0, SKILL_RESOLUTION);
        debug!("Aggregate overall {:.4}, highest skillset {:.4}", r.overall, highest);

        if downscale_chordjack_at_end {
            r.chordjack *= 0.9;
        }

        // 0 -> 50%, 40 -> 90%
        let minimum_required_percentage = clamp(0.5 + (highest / 100.0), 0.0, 0.9);
        if score_goal < minimum_required_percentage {
            debug!(
                "Goal {} below required {:.4}, rating zeroed",
                score_goal, minimum_required_percentage
            );
            return Rating::default();
        }

        // technical tends to be overrated on charts that are really js/hs
        if highest == r.technical {
            let hs = r.handstream;
            let js = r.jumpstream;
            r.technical -= clamp(4.5 - (r.technical - hs), 0.0, 4.5);
            r.technical -= clamp(4.5 - (r.technical - js), 0.0, 4.5);
        }

        r.jack *= 0.925;
        r.technical *= 1.025;
        r.overall = r.highest_skillset();

        r
    }
}
