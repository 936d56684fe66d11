//! Column-local jack model.
//!
//! Jacks (repeated taps on one column) are limited by how fast a single finger
//! can move, so they get their own difficulty sequence and point-loss model
//! instead of going through [`Hand`](super::hand::Hand).

use super::metrics::clamp;
use super::plan::FIRST_TAP_ORIGIN;
use crate::chart::NoteEvent;

/// Cap on local jack difficulty (~17.9 taps per second).
pub const JACK_DIFF_MAX: f32 = 50.0;
pub const JACK_DIFF_PER_NPS: f32 = 2.8;
/// The average gap may not exceed this multiple of the most recent gap.
pub const MINIJACK_RATIO: f32 = 1.4;

pub const JACK_BASE_CEILING: f32 = 1.15;
pub const JACK_CEILING_SCALE: f32 = 1750.0;
pub const JACK_PROP: f32 = 0.75;
pub const JACK_MAG: f32 = 250.0;
pub const JACK_LOSS_LENIENCY: f32 = 0.96;
pub const JACK_LOSS_EXPONENT: f32 = 1.5;
pub const JACK_LOSS_SCALE: f32 = 7.0;
pub const JACK_LOSS_MAX: f32 = 10000.0;

/// Local jack-speed difficulty at every tap of `column`.
///
/// Each value comes from the mean of the three most recent gaps, tightened to
/// `1.4 ×` the latest gap when that one is much faster (minijacks).
pub fn sequence_jack(notes: &[NoteEvent], column: usize, rate: f32) -> Vec<f32> {
    let mut output = Vec::new();
    let mut last = FIRST_TAP_ORIGIN;

    // gap3 is the most recent
    let mut gap2 = 0.0;
    let mut gap3 = 0.0;

    for row in notes.iter().filter(|r| r.has_column(column)) {
        let scaled = row.timestamp / rate;
        let gap1 = gap2;
        gap2 = gap3;
        gap3 = 1000.0 * (scaled - last);
        last = scaled;

        let interval_avg = ((gap1 + gap2 + gap3) / 3.0).min(gap3 * MINIJACK_RATIO);
        let local_nps = 1000.0 / interval_avg;
        output.push((JACK_DIFF_PER_NPS * local_nps).min(JACK_DIFF_MAX));
    }

    output
}

/// Points a player of skill `skill` is expected to lose on one jack sequence.
///
/// `ceiling` rises with sustained load and lets the fatigue multiplier climb
/// past its base cap on long jack sections.
pub fn jack_loss(sequence: &[f32], skill: f32) -> f32 {
    let mut output = 0.0;
    let mut ceiling = 1.0_f32;
    let mut modifier = 1.0;

    for &jd in sequence {
        modifier += (jd / (JACK_PROP * skill) - 1.0) / JACK_MAG;

        if modifier > 1.0 {
            ceiling += (modifier - 1.0) / JACK_CEILING_SCALE;
        }

        modifier = clamp(modifier, 1.0, JACK_BASE_CEILING * ceiling.sqrt());

        let jd = jd * modifier;
        if skill < jd {
            // can go negative when 0.96 * jd < skill < jd
            output += 1.0 - (skill / (jd * JACK_LOSS_LENIENCY)).powf(JACK_LOSS_EXPONENT);
        }
    }

    clamp(JACK_LOSS_SCALE * output, 0.0, JACK_LOSS_MAX)
}
