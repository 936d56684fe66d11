use super::metrics::clamp;
use crate::chart::{NoteEvent, COLUMN_COUNT};

/// Width of one interval in seconds of rate-scaled time.
pub const INTERVAL_SPAN: f32 = 0.5;

/// Most intervals one plan may hold (a bit over six days of chart at 1x).
pub const MAX_INTERVALS: usize = 1 << 20;

/// Gap lengths (ms) are clamped into this range before use.
pub const MIN_GAP_MS: f32 = 40.0;
pub const MAX_GAP_MS: f32 = 5000.0;

/// Virtual time (s) of the tap preceding the first tap of every column.
pub const FIRST_TAP_ORIGIN: f32 = -5.0;

/// Inter-tap gaps of one column, bucketed by interval.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FingerTrack {
    pub intervals: Vec<Vec<f32>>,
}

impl FingerTrack {
    pub fn taps_in(&self, interval: usize) -> usize {
        self.intervals[interval].len()
    }
}

/// Everything derived from a chart at one rate before any modeling happens.
///
/// Built once per invocation and only read afterwards, so every stage sees
/// the same interval grid.
#[derive(Debug, Clone)]
pub struct IntervalPlan<'a> {
    pub notes: &'a [NoteEvent],
    pub rate: f32,
    pub interval_count: usize,
    /// Indices into `notes` of every non-empty row, bucketed by interval.
    pub rows: Vec<Vec<usize>>,
    pub fingers: [FingerTrack; COLUMN_COUNT],
}

impl<'a> IntervalPlan<'a> {
    /// Slices `notes` into intervals. Returns `None` for an empty chart.
    pub fn build(notes: &'a [NoteEvent], rate: f32) -> Option<Self> {
        let last = notes.last()?;
        let interval_count = interval_count(last.timestamp, rate);

        let mut rows = vec![Vec::new(); interval_count];
        for (i, row) in notes.iter().enumerate() {
            if row.columns != 0 {
                rows[interval_index(row.timestamp, rate, interval_count)].push(i);
            }
        }

        let fingers = std::array::from_fn(|column| process_finger(notes, column, rate, interval_count));

        Some(Self {
            notes,
            rate,
            interval_count,
            rows,
            fingers,
        })
    }

    /// Total taps of a column pair in one interval.
    pub fn taps_in(&self, f1: usize, f2: usize, interval: usize) -> usize {
        self.fingers[f1].taps_in(interval) + self.fingers[f2].taps_in(interval)
    }

    /// Rows (as note events) of one interval.
    pub fn rows_in(&self, interval: usize) -> impl Iterator<Item = &NoteEvent> + '_ {
        self.rows[interval].iter().map(move |&i| &self.notes[i])
    }
}

/// `ceil(last / (rate * 0.5))`, at least one interval.
pub fn interval_count(last_timestamp: f32, rate: f32) -> usize {
    let count = (last_timestamp / (rate * INTERVAL_SPAN)).ceil();
    (count as usize).max(1)
}

/// Interval holding an event. Events exactly on the final boundary fall into
/// the last interval.
#[inline(always)]
pub fn interval_index(timestamp: f32, rate: f32, interval_count: usize) -> usize {
    let scaled = timestamp / rate;
    ((scaled / INTERVAL_SPAN) as usize).min(interval_count - 1)
}

fn process_finger(notes: &[NoteEvent], column: usize, rate: f32, interval_count: usize) -> FingerTrack {
    let mut intervals = vec![Vec::new(); interval_count];
    let mut last = FIRST_TAP_ORIGIN;

    for row in notes.iter().filter(|r| r.has_column(column)) {
        let scaled = row.timestamp / rate;
        let gap_ms = 1000.0 * (scaled - last);
        let idx = interval_index(row.timestamp, rate, interval_count);
        intervals[idx].push(clamp(gap_ms, MIN_GAP_MS, MAX_GAP_MS));
        last = scaled;
    }

    FingerTrack { intervals }
}
