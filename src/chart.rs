pub mod loader;

use serde::{Deserialize, Serialize};

/// Number of playable columns. Columns 0 and 1 belong to the left hand,
/// 2 and 3 to the right hand.
pub const COLUMN_COUNT: usize = 4;

/// One row of a chart: a point in time and the columns tapped at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Seconds from the start of the chart at rate 1.0.
    pub timestamp: f32,
    /// 4-bit mask, bit `k` set means column `k` has a tap.
    pub columns: u8,
}

impl NoteEvent {
    pub fn new(timestamp: f32, columns: u8) -> Self {
        Self { timestamp, columns }
    }

    /// Number of taps on this row.
    #[inline(always)]
    pub fn tap_count(&self) -> u32 {
        column_count(self.columns)
    }

    #[inline(always)]
    pub fn has_column(&self, column: usize) -> bool {
        self.columns & (1 << column) != 0
    }
}

/// Counts the taps encoded in the low four bits of a row mask.
#[inline(always)]
pub fn column_count(mask: u8) -> u32 {
    (mask & 0b1111).count_ones()
}

/// Proportion of taps that belong to rows with exactly `chord_size` taps.
///
/// Returns 0 for a chart without taps.
pub fn chord_proportion(notes: &[NoteEvent], chord_size: u32) -> f32 {
    let mut taps = 0u32;
    let mut chords = 0u32;

    for row in notes {
        let n = row.tap_count();
        taps += n;
        if n == chord_size {
            chords += n;
        }
    }

    if taps == 0 {
        return 0.0;
    }
    chords as f32 / taps as f32
}

/// An ordered list of note rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chart {
    pub notes: Vec<NoteEvent>,
}

impl Chart {
    pub fn new(notes: Vec<NoteEvent>) -> Self {
        Self { notes }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Timestamp of the final row, `None` for an empty chart.
    pub fn last_timestamp(&self) -> Option<f32> {
        self.notes.last().map(|n| n.timestamp)
    }

    pub fn total_taps(&self) -> u32 {
        self.notes.iter().map(NoteEvent::tap_count).sum()
    }

    pub fn as_slice(&self) -> &[NoteEvent] {
        &self.notes
    }
}

impl From<Vec<NoteEvent>> for Chart {
    fn from(notes: Vec<NoteEvent>) -> Self {
        Self { notes }
    }
}
