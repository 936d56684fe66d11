#![allow(dead_code)]

use msdcalc::NoteEvent;

// Column order of a stream that avoids plain rolls
const STREAM_ORDER: [u8; 8] = [0, 2, 1, 3, 2, 0, 3, 1];

/// Single notes at a steady `nps` for `seconds`.
pub fn stream(nps: f32, seconds: f32) -> Vec<NoteEvent> {
    let count = (nps * seconds) as usize;
    (0..count)
        .map(|i| NoteEvent::new(i as f32 / nps, 1 << STREAM_ORDER[i % STREAM_ORDER.len()]))
        .collect()
}

/// Alternating jumps and single notes.
pub fn jumpstream(nps: f32, seconds: f32) -> Vec<NoteEvent> {
    const MASKS: [u8; 4] = [0b0101, 0b0010, 0b1010, 0b0001];
    let count = (nps * seconds) as usize;
    (0..count)
        .map(|i| NoteEvent::new(i as f32 / nps, MASKS[i % MASKS.len()]))
        .collect()
}

/// Repeated taps on one column.
pub fn jack(column: usize, nps: f32, seconds: f32) -> Vec<NoteEvent> {
    let count = (nps * seconds) as usize;
    (0..count)
        .map(|i| NoteEvent::new(i as f32 / nps, 1 << column))
        .collect()
}

/// Rows of the same `mask` at a steady rate.
pub fn chords(mask: u8, nps: f32, seconds: f32) -> Vec<NoteEvent> {
    let count = (nps * seconds) as usize;
    (0..count)
        .map(|i| NoteEvent::new(i as f32 / nps, mask))
        .collect()
}

/// Stream whose density ramps from `from_nps` to `to_nps`.
pub fn ramp(from_nps: f32, to_nps: f32, seconds: f32) -> Vec<NoteEvent> {
    let mut notes = Vec::new();
    let mut t = 0.0;
    let mut i = 0;
    while t < seconds {
        notes.push(NoteEvent::new(t, 1 << STREAM_ORDER[i % STREAM_ORDER.len()]));
        let nps = from_nps + (to_nps - from_nps) * (t / seconds);
        t += 1.0 / nps;
        i += 1;
    }
    notes
}

/// Rows cycling through `masks` at a steady `nps`.
pub fn cycle(masks: &[u8], nps: f32, seconds: f32) -> Vec<NoteEvent> {
    let count = (nps * seconds) as usize;
    (0..count)
        .map(|i| NoteEvent::new(i as f32 / nps, masks[i % masks.len()]))
        .collect()
}
