use super::{Chart, NoteEvent};
use crate::error::{CalcError, CalcResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Loads a chart from disk, choosing the format from the file extension.
///
/// * `.json` - an array of `{ "timestamp": f32, "columns": u8 }` objects.
/// * `.csv`  - a `timestamp,columns` header followed by one row per event.
pub fn load_chart<P: AsRef<Path>>(path: P) -> CalcResult<Chart> {
    let path = path.as_ref();
    info!("📂 Loading chart: {}", path.display());

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let file = File::open(path)?;
    match ext.as_str() {
        "json" => load_chart_json(file),
        "csv" => load_chart_csv(file),
        other => Err(CalcError::Config(format!(
            "Unsupported chart format '{}' (expected .json or .csv)",
            other
        ))),
    }
}

pub fn load_chart_json<R: Read>(reader: R) -> CalcResult<Chart> {
    let notes: Vec<NoteEvent> = serde_json::from_reader(reader)?;
    validate(&notes)?;
    debug!("Parsed {} rows from JSON", notes.len());
    Ok(Chart::new(notes))
}

pub fn load_chart_csv<R: Read>(reader: R) -> CalcResult<Chart> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut notes = Vec::new();
    for record in rdr.deserialize() {
        let row: NoteEvent = record?;
        notes.push(row);
    }

    validate(&notes)?;
    debug!("Parsed {} rows from CSV", notes.len());
    Ok(Chart::new(notes))
}

/// Rejects rows the engine cannot interpret: masks wider than four columns,
/// non-finite timestamps and timestamps that go backwards.
pub fn validate(notes: &[NoteEvent]) -> CalcResult<()> {
    let mut prev = f32::NEG_INFINITY;
    for (i, row) in notes.iter().enumerate() {
        if row.columns > 0b1111 {
            return Err(CalcError::Validation(format!(
                "row {}: column mask {:#06b} uses more than 4 columns",
                i, row.columns
            )));
        }
        if !row.timestamp.is_finite() {
            return Err(CalcError::Validation(format!(
                "row {}: timestamp is not finite",
                i
            )));
        }
        if row.timestamp < prev {
            return Err(CalcError::Validation(format!(
                "row {}: timestamp {} is earlier than previous row ({})",
                i, row.timestamp, prev
            )));
        }
        prev = row.timestamp;
    }
    Ok(())
}
