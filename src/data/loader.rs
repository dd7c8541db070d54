use std::path::Path;

use serde::Deserialize;

use crate::state::record::HealthRecord;

/// One CSV row as read from disk, still string-typed. Numeric conversion
/// happens in a second step so that malformed cells can degrade to NaN
/// instead of failing the whole load.
#[derive(Debug, Deserialize)]
struct RawRecord {
    state: String,
    abbr: String,
    poverty: String,
    age: String,
    income: String,
    healthcare: String,
    smokes: String,
    obesity: String,
}

/// Load the health dataset from a CSV file with columns
/// `state,abbr,poverty,age,income,healthcare,smokes,obesity`.
///
/// Fails if the file is unreachable, has no header, or is missing one of
/// the expected columns. Malformed numeric cells become NaN.
pub fn load_csv(path: &Path) -> Result<Vec<HealthRecord>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;

    let headers = reader
        .headers()
        .map_err(|e| format!("Cannot read header row: {e}"))?
        .clone();
    for expected in [
        "state",
        "abbr",
        "poverty",
        "age",
        "income",
        "healthcare",
        "smokes",
        "obesity",
    ] {
        if !headers.iter().any(|h| h.eq_ignore_ascii_case(expected)) {
            return Err(format!("Missing column \"{expected}\" in {}", path.display()));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        let raw = row.map_err(|e| format!("Malformed row: {e}"))?;
        records.push(convert(raw));
    }

    if records.is_empty() {
        return Err(format!("No data rows in {}", path.display()));
    }
    Ok(records)
}

fn convert(raw: RawRecord) -> HealthRecord {
    HealthRecord {
        state: raw.state,
        abbr: raw.abbr,
        poverty: to_f64(&raw.poverty),
        age: to_f64(&raw.age),
        income: to_f64(&raw.income),
        healthcare: to_f64(&raw.healthcare),
        smokes: to_f64(&raw.smokes),
        obesity: to_f64(&raw.obesity),
    }
}

/// Convert a cell to f64; invalid entries become NaN.
fn to_f64(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Display name for a loaded file: the file stem, or the whole path if
/// there is none.
pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| path.display().to_string())
}
