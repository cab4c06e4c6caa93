use super::table::ScoreTable;
use crate::error::{FusionError, FvResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    fallback: Option<f64>,
    scores: BTreeMap<String, f64>,
}

/// Loads an alternate score table. `.json` files are read as
/// `{"fallback": f64, "scores": {"A": f64, ...}}`, anything else as a
/// `symbol,score` CSV with a header row. `fallback` applies unless the JSON
/// file sets its own.
pub fn load_score_table<P: AsRef<Path>>(path: P, fallback: f64) -> FvResult<ScoreTable> {
    let path = path.as_ref();
    info!("📂 Loading Score Table: {}", path.display());

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let table = if is_json {
        let content = fs::read_to_string(path)?;
        table_from_json(&content, fallback)?
    } else {
        let file = File::open(path)?;
        table_from_csv(file, fallback)?
    };

    debug!(
        "   -> {} symbols, fallback {}",
        table.len(),
        table.fallback()
    );
    Ok(table)
}

pub fn table_from_json(content: &str, fallback: f64) -> FvResult<ScoreTable> {
    let raw: TableFile = serde_json::from_str(content)?;
    let entries = raw
        .scores
        .into_iter()
        .map(|(k, v)| single_char(&k).map(|c| (c, v)))
        .collect::<FvResult<Vec<_>>>()?;
    ScoreTable::from_entries(entries, raw.fallback.unwrap_or(fallback))
}

pub fn table_from_csv<R: Read>(reader: R, fallback: f64) -> FvResult<ScoreTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 2 || rec[0].is_empty() {
            skipped += 1;
            continue;
        }

        let symbol = single_char(&rec[0])?;
        let score: f64 = rec[1].parse().map_err(|_| {
            FusionError::Validation(format!(
                "row {}: '{}' is not a number",
                row_idx + 1,
                &rec[1]
            ))
        })?;
        entries.push((symbol, score));
    }

    if skipped > 0 {
        warn!("⚠️  Skipped {} incomplete rows in score table.", skipped);
    }

    ScoreTable::from_entries(entries, fallback)
}

fn single_char(s: &str) -> FvResult<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FusionError::Validation(format!(
            "symbol '{}' must be exactly one character",
            s
        ))),
    }
}
