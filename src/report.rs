//! Comparison against the baseline and result rendering.

use crate::errors::{BenchError, BenchResult};
use crate::harness::Scores;
use crate::observability::InputFileStats;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

/// Express `score` relative to `baseline` as a ratio percentage.
///
/// The smaller score is always the numerator: a faster baseline yields
/// `-{baseline/score*100}%`, a slower one `+{score/baseline*100}%`. Equal
/// scores yield `-`.
pub fn compare(baseline: f64, score: f64) -> String {
    if baseline == score {
        return "-".to_string();
    }

    if baseline < score {
        return format!("-{}%", format_float(baseline / score * 100.0));
    }

    format!("+{}%", format_float(score / baseline * 100.0))
}

/// Shortest round-trip form, always with a fractional part (`50.0`, `12.5`).
///
/// Exponents carry a sign and at least two digits (`1e+16`, `1.5e-07`).
pub fn format_float(value: f64) -> String {
    let s = format!("{value:?}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonRow {
    pub name: String,
    pub mean_ns: f64,
    pub vs_baseline: String,
}

/// One row per scored candidate, in score order, each compared to `baseline`.
pub fn render(scores: &Scores, baseline: &str) -> BenchResult<Vec<ComparisonRow>> {
    let baseline_score = *scores
        .get(baseline)
        .ok_or_else(|| BenchError::MissingBaseline(baseline.to_string()))?;

    Ok(scores
        .iter()
        .map(|(name, &score)| ComparisonRow {
            name: name.clone(),
            mean_ns: score,
            vs_baseline: compare(baseline_score, score),
        })
        .collect())
}

/// A row as printed in the result table.
#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Function")]
    name: String,
    #[tabled(rename = "Time in ns")]
    mean_ns: String,
    #[tabled(rename = "VS. Baseline")]
    vs_baseline: String,
}

/// Markdown table with centered columns.
pub fn format_table(rows: &[ComparisonRow]) -> String {
    let rows = rows.iter().map(|row| TableRow {
        name: row.name.clone(),
        mean_ns: format_float(row.mean_ns),
        vs_baseline: row.vs_baseline.clone(),
    });

    Table::new(rows)
        .with(Style::markdown())
        .with(Alignment::center())
        .to_string()
}

/// Everything a single run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub run_id: String,
    pub timestamp: DateTime<Utc>,
    pub input: InputFileStats,
    pub iterations: usize,
    pub baseline: String,
    pub rows: Vec<ComparisonRow>,
}

impl Report {
    pub fn to_table(&self) -> String {
        format_table(&self.rows)
    }

    pub fn to_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
