//! The candidate CSV readers.
//!
//! Each reader takes a path and returns the parsed file. The harness only
//! cares how long the call takes; the parsed data is dropped after timing.

use crate::errors::BenchResult;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Split the file into rows of string fields. The header line is kept as
/// the first row.
pub fn read_csv_manual<P: AsRef<Path>>(path: P) -> BenchResult<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Build a [`DataFrame`] in a single eager pass.
pub fn read_csv_eager<P: AsRef<Path>>(path: P) -> BenchResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Plan a lazy scan of the file and collect it.
pub fn read_csv_lazy<P: AsRef<Path>>(path: P) -> BenchResult<DataFrame> {
    let df = LazyCsvReader::new(path).finish()?.collect()?;
    Ok(df)
}

/// One of the CSV reading strategies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Candidate {
    Manual,
    Eager,
    Lazy,
}

impl Candidate {
    pub const ALL: [Candidate; 3] = [Candidate::Manual, Candidate::Eager, Candidate::Lazy];

    /// Name used as the timing key and in the result table.
    pub fn name(&self) -> &'static str {
        match self {
            Candidate::Manual => "read_csv_manual",
            Candidate::Eager => "read_csv_eager",
            Candidate::Lazy => "read_csv_lazy",
        }
    }

    pub fn load(&self, path: &Path) -> BenchResult<ParsedData> {
        match self {
            Candidate::Manual => read_csv_manual(path).map(ParsedData::Rows),
            Candidate::Eager => read_csv_eager(path).map(ParsedData::Frame),
            Candidate::Lazy => read_csv_lazy(path).map(ParsedData::Frame),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-memory result of a read.
#[derive(Debug)]
pub enum ParsedData {
    Rows(Vec<Vec<String>>),
    Frame(DataFrame),
}

impl ParsedData {
    /// Number of rows held. For [`ParsedData::Rows`] this includes the header line.
    pub fn height(&self) -> usize {
        match self {
            ParsedData::Rows(rows) => rows.len(),
            ParsedData::Frame(df) => df.height(),
        }
    }
}
