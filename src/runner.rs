use crate::config::BenchConfig;
use crate::errors::{BenchError, BenchResult};
use crate::harness::{instrument, TimingRecords};
use crate::io::ParsedData;
use crate::observability::InputFileStats;
use crate::report::{self, Report};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

/// Run every configured candidate `config.iterations` times against the
/// same input, then score them against the baseline.
///
/// The first failing read aborts the run.
pub fn run_benchmark(config: &BenchConfig, run_id: Uuid, show_progress: bool) -> BenchResult<Report> {
    config.validate()?;

    info!("Benchmarking {:?}", config.input);
    let input = InputFileStats::from_path(&config.input)?;
    info!(
        size_bytes = input.size_bytes,
        sha256 = %input.hash,
        "Input fingerprinted"
    );

    let path: &Path = &config.input;
    let mut timed: Vec<_> = config
        .candidates
        .iter()
        .map(|&candidate| instrument(candidate.name(), move |p: &Path| candidate.load(p)))
        .collect();

    let pb = if show_progress {
        ProgressBar::new(config.iterations as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}")
            .map_err(|e| BenchError::Unknown(e.into()))?
            .progress_chars("#>-"),
    );
    pb.set_message("reading...");

    let mut records = TimingRecords::new();
    for iteration in 0..config.iterations {
        for (candidate, read) in config.candidates.iter().zip(timed.iter_mut()) {
            let data: ParsedData = read(&mut records, path)?;
            debug!(iteration, candidate = %candidate, rows = data.height(), "read complete");
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let scores = records.aggregate();
    let baseline = config.baseline.name();
    let rows = report::render(&scores, baseline)?;

    info!("Benchmark completed successfully.");
    Ok(Report {
        run_id: run_id.to_string(),
        timestamp: Utc::now(),
        input,
        iterations: config.iterations,
        baseline: baseline.to_string(),
        rows,
    })
}
