//! Timing accumulator and instrumentation wrapper.
//!
//! A [`TimingRecords`] owns one ordered list of nanosecond measurements per
//! candidate name. [`instrument`] wraps a fallible function so that every
//! successful call appends its elapsed time to the records passed in.

use indexmap::IndexMap;
use std::time::{Duration, Instant};
use tracing::trace;

/// Mean elapsed nanoseconds per candidate, in first-recorded order.
pub type Scores = IndexMap<String, f64>;

#[derive(Debug, Clone, Default)]
pub struct TimingRecords {
    records: IndexMap<String, Vec<u128>>,
}

impl TimingRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one measurement to `name`'s record, creating it on first use.
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        let nanos = elapsed.as_nanos();
        trace!(candidate = name, elapsed = ?elapsed, "recorded timing");
        if let Some(timings) = self.records.get_mut(name) {
            timings.push(nanos);
        } else {
            self.records.insert(name.to_string(), vec![nanos]);
        }
    }

    pub fn get(&self, name: &str) -> Option<&[u128]> {
        self.records.get(name).map(Vec::as_slice)
    }

    /// Candidate names in the order they were first recorded.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Arithmetic mean of every record.
    ///
    /// A record only exists once a call has succeeded, so every entry has at
    /// least one measurement.
    pub fn aggregate(&self) -> Scores {
        self.records
            .iter()
            .map(|(name, timings)| {
                let total: u128 = timings.iter().sum();
                (name.clone(), total as f64 / timings.len() as f64)
            })
            .collect()
    }
}

/// Wrap `candidate` so each successful call is timed into the given records
/// under `name`.
///
/// The wrapper returns whatever `candidate` returned. A failed call is
/// passed through untouched and records nothing.
pub fn instrument<I, O, E, F>(
    name: &'static str,
    mut candidate: F,
) -> impl FnMut(&mut TimingRecords, I) -> Result<O, E>
where
    F: FnMut(I) -> Result<O, E>,
{
    move |records: &mut TimingRecords, input: I| {
        let start = Instant::now();
        let output = candidate(input)?;
        records.record(name, start.elapsed());
        Ok(output)
    }
}
