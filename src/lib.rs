pub mod config;
pub mod errors;
pub mod harness;
pub mod io;
pub mod observability;
pub mod report;
pub mod runner;

pub use config::{BenchConfig, BenchOverrides};
pub use errors::{BenchError, BenchResult};
pub use harness::{instrument, Scores, TimingRecords};
pub use io::{Candidate, ParsedData};
pub use report::{compare, render, ComparisonRow, Report};
