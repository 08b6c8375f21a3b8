use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code("CSVBENCH-001"),
        help("Please check your benchmark YAML syntax and structure.")
    )]
    ConfigError(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code("CSVBENCH-002"),
        help("Check file paths and permissions.")
    )]
    IoError(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    #[diagnostic(
        code("CSVBENCH-003"),
        help("The dataframe reader could not parse the input file.")
    )]
    PolarsError(#[from] polars::error::PolarsError),

    #[error("CSV error: {0}")]
    #[diagnostic(
        code("CSVBENCH-004"),
        help("The manual reader could not split the input into records.")
    )]
    CsvError(#[from] csv::Error),

    #[error("Invalid benchmark configuration: {0}")]
    #[diagnostic(code("CSVBENCH-005"))]
    InvalidConfig(String),

    #[error("Baseline `{0}` has no recorded timings")]
    #[diagnostic(
        code("CSVBENCH-006"),
        help("The baseline must run successfully at least once before results are rendered.")
    )]
    MissingBaseline(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code("CSVBENCH-007"))]
    SerializeError(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code("CSVBENCH-000"))]
    Unknown(#[from] anyhow::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
