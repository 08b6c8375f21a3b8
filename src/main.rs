use clap::{Parser, ValueEnum};
use csvbench::{BenchConfig, BenchOverrides};
use miette::Result;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Clone, ValueEnum, Debug)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, ValueEnum, Debug)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "csvbench")]
#[command(version = "0.1.0")]
#[command(about = "Compare the wall-clock cost of manual, eager and lazy CSV readers", long_about = None)]
struct Cli {
    /// Benchmark YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file to read (default: ./data.csv)
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Number of times each reader is run (default: 100)
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Result format (text table or json report)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase logging verbosity (Info -> Debug)
    #[arg(short, long)]
    verbose: bool,

    /// Silence all logs
    #[arg(short, long)]
    quiet: bool,

    /// Log format (text or json)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // CSVBENCH_LOG > CLI args
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("CSVBENCH_LOG")
        .from_env_lossy();

    let run_id = Uuid::new_v4();

    // stdout carries the report only
    match cli.log_format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .json()
                .with_span_list(false)
                .with_current_span(false)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    let _span = tracing::info_span!("root", run_id = %run_id).entered();

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading benchmark config from {:?}", path);
            BenchConfig::from_path(path)?
        }
        None => BenchConfig::default(),
    };
    let config = config.apply_overrides(BenchOverrides {
        input: cli.input,
        iterations: cli.iterations,
    });

    let report = csvbench::runner::run_benchmark(&config, run_id, !cli.quiet)?;

    match cli.format {
        OutputFormat::Text => println!("{}", report.to_table()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
