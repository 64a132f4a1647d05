//! `orgsynth` command-line entry point.
//!
//! # Responsibility
//! - Collect run options from flags and environment.
//! - Drive `orgsynth_core::OrgService` and write the export to a file or
//!   stdout.
//!
//! # Invariants
//! - The export goes to stdout or the output file; diagnostics go to stderr.
//! - Validation failures exit with a distinct status and write no export.

use clap::{Parser, ValueEnum};
use log::info;
use orgsynth_core::{
    default_log_level, init_logging, ConfigError, CsvSink, ExportFormat, FileSink,
    GenerationConfig, GenerationSummary, JsonSink, OrgError, OrgService, RandomNameSupply,
    ResultSink,
};
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;
const EXIT_VALIDATION: u8 = 3;

#[derive(Parser)]
#[command(name = "orgsynth", version)]
#[command(about = "Generate a synthetic org hierarchy as CSV or JSON")]
struct Cli {
    /// Number of employees, root included
    #[arg(short = 'n', long, env = "ORGSYNTH_EMPLOYEES", default_value_t = 1000)]
    employees: u32,

    /// Output file; stdout when absent or `-`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// RNG seed for a reproducible chart
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace|debug|info|warn|error); build-mode default when absent
    #[arg(long, env = "ORGSYNTH_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; stderr when absent
    #[arg(long, env = "ORGSYNTH_LOG_DIR")]
    log_dir: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, cli.log_dir.as_deref()) {
        eprintln!("Error: {err}");
        return ExitCode::from(EXIT_USAGE);
    }

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match run(&cli, &config) {
        Ok(summary) => {
            eprintln!(
                "Org chart ready: {} employees, max chain depth {}.",
                summary.headcount, summary.max_chain_depth
            );
            ExitCode::SUCCESS
        }
        Err(OrgError::ValidationFailed(report)) => {
            eprintln!("Validation failed: some employees cannot trace up to the CEO. {report}");
            ExitCode::from(EXIT_VALIDATION)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn build_config(cli: &Cli) -> Result<GenerationConfig, ConfigError> {
    Ok(GenerationConfig::new(cli.employees)?
        .with_seed(cli.seed)
        .with_format(cli.format.into()))
}

fn run(cli: &Cli, config: &GenerationConfig) -> Result<GenerationSummary, OrgError> {
    let names = match config.seed {
        Some(seed) => RandomNameSupply::with_seed(seed),
        None => RandomNameSupply::new(),
    };
    let mut service = OrgService::new(names);

    let mut sink: Box<dyn ResultSink> = match cli.output.as_ref() {
        Some(path) if path.as_os_str() != "-" => {
            Box::new(FileSink::new(path.clone(), config.format))
        }
        _ => {
            let stdout = BufWriter::new(std::io::stdout().lock());
            match config.format {
                ExportFormat::Csv => Box::new(CsvSink::new(stdout)),
                ExportFormat::Json => Box::new(JsonSink::new(stdout)),
            }
        }
    };

    let summary = service.run_guarded(config, sink.as_mut())?;
    info!(
        "event=cli_run module=cli status=ok run_id={} headcount={} format={}",
        summary.run_id, summary.headcount, config.format
    );
    Ok(summary)
}
