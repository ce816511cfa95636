use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use vecforge::config::{OutputFormat, SimConfig};
use vecforge::kernels::{
    abs_serial, abs_vector, abs_vector_parallel, array_sum_serial, array_sum_vector,
    clamped_exp_serial, clamped_exp_vector,
};
use vecforge::logging::init_logging_default;
use vecforge::profiling::{ExecutionLogger, SharedLogger, StatsReport};
use vecforge::workload::{verify_close, Workload};
use vecforge::VectorUnit;

/// Tolerance when comparing vector results against the scalar reference
const EPSILON: f32 = 1e-5;

#[derive(Parser, Debug)]
#[command(name = "vecforge-cli", version)]
#[command(about = "Run kernels on the simulated vector unit and report lane utilization", long_about = None)]
struct Cli {
    /// Number of workload elements
    #[arg(short = 's', long, default_value_t = 16, allow_negative_numbers = true)]
    size: i64,

    /// Print the per-instruction lane occupancy log
    #[arg(short = 'l', long)]
    log: bool,

    /// Seed for the random workload
    #[arg(long)]
    seed: Option<u64>,

    /// Emit reports as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Clamped power x^y (the default)
    Exp,
    /// Absolute value
    Abs {
        /// Split the work across rayon workers sharing one logger
        #[arg(long)]
        parallel: bool,
    },
    /// Array sum with the butterfly reduction
    Sum,
    /// Every kernel in turn
    All,
}

#[derive(Debug, Serialize)]
struct KernelReport {
    kernel: &'static str,
    verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    mismatch: Option<String>,
    stats: StatsReport,
}

fn main() -> anyhow::Result<()> {
    init_logging_default();
    let cli = Cli::parse();

    let mut config = SimConfig::new()
        .with_workload_size(cli.size)
        .with_print_log(cli.log);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.json {
        config = config.with_output_format(OutputFormat::Json);
    }

    config.validate().context("invalid run configuration")?;
    let n = config.workload_len()?;
    let workload = Workload::generate(n, config.seed);
    info!(n, seed = ?config.seed, "workload ready");

    let command = cli.command.unwrap_or(Commands::Exp);
    let mut reports = Vec::new();
    if matches!(command, Commands::Exp | Commands::All) {
        reports.push(run_exp(&config, &workload)?);
    }
    if let Commands::Abs { parallel } = command {
        reports.push(run_abs(&config, &workload, parallel)?);
    }
    if command == Commands::All {
        reports.push(run_abs(&config, &workload, false)?);
    }
    if matches!(command, Commands::Sum | Commands::All) {
        reports.push(run_sum(&config, &workload)?);
    }

    if config.output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if reports.iter().any(|r| !r.verified) {
        anyhow::bail!("vector results did not match the serial reference");
    }
    Ok(())
}

fn run_exp(config: &SimConfig, workload: &Workload) -> anyhow::Result<KernelReport> {
    let n = workload.len();
    let mut expected = vec![0.0f32; n];
    let mut actual = vec![0.0f32; n];

    clamped_exp_serial(&workload.values, &workload.exponents, &mut expected)?;
    let mut unit = VectorUnit::new();
    clamped_exp_vector(&mut unit, &workload.values, &workload.exponents, &mut actual)?;

    if config.output_format == OutputFormat::Text {
        println!("\x1b[1;31mCLAMPED EXPONENT\x1b[0m (required)");
        print_values("Values", &workload.values);
        print_values("Exponents", &workload.exponents);
        print_values("Serial", &expected);
        print_values("Vector", &actual);
    }
    Ok(finish("clamped_exp", config, unit.into_sink(), verify_close(&expected, &actual, EPSILON)))
}

fn run_abs(config: &SimConfig, workload: &Workload, parallel: bool) -> anyhow::Result<KernelReport> {
    let n = workload.len();
    let mut expected = vec![0.0f32; n];
    let mut actual = vec![0.0f32; n];
    abs_serial(&workload.values, &mut expected)?;

    let logger = if parallel {
        let shared = SharedLogger::new();
        abs_vector_parallel(&shared, &workload.values, &mut actual)?;
        shared.take()?
    } else {
        let mut unit = VectorUnit::new();
        abs_vector(&mut unit, &workload.values, &mut actual)?;
        unit.into_sink()
    };

    if config.output_format == OutputFormat::Text {
        println!("\x1b[1;31mABSOLUTE VALUE\x1b[0m");
        print_values("Values", &workload.values);
        print_values("Vector", &actual);
    }
    // abs is exact; any difference is a mismatch
    Ok(finish("abs", config, logger, verify_close(&expected, &actual, 0.0)))
}

fn run_sum(config: &SimConfig, workload: &Workload) -> anyhow::Result<KernelReport> {
    let expected = array_sum_serial(&workload.values);
    let mut unit = VectorUnit::new();
    let actual = array_sum_vector(&mut unit, &workload.values)?;

    if config.output_format == OutputFormat::Text {
        println!("\x1b[1;31mARRAY SUM\x1b[0m");
        println!("Serial: {:.6}  Vector: {:.6}", expected, actual);
    }
    // Summation order differs from the serial loop
    let epsilon = EPSILON * workload.len().max(1) as f32 * expected.abs().max(1.0);
    Ok(finish("array_sum", config, unit.into_sink(), verify_close(&[expected], &[actual], epsilon)))
}

fn finish(
    kernel: &'static str,
    config: &SimConfig,
    logger: ExecutionLogger,
    verification: vecforge::ForgeResult<()>,
) -> KernelReport {
    let mismatch = verification.err().map(|e| {
        error!(kernel, error = %e, "verification failed");
        e.to_string()
    });
    let stats = logger.report_stats();

    if config.output_format == OutputFormat::Text {
        match &mismatch {
            None => println!("Results matched with answer!"),
            Some(e) => println!("@@@ Failed!!! ({})", e),
        }
        if config.print_log {
            print!("{}", logger.report_log());
        }
        println!("{}", stats);
        println!();
    }

    KernelReport {
        kernel,
        verified: mismatch.is_none(),
        mismatch,
        stats,
    }
}

fn print_values<T: std::fmt::Display>(label: &str, values: &[T]) {
    let row: Vec<String> = values.iter().map(|v| format!("{:.4}", v)).collect();
    println!("{:>10}: {}", label, row.join(" "));
}
