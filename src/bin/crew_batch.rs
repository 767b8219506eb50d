//! Batch tool: run many seeded constructions and compare report-die settings

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use house_crew::construction::{compare_batches, run_batch, BatchConfig, BuildParams};

#[derive(Parser, Debug)]
#[command(name = "crew_batch")]
#[command(about = "Collect turn statistics over many construction runs")]
struct Args {
    /// Number of runs per batch
    #[arg(short = 'n', long, default_value = "1000")]
    runs: u32,

    /// Seed of the first run; later runs add 1 each
    #[arg(short, long, default_value = "1337")]
    seed: u64,

    /// Report die sides for batch A
    #[arg(long, default_value = "3")]
    die_a: u32,

    /// Report die sides for batch B (skips the comparison if omitted)
    #[arg(long)]
    die_b: Option<u32>,
}

fn batch(name: String, sides: u32, args: &Args) -> BatchConfig {
    let mut params = BuildParams::default();
    params.report_die_sides = sides;
    BatchConfig {
        name,
        params,
        num_runs: args.runs,
        base_seed: args.seed,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("=== Construction Batch ===");
    println!("Runs: {}, base seed: {}", args.runs, args.seed);
    println!();

    let a = match run_batch(&batch(format!("d{}", args.die_a), args.die_a, &args)) {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    print!("{}", a.report());

    if let Some(die_b) = args.die_b {
        let b = match run_batch(&batch(format!("d{}", die_b), die_b, &args)) {
            Ok(results) => results,
            Err(e) => {
                tracing::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };
        print!("{}", b.report());
        println!();
        print!("{}", compare_batches(&a, &b));
    }

    ExitCode::SUCCESS
}
