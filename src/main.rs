use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing_subscriber::EnvFilter;

use house_crew::construction::{run_construction, BuildLog, BuildParams, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "house_crew")]
#[command(about = "Simulate a construction crew building a house")]
struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with crew and turn settings
    #[arg(short, long)]
    config: Option<String>,

    /// Worker name, in rotation order (repeat for each worker)
    #[arg(short, long = "worker")]
    workers: Vec<String>,

    /// Leader name
    #[arg(short, long)]
    leader: Option<String>,

    /// Sides on the report die; the leader reports when it lands on zero
    #[arg(long)]
    report_die: Option<u32>,

    /// Give up after this many turns
    #[arg(long)]
    max_turns: Option<u64>,

    /// Exit without waiting for a key press
    #[arg(long)]
    no_wait: bool,

    /// Print turn statistics after the house is done
    #[arg(long)]
    summary: bool,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    fn build_params(&self) -> Result<BuildParams, ConfigError> {
        let mut params = match &self.config {
            Some(path) => BuildParams::from_json_file(path)?,
            None => BuildParams::default(),
        };

        if !self.workers.is_empty() {
            params.worker_names = self.workers.clone();
        }
        if let Some(leader) = &self.leader {
            params.leader_name = leader.clone();
        }
        if let Some(sides) = self.report_die {
            params.report_die_sides = sides;
        }
        if self.max_turns.is_some() {
            params.max_turns = self.max_turns;
        }

        params.validate()?;
        Ok(params)
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

    let params = match args.build_params() {
        Ok(params) => params,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "seed selected");

    let mut log = BuildLog::echoing();
    let finished = match run_construction(&params, seed, &mut log) {
        Ok(finished) => finished,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.summary {
        let summary = &finished.summary;
        println!();
        println!("Seed: {}", seed);
        println!(
            "Turns: {} ({} worker, {} leader)",
            summary.turns, summary.worker_turns, summary.leader_turns
        );
        for (kind, name) in &summary.built_by {
            println!("  {:<12} {}", kind.to_string(), name);
        }
    }

    if !args.no_wait {
        if let Err(e) = wait_for_key() {
            tracing::error!("Failed to read key press: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Block until any key is pressed
fn wait_for_key() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(event) if is_key_press(&event) => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    result
}

/// Key releases and repeats are reported separately on some terminals
fn is_key_press(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press)
}
