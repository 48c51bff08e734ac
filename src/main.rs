//! Instrumented sorting driver
//!
//! Runs the step-by-step sorting algorithms from the command line:
//! - `run <algorithm>`: one paced run, frames logged at trace level
//! - `compare`: all four algorithms headless on the same input
//! - `restart <first> <second>`: start one run, then replace it with another

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use instrumented_sorting::algorithm::{is_permutation, is_sorted};
use instrumented_sorting::controller::{
    default_value_range, DEFAULT_SIZE, RunConfig, RunController, RunOutcome,
};
use instrumented_sorting::report::{RunSummary, SummaryReport};
use instrumented_sorting::sink::{NullSink, TracingRenderer};
use instrumented_sorting::{logging, Algorithm};

#[derive(Parser)]
#[command(name = "sortvis", version, about = "Step-by-step sorting algorithm runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one algorithm (selection, heap, quick, merge) on a fresh random input.
    Run {
        algorithm: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Run every algorithm headless on the same input and print a summary.
    Compare {
        #[command(flatten)]
        input: InputArgs,
        /// Print the summary as a markdown table.
        #[arg(long)]
        markdown: bool,
    },
    /// Start `first`, then start `second` after a pause, cancelling `first`.
    Restart {
        first: String,
        second: String,
        /// How long the first run gets before it is replaced.
        #[arg(long, default_value_t = 200)]
        after_ms: u64,
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Pause after every step, in milliseconds.
    #[arg(long, default_value_t = 20)]
    delay_ms: u64,
    /// Number of elements to sort.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,
    /// Smallest value that may be generated.
    #[arg(long, default_value_t = 0.0)]
    min: f64,
    /// Upper bound (exclusive) for generated values [default: twice the size].
    #[arg(long)]
    max: Option<f64>,
    /// Seed for reproducible inputs.
    #[arg(long)]
    seed: Option<u64>,
}

impl InputArgs {
    fn config(&self) -> RunConfig {
        let value_range = match self.max {
            Some(max) => self.min..max,
            None => self.min..default_value_range(self.size).end,
        };
        RunConfig {
            step_delay: Duration::from_millis(self.delay_ms),
            size: self.size,
            value_range,
            seed: self.seed,
        }
    }
}

#[tokio::main]
async fn main() {
    logging::init();
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { algorithm, input } => cmd_run(&algorithm, &input).await,
        Command::Compare { input, markdown } => cmd_compare(&input, markdown).await,
        Command::Restart {
            first,
            second,
            after_ms,
            input,
        } => cmd_restart(&first, &second, Duration::from_millis(after_ms), &input).await,
    }
}

async fn cmd_run(algorithm: &str, input: &InputArgs) -> Result<()> {
    let controller = RunController::new(input.config())?;
    let mut renderer = TracingRenderer::new();

    let start = Instant::now();
    let outcome = controller.run(algorithm, &mut renderer).await?;
    print_outcome(algorithm, &outcome, start.elapsed());
    Ok(())
}

async fn cmd_compare(input: &InputArgs, markdown: bool) -> Result<()> {
    let config = input.config();
    let controller = RunController::new(config.clone())?;
    let original = controller.generate_input();

    let mut report = SummaryReport::new(&format!(
        "{} elements in {}..{}",
        original.len(),
        config.value_range.start,
        config.value_range.end
    ));

    for algorithm in Algorithm::ALL {
        let mut data = original.clone();
        let stats = algorithm.sort(&mut data, &mut NullSink).await?;
        report.add_result(RunSummary {
            algorithm: algorithm.name().to_string(),
            size: original.len(),
            mutations: stats.mutations,
            steps: stats.steps,
            verified: is_sorted(&data) && is_permutation(&original, &data),
        });
    }

    if markdown {
        print!("{}", report.to_markdown_table());
    } else {
        println!("Instrumented sorting comparison");
        println!("===============================\n");
        print!("{}", report.to_table());
    }
    Ok(())
}

async fn cmd_restart(
    first: &str,
    second: &str,
    after: Duration,
    input: &InputArgs,
) -> Result<()> {
    let controller = Arc::new(RunController::new(input.config())?);

    let first_run = {
        let controller = Arc::clone(&controller);
        let name = first.to_string();
        tokio::spawn(async move {
            let mut renderer = TracingRenderer::new();
            let start = Instant::now();
            let outcome = controller.run(&name, &mut renderer).await;
            (outcome, start.elapsed())
        })
    };

    tokio::time::sleep(after).await;

    let mut renderer = TracingRenderer::new();
    let start = Instant::now();
    let second_outcome = controller.run(second, &mut renderer).await?;

    let (first_outcome, first_elapsed) = first_run.await.context("first run panicked")?;
    print_outcome(first, &first_outcome?, first_elapsed);
    print_outcome(second, &second_outcome, start.elapsed());
    Ok(())
}

fn print_outcome(algorithm: &str, outcome: &RunOutcome, elapsed: Duration) {
    match outcome {
        RunOutcome::Completed(report) => {
            println!(
                "{}: {} elements, {} mutations, {} steps in {:.3} s",
                algorithm,
                report.len,
                report.mutations,
                report.steps,
                elapsed.as_secs_f64()
            );
        }
        RunOutcome::Cancelled => {
            println!("{}: cancelled after {:.3} s", algorithm, elapsed.as_secs_f64());
        }
    }
}
