use anyhow::Result;
use clap::{Parser, Subcommand};
use jugpath::core::Outcome;
use jugpath::feasibility::{self, Feasibility};
use jugpath::search::TerminalMarker;
use jugpath::solver::{SolveReport, SolverBuilder, SolverConfig};
use jugpath::validation::{RawRequest, SolveRequest};
use serde_json::json;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const INTERNAL_ERROR_MESSAGE: &str =
    "An internal error occurred while solving the water jug problem.";

/// Jugpath - shortest solutions to the two-jug problem
#[derive(Parser)]
#[command(name = "jugpath")]
#[command(about = "Find the fewest fill, empty and pour steps that measure a target volume")]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a query and print the steps
    Solve {
        #[command(flatten)]
        query: Query,

        /// Print the JSON report instead of a table
        #[arg(long)]
        json: bool,

        /// JSON solver configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Abort after discovering this many states
        #[arg(long)]
        max_states: Option<NonZeroUsize>,

        /// Mark the final target-bearing step as terminal instead of
        /// steps that return to (0, 0)
        #[arg(long)]
        mark_target: bool,
    },
    /// Only run the feasibility check
    Check {
        #[command(flatten)]
        query: Query,
    },
    /// Print a readiness line
    Health,
}

#[derive(clap::Args)]
struct Query {
    /// Capacity of jug X
    #[arg(allow_negative_numbers = true)]
    x: i64,
    /// Capacity of jug Y
    #[arg(allow_negative_numbers = true)]
    y: i64,
    /// Target volume
    #[arg(allow_negative_numbers = true)]
    target: i64,
}

impl Query {
    fn raw(&self) -> RawRequest {
        RawRequest {
            x_capacity: self.x,
            y_capacity: self.y,
            target: self.target,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = ?err, "error occurred while solving");
            eprintln!("{INTERNAL_ERROR_MESSAGE}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Solve {
            query,
            json,
            config,
            max_states,
            mark_target,
        } => {
            tracing::info!(
                x = query.x,
                y = query.y,
                target = query.target,
                "solving water jug problem"
            );
            let Some(request) = validated(&query) else {
                return Ok(ExitCode::FAILURE);
            };

            let mut config = match config {
                Some(path) => match SolverConfig::load(&path) {
                    Ok(config) => config,
                    Err(err) => return Ok(rejected(&err)),
                },
                None => SolverConfig::default(),
            };
            if let Some(limit) = max_states {
                config.max_states = Some(limit.get());
            }
            if mark_target {
                config.terminal_marker = TerminalMarker::TargetReached;
            }

            let solver = match SolverBuilder::new().config(config).build() {
                Ok(solver) => solver,
                Err(err) => return Ok(rejected(&err)),
            };
            let report = solver.report(&request)?;
            log_report(&report);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_outcome(&report.outcome);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { query } => {
            tracing::info!(
                x = query.x,
                y = query.y,
                target = query.target,
                "checking feasibility"
            );
            let Some(request) = validated(&query) else {
                return Ok(ExitCode::FAILURE);
            };
            match feasibility::check(request.capacities, request.target) {
                Feasibility::Feasible => println!("feasible"),
                Feasibility::Infeasible(reason) => println!("infeasible: {reason}"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => {
            println!("{}", json!({ "status": "ok", "service": "jugpath" }));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn validated(query: &Query) -> Option<SolveRequest> {
    match query.raw().into_request() {
        Ok(request) => Some(request),
        Err(violations) => {
            tracing::warn!(count = violations.len(), "request rejected");
            for violation in &violations {
                eprintln!("error: {violation}");
            }
            None
        }
    }
}

/// Report a caller-side configuration problem and fail.
fn rejected(err: &dyn std::error::Error) -> ExitCode {
    tracing::warn!(error = %err, "solver configuration rejected");
    eprintln!("error: {err}");
    ExitCode::FAILURE
}

fn log_report(report: &SolveReport) {
    match &report.outcome {
        Outcome::Feasible { steps } => {
            tracing::info!(id = %report.id, steps = steps.len(), "solution found")
        }
        Outcome::Infeasible { reason } => {
            tracing::info!(id = %report.id, %reason, "no solution")
        }
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Infeasible { reason } => println!("{reason}"),
        Outcome::Feasible { steps } => {
            println!("{:>4}  {:>5}  {:>5}  action", "step", "jug X", "jug Y");
            for step in steps {
                let marker = if step.terminal { "  [solved]" } else { "" };
                println!(
                    "{:>4}  {:>5}  {:>5}  {}{}",
                    step.step, step.jug_a, step.jug_b, step.action, marker
                );
            }
        }
    }
}
