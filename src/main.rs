//! Command-line driver for the taskheap scheduler and sorting benchmarks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use thiserror::Error;

use taskheap::benchmark::{run_benchmarks, Distribution};
use taskheap::{Scheduler, SchedulerConfig, Task};

#[derive(Parser)]
#[command(name = "taskheap", version, about = "Max-heap task scheduling demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Insert tasks into the priority queue and print the execution order.
    Schedule {
        /// Task spec `id[:priority[:deadline]]`, repeatable. Defaults to the
        /// built-in demo set when omitted.
        #[arg(long = "task", value_name = "SPEC")]
        tasks: Vec<String>,
        /// Increase logging verbosity (repeat for more detail).
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },
    /// Benchmark the sorting routines.
    Bench {
        /// Input size, repeatable.
        #[arg(long = "size", value_name = "N", default_values_t = [1_000usize, 10_000])]
        sizes: Vec<usize>,
        /// Timed runs per (algorithm, size) cell.
        #[arg(long, default_value_t = 5)]
        trials: usize,
        /// Input shape: random, sorted, reverse, or duplicates.
        #[arg(long, default_value = "random")]
        dist: String,
        /// Seed for input generation.
        #[arg(long, default_value_t = 123)]
        seed: u64,
    },
}

/// Errors from parsing a `--task` spec.
#[derive(Error, Debug, PartialEq, Eq)]
enum SpecError {
    #[error("task spec has an empty id")]
    EmptyId,
    #[error("invalid priority {0:?} (expected an integer)")]
    InvalidPriority(String),
    #[error("invalid deadline {0:?} (expected YYYY-MM-DD)")]
    InvalidDeadline(String),
}

/// Parse `id[:priority[:deadline]]` into a task, falling back to
/// `default_priority` when the priority segment is omitted.
fn parse_task_spec(spec: &str, default_priority: i32) -> Result<Task, SpecError> {
    let mut parts = spec.splitn(3, ':');
    let id = match parts.next() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(SpecError::EmptyId),
    };

    let mut task = Task::new(id, default_priority);
    if let Some(raw) = parts.next() {
        task.priority = raw
            .parse()
            .map_err(|_| SpecError::InvalidPriority(raw.to_string()))?;
    }
    if let Some(raw) = parts.next() {
        let deadline = raw
            .parse()
            .map_err(|_| SpecError::InvalidDeadline(raw.to_string()))?;
        task = task.with_deadline(deadline);
    }
    Ok(task)
}

/// The built-in demo set: drains as priorities 10, 8, 5, 3 (ids 2, 4, 3, 1).
fn demo_tasks() -> Vec<Task> {
    vec![
        Task::new("1", 3),
        Task::new("2", 10),
        Task::new("3", 5),
        Task::new("4", 8),
    ]
}

fn run_schedule(specs: &[String], verbosity: u8) -> Result<()> {
    let config = SchedulerConfig {
        verbosity,
        ..SchedulerConfig::default()
    };
    let default_priority = config.default_priority;
    let mut scheduler = Scheduler::new(config);

    if specs.is_empty() {
        for task in demo_tasks() {
            scheduler.submit(task);
        }
    } else {
        for spec in specs {
            let task = parse_task_spec(spec, default_priority)
                .with_context(|| format!("invalid task spec {:?}", spec))?;
            scheduler.submit(task);
        }
    }

    println!("Task Execution Order (Highest Priority First):");
    for task in scheduler.run_to_completion() {
        println!("{task}");
    }
    Ok(())
}

fn run_bench(sizes: &[usize], trials: usize, dist: &str, seed: u64) -> Result<()> {
    let dist: Distribution = dist.parse().map_err(anyhow::Error::msg)?;
    let results = run_benchmarks(sizes, trials, dist, seed);

    println!(
        "{:<10} {:>10} {:>12} {:>14}",
        "algorithm", "size", "dist", "median"
    );
    for result in results {
        println!(
            "{:<10} {:>10} {:>12} {:>11.3?}",
            result.algorithm.name(),
            result.size,
            result.distribution.name(),
            result.median,
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Schedule {
        tasks: Vec::new(),
        verbose: 0,
    }) {
        Command::Schedule { tasks, verbose } => run_schedule(&tasks, verbose),
        Command::Bench {
            sizes,
            trials,
            dist,
            seed,
        } => run_bench(&sizes, trials, &dist, seed),
    }
}
