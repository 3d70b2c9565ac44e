//! schedsim — run CPU-scheduling simulations over a JSON workload.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use schedsim::{
    load_workload, render_table, render_trace, simulate, Discipline, RunSummary, Tick, Workload,
};

/// Which discipline to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DisciplineArg {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Priority, non-preemptive.
    Priority,
    /// Round-Robin (see --quantum).
    Rr,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Priority, preemptive.
    PriorityPreemptive,
    /// Three-level multi-level queue.
    Mlq,
}

impl DisciplineArg {
    fn to_discipline(self, quantum: Tick) -> Discipline {
        match self {
            DisciplineArg::Fcfs => Discipline::Fcfs,
            DisciplineArg::Sjf => Discipline::SjfNonPreemptive,
            DisciplineArg::Priority => Discipline::PriorityNonPreemptive,
            DisciplineArg::Rr => Discipline::RoundRobin { quantum },
            DisciplineArg::Srtf => Discipline::Srtf,
            DisciplineArg::PriorityPreemptive => Discipline::PriorityPreemptive,
            DisciplineArg::Mlq => Discipline::MultiLevelQueue,
        }
    }

    fn all() -> [DisciplineArg; 7] {
        [
            DisciplineArg::Fcfs,
            DisciplineArg::Sjf,
            DisciplineArg::Priority,
            DisciplineArg::Rr,
            DisciplineArg::Srtf,
            DisciplineArg::PriorityPreemptive,
            DisciplineArg::Mlq,
        ]
    }
}

/// Run CPU-scheduling simulations over a JSON workload.
#[derive(Parser)]
#[command(name = "schedsim")]
struct Cli {
    /// Path to a workload JSON file.
    workload: PathBuf,

    /// Discipline to simulate.
    #[arg(short, long, value_enum, default_value_t = DisciplineArg::Fcfs)]
    discipline: DisciplineArg,

    /// Time quantum for round-robin.
    #[arg(short, long, default_value_t = 2)]
    quantum: Tick,

    /// Run every discipline over the same workload.
    #[arg(long, conflicts_with = "discipline")]
    all: bool,

    /// Print the execution order after the results table.
    #[arg(long)]
    dump_trace: bool,

    /// Print the run summary (means, makespan, utilization).
    #[arg(long)]
    summary: bool,
}

fn main() {
    let cli = Cli::parse();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let json = std::fs::read_to_string(&cli.workload)
        .with_context(|| format!("failed to read {}", cli.workload.display()))?;
    let workload = load_workload(&json)
        .with_context(|| format!("failed to load {}", cli.workload.display()))?;

    if cli.all {
        for arg in DisciplineArg::all() {
            run_one(cli, &workload, arg)?;
        }
    } else {
        run_one(cli, &workload, cli.discipline)?;
    }
    Ok(())
}

fn run_one(cli: &Cli, workload: &Workload, arg: DisciplineArg) -> Result<()> {
    let discipline = arg.to_discipline(cli.quantum);
    let result = simulate(workload, discipline)
        .with_context(|| format!("{} simulation failed", discipline.label()))?;

    print!("{}", render_table(&result));
    if cli.dump_trace {
        print!("{}", render_trace(&result));
    }
    if cli.summary {
        println!("{}", RunSummary::from_result(&result));
    }
    println!();
    Ok(())
}
