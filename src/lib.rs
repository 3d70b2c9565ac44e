//! schedsim - Deterministic simulator for classic CPU-scheduling disciplines.
//!
//! This crate simulates a fixed, known-in-advance set of processes on a
//! single logical CPU under one of seven disciplines and reports
//! per-process timing metrics (completion, turnaround, waiting) plus the
//! full execution trace.
//!
//! # Architecture
//!
//! - **Workload**: validated, immutable process descriptors
//! - **Policies**: total-order ranking functions with deterministic tie-breaks
//! - **Engine**: per-run record arena, logical clock, and dispatch loops
//! - **Trace**: chronological run/idle segments with query helpers
//! - **Stats/Report**: summary figures and text rendering for collaborators
//!
//! # Usage
//!
//! ```rust
//! use schedsim::{simulate, Discipline, ProcessSpec, Workload};
//!
//! let workload = Workload::new(vec![
//!     ProcessSpec::new(1, 0, 5),
//!     ProcessSpec::new(2, 1, 3),
//! ])
//! .unwrap();
//!
//! let result = simulate(&workload, Discipline::Fcfs).unwrap();
//! assert_eq!(result.metrics[0].completion, 5);
//! assert_eq!(result.metrics[1].waiting, 4);
//! ```
//!
//! Every run builds its own record arena from the workload, so the same
//! workload can be fed to any number of disciplines without a reset step
//! and two runs can never observe each other's state.

mod engine;
mod error;
mod mlq;
mod policy;
mod process;
mod report;
mod single;
mod stats;
mod trace;
mod types;
mod workload;

pub use engine::{simulate, sort_by_arrival, Discipline, SimResult};
pub use error::SimError;
pub use mlq::SYSTEM_QUANTUM;
pub use process::{ProcessMetrics, ProcessSpec};
pub use report::{render_table, render_trace};
pub use stats::RunSummary;
pub use trace::{Segment, SegmentKind, Trace};
pub use types::{Pid, QueueClass, Tick};
pub use workload::{load_workload, Workload};
