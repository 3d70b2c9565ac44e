//! Error taxonomy for simulation runs.
//!
//! Invalid input is rejected before a run starts and never clamped.
//! Internal invariant violations (a stalled ready queue with work still
//! outstanding) are reported distinctly: given validated input they are
//! unreachable, and hitting one is a defect in the engine, not in the
//! caller's data. Nothing here is transient; there are no retries.

use std::fmt;

use crate::types::{Pid, Tick};

/// Errors surfaced by workload construction and simulation runs.
#[derive(Debug)]
pub enum SimError {
    /// The process set was empty.
    EmptyWorkload,
    /// A process declared a zero burst time.
    ZeroBurst { pid: Pid },
    /// Two processes shared the same pid.
    DuplicatePid { pid: Pid },
    /// Round-robin was requested with a zero quantum.
    ZeroQuantum,
    /// Workload JSON failed to parse.
    Json(serde_json::Error),
    /// Internal invariant violation: the ready queue drained while
    /// unfinished processes remain and no future arrival exists.
    ReadyQueueStalled { at: Tick },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::EmptyWorkload => write!(f, "workload contains no processes"),
            SimError::ZeroBurst { pid } => {
                write!(f, "process {pid} has a zero burst time (must be > 0)")
            }
            SimError::DuplicatePid { pid } => write!(f, "duplicate process id {pid}"),
            SimError::ZeroQuantum => write!(f, "round-robin quantum must be > 0"),
            SimError::Json(e) => write!(f, "workload JSON parse error: {e}"),
            SimError::ReadyQueueStalled { at } => write!(
                f,
                "internal invariant violation: ready queue stalled at tick {at} \
                 with unfinished processes"
            ),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Json(e)
    }
}
