//! Validated process sets and the JSON workload loader.
//!
//! A [`Workload`] is the only way to hand processes to the engine, and
//! constructing one performs all input validation up front: the engine
//! itself never sees an empty set, a zero burst, or a duplicate pid, and
//! it never clamps anything. The JSON format mirrors the process fields:
//!
//! ```json
//! {
//!   "processes": [
//!     { "pid": 1, "arrival": 0, "burst": 5 },
//!     { "pid": 2, "arrival": 1, "burst": 3, "priority": 2, "class": "interactive" }
//!   ]
//! }
//! ```
//!
//! `priority` defaults to 0 and `class` to `"batch"` when omitted.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::error::SimError;
use crate::process::ProcessSpec;

/// A non-empty, validated, immutable set of process descriptors.
#[derive(Debug, Clone)]
pub struct Workload {
    processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Validate and wrap a process set.
    ///
    /// Rejects empty sets, zero burst times, and duplicate pids. Arrival
    /// times need no check: the tick type is unsigned.
    pub fn new(processes: Vec<ProcessSpec>) -> Result<Self, SimError> {
        if processes.is_empty() {
            return Err(SimError::EmptyWorkload);
        }
        let mut seen = HashSet::new();
        for spec in &processes {
            if spec.burst == 0 {
                return Err(SimError::ZeroBurst { pid: spec.pid });
            }
            if !seen.insert(spec.pid) {
                return Err(SimError::DuplicatePid { pid: spec.pid });
            }
        }
        debug!(count = processes.len(), "workload validated");
        Ok(Workload { processes })
    }

    /// The process descriptors, in the order they were supplied.
    pub fn processes(&self) -> &[ProcessSpec] {
        &self.processes
    }

    /// Number of processes in the set.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always false: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

#[derive(Deserialize)]
struct WorkloadFile {
    processes: Vec<ProcessSpec>,
}

/// Parse a workload from its JSON representation and validate it.
pub fn load_workload(json: &str) -> Result<Workload, SimError> {
    let file: WorkloadFile = serde_json::from_str(json)?;
    Workload::new(file.processes)
}
