//! Aggregate statistics for a completed run.
//!
//! The engine reports raw per-process metrics; this module condenses them
//! into the summary figures the reporting side cares about: mean
//! turnaround, mean waiting time, makespan, and CPU utilization.

use std::fmt;

use crate::engine::SimResult;
use crate::types::Tick;

/// Summary figures computed from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Label of the discipline that produced the run.
    pub discipline: &'static str,
    /// Number of processes in the run.
    pub count: usize,
    /// Mean of `turnaround` over all processes.
    pub mean_turnaround: f64,
    /// Mean of `waiting` over all processes.
    pub mean_waiting: f64,
    /// Tick at which the last process completed.
    pub makespan: Tick,
    /// Ticks the CPU spent executing processes (equals the burst sum).
    pub busy: Tick,
    /// Ticks the CPU spent idle waiting for arrivals.
    pub idle: Tick,
}

impl RunSummary {
    pub fn from_result(result: &SimResult) -> Self {
        let count = result.metrics.len();
        let total_turnaround: Tick = result.metrics.iter().map(|m| m.turnaround).sum();
        let total_waiting: Tick = result.metrics.iter().map(|m| m.waiting).sum();
        RunSummary {
            discipline: result.discipline,
            count,
            mean_turnaround: total_turnaround as f64 / count as f64,
            mean_waiting: total_waiting as f64 / count as f64,
            makespan: result.trace.makespan(),
            busy: result.trace.busy_time(),
            idle: result.trace.idle_time(),
        }
    }

    /// Fraction of the makespan the CPU spent busy, as a percentage.
    pub fn utilization(&self) -> f64 {
        if self.makespan == 0 {
            0.0
        } else {
            100.0 * self.busy as f64 / self.makespan as f64
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} summary:", self.discipline)?;
        writeln!(f, "  processes:        {}", self.count)?;
        writeln!(f, "  mean turnaround:  {:.2}", self.mean_turnaround)?;
        writeln!(f, "  mean waiting:     {:.2}", self.mean_waiting)?;
        writeln!(f, "  makespan:         {}", self.makespan)?;
        writeln!(f, "  busy / idle:      {} / {}", self.busy, self.idle)?;
        write!(f, "  utilization:      {:.1}%", self.utilization())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{simulate, Discipline};
    use crate::process::ProcessSpec;
    use crate::workload::Workload;

    #[test]
    fn fcfs_summary_matches_hand_computation() {
        let workload = Workload::new(vec![
            ProcessSpec::new(1, 0, 5),
            ProcessSpec::new(2, 1, 3),
            ProcessSpec::new(3, 2, 8),
        ])
        .unwrap();
        let result = simulate(&workload, Discipline::Fcfs).unwrap();
        let summary = RunSummary::from_result(&result);

        // Completions 5, 8, 16; turnarounds 5, 7, 14; waits 0, 4, 6.
        assert_eq!(summary.count, 3);
        assert!((summary.mean_turnaround - 26.0 / 3.0).abs() < 1e-9);
        assert!((summary.mean_waiting - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.makespan, 16);
        assert_eq!(summary.busy, 16);
        assert_eq!(summary.idle, 0);
        assert!((summary.utilization() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn idle_time_shows_up_in_utilization() {
        let workload = Workload::new(vec![ProcessSpec::new(1, 8, 2)]).unwrap();
        let result = simulate(&workload, Discipline::Fcfs).unwrap();
        let summary = RunSummary::from_result(&result);
        assert_eq!(summary.idle, 8);
        assert_eq!(summary.busy, 2);
        assert_eq!(summary.makespan, 10);
        assert!((summary.utilization() - 20.0).abs() < 1e-9);
    }
}
