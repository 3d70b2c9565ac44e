//! Text rendering of run results.
//!
//! The reporting side of the contract: it consumes only the per-process
//! metrics, the trace, and the discipline label, and never feeds anything
//! back into the engine.

use std::fmt::Write;

use crate::engine::SimResult;
use crate::stats::RunSummary;
use crate::trace::SegmentKind;

const RULE: &str = "------------------------------------------------------------";

/// Render the per-process results table with averages, in the classic
/// PID / AT / BT / CT / TAT / WT layout.
pub fn render_table(result: &SimResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} scheduling results:", result.discipline);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{:<6} {:>7} {:>6} {:>6} {:>6} {:>6}",
        "PID", "ARRIVE", "BURST", "DONE", "TAT", "WAIT"
    );
    for m in &result.metrics {
        let _ = writeln!(
            out,
            "{:<6} {:>7} {:>6} {:>6} {:>6} {:>6}",
            m.pid.to_string(),
            m.arrival,
            m.burst,
            m.completion,
            m.turnaround,
            m.waiting
        );
    }
    let _ = writeln!(out, "{RULE}");
    let summary = RunSummary::from_result(result);
    let _ = writeln!(out, "average turnaround: {:.2}", summary.mean_turnaround);
    let _ = writeln!(out, "average waiting:    {:.2}", summary.mean_waiting);
    out
}

/// Render the execution trace as one line per segment.
pub fn render_trace(result: &SimResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} execution order:", result.discipline);
    for s in result.trace.segments() {
        match s.kind {
            SegmentKind::Run { pid } => {
                let _ = writeln!(out, "  [{:>4}, {:>4})  {pid}", s.start, s.end);
            }
            SegmentKind::Idle => {
                let _ = writeln!(out, "  [{:>4}, {:>4})  idle", s.start, s.end);
            }
        }
    }
    out
}
