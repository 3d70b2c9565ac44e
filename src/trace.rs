//! Execution trace recording for the simulator.
//!
//! Every dispatch is recorded as a half-open `[start, end)` segment on the
//! single simulated CPU, either a run of one process or an idle period.
//! Segments are dispatch-granular: a round-robin process granted two
//! back-to-back quanta shows up as two segments, while the unit-step
//! preemptive disciplines coalesce consecutive ticks of the same process
//! into one segment before recording. The query helpers below are what the
//! integration tests assert the behavioral properties against.

use tracing::debug;

use crate::types::{Pid, Tick};

/// One contiguous occupancy of the CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// First tick of the segment (inclusive).
    pub start: Tick,
    /// End of the segment (exclusive).
    pub end: Tick,
    pub kind: SegmentKind,
}

impl Segment {
    /// Length of the segment in ticks.
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// What the CPU was doing during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A process held the CPU for the whole segment.
    Run { pid: Pid },
    /// No arrived, unfinished process existed; the clock skipped forward.
    Idle,
}

/// A complete run trace: all segments in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    segments: Vec<Segment>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Trace::default()
    }

    /// Record one dispatch of `pid` over `[start, end)`.
    pub(crate) fn record_run(&mut self, pid: Pid, start: Tick, end: Tick) {
        debug_assert!(start < end, "empty run segment for {pid}");
        debug!(%pid, start, end, "run");
        self.segments.push(Segment {
            start,
            end,
            kind: SegmentKind::Run { pid },
        });
    }

    /// Record an idle period over `[start, end)`. Adjacent idle periods
    /// are merged, so the unit-step disciplines produce one segment per
    /// gap rather than one per tick.
    pub(crate) fn record_idle(&mut self, start: Tick, end: Tick) {
        debug_assert!(start < end, "empty idle segment");
        if let Some(last) = self.segments.last_mut() {
            if last.kind == SegmentKind::Idle && last.end == start {
                last.end = end;
                return;
            }
        }
        debug!(start, end, "idle");
        self.segments.push(Segment {
            start,
            end,
            kind: SegmentKind::Idle,
        });
    }

    /// All segments in chronological order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The `[start, end)` run segments of one process, in order.
    pub fn slices_of(&self, pid: Pid) -> Vec<(Tick, Tick)> {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Run { pid })
            .map(|s| (s.start, s.end))
            .collect()
    }

    /// Number of separate dispatches of one process.
    pub fn dispatch_count(&self, pid: Pid) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Run { pid })
            .count()
    }

    /// Total ticks the CPU spent running processes.
    pub fn busy_time(&self) -> Tick {
        self.segments
            .iter()
            .filter(|s| matches!(s.kind, SegmentKind::Run { .. }))
            .map(Segment::len)
            .sum()
    }

    /// Total ticks the CPU spent idle.
    pub fn idle_time(&self) -> Tick {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Idle)
            .map(Segment::len)
            .sum()
    }

    /// The tick at which the last segment ends (0 for an empty trace).
    pub fn makespan(&self) -> Tick {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Which process (if any) held the CPU at tick `t`.
    pub fn running_at(&self, t: Tick) -> Option<Pid> {
        self.segments.iter().find_map(|s| match s.kind {
            SegmentKind::Run { pid } if s.start <= t && t < s.end => Some(pid),
            _ => None,
        })
    }

    /// Longest stretch of back-to-back ticks a process held the CPU,
    /// coalescing adjacent segments of the same pid.
    pub fn longest_contiguous_run(&self, pid: Pid) -> Tick {
        let mut longest = 0;
        let mut current: Option<(Tick, Tick)> = None;
        for s in &self.segments {
            match (s.kind, current) {
                (SegmentKind::Run { pid: p }, Some((start, end))) if p == pid && end == s.start => {
                    current = Some((start, s.end));
                }
                (SegmentKind::Run { pid: p }, _) if p == pid => {
                    if let Some((start, end)) = current {
                        longest = longest.max(end - start);
                    }
                    current = Some((s.start, s.end));
                }
                _ => {
                    if let Some((start, end)) = current {
                        longest = longest.max(end - start);
                    }
                    current = None;
                }
            }
        }
        if let Some((start, end)) = current {
            longest = longest.max(end - start);
        }
        longest
    }
}
