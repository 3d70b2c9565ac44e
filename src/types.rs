//! Newtype wrappers and type aliases for domain concepts.
//!
//! Newtypes for identifiers prevent silent type confusion. Type aliases
//! for plain quantities (ticks) provide self-documenting code without the
//! boilerplate of implementing arithmetic traits.

use std::fmt;

use serde::Deserialize;

/// Process identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
pub struct Pid(pub u32);

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Simulated time in integer ticks.
///
/// The clock is a logical counter advanced only by the dispatch rules;
/// it never tracks wall-clock time. Being unsigned, negative arrival
/// times are unrepresentable.
pub type Tick = u64;

/// The fixed queue class a process belongs to. Only the multi-level
/// queue discipline looks at this; every other discipline ignores it.
///
/// Classes are strictly ordered: `System` is always serviced before
/// `Interactive`, which is always serviced before `Batch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueClass {
    /// Serviced first, round-robin with a fixed quantum.
    System,
    /// Serviced second, highest-priority-first, run-to-completion.
    Interactive,
    /// Serviced last, FCFS run-to-completion.
    #[default]
    Batch,
}

impl fmt::Display for QueueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueClass::System => f.write_str("system"),
            QueueClass::Interactive => f.write_str("interactive"),
            QueueClass::Batch => f.write_str("batch"),
        }
    }
}
