//! Solver configuration.
//!
//! All knobs that influence the search: node budget, tie-break seed,
//! balance weight, diagnostics cadence, optional daily load limits and
//! subject/day rules.
//! Only `progress_interval` is purely diagnostic; every other field can
//! change the result.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Default node-visit budget.
pub const DEFAULT_MAX_NODES: u64 = 1_000_000;

/// Search configuration.
///
/// # Example
/// ```
/// use u_timetable::config::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_nodes(50_000)
///     .with_seed(7)
///     .with_max_daily_blocks_per_class(4);
/// assert_eq!(config.max_nodes, 50_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum number of node visits (stack pops). Must be > 0.
    pub max_nodes: u64,
    /// Seed for the one-time shuffle of the initial block order.
    pub seed: u64,
    /// Scale of the balance cost. Must be finite and non-negative.
    pub balance_weight: f64,
    /// Log a progress line every this many visits. `None` = silent.
    pub progress_interval: Option<u64>,
    /// At most this many blocks per class per day.
    pub max_daily_blocks_per_class: Option<usize>,
    /// At most this many blocks of one subject per class per day.
    pub max_daily_blocks_per_subject: Option<usize>,
    /// Per-subject daily caps, keyed by subject name. An entry replaces
    /// `max_daily_blocks_per_subject` for that subject.
    pub subject_daily_caps: HashMap<String, usize>,
    /// A class may not have the same subject on two neighbouring days.
    pub forbid_adjacent_day_repeats: bool,
    /// Subjects whose blocks on one day must form a run of consecutive
    /// periods (double lessons).
    pub consecutive_subjects: HashSet<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            seed: 0,
            balance_weight: 1.0,
            progress_interval: None,
            max_daily_blocks_per_class: None,
            max_daily_blocks_per_subject: None,
            subject_daily_caps: HashMap::new(),
            forbid_adjacent_day_repeats: false,
            consecutive_subjects: HashSet::new(),
        }
    }
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node-visit budget.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Sets the tie-break seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the balance weight.
    pub fn with_balance_weight(mut self, weight: f64) -> Self {
        self.balance_weight = weight;
        self
    }

    /// Enables progress logging every `interval` visits.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    /// Caps the number of blocks a class has on one day.
    pub fn with_max_daily_blocks_per_class(mut self, limit: usize) -> Self {
        self.max_daily_blocks_per_class = Some(limit);
        self
    }

    /// Caps the number of blocks of one subject a class has on one day.
    pub fn with_max_daily_blocks_per_subject(mut self, limit: usize) -> Self {
        self.max_daily_blocks_per_subject = Some(limit);
        self
    }

    /// Caps one subject's daily blocks per class, overriding the uniform cap.
    pub fn with_subject_daily_cap(mut self, subject: impl Into<String>, limit: usize) -> Self {
        self.subject_daily_caps.insert(subject.into(), limit);
        self
    }

    /// Forbids the same class-subject on two neighbouring days.
    pub fn with_forbid_adjacent_day_repeats(mut self, forbid: bool) -> Self {
        self.forbid_adjacent_day_repeats = forbid;
        self
    }

    /// Requires same-day blocks of `subject` to sit in consecutive periods.
    pub fn with_consecutive_subject(mut self, subject: impl Into<String>) -> Self {
        self.consecutive_subjects.insert(subject.into());
        self
    }

    /// Daily cap in force for `subject`.
    pub fn subject_cap(&self, subject: &str) -> Option<usize> {
        self.subject_daily_caps
            .get(subject)
            .copied()
            .or(self.max_daily_blocks_per_subject)
    }
}
