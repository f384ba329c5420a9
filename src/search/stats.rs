//! Search statistics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters collected during one search.
///
/// `nodes_visited` is the quantity the node budget limits: one per node
/// popped from the stack, whether it is then pruned, recorded as a
/// solution, found dead, or expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Nodes popped from the stack.
    pub nodes_visited: u64,
    /// Visited nodes that were branched on.
    pub nodes_expanded: u64,
    /// Child nodes built (before forward checking and bounding).
    pub children_generated: u64,
    /// Nodes or children discarded because their bound reached the best cost.
    pub prunings_bound: u64,
    /// Children discarded by forward checking.
    pub prunings_forward: u64,
    /// Nodes whose selected block had no legal value.
    pub dead_ends: u64,
    /// Improving complete assignments found.
    pub solutions_found: u64,
    /// Deepest node visited (blocks placed).
    pub max_depth: u64,
    /// Wall-clock time of the search.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub(crate) fn on_node_visited(&mut self, depth: usize) {
        self.nodes_visited = self.nodes_visited.saturating_add(1);
        self.max_depth = self.max_depth.max(depth as u64);
    }

    #[inline]
    pub(crate) fn on_node_expanded(&mut self) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_child_generated(&mut self) {
        self.children_generated = self.children_generated.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_pruning_forward(&mut self) {
        self.prunings_forward = self.prunings_forward.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_dead_end(&mut self) {
        self.dead_ends = self.dead_ends.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub(crate) fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Timetable search statistics:")?;
        writeln!(f, "  Nodes visited:        {}", self.nodes_visited)?;
        writeln!(f, "  Nodes expanded:       {}", self.nodes_expanded)?;
        writeln!(f, "  Children generated:   {}", self.children_generated)?;
        writeln!(f, "  Prunings (bound):     {}", self.prunings_bound)?;
        writeln!(f, "  Prunings (forward):   {}", self.prunings_forward)?;
        writeln!(f, "  Dead ends:            {}", self.dead_ends)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
