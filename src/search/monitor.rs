//! Search monitors.
//!
//! A monitor observes the search loop and may stop it. The engine asks
//! [`SearchMonitor::search_command`] once per loop iteration, before popping
//! the next node, so a stop request takes effect within one node visit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::stats::SearchStatistics;

/// Instruction returned by a monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    Continue,
    /// Stop with the given reason.
    Stop(String),
}

/// Observer of a timetable search.
///
/// Every hook except [`name`](SearchMonitor::name) has an empty default.
pub trait SearchMonitor: Send {
    fn name(&self) -> &str;

    /// Called once before the first node is visited.
    fn on_enter_search(&mut self, _num_blocks: usize) {}

    /// Called after a node is popped and counted.
    fn on_visit(&mut self, _depth: usize, _stats: &SearchStatistics) {}

    /// Called when a complete assignment improves the incumbent.
    fn on_solution(&mut self, _cost: f64, _stats: &SearchStatistics) {}

    /// Called once after the loop ends, with final statistics.
    fn on_exit_search(&mut self, _stats: &SearchStatistics) {}

    fn search_command(&self, _stats: &SearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}

/// Monitor that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }
}

/// Logs a progress line at `info` every `interval` visits.
#[derive(Debug, Clone)]
pub struct ProgressMonitor {
    interval: u64,
    best: Option<f64>,
}

impl ProgressMonitor {
    /// An `interval` of zero is treated as one.
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            best: None,
        }
    }

    /// Best cost reported so far.
    pub fn best(&self) -> Option<f64> {
        self.best
    }
}

impl SearchMonitor for ProgressMonitor {
    fn name(&self) -> &str {
        "ProgressMonitor"
    }

    fn on_visit(&mut self, depth: usize, stats: &SearchStatistics) {
        if stats.nodes_visited % self.interval == 0 {
            log::info!(
                "visited {} nodes, depth {}, best {}, prunes {}/{}, dead ends {}",
                stats.nodes_visited,
                depth,
                self.best
                    .map_or_else(|| "none".to_string(), |c| format!("{c:.3}")),
                stats.prunings_bound,
                stats.prunings_forward,
                stats.dead_ends,
            );
        }
    }

    fn on_solution(&mut self, cost: f64, _stats: &SearchStatistics) {
        self.best = Some(cost);
    }
}

/// Stops the search once a shared flag is raised.
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use u_timetable::search::{InterruptMonitor, SearchCommand, SearchMonitor, SearchStatistics};
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let monitor = InterruptMonitor::new(Arc::clone(&flag));
/// flag.store(true, Ordering::Relaxed);
/// assert!(matches!(
///     monitor.search_command(&SearchStatistics::default()),
///     SearchCommand::Stop(_)
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct InterruptMonitor {
    flag: Arc<AtomicBool>,
}

impl InterruptMonitor {
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl SearchMonitor for InterruptMonitor {
    fn name(&self) -> &str {
        "InterruptMonitor"
    }

    fn search_command(&self, _stats: &SearchStatistics) -> SearchCommand {
        if self.flag.load(Ordering::Relaxed) {
            SearchCommand::Stop("interrupt signal received".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}

/// Fans every hook out to a list of monitors.
///
/// `search_command` returns the first stop request in insertion order.
#[derive(Default)]
pub struct CompositeMonitor {
    monitors: Vec<Box<dyn SearchMonitor>>,
}

impl CompositeMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_monitor<M: SearchMonitor + 'static>(mut self, monitor: M) -> Self {
        self.monitors.push(Box::new(monitor));
        self
    }

    pub fn add_monitor<M: SearchMonitor + 'static>(&mut self, monitor: M) {
        self.monitors.push(Box::new(monitor));
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl SearchMonitor for CompositeMonitor {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, num_blocks: usize) {
        for m in &mut self.monitors {
            m.on_enter_search(num_blocks);
        }
    }

    fn on_visit(&mut self, depth: usize, stats: &SearchStatistics) {
        for m in &mut self.monitors {
            m.on_visit(depth, stats);
        }
    }

    fn on_solution(&mut self, cost: f64, stats: &SearchStatistics) {
        for m in &mut self.monitors {
            m.on_solution(cost, stats);
        }
    }

    fn on_exit_search(&mut self, stats: &SearchStatistics) {
        for m in &mut self.monitors {
            m.on_exit_search(stats);
        }
    }

    fn search_command(&self, stats: &SearchStatistics) -> SearchCommand {
        self.monitors
            .iter()
            .map(|m| m.search_command(stats))
            .find(|c| matches!(c, SearchCommand::Stop(_)))
            .unwrap_or(SearchCommand::Continue)
    }
}

impl std::fmt::Debug for CompositeMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.monitors.iter().map(|m| m.name()).collect();
        f.debug_struct("CompositeMonitor")
            .field("monitors", &names)
            .finish()
    }
}
