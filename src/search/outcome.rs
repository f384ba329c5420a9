//! Search outcome types.

use serde::{Deserialize, Serialize};

use super::stats::SearchStatistics;
use crate::models::Timetable;

/// What the search produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchResult {
    /// Best assignment, with the whole tree explored.
    Optimal(Timetable),
    /// Best assignment found before the search was cut short.
    Feasible(Timetable),
    /// The whole tree was explored and no assignment exists.
    Infeasible,
    /// Cut short before any assignment was found.
    Unknown,
}

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Stack exhausted with an incumbent.
    OptimalityProven,
    /// Stack exhausted without an incumbent.
    InfeasibilityProven,
    /// `max_nodes` visits spent.
    NodeBudgetExhausted,
    /// A monitor asked to stop.
    Interrupted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "optimality proven"),
            TerminationReason::InfeasibilityProven => write!(f, "infeasibility proven"),
            TerminationReason::NodeBudgetExhausted => write!(f, "node budget exhausted"),
            TerminationReason::Interrupted(reason) => write!(f, "interrupted: {reason}"),
        }
    }
}

/// Result, termination reason and statistics of one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub result: SearchResult,
    pub termination: TerminationReason,
    pub statistics: SearchStatistics,
}

impl SearchOutcome {
    /// Builds the outcome of an exhausted search.
    pub(crate) fn exhausted(best: Option<Timetable>, statistics: SearchStatistics) -> Self {
        match best {
            Some(timetable) => Self {
                result: SearchResult::Optimal(timetable),
                termination: TerminationReason::OptimalityProven,
                statistics,
            },
            None => Self {
                result: SearchResult::Infeasible,
                termination: TerminationReason::InfeasibilityProven,
                statistics,
            },
        }
    }

    /// Builds the outcome of a search stopped early for `termination`.
    pub(crate) fn aborted(
        best: Option<Timetable>,
        termination: TerminationReason,
        statistics: SearchStatistics,
    ) -> Self {
        let result = match best {
            Some(timetable) => SearchResult::Feasible(timetable),
            None => SearchResult::Unknown,
        };
        Self {
            result,
            termination,
            statistics,
        }
    }

    /// The best timetable, if any was found.
    pub fn timetable(&self) -> Option<&Timetable> {
        match &self.result {
            SearchResult::Optimal(t) | SearchResult::Feasible(t) => Some(t),
            SearchResult::Infeasible | SearchResult::Unknown => None,
        }
    }

    /// Consumes the outcome and returns the best timetable.
    pub fn into_timetable(self) -> Option<Timetable> {
        match self.result {
            SearchResult::Optimal(t) | SearchResult::Feasible(t) => Some(t),
            SearchResult::Infeasible | SearchResult::Unknown => None,
        }
    }

    /// Balance cost of the best timetable.
    pub fn cost(&self) -> Option<f64> {
        self.timetable().map(|t| t.cost)
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        self.timetable().is_some()
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SearchResult::Optimal(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SearchResult::Infeasible)
    }

    #[inline]
    pub fn is_budget_exhausted(&self) -> bool {
        self.termination == TerminationReason::NodeBudgetExhausted
    }
}
