//! Forward checking.
//!
//! After a tentative placement, every block still unplaced must keep at
//! least one legal value under the new occupancy; otherwise the placement
//! is rejected before the search descends into it. This is a one-step
//! lookahead, not arc consistency: pairs of unplaced blocks competing for
//! the same last cell are not detected here.
//!
//! # Reference
//! Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//! Constraint Satisfaction Problems"

use super::domain::has_candidate;
use super::instance::Instance;
use super::occupancy::OccupancyState;

/// Whether every block in `remaining` still has a legal value in `state`.
pub(crate) fn forward_check(instance: &Instance, state: &OccupancyState, remaining: &[usize]) -> bool {
    remaining
        .iter()
        .all(|&b| has_candidate(instance, state, &instance.blocks[b]))
}
