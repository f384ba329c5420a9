//! Search tree nodes.

use super::cost::PlacementCost;
use super::domain::Candidate;
use super::instance::Instance;
use super::occupancy::OccupancyState;

/// A block index placed at a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub block: usize,
    pub slot: usize,
    pub room: usize,
}

/// A partial assignment.
///
/// Nodes are never mutated after they are pushed: [`SearchNode::child`]
/// builds a new node from a clone of the parent state.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub placements: Vec<Placement>,
    /// Unplaced blocks in tie-break order.
    pub remaining: Vec<usize>,
    pub state: OccupancyState,
    /// Accumulated balance cost.
    pub cost: f64,
    /// `cost` plus the admissible completion bound.
    pub bound: f64,
}

impl SearchNode {
    /// Nothing placed yet; `order` is the shuffled block order.
    pub fn root<C: PlacementCost>(instance: &Instance, order: Vec<usize>, cost: &C) -> Self {
        let state = OccupancyState::empty(instance);
        let bound = cost.completion_bound(&state.loads);
        Self {
            placements: Vec::with_capacity(order.len()),
            remaining: order,
            state,
            cost: 0.0,
            bound,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.placements.len()
    }

    /// Places the `pos`-th remaining block at `candidate`.
    pub fn child<C: PlacementCost>(
        &self,
        instance: &Instance,
        cost: &C,
        pos: usize,
        candidate: Candidate,
        delta: f64,
    ) -> Self {
        let block = self.remaining[pos];
        let mut state = self.state.clone();
        state.place(
            &instance.blocks[block],
            candidate.slot,
            instance.day_of(candidate.slot),
            candidate.room,
        );

        let mut remaining = self.remaining.clone();
        remaining.remove(pos);

        let mut placements = Vec::with_capacity(self.placements.len() + 1);
        placements.extend_from_slice(&self.placements);
        placements.push(Placement {
            block,
            slot: candidate.slot,
            room: candidate.room,
        });

        let node_cost = self.cost + delta;
        let bound = node_cost + cost.completion_bound(&state.loads);

        Self {
            placements,
            remaining,
            state,
            cost: node_cost,
            bound,
        }
    }
}
