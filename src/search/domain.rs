//! Legal-domain enumeration.
//!
//! The legal domain of an unplaced block is every (slot, room) pair of the
//! full grid × rooms product that passes the hard-constraint checker. Its
//! size ranges from 0 (dead) to `num_slots * num_rooms`.

use super::constraint::{feasible, slot_open};
use super::instance::{BlockInfo, Instance};
use super::occupancy::OccupancyState;

/// A legal (slot, room) value for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Candidate {
    pub slot: usize,
    pub room: usize,
}

/// Number of free rooms in a slot.
#[inline]
fn free_rooms(instance: &Instance, state: &OccupancyState, slot: usize) -> usize {
    (0..instance.num_rooms)
        .filter(|&room| !state.rooms.contains(room, slot))
        .count()
}

/// All legal values, slot-major then room order.
pub(crate) fn legal_candidates(
    instance: &Instance,
    state: &OccupancyState,
    block: &BlockInfo,
) -> Vec<Candidate> {
    let mut out = Vec::new();
    for slot in 0..instance.num_slots() {
        if !slot_open(instance, state, block, slot) {
            continue;
        }
        for room in 0..instance.num_rooms {
            if feasible(instance, state, block, slot, room) {
                out.push(Candidate { slot, room });
            }
        }
    }
    out
}

/// Whether the block has at least one legal value.
pub(crate) fn has_candidate(instance: &Instance, state: &OccupancyState, block: &BlockInfo) -> bool {
    (0..instance.num_slots()).any(|slot| {
        slot_open(instance, state, block, slot)
            && (0..instance.num_rooms).any(|room| !state.rooms.contains(room, slot))
    })
}

/// Per-slot legal-value counts of the unplaced blocks of one node.
///
/// Built once per expansion; MRV reads the totals and the value ranker
/// derives "options left after a placement" from the per-slot counts
/// without rebuilding any state.
#[derive(Debug, Clone)]
pub(crate) struct DomainProfile {
    num_slots: usize,
    rooms_free: Vec<u32>,
    /// `counts[i * num_slots + slot]` for the i-th remaining block.
    counts: Vec<u32>,
    totals: Vec<u32>,
}

impl DomainProfile {
    pub fn build(instance: &Instance, state: &OccupancyState, remaining: &[usize]) -> Self {
        let num_slots = instance.num_slots();
        let rooms_free: Vec<u32> = (0..num_slots)
            .map(|slot| free_rooms(instance, state, slot) as u32)
            .collect();

        let mut counts = vec![0u32; remaining.len() * num_slots];
        let mut totals = vec![0u32; remaining.len()];

        for (i, &b) in remaining.iter().enumerate() {
            let block = &instance.blocks[b];
            let row = &mut counts[i * num_slots..(i + 1) * num_slots];
            for (slot, count) in row.iter_mut().enumerate() {
                if rooms_free[slot] > 0 && slot_open(instance, state, block, slot) {
                    *count = rooms_free[slot];
                }
            }
            totals[i] = row.iter().sum();
        }

        Self {
            num_slots,
            rooms_free,
            counts,
            totals,
        }
    }

    /// Free rooms in `slot`.
    #[inline]
    pub fn free_rooms(&self, slot: usize) -> u32 {
        self.rooms_free[slot]
    }

    /// Domain size of the i-th remaining block.
    #[inline]
    pub fn total(&self, i: usize) -> u32 {
        self.totals[i]
    }

    /// Domain sizes of all remaining blocks.
    #[inline]
    pub fn totals(&self) -> &[u32] {
        &self.totals
    }

    /// Legal values of the i-th remaining block in `slot`.
    #[cfg(test)]
    pub fn slot_count(&self, i: usize, slot: usize) -> u32 {
        self.counts[i * self.num_slots + slot]
    }

    /// Legal values of the i-th remaining block over a slot range.
    pub fn range_count(&self, i: usize, slots: std::ops::Range<usize>) -> u32 {
        let row = i * self.num_slots;
        self.counts[row + slots.start..row + slots.end].iter().sum()
    }
}
