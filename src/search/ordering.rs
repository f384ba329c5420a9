//! Variable and value ordering.
//!
//! - **Variable (MRV)**: branch on the unplaced block with the fewest legal
//!   values. Ties go to the earliest block in the remaining list, whose
//!   order is the seeded shuffle made once at the start of the search.
//! - **Value (cost + LCV)**: try the cheapest placement first; among equal
//!   costs, the one leaving the most legal values to the other unplaced
//!   blocks; then slot and room index.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! 4th ed., Ch. 6.3.1 (variable and value ordering)

use std::cmp::Ordering;

use super::constraint::slot_open;
use super::cost::PlacementCost;
use super::domain::{Candidate, DomainProfile};
use super::instance::{BlockInfo, Instance};
use super::occupancy::OccupancyState;

/// A value with its ranking keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RankedCandidate {
    pub candidate: Candidate,
    /// Incremental balance cost.
    pub delta: f64,
    /// Sum of the other unplaced blocks' domain sizes after this placement.
    pub options_left: u64,
}

/// MRV: position (in the remaining list) of the most constrained block.
///
/// Returns `None` only when nothing remains. A returned block may have an
/// empty domain, which the caller treats as a dead end.
pub(crate) fn select_variable(profile: &DomainProfile) -> Option<usize> {
    profile
        .totals()
        .iter()
        .enumerate()
        .min_by_key(|&(_, total)| *total)
        .map(|(pos, _)| pos)
}

/// Legal values the `other`-th remaining block keeps in `after`, the
/// state with `placed` put at `candidate`.
///
/// Only slots whose legality can change are recounted: the placement's
/// slot and, for a block of the same class, the placement's day and its
/// two neighbours. Everything else is read from `profile`.
fn options_kept(
    instance: &Instance,
    after: &OccupancyState,
    profile: &DomainProfile,
    remaining: &[usize],
    placed: &BlockInfo,
    other: usize,
    candidate: Candidate,
) -> u64 {
    let o = &instance.blocks[remaining[other]];
    let affected = if o.class == placed.class {
        let day = instance.day_of(candidate.slot);
        let first = day.saturating_sub(1);
        let last = (day + 1).min(instance.num_days - 1);
        instance.day_slots(first).start..instance.day_slots(last).end
    } else {
        candidate.slot..candidate.slot + 1
    };

    let before = profile.range_count(other, affected.clone());
    let kept: u32 = affected
        .filter(|&slot| slot_open(instance, after, o, slot))
        .map(|slot| profile.free_rooms(slot) - u32::from(slot == candidate.slot))
        .sum();

    (profile.total(other) - before) as u64 + kept as u64
}

/// Orders the legal values of the `chosen`-th remaining block.
pub(crate) fn rank_values<C: PlacementCost>(
    instance: &Instance,
    state: &OccupancyState,
    cost: &C,
    profile: &DomainProfile,
    remaining: &[usize],
    chosen: usize,
    candidates: &[Candidate],
) -> Vec<RankedCandidate> {
    let block = &instance.blocks[remaining[chosen]];

    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|&candidate| {
            let day = instance.day_of(candidate.slot);
            let mut after = state.clone();
            after.place(block, candidate.slot, day, candidate.room);

            let options_left = (0..remaining.len())
                .filter(|&i| i != chosen)
                .map(|i| options_kept(instance, &after, profile, remaining, block, i, candidate))
                .sum();
            RankedCandidate {
                candidate,
                delta: cost.delta(block.class, day, &state.loads),
                options_left,
            }
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked
}

fn compare_ranked(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    a.delta
        .partial_cmp(&b.delta)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.options_left.cmp(&a.options_left))
        .then_with(|| a.candidate.cmp(&b.candidate))
}
