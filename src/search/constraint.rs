//! Hard-constraint checker.
//!
//! The single authority on whether a block may go into a (slot, room)
//! cell given a node's occupancy. Every pruning and placement decision
//! routes through [`feasible`] or its room-independent half [`slot_open`].
//!
//! # Rules
//! A placement is infeasible iff
//! - the block's teacher is busy in the slot, or
//! - the block's class is busy in the slot, or
//! - the room is busy in the slot, or
//! - a configured daily limit for the block's class (or class-subject)
//!   on the slot's day is already reached, or
//! - neighbouring-day repeats are forbidden and the block's class-subject
//!   is taught the day before or the day after, or
//! - the class-subject must be taught in consecutive periods, already has
//!   a block that day, and neither neighbouring period holds one.
//!
//! With no limits configured only the first three rules apply. All checks
//! are O(1) lookups.

use super::instance::{BlockInfo, Instance};
use super::occupancy::OccupancyState;

/// Whether `block` may be placed in `slot` at all (any room).
#[inline]
pub(crate) fn slot_open(
    instance: &Instance,
    state: &OccupancyState,
    block: &BlockInfo,
    slot: usize,
) -> bool {
    if state.teachers.contains(block.teacher, slot) || state.classes.contains(block.class, slot) {
        return false;
    }
    within_daily_limits(instance, state, block, instance.day_of(slot))
        && extends_run(instance, state, block, slot)
}

/// Whether `block` may be placed in `slot` and `room`.
#[inline]
pub(crate) fn feasible(
    instance: &Instance,
    state: &OccupancyState,
    block: &BlockInfo,
    slot: usize,
    room: usize,
) -> bool {
    !state.rooms.contains(room, slot) && slot_open(instance, state, block, slot)
}

/// Whether one more block of this class/subject fits on `day`.
#[inline]
pub(crate) fn within_daily_limits(
    instance: &Instance,
    state: &OccupancyState,
    block: &BlockInfo,
    day: usize,
) -> bool {
    if let Some(limit) = instance.max_daily_per_class {
        if state.loads.class_load(block.class, day) as usize >= limit {
            return false;
        }
    }
    if let Some(limit) = instance.subject_caps[block.subject] {
        if state.loads.subject_load(block.subject, day) as usize >= limit {
            return false;
        }
    }
    if instance.forbid_adjacent_days {
        let before = day > 0 && state.loads.subject_load(block.subject, day - 1) > 0;
        let after =
            day + 1 < instance.num_days && state.loads.subject_load(block.subject, day + 1) > 0;
        if before || after {
            return false;
        }
    }
    true
}

/// Whether `slot` continues the day's run of a consecutive subject.
#[inline]
fn extends_run(instance: &Instance, state: &OccupancyState, block: &BlockInfo, slot: usize) -> bool {
    if !instance.consecutive[block.subject] {
        return true;
    }
    let day = instance.day_of(slot);
    if state.loads.subject_load(block.subject, day) == 0 {
        return true;
    }
    let period = slot - day * instance.periods_per_day;
    let prev = period > 0 && state.subjects.contains(block.subject, slot - 1);
    let next = period + 1 < instance.periods_per_day && state.subjects.contains(block.subject, slot + 1);
    prev || next
}
