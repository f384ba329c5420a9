//! Per-node occupancy state.
//!
//! Busy sets (teacher × slot, class × slot, room × slot, and
//! class-subject × slot for the consecutive-period rule) plus the daily
//! load counters used by the cost model and daily limits.
//!
//! # Ownership
//! Every search node owns its state outright. A child is built by cloning
//! the parent's state and placing one block into the clone, so sibling
//! branches can never observe each other's placements. The busy sets are
//! fixed-size bitsets, which keeps the clone a handful of `memcpy`s.

use fixedbitset::FixedBitSet;

use super::instance::{BlockInfo, Instance};

/// Dense set of `(entity, slot)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BusyGrid {
    num_slots: usize,
    cells: FixedBitSet,
}

impl BusyGrid {
    pub fn new(num_entities: usize, num_slots: usize) -> Self {
        Self {
            num_slots,
            cells: FixedBitSet::with_capacity(num_entities * num_slots),
        }
    }

    #[inline]
    fn index(&self, entity: usize, slot: usize) -> usize {
        debug_assert!(slot < self.num_slots, "slot {slot} out of range");
        entity * self.num_slots + slot
    }

    #[inline]
    pub fn contains(&self, entity: usize, slot: usize) -> bool {
        self.cells.contains(self.index(entity, slot))
    }

    /// Marks a pair busy. Returns `false` if it already was.
    #[inline]
    pub fn insert(&mut self, entity: usize, slot: usize) -> bool {
        let i = self.index(entity, slot);
        !self.cells.put(i)
    }

    /// Number of busy pairs.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cells.count_ones(..)
    }
}

/// Placed-block counters per (class, day) and per (class-subject, day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayLoads {
    num_days: usize,
    class_day: Vec<u32>,
    subject_day: Vec<u32>,
}

impl DayLoads {
    pub fn new(num_classes: usize, num_subjects: usize, num_days: usize) -> Self {
        Self {
            num_days,
            class_day: vec![0; num_classes * num_days],
            subject_day: vec![0; num_subjects * num_days],
        }
    }

    #[inline]
    pub fn num_days(&self) -> usize {
        self.num_days
    }

    #[inline]
    pub fn class_load(&self, class: usize, day: usize) -> u32 {
        self.class_day[class * self.num_days + day]
    }

    #[inline]
    pub fn subject_load(&self, subject: usize, day: usize) -> u32 {
        self.subject_day[subject * self.num_days + day]
    }

    /// Loads of one class across the week.
    #[inline]
    pub fn class_week(&self, class: usize) -> &[u32] {
        let start = class * self.num_days;
        &self.class_day[start..start + self.num_days]
    }

    /// Blocks of a class placed so far.
    pub fn class_placed(&self, class: usize) -> u32 {
        self.class_week(class).iter().sum()
    }

    fn add(&mut self, block: &BlockInfo, day: usize) {
        self.class_day[block.class * self.num_days + day] += 1;
        self.subject_day[block.subject * self.num_days + day] += 1;
    }
}

/// Busy sets and load counters of one search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OccupancyState {
    pub teachers: BusyGrid,
    pub classes: BusyGrid,
    pub rooms: BusyGrid,
    /// (class, subject) pair × slot.
    pub subjects: BusyGrid,
    pub loads: DayLoads,
}

impl OccupancyState {
    /// Empty state: nothing placed.
    pub fn empty(instance: &Instance) -> Self {
        let slots = instance.num_slots();
        Self {
            teachers: BusyGrid::new(instance.num_teachers, slots),
            classes: BusyGrid::new(instance.num_classes, slots),
            rooms: BusyGrid::new(instance.num_rooms, slots),
            subjects: BusyGrid::new(instance.num_subjects, slots),
            loads: DayLoads::new(instance.num_classes, instance.num_subjects, instance.num_days),
        }
    }

    /// Records a block in a slot and room.
    ///
    /// The caller must have checked feasibility; placing onto a busy pair
    /// would break the one-pair-per-assignment invariant.
    pub fn place(&mut self, block: &BlockInfo, slot: usize, day: usize, room: usize) {
        let t = self.teachers.insert(block.teacher, slot);
        let c = self.classes.insert(block.class, slot);
        let r = self.rooms.insert(room, slot);
        let p = self.subjects.insert(block.subject, slot);
        debug_assert!(t && c && r && p, "placed onto a busy pair");
        self.loads.add(block, day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::models::{Block, Room, TimeGrid, TimetableProblem};

    fn instance() -> Instance {
        let problem = TimetableProblem::new(
            vec![
                Block::new("math", "prof1", "3b"),
                Block::new("art", "prof2", "3b"),
            ],
            TimeGrid::uniform(2, 2),
            Room::numbered("U", 2),
        );
        Instance::compile(&problem, &SolverConfig::default())
    }

    #[test]
    fn test_busy_grid() {
        let mut g = BusyGrid::new(2, 3);
        assert!(!g.contains(1, 2));
        assert!(g.insert(1, 2));
        assert!(!g.insert(1, 2));
        assert!(g.contains(1, 2));
        assert!(!g.contains(0, 2));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_busy_grid_rows_do_not_overlap() {
        let mut g = BusyGrid::new(3, 4);
        assert!(g.insert(0, 3));
        assert!(g.insert(1, 0));
        assert!(g.insert(2, 3));

        assert!(!g.contains(0, 0));
        assert!(!g.contains(1, 3));
        assert!(g.contains(2, 3));
        assert_eq!(g.len(), 3);

        let copy = g.clone();
        assert!(g.insert(2, 2));
        assert_ne!(copy, g);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn test_place_updates_all_sets() {
        let inst = instance();
        let mut s = OccupancyState::empty(&inst);
        let b = inst.blocks[0];
        s.place(&b, 3, 1, 1);

        assert!(s.teachers.contains(b.teacher, 3));
        assert!(s.classes.contains(b.class, 3));
        assert!(s.rooms.contains(1, 3));
        assert!(!s.rooms.contains(0, 3));
        assert!(s.subjects.contains(b.subject, 3));
        assert!(!s.subjects.contains(inst.blocks[1].subject, 3));
        assert_eq!(s.loads.class_load(b.class, 1), 1);
        assert_eq!(s.loads.subject_load(b.subject, 1), 1);
        assert_eq!(s.loads.class_placed(b.class), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let inst = instance();
        let parent = OccupancyState::empty(&inst);

        let mut left = parent.clone();
        left.place(&inst.blocks[0], 0, 0, 0);
        let mut right = parent.clone();
        right.place(&inst.blocks[1], 2, 1, 0);

        assert_eq!(parent, OccupancyState::empty(&inst));
        assert!(left.rooms.contains(0, 0) && !left.rooms.contains(0, 2));
        assert!(right.rooms.contains(0, 2) && !right.rooms.contains(0, 0));
        assert_eq!(left.loads.class_week(0), &[1, 0]);
        assert_eq!(right.loads.class_week(0), &[0, 1]);
    }
}
