//! Timetable (solution) model.
//!
//! A timetable places every block of a problem into one time slot and one
//! room. Solvers only ever return conflict-free timetables; [`Timetable::conflicts`]
//! exists so callers (and tests) can audit that independently.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Block, Room, TimeSlot};

/// A block placed in a slot and room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// The placed block.
    pub block: Block,
    /// Slot the block occupies.
    pub slot: TimeSlot,
    /// Room the block occupies.
    pub room: Room,
}

/// A complete timetable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Assignments in input block order.
    pub assignments: Vec<Assignment>,
    /// Balance cost accumulated while building the timetable.
    pub cost: f64,
}

/// A hard-constraint conflict between two assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Which resource is double-booked.
    pub kind: ConflictKind,
    /// The double-booked teacher, class or room ID.
    pub entity_id: String,
    /// Slot label where the clash occurs.
    pub slot_label: String,
    /// Indices of the two clashing assignments.
    pub assignments: (usize, usize),
}

/// Classification of hard conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Teacher scheduled twice in one slot.
    Teacher,
    /// Class scheduled twice in one slot.
    Class,
    /// Room used twice in one slot.
    Room,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(block: Block, slot: TimeSlot, room: Room) -> Self {
        Self { block, slot, room }
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns all assignments for a class.
    pub fn assignments_for_class(&self, class_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.block.class_id == class_id)
            .collect()
    }

    /// Returns all assignments for a teacher.
    pub fn assignments_for_teacher(&self, teacher_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.block.teacher_id == teacher_id)
            .collect()
    }

    /// Returns all assignments in a room.
    pub fn assignments_for_room(&self, room_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.room.id == room_id)
            .collect()
    }

    /// Returns all assignments on a given day.
    pub fn assignments_on_day(&self, day: usize) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.slot.day == day)
            .collect()
    }

    /// Finds every teacher, class and room double-booking.
    ///
    /// Each clashing pair is reported once per kind, with the earlier
    /// assignment index first.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        let mut seen: HashMap<(ConflictKind, &str, usize, usize), usize> = HashMap::new();

        for (i, a) in self.assignments.iter().enumerate() {
            let keys = [
                (ConflictKind::Teacher, a.block.teacher_id.as_str()),
                (ConflictKind::Class, a.block.class_id.as_str()),
                (ConflictKind::Room, a.room.id.as_str()),
            ];
            for (kind, entity) in keys {
                match seen.get(&(kind, entity, a.slot.day, a.slot.period)) {
                    Some(&first) => conflicts.push(Conflict {
                        kind,
                        entity_id: entity.to_string(),
                        slot_label: a.slot.label.clone(),
                        assignments: (first, i),
                    }),
                    None => {
                        seen.insert((kind, entity, a.slot.day, a.slot.period), i);
                    }
                }
            }
        }

        conflicts
    }

    /// Whether no resource is double-booked.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts().is_empty()
    }
}
