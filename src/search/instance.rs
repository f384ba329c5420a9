//! Dense, index-based view of a problem.
//!
//! The search never touches strings: teachers, classes, and
//! (class, subject) pairs are interned to `usize` indices in
//! first-appearance order, so compiling the same problem twice yields the
//! same indices.

use std::collections::HashMap;

use crate::config::SolverConfig;
use crate::models::TimetableProblem;

/// Compact block descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockInfo {
    pub teacher: usize,
    pub class: usize,
    /// Index of the (class, subject) pair.
    pub subject: usize,
}

/// Static problem data shared by every search node.
#[derive(Debug, Clone)]
pub(crate) struct Instance {
    pub blocks: Vec<BlockInfo>,
    pub num_teachers: usize,
    pub num_classes: usize,
    pub num_subjects: usize,
    pub num_days: usize,
    pub periods_per_day: usize,
    pub num_rooms: usize,
    /// Total blocks per class.
    pub class_totals: Vec<usize>,
    pub max_daily_per_class: Option<usize>,
    /// Daily cap per (class, subject) pair.
    pub subject_caps: Vec<Option<usize>>,
    /// Whether a (class, subject) pair must be taught in consecutive periods.
    pub consecutive: Vec<bool>,
    pub forbid_adjacent_days: bool,
}

fn intern<'a>(table: &mut HashMap<&'a str, usize>, key: &'a str) -> usize {
    let next = table.len();
    *table.entry(key).or_insert(next)
}

impl Instance {
    /// Compiles a validated problem.
    pub fn compile(problem: &TimetableProblem, config: &SolverConfig) -> Self {
        let mut teachers: HashMap<&str, usize> = HashMap::new();
        let mut classes: HashMap<&str, usize> = HashMap::new();
        let mut subjects: HashMap<(usize, &str), usize> = HashMap::new();
        let mut blocks = Vec::with_capacity(problem.blocks.len());
        let mut subject_caps = Vec::new();
        let mut consecutive = Vec::new();

        for b in &problem.blocks {
            let teacher = intern(&mut teachers, &b.teacher_id);
            let class = intern(&mut classes, &b.class_id);
            let next = subjects.len();
            let subject = *subjects.entry((class, b.subject.as_str())).or_insert(next);
            if subject == next {
                subject_caps.push(config.subject_cap(&b.subject));
                consecutive.push(config.consecutive_subjects.contains(&b.subject));
            }
            blocks.push(BlockInfo {
                teacher,
                class,
                subject,
            });
        }

        let mut class_totals = vec![0; classes.len()];
        for b in &blocks {
            class_totals[b.class] += 1;
        }

        Self {
            blocks,
            num_teachers: teachers.len(),
            num_classes: classes.len(),
            num_subjects: subjects.len(),
            num_days: problem.grid.num_days(),
            periods_per_day: problem.grid.periods_per_day,
            num_rooms: problem.rooms.len(),
            class_totals,
            max_daily_per_class: config.max_daily_blocks_per_class,
            subject_caps,
            consecutive,
            forbid_adjacent_days: config.forbid_adjacent_day_repeats,
        }
    }

    #[inline]
    pub fn num_slots(&self) -> usize {
        self.num_days * self.periods_per_day
    }

    #[inline]
    pub fn day_of(&self, slot: usize) -> usize {
        slot / self.periods_per_day
    }

    /// Slot index range of a day.
    #[inline]
    pub fn day_slots(&self, day: usize) -> std::ops::Range<usize> {
        let start = day * self.periods_per_day;
        start..start + self.periods_per_day
    }
}
