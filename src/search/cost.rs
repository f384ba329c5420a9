//! Balance cost model.
//!
//! Each class has an ideal daily load `ideal = total_blocks / num_days`.
//! Moving a (class, day) count from `old` to `old + 1` adds
//!
//! ```text
//! weight * ((old + 1 - ideal)^2 - (old - ideal)^2)
//!   = weight * (2 * (old - ideal) + 1)
//! ```
//!
//! to the running total. Summed over a finished timetable this equals
//! `weight * Σ_days (count - ideal)^2` minus the constant
//! `weight * num_days * ideal^2`, so minimizing the running total spreads
//! each class evenly over the week.
//!
//! # Completion bound
//! Deltas are negative while a day is under-filled, so the running total of
//! a partial assignment is not a lower bound on its completions. Because the
//! per-day cost is convex, placing the remaining blocks one by one on the
//! currently least-loaded day minimizes the remaining deltas when hard
//! constraints are ignored; that minimum is an admissible bound.

use super::instance::Instance;
use super::occupancy::DayLoads;

/// Cost collaborator used by the search engine.
pub(crate) trait PlacementCost {
    /// Incremental cost of one more block for `class` on `day`.
    fn delta(&self, class: usize, day: usize, loads: &DayLoads) -> f64;

    /// Lower bound on the sum of deltas still to come.
    fn completion_bound(&self, loads: &DayLoads) -> f64;
}

/// Even-spread cost over the days of the week.
#[derive(Debug, Clone)]
pub(crate) struct BalanceCost {
    weight: f64,
    ideal: Vec<f64>,
    totals: Vec<usize>,
}

impl BalanceCost {
    pub fn new(instance: &Instance, weight: f64) -> Self {
        let days = instance.num_days.max(1) as f64;
        Self {
            weight,
            ideal: instance
                .class_totals
                .iter()
                .map(|&t| t as f64 / days)
                .collect(),
            totals: instance.class_totals.clone(),
        }
    }

    #[inline]
    fn step(&self, class: usize, old: u32) -> f64 {
        self.weight * (2.0 * (old as f64 - self.ideal[class]) + 1.0)
    }
}

impl PlacementCost for BalanceCost {
    #[inline]
    fn delta(&self, class: usize, day: usize, loads: &DayLoads) -> f64 {
        self.step(class, loads.class_load(class, day))
    }

    fn completion_bound(&self, loads: &DayLoads) -> f64 {
        let mut bound = 0.0;
        let mut week: Vec<u32> = Vec::with_capacity(loads.num_days());

        for class in 0..self.totals.len() {
            let remaining = self.totals[class].saturating_sub(loads.class_placed(class) as usize);
            if remaining == 0 {
                continue;
            }
            week.clear();
            week.extend_from_slice(loads.class_week(class));

            for _ in 0..remaining {
                let (day, &old) = week
                    .iter()
                    .enumerate()
                    .min_by_key(|&(_, load)| *load)
                    .unwrap_or((0, &0));
                bound += self.step(class, old);
                if let Some(load) = week.get_mut(day) {
                    *load += 1;
                }
            }
        }

        bound
    }
}
