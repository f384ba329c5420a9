//! Timetable quality metrics (KPIs).
//!
//! Recomputes the quality of a finished timetable from its assignments,
//! independently of the search that produced it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Daily loads | Blocks per class per day |
//! | Balance cost | `w * Σ (2 * (old - ideal) + 1)` over every placement |
//! | Daily spread | Busiest minus lightest day, per class |
//! | Room utilization | Occupied slots / grid slots, per room |
//! | Conflicts | Double-booked teachers, classes and rooms |

use std::collections::HashMap;

use crate::models::{Conflict, Timetable, TimetableProblem};

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Blocks per day, per class ID.
    pub daily_loads: HashMap<String, Vec<usize>>,
    /// Balance cost recomputed from the daily loads.
    pub balance_cost: f64,
    /// Max minus min daily load, per class ID.
    pub daily_spread: HashMap<String, usize>,
    /// Largest daily spread of any class.
    pub max_daily_spread: usize,
    /// Fraction of grid slots each room is used (0.0..1.0).
    pub utilization_by_room: HashMap<String, f64>,
    /// Mean room utilization.
    pub avg_room_utilization: f64,
    /// Hard conflicts; empty for every solver result.
    pub conflicts: Vec<Conflict>,
}

impl TimetableKpi {
    /// Computes KPIs of `timetable` against the problem it solves.
    ///
    /// `balance_weight` should be the weight the solver ran with, so that
    /// `balance_cost` is comparable with [`Timetable::cost`].
    pub fn calculate(timetable: &Timetable, problem: &TimetableProblem, balance_weight: f64) -> Self {
        let num_days = problem.grid.num_days();
        let num_slots = problem.grid.num_slots();

        let mut daily_loads: HashMap<String, Vec<usize>> = HashMap::new();
        let mut daily_spread = HashMap::new();
        let mut balance_cost = 0.0;

        for class in problem.class_ids() {
            let mut loads = vec![0usize; num_days];
            for a in timetable.assignments_for_class(class) {
                if let Some(load) = loads.get_mut(a.slot.day) {
                    *load += 1;
                }
            }

            let ideal = if num_days == 0 {
                0.0
            } else {
                problem.class_block_count(class) as f64 / num_days as f64
            };
            for &load in &loads {
                for old in 0..load {
                    balance_cost += balance_weight * (2.0 * (old as f64 - ideal) + 1.0);
                }
            }

            let max = loads.iter().copied().max().unwrap_or(0);
            let min = loads.iter().copied().min().unwrap_or(0);
            daily_spread.insert(class.to_string(), max - min);
            daily_loads.insert(class.to_string(), loads);
        }

        let utilization_by_room: HashMap<String, f64> = problem
            .rooms
            .iter()
            .map(|room| {
                let used = timetable.assignments_for_room(&room.id).len();
                let ratio = if num_slots == 0 {
                    0.0
                } else {
                    used as f64 / num_slots as f64
                };
                (room.id.clone(), ratio)
            })
            .collect();
        let avg_room_utilization = if utilization_by_room.is_empty() {
            0.0
        } else {
            utilization_by_room.values().sum::<f64>() / utilization_by_room.len() as f64
        };

        Self {
            max_daily_spread: daily_spread.values().copied().max().unwrap_or(0),
            daily_loads,
            balance_cost,
            daily_spread,
            utilization_by_room,
            avg_room_utilization,
            conflicts: timetable.conflicts(),
        }
    }

    /// Whether the timetable is conflict-free and no class's week is more
    /// uneven than `max_spread`.
    pub fn meets_thresholds(&self, max_spread: usize) -> bool {
        self.conflicts.is_empty() && self.max_daily_spread <= max_spread
    }
}
