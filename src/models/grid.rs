//! Time grid model.
//!
//! A school week is a fixed grid of days × periods. Every cell is a
//! [`TimeSlot`]; the full set is generated once from a [`TimeGrid`] and
//! never changes while a timetable is being built.
//!
//! # Ordering
//! Slots are generated day-major: all periods of the first day, then all
//! periods of the second day, and so on. The slot index used by the search
//! engine is the position in this order (`day * periods_per_day + period`).

use serde::{Deserialize, Serialize};

/// One cell of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Zero-based day index.
    pub day: usize,
    /// Zero-based period index within the day.
    pub period: usize,
    /// Display label, e.g. `MON_1`.
    pub label: String,
}

impl TimeSlot {
    /// Creates a slot with an explicit label.
    pub fn new(day: usize, period: usize, label: impl Into<String>) -> Self {
        Self {
            day,
            period,
            label: label.into(),
        }
    }
}

/// Weekly grid definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    /// Day names in week order (e.g. `["MON", "TUE", ...]`).
    pub day_names: Vec<String>,
    /// Number of periods in every day.
    pub periods_per_day: usize,
}

impl TimeGrid {
    /// Creates a grid from day names and a period count.
    pub fn new<I, S>(day_names: I, periods_per_day: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            day_names: day_names.into_iter().map(Into::into).collect(),
            periods_per_day,
        }
    }

    /// Creates a grid with generic day names `D1..Dn`.
    pub fn uniform(days: usize, periods_per_day: usize) -> Self {
        Self::new((1..=days).map(|d| format!("D{d}")), periods_per_day)
    }

    /// Monday to Friday.
    pub fn school_week(periods_per_day: usize) -> Self {
        Self::new(["MON", "TUE", "WED", "THU", "FRI"], periods_per_day)
    }

    /// Number of days.
    #[inline]
    pub fn num_days(&self) -> usize {
        self.day_names.len()
    }

    /// Total number of slots.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.day_names.len() * self.periods_per_day
    }

    /// Generates every slot, day-major.
    pub fn slots(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::with_capacity(self.num_slots());
        for (day, name) in self.day_names.iter().enumerate() {
            for period in 0..self.periods_per_day {
                slots.push(TimeSlot::new(day, period, format!("{name}_{}", period + 1)));
            }
        }
        slots
    }

    /// Day of a slot index.
    #[inline]
    pub fn day_of(&self, slot_index: usize) -> usize {
        slot_index / self.periods_per_day.max(1)
    }
}
