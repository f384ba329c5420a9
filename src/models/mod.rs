//! Timetabling domain models.
//!
//! Provides the data types describing a weekly school timetabling problem
//! and its solution. All types are immutable inputs to the solver, except
//! [`Timetable`], which is its output.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | University |
//! |-------------|--------|------------|
//! | Block | Weekly lesson occurrence | Lecture/tutorial |
//! | class_id | Class (e.g. "3b") | Cohort |
//! | teacher_id | Teacher | Lecturer |
//! | Room | Classroom | Lecture hall |
//! | TimeSlot | Day × period | Day × hour |

mod block;
mod grid;
mod problem;
mod room;
mod timetable;

pub use block::{Block, Curriculum, Lesson};
pub use grid::{TimeGrid, TimeSlot};
pub use problem::TimetableProblem;
pub use room::Room;
pub use timetable::{Assignment, Conflict, ConflictKind, Timetable};
