//! Constraint-satisfaction search for timetables.
//!
//! Blocks are the variables, (time slot, room) pairs the values. The
//! engine is a depth-first branch-and-bound over an explicit stack:
//!
//! - **Constraint checker** (`constraint`): teacher, class and room may
//!   each be used once per slot; optional daily load limits and
//!   per-subject day rules.
//! - **Domain enumeration** (`domain`): legal values of a block.
//! - **MRV / cost + LCV ordering** (`ordering`): which block to branch on
//!   and in which order to try its values.
//! - **Forward checking** (`forward`): reject a placement that leaves
//!   another block without values.
//! - **Balance cost** (`cost`): incremental even-spread cost with an
//!   admissible completion bound.
//! - **Monitors** (`monitor`): progress logging and cancellation.
//!
//! # Usage
//!
//! ```
//! use u_timetable::config::SolverConfig;
//! use u_timetable::models::{Block, Room, TimeGrid, TimetableProblem};
//! use u_timetable::search::{SearchResult, TimetableSolver};
//!
//! let problem = TimetableProblem::new(
//!     vec![
//!         Block::new("math", "prof1", "3b"),
//!         Block::new("art", "prof2", "3b"),
//!     ],
//!     TimeGrid::uniform(2, 1),
//!     Room::numbered("U", 1),
//! );
//! let outcome = TimetableSolver::new(SolverConfig::default()).solve(&problem).unwrap();
//! assert!(matches!(outcome.result, SearchResult::Optimal(_)));
//! ```
//!
//! # References
//!
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//!   4th ed., Ch. 6

mod constraint;
mod cost;
mod domain;
mod engine;
mod forward;
mod instance;
pub mod monitor;
mod node;
mod occupancy;
mod ordering;
mod outcome;
mod stats;

pub use engine::TimetableSolver;
pub use monitor::{
    CompositeMonitor, InterruptMonitor, NoOpMonitor, ProgressMonitor, SearchCommand,
    SearchMonitor,
};
pub use outcome::{SearchOutcome, SearchResult, TerminationReason};
pub use stats::SearchStatistics;
