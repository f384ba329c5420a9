//! School timetabling for the U-Engine ecosystem.
//!
//! Places teaching blocks (subject + teacher + class) into a weekly grid of
//! time slots and rooms so that no teacher, class or room is double-booked,
//! preferring timetables that spread each class evenly over the week.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Block`, `Curriculum`, `TimeGrid`,
//!   `TimeSlot`, `Room`, `TimetableProblem`, `Timetable`, `Assignment`
//! - **`config`**: `SolverConfig` (node budget, seed, balance weight,
//!   daily limits, per-subject rules)
//! - **`validation`**: Input integrity checks run before any search
//! - **`search`**: Branch-and-bound CSP solver with MRV, cost + LCV value
//!   ordering, forward checking and search monitors
//! - **`kpi`**: Quality metrics of a finished timetable
//!
//! # Example
//!
//! ```
//! use u_timetable::config::SolverConfig;
//! use u_timetable::kpi::TimetableKpi;
//! use u_timetable::models::{Curriculum, Room, TimeGrid, TimetableProblem};
//! use u_timetable::search::TimetableSolver;
//!
//! let curriculum = Curriculum::new()
//!     .with_lesson("3b", "math", "prof1", 4)
//!     .with_lesson("4c", "math", "prof1", 2)
//!     .with_lesson("4c", "pe", "prof2", 2);
//! let problem = TimetableProblem::from_curriculum(
//!     curriculum,
//!     TimeGrid::school_week(3),
//!     Room::numbered("U", 2),
//! );
//!
//! let config = SolverConfig::default().with_max_daily_blocks_per_subject(1);
//! let outcome = TimetableSolver::new(config).solve(&problem).unwrap();
//! let timetable = outcome.timetable().unwrap();
//!
//! let kpi = TimetableKpi::calculate(timetable, &problem, 1.0);
//! assert!(kpi.conflicts.is_empty());
//! assert!((kpi.balance_cost - timetable.cost).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod config;
pub mod kpi;
pub mod models;
pub mod search;
pub mod validation;
