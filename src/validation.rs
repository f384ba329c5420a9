//! Input validation for timetabling problems.
//!
//! Checks structural integrity of the problem and the solver configuration
//! before any search starts. Detects:
//! - Empty block lists, grids, and room lists
//! - Duplicate room IDs and day names
//! - Blank teacher, class, or subject identifiers
//! - Out-of-range configuration values
//!
//! Infeasibility is *not* a validation error: a well-formed problem with
//! no conflict-free timetable is a normal search outcome.

use std::collections::HashSet;
use std::fmt;

use crate::config::SolverConfig;
use crate::models::TimetableProblem;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// There are no blocks to place.
    NoBlocks,
    /// The grid has no days or no periods.
    EmptyGrid,
    /// There are no rooms.
    NoRooms,
    /// Two rooms or two days share the same identifier.
    DuplicateId,
    /// A block has an empty teacher, class, or subject.
    BlankIdentifier,
    /// A configuration value is out of range.
    InvalidConfig,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a problem together with the configuration it will be solved with.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_problem(problem: &TimetableProblem, config: &SolverConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if problem.blocks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoBlocks,
            "Problem has no blocks to place",
        ));
    }

    if problem.grid.num_days() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGrid,
            "Time grid has no days",
        ));
    }
    if problem.grid.periods_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGrid,
            "Time grid has no periods per day",
        ));
    }

    if problem.rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRooms,
            "Problem has no rooms",
        ));
    }

    let mut room_ids = HashSet::new();
    for r in &problem.rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut day_names = HashSet::new();
    for d in &problem.grid.day_names {
        if !day_names.insert(d.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate day name: {d}"),
            ));
        }
    }

    for (i, b) in problem.blocks.iter().enumerate() {
        let fields = [
            ("teacher", &b.teacher_id),
            ("class", &b.class_id),
            ("subject", &b.subject),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlankIdentifier,
                    format!("Block #{i} has a blank {field}"),
                ));
            }
        }
    }

    errors.extend(validate_config(config));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_config(config: &SolverConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.max_nodes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            "max_nodes must be positive",
        ));
    }
    if !config.balance_weight.is_finite() || config.balance_weight < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!(
                "balance_weight must be finite and non-negative, got {}",
                config.balance_weight
            ),
        ));
    }
    if config.progress_interval == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            "progress_interval must be positive when set",
        ));
    }
    if config.max_daily_blocks_per_class == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            "max_daily_blocks_per_class must be positive when set",
        ));
    }
    if config.max_daily_blocks_per_subject == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            "max_daily_blocks_per_subject must be positive when set",
        ));
    }

    let mut zero_caps: Vec<&str> = config
        .subject_daily_caps
        .iter()
        .filter(|&(_, &limit)| limit == 0)
        .map(|(subject, _)| subject.as_str())
        .collect();
    zero_caps.sort_unstable();
    for subject in zero_caps {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!("daily cap for subject '{subject}' must be positive"),
        ));
    }

    errors
}
