//! Block and curriculum models.
//!
//! A [`Block`] is one weekly occurrence of a lesson: a subject taught by a
//! teacher to a class. It occupies exactly one time slot and one room once
//! placed. A subject with four weekly hours is four identical blocks.
//!
//! [`Curriculum`] is a convenience builder that expands weekly lesson
//! counts into the flat block list the solver consumes.

use serde::{Deserialize, Serialize};

/// One schedulable unit: subject × teacher × class, one period long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Subject name (e.g. "math").
    pub subject: String,
    /// Teacher identifier.
    pub teacher_id: String,
    /// Class (student group) identifier.
    pub class_id: String,
}

impl Block {
    /// Creates a block.
    pub fn new(
        subject: impl Into<String>,
        teacher_id: impl Into<String>,
        class_id: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            teacher_id: teacher_id.into(),
            class_id: class_id.into(),
        }
    }
}

/// A weekly lesson requirement: `weekly_hours` blocks of one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Class attending the lesson.
    pub class_id: String,
    /// Subject taught.
    pub subject: String,
    /// Teacher giving the lesson.
    pub teacher_id: String,
    /// Number of blocks per week.
    pub weekly_hours: usize,
}

/// Weekly curriculum: an ordered list of lessons.
///
/// # Example
/// ```
/// use u_timetable::models::Curriculum;
///
/// let blocks = Curriculum::new()
///     .with_lesson("3b", "math", "prof1", 4)
///     .with_lesson("3b", "music", "prof7", 1)
///     .into_blocks();
/// assert_eq!(blocks.len(), 5);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Curriculum {
    /// Lessons in insertion order.
    pub lessons: Vec<Lesson>,
}

impl Curriculum {
    /// Creates an empty curriculum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a lesson.
    pub fn with_lesson(
        mut self,
        class_id: impl Into<String>,
        subject: impl Into<String>,
        teacher_id: impl Into<String>,
        weekly_hours: usize,
    ) -> Self {
        self.lessons.push(Lesson {
            class_id: class_id.into(),
            subject: subject.into(),
            teacher_id: teacher_id.into(),
            weekly_hours,
        });
        self
    }

    /// Total number of blocks this curriculum expands to.
    pub fn total_blocks(&self) -> usize {
        self.lessons.iter().map(|l| l.weekly_hours).sum()
    }

    /// Expands every lesson into `weekly_hours` blocks, preserving order.
    pub fn into_blocks(self) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(self.total_blocks());
        for lesson in self.lessons {
            for _ in 0..lesson.weekly_hours {
                blocks.push(Block::new(
                    lesson.subject.clone(),
                    lesson.teacher_id.clone(),
                    lesson.class_id.clone(),
                ));
            }
        }
        blocks
    }
}
