//! Timetabling problem definition.

use serde::{Deserialize, Serialize};

use super::{Block, Curriculum, Room, TimeGrid};

/// Everything the solver needs: what to place and where it may go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableProblem {
    /// Blocks to place, one per weekly occurrence.
    pub blocks: Vec<Block>,
    /// Weekly slot grid.
    pub grid: TimeGrid,
    /// Available rooms.
    pub rooms: Vec<Room>,
}

impl TimetableProblem {
    /// Creates a problem.
    pub fn new(blocks: Vec<Block>, grid: TimeGrid, rooms: Vec<Room>) -> Self {
        Self {
            blocks,
            grid,
            rooms,
        }
    }

    /// Creates a problem from a curriculum.
    pub fn from_curriculum(curriculum: Curriculum, grid: TimeGrid, rooms: Vec<Room>) -> Self {
        Self::new(curriculum.into_blocks(), grid, rooms)
    }

    /// Number of blocks belonging to a class.
    pub fn class_block_count(&self, class_id: &str) -> usize {
        self.blocks.iter().filter(|b| b.class_id == class_id).count()
    }

    /// Distinct class IDs in first-appearance order.
    pub fn class_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for b in &self.blocks {
            if !ids.contains(&b.class_id.as_str()) {
                ids.push(&b.class_id);
            }
        }
        ids
    }
}
