use serde::{Deserialize, Serialize};

pub mod garden;
pub mod plant;
pub mod zone;

/// A cell position within a garden bed.
///
/// Coordinates are not clamped to the bed: a plant dropped outside the visible
/// grid keeps its negative or overflowing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Footprint of a placed plant, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}
