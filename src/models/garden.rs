use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::models::{CellSize, GridPosition};

/// Smallest and largest bed width accepted at creation time.
pub const BED_WIDTH_RANGE: (u32, u32) = (4, 16);
/// Smallest and largest bed height accepted at creation time.
pub const BED_HEIGHT_RANGE: (u32, u32) = (4, 12);

/// An instance of a catalog plant located on a bed.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPlant {
    pub id: String,
    pub plant_id: String,
    pub position: GridPosition,
    #[serde(default)]
    pub size: CellSize,
    pub last_watered: Option<DateTime<Utc>>,
    /// Always `last_watered + water_frequency` days when set.
    pub next_watering: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenBed {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Insertion order, which is also draw order: later entries cover earlier ones.
    #[serde(default)]
    pub plants: Vec<PlacedPlant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GardenBed {
    pub fn plant(&self, placed_plant_id: &str) -> Option<&PlacedPlant> {
        self.plants.iter().find(|p| p.id == placed_plant_id)
    }

    pub fn plant_mut(&mut self, placed_plant_id: &str) -> Option<&mut PlacedPlant> {
        self.plants.iter_mut().find(|p| p.id == placed_plant_id)
    }

    /// True when the position lies on the visible grid.
    pub fn contains(&self, position: GridPosition) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    /// Sparse view of the bed: every occupied cell with its plants in draw order.
    pub fn occupancy(&self) -> BTreeMap<GridPosition, Vec<&PlacedPlant>> {
        let mut cells: BTreeMap<GridPosition, Vec<&PlacedPlant>> = BTreeMap::new();
        for plant in &self.plants {
            cells.entry(plant.position).or_default().push(plant);
        }
        cells
    }

    /// The plant drawn on top at `position`, if any.
    pub fn plant_at(&self, position: GridPosition) -> Option<&PlacedPlant> {
        self.plants.iter().rev().find(|p| p.position == position)
    }

    /// Plants in the four cells orthogonally adjacent to `position`.
    pub fn neighbors(&self, position: GridPosition) -> Vec<&PlacedPlant> {
        let directions: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        self.plants
            .iter()
            .filter(|p| {
                directions.iter().any(|(dx, dy)| {
                    // a direction past the edge of i32 has no cell
                    position.x.checked_add(*dx) == Some(p.position.x)
                        && position.y.checked_add(*dy) == Some(p.position.y)
                })
            })
            .collect()
    }
}

/// Secondary watering record, looked up by `placed_plant_id`.
///
/// The copy embedded in [`PlacedPlant`] is authoritative; this record is only
/// refreshed when it already exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringSchedule {
    pub plant_id: String,
    pub placed_plant_id: String,
    pub garden_bed_id: String,
    pub last_watered: DateTime<Utc>,
    pub next_watering: DateTime<Utc>,
    pub frequency_days: u32,
}

/// User input for a new bed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewGardenBed {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Default for NewGardenBed {
    fn default() -> Self {
        Self {
            name: String::new(),
            width: 8,
            height: 6,
        }
    }
}

/// Partial update of a bed; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GardenBedUpdate {
    pub name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
