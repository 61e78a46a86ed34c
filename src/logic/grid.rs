use chrono::{DateTime, TimeZone};
use uuid::Uuid;

use crate::logic::watering::mark_watered;
use crate::models::{
    garden::{GardenBed, PlacedPlant},
    plant::Plant,
    CellSize, GridPosition,
};

/// Default on-screen size of one cell, in pixels.
pub const DEFAULT_CELL_SIZE: f64 = 48.0;

/// Maps a pointer position to a cell. No clamping: points left of or above
/// the origin give negative cells, points past the bed give overflowing ones.
pub fn cell_from_point(px: f64, py: f64, origin_x: f64, origin_y: f64, cell_size: f64) -> GridPosition {
    // `as` saturates, so huge or non-finite values stay in range
    let x = ((px - origin_x) / cell_size).floor() as i32;
    let y = ((py - origin_y) / cell_size).floor() as i32;
    GridPosition::new(x, y)
}

/// Screen placement of a bed's grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_size: f64,
}

impl GridGeometry {
    pub fn new(origin_x: f64, origin_y: f64, cell_size: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
        }
    }

    pub fn cell_at(&self, px: f64, py: f64) -> GridPosition {
        cell_from_point(px, py, self.origin_x, self.origin_y, self.cell_size)
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_CELL_SIZE)
    }
}

/// Appends a new placement of `plant` at `cell` and returns its id.
///
/// Occupied cells are not checked: stacked plants are allowed and the last
/// one placed is drawn on top. The plant counts as watered at `now`.
pub fn place<Tz: TimeZone>(bed: &mut GardenBed, plant: &Plant, cell: GridPosition, now: &DateTime<Tz>) -> String {
    let id = Uuid::new_v4().to_string();
    let mut placed = PlacedPlant {
        id: id.clone(),
        plant_id: plant.id.clone(),
        position: cell,
        size: CellSize::default(),
        last_watered: None,
        next_watering: None,
    };
    mark_watered(&mut placed, plant.water_frequency, now);
    bed.plants.push(placed);
    id
}

/// Moves a placement to `cell`. Returns false, leaving the bed untouched,
/// when no placement has that id.
pub fn move_plant(bed: &mut GardenBed, placed_plant_id: &str, cell: GridPosition) -> bool {
    match bed.plant_mut(placed_plant_id) {
        Some(placed) => {
            placed.position = cell;
            true
        }
        None => false,
    }
}

/// Removes a placement, keeping the order of the others.
pub fn remove_plant(bed: &mut GardenBed, placed_plant_id: &str) -> Option<PlacedPlant> {
    let index = bed.plants.iter().position(|p| p.id == placed_plant_id)?;
    Some(bed.plants.remove(index))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Per-marker view state: drag and selection are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerState {
    pub drag: DragState,
    pub selected: bool,
}

impl MarkerState {
    /// A selected marker offers the remove button.
    pub fn shows_remove_action(&self) -> bool {
        self.selected
    }
}

/// Pointer interaction state for the markers of one bed.
///
/// At most one marker is dragged and at most one is selected at a time.
/// Switching to another bed resets both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridInteraction {
    bed_id: Option<String>,
    dragging: Option<String>,
    selected: Option<String>,
}

impl GridInteraction {
    pub fn new(bed_id: impl Into<String>) -> Self {
        Self {
            bed_id: Some(bed_id.into()),
            ..Self::default()
        }
    }

    pub fn bed_id(&self) -> Option<&str> {
        self.bed_id.as_deref()
    }

    /// Points the interaction at `bed_id`, resetting drag and selection if it changed.
    pub fn sync_bed(&mut self, bed_id: &str) {
        if self.bed_id.as_deref() != Some(bed_id) {
            *self = Self::new(bed_id);
        }
    }

    pub fn start_drag(&mut self, placed_plant_id: &str) {
        self.dragging = Some(placed_plant_id.to_string());
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Click on a marker: selects it, or deselects it if it was already selected.
    pub fn toggle_selection(&mut self, placed_plant_id: &str) {
        if self.selected.as_deref() == Some(placed_plant_id) {
            self.selected = None;
        } else {
            self.selected = Some(placed_plant_id.to_string());
        }
    }

    /// Called after a placement was removed from the bed.
    pub fn on_removed(&mut self, placed_plant_id: &str) {
        if self.dragging.as_deref() == Some(placed_plant_id) {
            self.dragging = None;
        }
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    pub fn marker(&self, placed_plant_id: &str) -> MarkerState {
        MarkerState {
            drag: if self.dragging.as_deref() == Some(placed_plant_id) {
                DragState::Dragging
            } else {
                DragState::Idle
            },
            selected: self.selected.as_deref() == Some(placed_plant_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::plants::get_plant_by_id;
    use chrono::{Duration, Utc};

    fn empty_bed() -> GardenBed {
        let now = Utc::now();
        GardenBed {
            id: "bed".into(),
            name: "Veg patch".into(),
            width: 8,
            height: 6,
            plants: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    fn plant(id: &str) -> Plant {
        get_plant_by_id(id).unwrap_or_else(|| panic!("Plant '{}' not found", id))
    }

    #[test]
    fn test_cell_from_point_floors() {
        assert_eq!(cell_from_point(100.0, 100.0, 0.0, 0.0, 48.0), GridPosition::new(2, 2));
        assert_eq!(cell_from_point(47.9, 48.0, 0.0, 0.0, 48.0), GridPosition::new(0, 1));
    }

    #[test]
    fn test_cell_from_point_respects_origin() {
        assert_eq!(cell_from_point(160.0, 60.0, 64.0, 12.0, 48.0), GridPosition::new(2, 1));
    }

    #[test]
    fn test_cell_from_point_negative_outside_origin() {
        assert_eq!(cell_from_point(-1.0, -49.0, 0.0, 0.0, 48.0), GridPosition::new(-1, -2));
    }

    #[test]
    fn test_cell_from_point_overflows_bed() {
        // 8 wide bed, dropped 20 cells to the right
        assert_eq!(cell_from_point(20.0 * 48.0 + 1.0, 0.0, 0.0, 0.0, 48.0), GridPosition::new(20, 0));
    }

    #[test]
    fn test_place_tomato_scenario() {
        let mut bed = empty_bed();
        let now = Utc::now();
        let cell = GridGeometry::default().cell_at(100.0, 100.0);
        let id = place(&mut bed, &plant("tomato"), cell, &now);

        let placed = bed.plant(&id).expect("placed plant is in the bed");
        assert_eq!(placed.position, GridPosition::new(2, 2));
        assert_eq!(placed.size, CellSize { width: 1, height: 1 });
        assert_eq!(placed.last_watered, Some(now));
        assert_eq!(placed.next_watering, Some(now + Duration::days(3)));
    }

    #[test]
    fn test_place_allows_stacking() {
        let mut bed = empty_bed();
        let now = Utc::now();
        let cell = GridPosition::new(1, 1);
        let first = place(&mut bed, &plant("basil"), cell, &now);
        let second = place(&mut bed, &plant("mint"), cell, &now);
        assert_ne!(first, second);
        assert_eq!(bed.plants.len(), 2);
        assert_eq!(bed.plant_at(cell).map(|p| p.id.clone()), Some(second));
    }

    #[test]
    fn test_place_keeps_out_of_bounds_position() {
        let mut bed = empty_bed();
        let id = place(&mut bed, &plant("carrot"), GridPosition::new(-3, 40), &Utc::now());
        assert_eq!(bed.plant(&id).map(|p| p.position), Some(GridPosition::new(-3, 40)));
    }

    #[test]
    fn test_place_then_remove_restores_collection() {
        let mut bed = empty_bed();
        let now = Utc::now();
        place(&mut bed, &plant("basil"), GridPosition::new(0, 0), &now);
        place(&mut bed, &plant("carrot"), GridPosition::new(1, 0), &now);
        let before = bed.plants.clone();

        let id = place(&mut bed, &plant("tomato"), GridPosition::new(2, 0), &now);
        let removed = remove_plant(&mut bed, &id);

        assert!(removed.is_some());
        assert_eq!(bed.plants, before, "Round-trip must restore the original collection");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut bed = empty_bed();
        let now = Utc::now();
        let a = place(&mut bed, &plant("basil"), GridPosition::new(0, 0), &now);
        let b = place(&mut bed, &plant("carrot"), GridPosition::new(1, 0), &now);
        let c = place(&mut bed, &plant("radish"), GridPosition::new(2, 0), &now);
        remove_plant(&mut bed, &b);
        let ids: Vec<&str> = bed.plants.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec![a.as_str(), c.as_str()]);
        assert!(remove_plant(&mut bed, "missing").is_none());
    }

    #[test]
    fn test_move_rewrites_position_in_place() {
        let mut bed = empty_bed();
        let now = Utc::now();
        let a = place(&mut bed, &plant("basil"), GridPosition::new(0, 0), &now);
        let b = place(&mut bed, &plant("carrot"), GridPosition::new(1, 0), &now);
        assert!(move_plant(&mut bed, &a, GridPosition::new(5, 5)));
        assert_eq!(bed.plants[0].id, a, "Moving must not reorder the collection");
        assert_eq!(bed.plants[0].position, GridPosition::new(5, 5));
        assert_eq!(bed.plants[1].id, b);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let mut bed = empty_bed();
        place(&mut bed, &plant("basil"), GridPosition::new(0, 0), &Utc::now());
        let before = bed.clone();
        assert!(!move_plant(&mut bed, "missing", GridPosition::new(3, 3)));
        assert_eq!(bed, before);
    }

    #[test]
    fn test_drag_and_selection_are_independent() {
        let mut ui = GridInteraction::new("bed");
        ui.toggle_selection("p1");
        ui.start_drag("p1");
        assert_eq!(
            ui.marker("p1"),
            MarkerState {
                drag: DragState::Dragging,
                selected: true
            }
        );
        ui.end_drag();
        assert_eq!(ui.marker("p1").drag, DragState::Idle);
        assert!(ui.marker("p1").shows_remove_action(), "Ending a drag keeps the selection");
    }

    #[test]
    fn test_toggle_selection() {
        let mut ui = GridInteraction::new("bed");
        ui.toggle_selection("p1");
        assert_eq!(ui.selected(), Some("p1"));
        ui.toggle_selection("p2");
        assert_eq!(ui.selected(), Some("p2"), "Selecting another marker replaces the selection");
        ui.toggle_selection("p2");
        assert_eq!(ui.selected(), None);
    }

    #[test]
    fn test_bed_change_resets_state() {
        let mut ui = GridInteraction::new("bed-a");
        ui.toggle_selection("p1");
        ui.start_drag("p2");
        ui.sync_bed("bed-a");
        assert_eq!(ui.selected(), Some("p1"), "Same bed keeps state");
        ui.sync_bed("bed-b");
        assert_eq!(ui.bed_id(), Some("bed-b"));
        assert_eq!(ui.selected(), None);
        assert_eq!(ui.dragging(), None);
    }

    #[test]
    fn test_removal_clears_selection() {
        let mut ui = GridInteraction::new("bed");
        ui.toggle_selection("p1");
        ui.start_drag("p1");
        ui.on_removed("p1");
        assert_eq!(ui.marker("p1"), MarkerState::default());
    }
}
