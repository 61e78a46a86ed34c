//! The user's garden: beds, placed plants and watering records, written
//! through to a [`KeyValueStore`] after every change.
//!
//! Every mutation writes a candidate state first and only then replaces the
//! in-memory copy, so a failed write leaves the garden as it was.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::clock::Clock;
use crate::data::plants::get_plant_by_id;
use crate::error::GardenError;
use crate::logic::grid::{self, GridGeometry};
use crate::logic::watering;
use crate::models::{
    garden::{
        GardenBed, GardenBedUpdate, NewGardenBed, PlacedPlant, WateringSchedule, BED_HEIGHT_RANGE,
        BED_WIDTH_RANGE,
    },
    GridPosition,
};
use crate::store::{GardenStorage, KeyValueStore};

pub struct Garden<S, C> {
    storage: GardenStorage<S>,
    clock: C,
    geometry: GridGeometry,
    beds: Vec<GardenBed>,
    schedules: Vec<WateringSchedule>,
}

impl<S: KeyValueStore, C: Clock> Garden<S, C> {
    /// Reads the stored garden once. Corrupt records load as empty.
    pub fn load(storage: GardenStorage<S>, clock: C) -> Self {
        let beds = storage.load_beds();
        let schedules = storage.load_schedules();
        log::info!(
            "loaded {} garden bed(s) and {} watering record(s)",
            beds.len(),
            schedules.len()
        );
        Self {
            storage,
            clock,
            geometry: GridGeometry::default(),
            beds,
            schedules,
        }
    }

    /// Sets the screen geometry used by the pointer-based operations.
    pub fn with_geometry(mut self, geometry: GridGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    pub fn beds(&self) -> &[GardenBed] {
        &self.beds
    }

    pub fn bed(&self, bed_id: &str) -> Option<&GardenBed> {
        self.beds.iter().find(|b| b.id == bed_id)
    }

    pub fn schedules(&self) -> &[WateringSchedule] {
        &self.schedules
    }

    pub fn schedule_for(&self, placed_plant_id: &str) -> Option<&WateringSchedule> {
        self.schedules.iter().find(|s| s.placed_plant_id == placed_plant_id)
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.clock.now().with_timezone(&Utc)
    }

    /// Creates an empty bed. The name is trimmed and must not be empty;
    /// width and height are clamped to the allowed ranges.
    pub fn add_garden_bed(&mut self, new_bed: NewGardenBed) -> Result<&GardenBed, GardenError> {
        let name = new_bed.name.trim();
        if name.is_empty() {
            return Err(GardenError::EmptyName);
        }
        let now = self.now_utc();
        let bed = GardenBed {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            width: new_bed.width.clamp(BED_WIDTH_RANGE.0, BED_WIDTH_RANGE.1),
            height: new_bed.height.clamp(BED_HEIGHT_RANGE.0, BED_HEIGHT_RANGE.1),
            plants: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.beds.push(bed);
        if let Err(err) = self.storage.save_beds(&self.beds) {
            self.beds.pop();
            return Err(err.into());
        }
        let bed = &self.beds[self.beds.len() - 1];
        log::info!("created garden bed '{}' ({}x{})", bed.name, bed.width, bed.height);
        Ok(bed)
    }

    /// Applies a partial update. Dimensions are taken as given.
    /// Returns false when no bed has that id.
    pub fn update_garden_bed(&mut self, bed_id: &str, update: GardenBedUpdate) -> Result<bool, GardenError> {
        let name = match update.name {
            Some(name) if name.trim().is_empty() => return Err(GardenError::EmptyName),
            Some(name) => Some(name.trim().to_string()),
            None => None,
        };
        let changed = self.with_bed(bed_id, |bed| {
            if let Some(name) = name {
                bed.name = name;
            }
            if let Some(width) = update.width {
                bed.width = width;
            }
            if let Some(height) = update.height {
                bed.height = height;
            }
            Some(())
        })?;
        Ok(changed.is_some())
    }

    /// Deletes a bed with all its plants and their watering records.
    pub fn delete_garden_bed(&mut self, bed_id: &str) -> Result<bool, GardenError> {
        let Some(index) = self.beds.iter().position(|b| b.id == bed_id) else {
            return Ok(false);
        };
        let mut beds = self.beds.clone();
        beds.remove(index);
        let schedules: Vec<WateringSchedule> = self
            .schedules
            .iter()
            .filter(|s| s.garden_bed_id != bed_id)
            .cloned()
            .collect();
        let schedules_changed = schedules.len() != self.schedules.len();

        self.save_all(&beds, schedules_changed.then_some(schedules.as_slice()))?;
        self.beds = beds;
        self.schedules = schedules;
        log::info!("deleted garden bed {bed_id}");
        Ok(true)
    }

    /// Drops a catalog plant onto a bed cell. Returns the new placement id,
    /// or `None` when the bed or the plant is unknown.
    pub fn drop_plant(
        &mut self,
        bed_id: &str,
        plant_id: &str,
        cell: GridPosition,
    ) -> Result<Option<String>, GardenError> {
        let Some(plant) = get_plant_by_id(plant_id) else {
            log::debug!("ignoring drop of unknown plant '{plant_id}'");
            return Ok(None);
        };
        let now = self.clock.now();
        self.with_bed(bed_id, |bed| Some(grid::place(bed, &plant, cell, &now)))
    }

    /// Drops a catalog plant at a pointer position, in the garden's geometry.
    pub fn drop_plant_at(
        &mut self,
        bed_id: &str,
        plant_id: &str,
        px: f64,
        py: f64,
    ) -> Result<Option<String>, GardenError> {
        let cell = self.geometry.cell_at(px, py);
        self.drop_plant(bed_id, plant_id, cell)
    }

    /// Moves a placement. Returns false, writing nothing, when bed or placement is unknown.
    pub fn move_plant(
        &mut self,
        bed_id: &str,
        placed_plant_id: &str,
        cell: GridPosition,
    ) -> Result<bool, GardenError> {
        let moved = self.with_bed(bed_id, |bed| {
            grid::move_plant(bed, placed_plant_id, cell).then_some(())
        })?;
        Ok(moved.is_some())
    }

    /// Moves a placement to the cell under a pointer position.
    pub fn move_plant_to(
        &mut self,
        bed_id: &str,
        placed_plant_id: &str,
        px: f64,
        py: f64,
    ) -> Result<bool, GardenError> {
        let cell = self.geometry.cell_at(px, py);
        self.move_plant(bed_id, placed_plant_id, cell)
    }

    pub fn remove_plant(
        &mut self,
        bed_id: &str,
        placed_plant_id: &str,
    ) -> Result<Option<PlacedPlant>, GardenError> {
        self.with_bed(bed_id, |bed| grid::remove_plant(bed, placed_plant_id))
    }

    /// Waters a placement now and reschedules it.
    ///
    /// Updates the copy inside its bed and, if one exists, the watering
    /// record with the same placement id; both are written in this call.
    /// A record is never created here. Unknown placements or plants are a no-op.
    pub fn mark_watered(&mut self, placed_plant_id: &str) -> Result<Option<PlacedPlant>, GardenError> {
        let Some((bed_index, plant_index)) = self.beds.iter().enumerate().find_map(|(b, bed)| {
            bed.plants
                .iter()
                .position(|p| p.id == placed_plant_id)
                .map(|p| (b, p))
        }) else {
            return Ok(None);
        };
        let mut updated = self.beds[bed_index].plants[plant_index].clone();
        let Some(plant) = get_plant_by_id(&updated.plant_id) else {
            log::debug!("cannot water {placed_plant_id}: unknown plant '{}'", updated.plant_id);
            return Ok(None);
        };
        watering::mark_watered(&mut updated, plant.water_frequency, &self.clock.now());

        let mut beds = self.beds.clone();
        beds[bed_index].plants[plant_index] = updated.clone();

        let record = self
            .schedules
            .iter()
            .position(|s| s.placed_plant_id == placed_plant_id);
        let schedules = match (record, updated.last_watered, updated.next_watering) {
            (Some(index), Some(last), Some(next)) => {
                let mut schedules = self.schedules.clone();
                schedules[index].last_watered = last;
                schedules[index].next_watering = next;
                Some(schedules)
            }
            _ => None,
        };

        self.save_all(&beds, schedules.as_deref())?;
        self.beds = beds;
        if let Some(schedules) = schedules {
            self.schedules = schedules;
        }
        log::info!("{} watered, next watering in {} day(s)", plant.name, plant.water_frequency);
        Ok(Some(updated))
    }

    /// All scheduled plants, most urgent first.
    pub fn watering_worklist(&self) -> Vec<watering::WateringItem<'_>> {
        watering::build_worklist(&self.beds, &self.clock.now())
    }

    pub fn watering_summary(&self) -> watering::WateringSummary {
        watering::summarize(&self.watering_worklist())
    }

    /// Plants due now or within the next 24 hours.
    pub fn plants_needing_water(&self) -> Vec<watering::ThirstyPlant<'_>> {
        watering::plants_needing_water(&self.beds, self.now_utc())
    }

    /// Runs `f` on a copy of a bed. When it returns `Some`, the copy's
    /// `updated_at` is bumped and it replaces the bed once the beds are
    /// written; `None` leaves everything untouched.
    fn with_bed<R>(
        &mut self,
        bed_id: &str,
        f: impl FnOnce(&mut GardenBed) -> Option<R>,
    ) -> Result<Option<R>, GardenError> {
        let now = self.now_utc();
        let Some(index) = self.beds.iter().position(|b| b.id == bed_id) else {
            log::debug!("no garden bed {bed_id}");
            return Ok(None);
        };
        let mut bed = self.beds[index].clone();
        let Some(result) = f(&mut bed) else {
            return Ok(None);
        };
        bed.updated_at = now;

        let previous = std::mem::replace(&mut self.beds[index], bed);
        if let Err(err) = self.storage.save_beds(&self.beds) {
            self.beds[index] = previous;
            return Err(err.into());
        }
        Ok(Some(result))
    }

    /// Writes `beds`, then `schedules` when given. If the second write fails
    /// the stored beds are put back to the ones still held in memory.
    fn save_all(
        &self,
        beds: &[GardenBed],
        schedules: Option<&[WateringSchedule]>,
    ) -> Result<(), GardenError> {
        self.storage.save_beds(beds)?;
        let Some(schedules) = schedules else {
            return Ok(());
        };
        if let Err(err) = self.storage.save_schedules(schedules) {
            if let Err(restore) = self.storage.save_beds(&self.beds) {
                log::error!("cannot restore garden beds after a failed write: {restore}");
            }
            return Err(err.into());
        }
        Ok(())
    }
}
