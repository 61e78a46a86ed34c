use chrono::{DateTime, Days, Duration, LocalResult, TimeZone, Utc};
use serde::Serialize;

use crate::data::plants::get_plant_by_id;
use crate::models::garden::{GardenBed, PlacedPlant};
use crate::models::plant::Plant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WateringStatus {
    Overdue,
    #[serde(rename = "today")]
    DueToday,
    #[serde(rename = "tomorrow")]
    DueTomorrow,
    Upcoming,
}

impl WateringStatus {
    /// Sort rank on the watering worklist, most urgent first.
    pub fn rank(&self) -> u8 {
        match self {
            WateringStatus::Overdue => 0,
            WateringStatus::DueToday => 1,
            WateringStatus::DueTomorrow => 2,
            WateringStatus::Upcoming => 3,
        }
    }
}

/// One row of the watering worklist.
#[derive(Debug, Clone)]
pub struct WateringItem<'a> {
    pub bed: &'a GardenBed,
    pub placed_plant: &'a PlacedPlant,
    pub plant: Plant,
    pub status: WateringStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringSummary {
    pub overdue: usize,
    pub due_today: usize,
    /// Due tomorrow or later.
    pub upcoming: usize,
}

/// Next watering date: `frequency_days` calendar days after `last_watered`
/// in its own time zone, at the same wall-clock time.
///
/// A time skipped by a forward clock change moves one hour later; a repeated
/// time takes its first occurrence. `None` when the date is out of range.
pub fn schedule<Tz: TimeZone>(last_watered: &DateTime<Tz>, frequency_days: u32) -> Option<DateTime<Tz>> {
    let local = last_watered
        .naive_local()
        .checked_add_days(Days::new(u64::from(frequency_days)))?;
    let tz = last_watered.timezone();
    match tz.from_local_datetime(&local) {
        LocalResult::Single(next) => Some(next),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let shifted = local.checked_add_signed(Duration::hours(1))?;
            tz.from_local_datetime(&shifted).earliest()
        }
    }
}

/// Classifies a due date by calendar day, in the time zone of `now`.
pub fn classify<Tz: TimeZone>(next_watering: &DateTime<Utc>, now: &DateTime<Tz>) -> WateringStatus {
    let today = now.date_naive();
    let due = next_watering.with_timezone(&now.timezone()).date_naive();
    match due.signed_duration_since(today).num_days() {
        d if d < 0 => WateringStatus::Overdue,
        0 => WateringStatus::DueToday,
        1 => WateringStatus::DueTomorrow,
        _ => WateringStatus::Upcoming,
    }
}

/// Every scheduled plant across `beds`, most urgent first.
///
/// Plants without a next watering date, or whose catalog entry is missing,
/// are left out. Within one status, bed order then insertion order is kept.
pub fn build_worklist<'a, Tz: TimeZone>(
    beds: &'a [GardenBed],
    now: &DateTime<Tz>,
) -> Vec<WateringItem<'a>> {
    let mut items: Vec<WateringItem<'a>> = beds
        .iter()
        .flat_map(|bed| bed.plants.iter().map(move |placed| (bed, placed)))
        .filter_map(|(bed, placed_plant)| {
            let next = placed_plant.next_watering.as_ref()?;
            let Some(plant) = get_plant_by_id(&placed_plant.plant_id) else {
                log::debug!(
                    "skipping placed plant {} with unknown plant '{}'",
                    placed_plant.id,
                    placed_plant.plant_id
                );
                return None;
            };
            Some(WateringItem {
                bed,
                placed_plant,
                plant,
                status: classify(next, now),
            })
        })
        .collect();

    // sort_by_key is stable, ties stay in encounter order
    items.sort_by_key(|item| item.status.rank());
    items
}

pub fn summarize(items: &[WateringItem<'_>]) -> WateringSummary {
    items
        .iter()
        .fold(WateringSummary::default(), |mut summary, item| {
            match item.status {
                WateringStatus::Overdue => summary.overdue += 1,
                WateringStatus::DueToday => summary.due_today += 1,
                WateringStatus::DueTomorrow | WateringStatus::Upcoming => summary.upcoming += 1,
            }
            summary
        })
}

/// Records a watering at `now` and reschedules the next one, counting days
/// in the time zone of `now`.
pub fn mark_watered<Tz: TimeZone>(placed_plant: &mut PlacedPlant, frequency_days: u32, now: &DateTime<Tz>) {
    placed_plant.last_watered = Some(now.with_timezone(&Utc));
    placed_plant.next_watering = schedule(now, frequency_days).map(|next| next.with_timezone(&Utc));
    if placed_plant.next_watering.is_none() {
        log::warn!(
            "cannot schedule {} {frequency_days} day(s) ahead, leaving it unscheduled",
            placed_plant.id
        );
    }
}

/// A plant that needs water now or within the next day.
#[derive(Debug, Clone)]
pub struct ThirstyPlant<'a> {
    pub bed: &'a GardenBed,
    pub placed_plant: &'a PlacedPlant,
    pub is_overdue: bool,
}

/// Dashboard query: plants due at or before `now` (overdue), or within the
/// following 24 hours. Uses exact instants rather than calendar days.
pub fn plants_needing_water<'a>(beds: &'a [GardenBed], now: DateTime<Utc>) -> Vec<ThirstyPlant<'a>> {
    let horizon = now + Duration::days(1);
    beds.iter()
        .flat_map(|bed| bed.plants.iter().map(move |placed| (bed, placed)))
        .filter(|(_, placed)| get_plant_by_id(&placed.plant_id).is_some())
        .filter_map(|(bed, placed_plant)| {
            let next = placed_plant.next_watering?;
            if next <= now {
                Some(ThirstyPlant {
                    bed,
                    placed_plant,
                    is_overdue: true,
                })
            } else if next <= horizon {
                Some(ThirstyPlant {
                    bed,
                    placed_plant,
                    is_overdue: false,
                })
            } else {
                None
            }
        })
        .collect()
}
