use crate::data::plants::get_plant_by_id;
use crate::models::{
    garden::{GardenBed, PlacedPlant},
    plant::Plant,
};

/// Catalog entries for the plant's companions. Unknown ids are skipped.
pub fn companions_of(plant: &Plant) -> Vec<Plant> {
    plant.companions.iter().filter_map(|id| get_plant_by_id(id)).collect()
}

/// Catalog entries for the plants to keep away from this one.
pub fn antagonists_of(plant: &Plant) -> Vec<Plant> {
    plant.avoid.iter().filter_map(|id| get_plant_by_id(id)).collect()
}

/// True when neither plant lists the other in its avoid list.
pub fn is_compatible(a: &Plant, b: &Plant) -> bool {
    !a.avoid.iter().any(|c| c == &b.id) && !b.avoid.iter().any(|c| c == &a.id)
}

/// Placements next to `placed_plant_id` that clash with it.
pub fn neighbour_conflicts<'a>(bed: &'a GardenBed, placed_plant_id: &str) -> Vec<&'a PlacedPlant> {
    let Some(placed) = bed.plant(placed_plant_id) else {
        return vec![];
    };
    let Some(plant) = get_plant_by_id(&placed.plant_id) else {
        return vec![];
    };
    bed.neighbors(placed.position)
        .into_iter()
        .filter(|n| n.id != placed.id)
        .filter(|n| match get_plant_by_id(&n.plant_id) {
            Some(other) => !is_compatible(&plant, &other),
            None => false,
        })
        .collect()
}
