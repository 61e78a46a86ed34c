use crate::logic::zone::is_suitable;
use crate::models::plant::{Plant, SunRequirement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SunFilter {
    #[default]
    All,
    Only(SunRequirement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneFilter {
    #[default]
    All,
    Suitable,
}

/// Plant guide query.
#[derive(Debug, Clone, Default)]
pub struct PlantQuery {
    /// Case-insensitive substring matched against name or description.
    pub search: String,
    pub sun: SunFilter,
    pub zone_filter: ZoneFilter,
    /// The user's zone, if known. Without it the zone filter is inactive.
    pub zone: Option<u8>,
}

/// Filters the catalog for the plant guide.
///
/// With a zone set, suitable plants come first, then alphabetical by name.
/// Without one, catalog order is kept.
pub fn filter_plants(catalog: &[Plant], query: &PlantQuery) -> Vec<Plant> {
    let needle = query.search.to_lowercase();

    let mut filtered: Vec<Plant> = catalog
        .iter()
        .filter(|p| {
            // Search by name or description
            if !p.name.to_lowercase().contains(&needle)
                && !p.description.to_lowercase().contains(&needle)
            {
                return false;
            }
            // Filter by sun requirement
            if let SunFilter::Only(sun) = query.sun {
                if p.sun_requirement != sun {
                    return false;
                }
            }
            // Filter by zone, only when a zone is known
            if let (ZoneFilter::Suitable, Some(zone)) = (query.zone_filter, query.zone) {
                if !is_suitable(&p.id, zone) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();

    if let Some(zone) = query.zone {
        filtered.sort_by(|a, b| {
            let a_rank = u8::from(!is_suitable(&a.id, zone));
            let b_rank = u8::from(!is_suitable(&b.id, zone));
            a_rank.cmp(&b_rank).then_with(|| a.name.cmp(&b.name))
        });
    }

    filtered
}

/// Planner sidebar search: name only, case-insensitive, catalog order.
pub fn search_plants_by_name(catalog: &[Plant], term: &str) -> Vec<Plant> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
