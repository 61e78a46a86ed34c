use crate::data::zones::plant_zone_info;
use crate::models::zone::ZoneCompatibility;

/// Share of a plant's zone range trimmed from each end to get its ideal core.
pub const IDEAL_BUFFER_RATIO: f64 = 0.2;

/// Approximates a hardiness zone from coordinates.
///
/// Latitude bands tuned for the continental US, shifted one zone warmer on the
/// coasts (west of -120° or east of -75°) for the four middle bands. Elevation
/// and local climate are ignored; this is a coarse guess, not a map lookup.
pub fn zone_from_coordinates(latitude: f64, longitude: f64) -> String {
    let coastal: u8 = if longitude < -120.0 || longitude > -75.0 {
        1
    } else {
        0
    };

    let zone = if latitude >= 48.0 {
        3
    } else if latitude >= 45.0 {
        4
    } else if latitude >= 42.0 {
        5 + coastal
    } else if latitude >= 39.0 {
        6 + coastal
    } else if latitude >= 36.0 {
        7 + coastal
    } else if latitude >= 33.0 {
        8 + coastal
    } else if latitude >= 30.0 {
        9
    } else if latitude >= 27.0 {
        10
    } else if latitude >= 24.0 {
        11
    } else {
        12
    };
    zone.to_string()
}

/// Grades a plant against a zone. Plants without zone data are always `Possible`.
pub fn zone_compatibility(plant_id: &str, zone: u8) -> ZoneCompatibility {
    let Some(info) = plant_zone_info(plant_id) else {
        return ZoneCompatibility::Possible;
    };
    let min = f64::from(info.min_zone);
    let max = f64::from(info.max_zone);
    let zone = f64::from(zone);
    let buffer = (max - min) * IDEAL_BUFFER_RATIO;

    if zone >= min + buffer && zone <= max - buffer {
        ZoneCompatibility::Ideal
    } else if zone >= min && zone <= max {
        ZoneCompatibility::Possible
    } else {
        ZoneCompatibility::Challenging
    }
}

/// True when the zone lies in the plant's range, or the plant has no zone data.
pub fn is_suitable(plant_id: &str, zone: u8) -> bool {
    match plant_zone_info(plant_id) {
        Some(info) => (info.min_zone..=info.max_zone).contains(&zone),
        None => true,
    }
}
