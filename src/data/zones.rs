use crate::models::zone::{HardinessZone, PlantZoneInfo};

pub const MIN_ZONE: u8 = 1;
pub const MAX_ZONE: u8 = 13;

const ZONE_DATA: [(i32, i32, &str); 13] = [
    (-60, -50, "Extreme cold, very short growing season"),
    (-50, -40, "Very cold, limited plant selection"),
    (-40, -30, "Cold winters, hardy perennials thrive"),
    (-30, -20, "Cold climate, good for cool-season crops"),
    (-20, -10, "Moderate cold, wide plant variety"),
    (-10, 0, "Mild winters, long growing season"),
    (0, 10, "Warm climate, many plant options"),
    (10, 20, "Mild, year-round gardening possible"),
    (20, 30, "Warm, tropical plants thrive"),
    (30, 40, "Hot climate, frost-free"),
    (40, 50, "Tropical, no frost"),
    (50, 60, "Tropical paradise"),
    (60, 70, "Extreme tropical"),
];

const PLANT_ZONES: &[(&str, u8, u8)] = &[
    ("tomato", 3, 11),
    ("basil", 4, 11),
    ("carrot", 3, 10),
    ("lettuce", 2, 11),
    ("pepper", 4, 11),
    ("cucumber", 4, 11),
    ("strawberry", 3, 10),
    ("sunflower", 2, 11),
    ("zucchini", 3, 11),
    ("mint", 3, 11),
    ("lavender", 5, 9),
    ("radish", 2, 10),
];

pub fn get_all_zones() -> Vec<HardinessZone> {
    ZONE_DATA
        .iter()
        .enumerate()
        .map(|(i, (min_temp, max_temp, description))| HardinessZone {
            zone: (i + 1).to_string(),
            min_temp: *min_temp,
            max_temp: *max_temp,
            description: (*description).into(),
        })
        .collect()
}

/// Looks up a zone by its label; `None` for anything outside "1".."13".
pub fn get_zone(label: &str) -> Option<HardinessZone> {
    let number = parse_zone_label(label)?;
    get_all_zones().into_iter().nth(usize::from(number - 1))
}

pub fn parse_zone_label(label: &str) -> Option<u8> {
    label
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|z| (MIN_ZONE..=MAX_ZONE).contains(z))
}

pub fn plant_zone_info(plant_id: &str) -> Option<PlantZoneInfo> {
    PLANT_ZONES
        .iter()
        .find(|(id, _, _)| *id == plant_id)
        .map(|(_, min_zone, max_zone)| PlantZoneInfo {
            min_zone: *min_zone,
            max_zone: *max_zone,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_zones_labelled_in_order() {
        let zones = get_all_zones();
        assert_eq!(zones.len(), 13);
        assert_eq!(zones[0].zone, "1");
        assert_eq!(zones[12].zone, "13");
        for pair in zones.windows(2) {
            assert!(pair[0].min_temp < pair[1].min_temp, "Zones must get warmer");
        }
    }

    #[test]
    fn test_get_zone_by_label() {
        let z = get_zone("7").expect("zone 7 exists");
        assert_eq!(z.min_temp, 0);
        assert_eq!(z.max_temp, 10);
        assert!(get_zone("14").is_none());
        assert!(get_zone("0").is_none());
        assert!(get_zone("seven").is_none());
    }

    #[test]
    fn test_parse_zone_label_trims() {
        assert_eq!(parse_zone_label(" 6 "), Some(6));
        assert_eq!(parse_zone_label(""), None);
    }

    #[test]
    fn test_lavender_zone_range() {
        let info = plant_zone_info("lavender").expect("lavender has zone data");
        assert_eq!((info.min_zone, info.max_zone), (5, 9));
        assert!(plant_zone_info("dragonfruit").is_none());
    }
}
