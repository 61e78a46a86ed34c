use serde::{Deserialize, Serialize};

/// USDA-style hardiness zone, keyed by its label ("1".."13").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardinessZone {
    pub zone: String,
    /// Representative minimum winter temperature, in °F.
    pub min_temp: i32,
    pub max_temp: i32,
    pub description: String,
}

/// Range of zones in which a plant thrives, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantZoneInfo {
    pub min_zone: u8,
    pub max_zone: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneCompatibility {
    Ideal,
    Possible,
    Challenging,
}
