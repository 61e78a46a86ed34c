use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SunRequirement {
    FullSun,
    PartialShade,
    Shade,
}

impl SunRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            SunRequirement::FullSun => "Full Sun (6+ hours)",
            SunRequirement::PartialShade => "Partial Shade (3-6 hours)",
            SunRequirement::Shade => "Shade (< 3 hours)",
        }
    }
}

/// Read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub sun_requirement: SunRequirement,
    /// Days between two waterings, always at least 1.
    pub water_frequency: u32,
    /// Spacing between plants, in inches.
    pub spacing: u32,
    pub companions: Vec<String>,
    pub avoid: Vec<String>,
    pub description: String,
    pub tips: Vec<String>,
    pub color: String,
}
