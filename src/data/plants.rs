use crate::models::plant::{Plant, SunRequirement};

struct PlantSeed {
    id: &'static str,
    name: &'static str,
    emoji: &'static str,
    sun: SunRequirement,
    water_frequency: u32,
    spacing: u32,
    companions: &'static [&'static str],
    avoid: &'static [&'static str],
    description: &'static str,
    tips: &'static [&'static str],
    color: &'static str,
}

const CATALOG: &[PlantSeed] = &[
    PlantSeed {
        id: "tomato",
        name: "Tomato",
        emoji: "🍅",
        sun: SunRequirement::FullSun,
        water_frequency: 3,
        spacing: 24,
        companions: &["basil", "carrot", "lettuce"],
        avoid: &["cucumber", "zucchini"],
        description: "A warm-season favourite that rewards steady watering with heavy harvests.",
        tips: &[
            "Stake or cage plants early",
            "Water at the base to prevent leaf disease",
            "Pinch suckers for larger fruit",
        ],
        color: "#e53e3e",
    },
    PlantSeed {
        id: "basil",
        name: "Basil",
        emoji: "🌿",
        sun: SunRequirement::FullSun,
        water_frequency: 2,
        spacing: 12,
        companions: &["tomato", "pepper"],
        avoid: &["mint"],
        description: "Fragrant herb that thrives in heat and pairs well with tomatoes.",
        tips: &["Pinch flower buds to keep leaves coming", "Harvest from the top down"],
        color: "#38a169",
    },
    PlantSeed {
        id: "carrot",
        name: "Carrot",
        emoji: "🥕",
        sun: SunRequirement::FullSun,
        water_frequency: 3,
        spacing: 3,
        companions: &["tomato", "lettuce", "radish"],
        avoid: &[],
        description: "Root crop that prefers loose, stone-free soil.",
        tips: &["Thin seedlings to 3 inches", "Keep soil evenly moist for straight roots"],
        color: "#dd6b20",
    },
    PlantSeed {
        id: "lettuce",
        name: "Lettuce",
        emoji: "🥬",
        sun: SunRequirement::PartialShade,
        water_frequency: 2,
        spacing: 8,
        companions: &["carrot", "radish", "strawberry"],
        avoid: &[],
        description: "Quick-growing salad green that prefers cool weather.",
        tips: &["Sow every two weeks for a steady harvest", "Shade in hot weather to delay bolting"],
        color: "#68d391",
    },
    PlantSeed {
        id: "pepper",
        name: "Pepper",
        emoji: "🫑",
        sun: SunRequirement::FullSun,
        water_frequency: 3,
        spacing: 18,
        companions: &["basil", "carrot"],
        avoid: &[],
        description: "Sweet or hot, peppers love warm soil and long summers.",
        tips: &["Wait for warm nights before planting out", "Mulch to keep moisture even"],
        color: "#c53030",
    },
    PlantSeed {
        id: "cucumber",
        name: "Cucumber",
        emoji: "🥒",
        sun: SunRequirement::FullSun,
        water_frequency: 2,
        spacing: 12,
        companions: &["radish", "lettuce", "sunflower"],
        avoid: &["tomato"],
        description: "Vigorous vine that needs consistent water to avoid bitter fruit.",
        tips: &["Grow up a trellis to save space", "Pick often to keep plants producing"],
        color: "#2f855a",
    },
    PlantSeed {
        id: "strawberry",
        name: "Strawberry",
        emoji: "🍓",
        sun: SunRequirement::FullSun,
        water_frequency: 2,
        spacing: 12,
        companions: &["lettuce"],
        avoid: &[],
        description: "Perennial berry that spreads by runners.",
        tips: &["Mulch with straw to keep fruit clean", "Replace plants every three years"],
        color: "#f56565",
    },
    PlantSeed {
        id: "sunflower",
        name: "Sunflower",
        emoji: "🌻",
        sun: SunRequirement::FullSun,
        water_frequency: 4,
        spacing: 18,
        companions: &["cucumber"],
        avoid: &[],
        description: "Tall annual that attracts pollinators to the whole garden.",
        tips: &["Plant on the north side so it does not shade other crops"],
        color: "#ecc94b",
    },
    PlantSeed {
        id: "zucchini",
        name: "Zucchini",
        emoji: "🥒",
        sun: SunRequirement::FullSun,
        water_frequency: 3,
        spacing: 36,
        companions: &["radish", "sunflower"],
        avoid: &["tomato"],
        description: "Prolific summer squash; one or two plants feed a family.",
        tips: &["Harvest at 6-8 inches for best flavour", "Water the soil, not the leaves"],
        color: "#48bb78",
    },
    PlantSeed {
        id: "mint",
        name: "Mint",
        emoji: "🌱",
        sun: SunRequirement::PartialShade,
        water_frequency: 2,
        spacing: 18,
        companions: &["tomato"],
        avoid: &["basil"],
        description: "Hardy herb that spreads aggressively if left unchecked.",
        tips: &["Grow in a sunken pot to contain roots"],
        color: "#81e6d9",
    },
    PlantSeed {
        id: "lavender",
        name: "Lavender",
        emoji: "💜",
        sun: SunRequirement::FullSun,
        water_frequency: 7,
        spacing: 18,
        companions: &[],
        avoid: &[],
        description: "Drought-tolerant perennial with fragrant purple spikes.",
        tips: &["Plant in well-drained soil", "Prune after flowering to keep it compact"],
        color: "#9f7aea",
    },
    PlantSeed {
        id: "radish",
        name: "Radish",
        emoji: "🔴",
        sun: SunRequirement::PartialShade,
        water_frequency: 2,
        spacing: 2,
        companions: &["carrot", "lettuce", "cucumber"],
        avoid: &[],
        description: "Fast root crop ready in under a month.",
        tips: &["Sow thinly and harvest promptly"],
        color: "#ed64a6",
    },
];

impl PlantSeed {
    fn to_plant(&self) -> Plant {
        Plant {
            id: self.id.into(),
            name: self.name.into(),
            emoji: self.emoji.into(),
            sun_requirement: self.sun,
            water_frequency: self.water_frequency,
            spacing: self.spacing,
            companions: self.companions.iter().map(|s| s.to_string()).collect(),
            avoid: self.avoid.iter().map(|s| s.to_string()).collect(),
            description: self.description.into(),
            tips: self.tips.iter().map(|s| s.to_string()).collect(),
            color: self.color.into(),
        }
    }
}

/// The whole plant catalog, in display order.
pub fn get_all_plants() -> Vec<Plant> {
    CATALOG.iter().map(PlantSeed::to_plant).collect()
}

pub fn get_plant_by_id(id: &str) -> Option<Plant> {
    CATALOG.iter().find(|p| p.id == id).map(PlantSeed::to_plant)
}
