use std::collections::BTreeMap;

use crate::models::{
    plant::{GrowingInfo, Plant},
    Month,
};

struct Seed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    start_indoor: &'static [Month],
    transplant: &'static [Month],
    sow_outdoor: &'static [Month],
    harvest: &'static [Month],
    plants_per_square: u32,
    sun: &'static str,
    water: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "chives",
        name: "Chives",
        category: "alliums",
        description: "Chives are perennial herbs with mild onion flavor. They produce edible purple flowers that attract pollinators.",
        start_indoor: &[1, 2, 3],
        transplant: &[3, 4, 5],
        sow_outdoor: &[4, 5, 6, 7, 8],
        harvest: &[5, 6, 7, 8, 9, 10],
        plants_per_square: 16,
        sun: "full_sun",
        water: "moderate",
    },
    Seed {
        id: "garlic",
        name: "Garlic",
        category: "alliums",
        description: "Garlic is a pungent bulb vegetable that is easy to grow. Plant in fall for harvest the following summer.",
        start_indoor: &[],
        transplant: &[],
        sow_outdoor: &[8, 9, 10],
        harvest: &[5, 6, 7],
        plants_per_square: 9,
        sun: "full_sun",
        water: "low",
    },
    Seed {
        id: "leeks",
        name: "Leeks",
        category: "alliums",
        description: "Leeks are cold-hardy alliums with a mild onion flavor. They require a long growing season.",
        start_indoor: &[0, 1, 2],
        transplant: &[3, 4, 5],
        sow_outdoor: &[3, 4, 5],
        harvest: &[7, 8, 9, 10, 11],
        plants_per_square: 9,
        sun: "full_sun",
        water: "moderate",
    },
    Seed {
        id: "onions",
        name: "Onions",
        category: "alliums",
        description: "Onions are versatile vegetables grown for their bulbs. Choose varieties based on your daylight hours.",
        start_indoor: &[0, 1, 2],
        transplant: &[3, 4],
        sow_outdoor: &[3, 4],
        harvest: &[6, 7, 8],
        plants_per_square: 9,
        sun: "full_sun",
        water: "moderate",
    },
    Seed {
        id: "shallots",
        name: "Shallots",
        category: "alliums",
        description: "Shallots are milder than onions and grow in clusters. They are easy to grow and store well.",
        start_indoor: &[],
        transplant: &[],
        sow_outdoor: &[1, 2, 3, 9, 10],
        harvest: &[6, 7, 8],
        plants_per_square: 9,
        sun: "full_sun",
        water: "low_to_moderate",
    },
];

impl Seed {
    fn to_plant(&self) -> Plant {
        let mut additional_info = BTreeMap::new();
        additional_info.insert("sunRequirements".to_string(), self.sun.to_string());
        additional_info.insert("waterNeeds".to_string(), self.water.to_string());
        Plant {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category.to_string(),
            image_path: Some(self.id.to_string()),
            description: Some(self.description.to_string()),
            growing_info: GrowingInfo {
                start_indoor_months: self.start_indoor.to_vec(),
                transplant_months: self.transplant.to_vec(),
                sow_outdoor_months: self.sow_outdoor.to_vec(),
                harvest_months: self.harvest.to_vec(),
                plants_per_square: self.plants_per_square,
                additional_info,
            },
            varieties: BTreeMap::new(),
        }
    }
}

/// The starter catalogue.
pub fn seed_plants() -> Vec<Plant> {
    SEEDS.iter().map(Seed::to_plant).collect()
}
