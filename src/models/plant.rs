use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::{
    error::{PlannerError, Result},
    models::{Month, MONTHS_PER_YEAR},
};

/// The four gardening actions tracked per plant, in calendar render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    StartIndoor,
    Transplant,
    SowOutdoor,
    Harvest,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::StartIndoor,
        ActivityType::Transplant,
        ActivityType::SowOutdoor,
        ActivityType::Harvest,
    ];

    /// Band colour used on the growing calendar.
    pub fn color(self) -> &'static str {
        match self {
            ActivityType::StartIndoor => "#E91E63",
            ActivityType::Transplant => "#FF9800",
            ActivityType::SowOutdoor => "#9C27B0",
            ActivityType::Harvest => "#009688",
        }
    }

    /// Name of the matching month list in serialised `GrowingInfo`.
    pub fn field_name(self) -> &'static str {
        match self {
            ActivityType::StartIndoor => "startIndoorMonths",
            ActivityType::Transplant => "transplantMonths",
            ActivityType::SowOutdoor => "sowOutdoorMonths",
            ActivityType::Harvest => "harvestMonths",
        }
    }
}

fn default_plants_per_square() -> u32 {
    1
}

/// Month windows (indices 0–11) and spacing for a plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrowingInfo {
    #[serde(default)]
    pub start_indoor_months: Vec<i32>,
    #[serde(default)]
    pub transplant_months: Vec<i32>,
    #[serde(default)]
    pub sow_outdoor_months: Vec<i32>,
    #[serde(default)]
    pub harvest_months: Vec<i32>,
    /// Plants per square foot.
    #[serde(default = "default_plants_per_square")]
    pub plants_per_square: u32,
    /// Free-form notes, e.g. `sunRequirements` or `waterNeeds`.
    #[serde(default)]
    pub additional_info: BTreeMap<String, String>,
}

impl Default for GrowingInfo {
    fn default() -> Self {
        Self {
            start_indoor_months: Vec::new(),
            transplant_months: Vec::new(),
            sow_outdoor_months: Vec::new(),
            harvest_months: Vec::new(),
            plants_per_square: default_plants_per_square(),
            additional_info: BTreeMap::new(),
        }
    }
}

/// Which activities are possible in a given month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthActivities {
    pub start_indoors: bool,
    pub transplant: bool,
    pub sow_outdoors: bool,
    pub harvest: bool,
}

impl MonthActivities {
    pub fn is_empty(&self) -> bool {
        !(self.start_indoors || self.transplant || self.sow_outdoors || self.harvest)
    }

    pub fn has(&self, activity: ActivityType) -> bool {
        match activity {
            ActivityType::StartIndoor => self.start_indoors,
            ActivityType::Transplant => self.transplant,
            ActivityType::SowOutdoor => self.sow_outdoors,
            ActivityType::Harvest => self.harvest,
        }
    }
}

impl GrowingInfo {
    pub fn months(&self, activity: ActivityType) -> &[Month] {
        match activity {
            ActivityType::StartIndoor => &self.start_indoor_months,
            ActivityType::Transplant => &self.transplant_months,
            ActivityType::SowOutdoor => &self.sow_outdoor_months,
            ActivityType::Harvest => &self.harvest_months,
        }
    }

    pub fn can_start_indoors(&self, month: Month) -> bool {
        self.start_indoor_months.contains(&month)
    }

    pub fn can_transplant(&self, month: Month) -> bool {
        self.transplant_months.contains(&month)
    }

    pub fn can_sow_outdoors(&self, month: Month) -> bool {
        self.sow_outdoor_months.contains(&month)
    }

    pub fn can_harvest(&self, month: Month) -> bool {
        self.harvest_months.contains(&month)
    }

    pub fn month_activities(&self, month: Month) -> MonthActivities {
        MonthActivities {
            start_indoors: self.can_start_indoors(month),
            transplant: self.can_transplant(month),
            sow_outdoors: self.can_sow_outdoors(month),
            harvest: self.can_harvest(month),
        }
    }

    /// First month index outside `0..12`, together with its activity.
    pub fn out_of_range_month(&self) -> Option<(ActivityType, Month)> {
        ActivityType::ALL.iter().find_map(|&activity| {
            self.months(activity)
                .iter()
                .find(|m| !(0..MONTHS_PER_YEAR).contains(*m))
                .map(|&m| (activity, m))
        })
    }

    /// Checks month ranges and density; applied to records entering through the API.
    pub fn validate(&self) -> Result<()> {
        if let Some((activity, month)) = self.out_of_range_month() {
            return Err(PlannerError::invalid_input(
                format!("growingInfo.{}", activity.field_name()),
                format!("month {month} is outside 0..=11"),
            ));
        }
        if self.plants_per_square == 0 {
            return Err(PlannerError::invalid_input(
                "growingInfo.plantsPerSquare",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// A catalogue entry.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    /// e.g. `alliums`, `cole_crops`
    pub category: String,
    pub image_path: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub growing_info: GrowingInfo,
    /// Variety id → display name.
    #[serde(default)]
    pub varieties: BTreeMap<String, String>,
}

impl Plant {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PlannerError::invalid_input("id", "must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(PlannerError::invalid_input("name", "must not be empty"));
        }
        self.growing_info.validate()
    }
}
