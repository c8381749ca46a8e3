use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    plant::{ActivityType, MonthActivities, Plant},
    Month, MONTHS_PER_YEAR,
};

/// What can be done with one plant in a given month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub plant_id: String,
    pub name: String,
    pub activities: MonthActivities,
}

/// Per-month tally of plants with each activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub month: i32,
    pub start_indoor: usize,
    pub transplant: usize,
    pub sow_outdoor: usize,
    pub harvest: usize,
}

impl MonthSummary {
    fn count(&mut self, activities: &MonthActivities) {
        for activity in ActivityType::ALL {
            if !activities.has(activity) {
                continue;
            }
            match activity {
                ActivityType::StartIndoor => self.start_indoor += 1,
                ActivityType::Transplant => self.transplant += 1,
                ActivityType::SowOutdoor => self.sow_outdoor += 1,
                ActivityType::Harvest => self.harvest += 1,
            }
        }
    }
}

/// Plants with at least one activity in `month`, in catalogue order.
pub fn month_overview(plants: &[Plant], month: Month) -> Vec<CalendarEntry> {
    plants
        .iter()
        .filter_map(|plant| {
            let activities = plant.growing_info.month_activities(month);
            (!activities.is_empty()).then(|| CalendarEntry {
                plant_id: plant.id.clone(),
                name: plant.name.clone(),
                activities,
            })
        })
        .collect()
}

/// Twelve summaries, January first.
pub fn activity_counts(plants: &[Plant]) -> Vec<MonthSummary> {
    (0..MONTHS_PER_YEAR)
        .map(|month| {
            let mut summary = MonthSummary {
                month,
                ..MonthSummary::default()
            };
            for plant in plants {
                summary.count(&plant.growing_info.month_activities(month));
            }
            summary
        })
        .collect()
}
