use crate::models::plant::Plant;

/// Catalogue filter: both criteria are optional and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct PlantFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring of the name or description.
    pub query: Option<String>,
}

impl PlantFilter {
    pub fn matches(&self, plant: &Plant) -> bool {
        if let Some(ref category) = self.category {
            if &plant.category != category {
                return false;
            }
        }
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            let in_name = plant.name.to_lowercase().contains(&query);
            let in_description = plant
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query));
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }
}

/// Returns the plants matching `filter`, in catalogue order.
pub fn filter_plants(plants: &[Plant], filter: &PlantFilter) -> Vec<Plant> {
    plants.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// Distinct categories in first-seen order.
pub fn categories(plants: &[Plant]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for plant in plants {
        if !seen.contains(&plant.category) {
            seen.push(plant.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::plants::seed_plants;

    fn tomato() -> Plant {
        Plant {
            id: "tomato".into(),
            name: "Tomato".into(),
            category: "nightshades".into(),
            image_path: None,
            description: None,
            growing_info: Default::default(),
            varieties: Default::default(),
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let db = seed_plants();
        assert_eq!(filter_plants(&db, &PlantFilter::default()).len(), db.len());
    }

    #[test]
    fn test_filter_by_category() {
        let mut db = seed_plants();
        db.push(tomato());
        let filter = PlantFilter {
            category: Some("alliums".into()),
            query: None,
        };
        let result = filter_plants(&db, &filter);
        assert!(!result.is_empty());
        for p in &result {
            assert_eq!(p.category, "alliums", "Plant {} is not an allium", p.id);
        }
        assert!(!result.iter().any(|p| p.id == "tomato"));
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let db = seed_plants();
        let filter = PlantFilter {
            category: None,
            query: Some("GARL".into()),
        };
        let ids: Vec<String> = filter_plants(&db, &filter).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["garlic".to_string()]);
    }

    #[test]
    fn test_query_matches_description() {
        let db = seed_plants();
        let filter = PlantFilter {
            category: None,
            query: Some("pollinators".into()),
        };
        let result = filter_plants(&db, &filter);
        assert!(result.iter().any(|p| p.id == "chives"));
    }

    #[test]
    fn test_plant_without_description_only_matches_name() {
        let filter = PlantFilter {
            category: None,
            query: Some("mat".into()),
        };
        assert!(filter.matches(&tomato()));
        let filter = PlantFilter {
            category: None,
            query: Some("juicy".into()),
        };
        assert!(!filter.matches(&tomato()));
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let filter = PlantFilter {
            category: None,
            query: Some("   ".into()),
        };
        assert!(filter.matches(&tomato()));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut db = seed_plants();
        db.insert(0, tomato());
        assert_eq!(categories(&db), vec!["nightshades".to_string(), "alliums".to_string()]);
    }
}
