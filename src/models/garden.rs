use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{PlannerError, Result},
    models::Matrix,
};

/// Variety recorded when a placement does not name one.
pub const DEFAULT_VARIETY: &str = "default";

/// Longest accepted side of a bed, in cells.
pub const MAX_SIDE: u32 = 1_000;
/// Largest accepted bed, in cells.
pub const MAX_CELLS: u64 = 10_000;

fn default_variety() -> String {
    DEFAULT_VARIETY.to_string()
}

/// Missing, `null` and `""` all load as [`DEFAULT_VARIETY`].
fn variety_or_default<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?
        .filter(|v| !v.is_empty())
        .unwrap_or_else(default_variety))
}

/// One plant instance on the grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub plant_id: String,
    #[serde(default = "default_variety", deserialize_with = "variety_or_default")]
    pub variety: String,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    fn at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }
}

/// A bounded bed of `columns` × `rows` cells, each holding at most one plant.
///
/// Placement failures are reported through `bool` / `Option` returns only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub id: String,
    pub name: String,
    pub rows: u32,
    pub columns: u32,
    #[serde(default)]
    pub plants: Vec<Placement>,
}

impl Garden {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rows: u32, columns: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rows,
            columns,
            plants: Vec::new(),
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.columns as i64 && y >= 0 && (y as i64) < self.rows as i64
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.plants.iter().any(|p| p.at(x, y))
    }

    /// Why a `rows` × `columns` bed is not acceptable, if it is not.
    pub fn dimensions_error(rows: u32, columns: u32) -> Option<String> {
        if rows == 0 || columns == 0 {
            return Some(format!("dimensions {columns}x{rows} must be positive"));
        }
        if rows > MAX_SIDE || columns > MAX_SIDE {
            return Some(format!("dimensions {columns}x{rows} exceed {MAX_SIDE} cells per side"));
        }
        if u64::from(rows) * u64::from(columns) > MAX_CELLS {
            return Some(format!("dimensions {columns}x{rows} exceed {MAX_CELLS} cells"));
        }
        None
    }

    /// Places `plant_id` at `(x, y)` and returns the new placement, or `None`,
    /// leaving the garden untouched, when the cell is outside the grid or
    /// already taken.
    pub fn place(
        &mut self,
        plant_id: &str,
        variety: Option<&str>,
        x: i32,
        y: i32,
    ) -> Option<&Placement> {
        if !self.in_bounds(x, y) || self.is_occupied(x, y) {
            return None;
        }
        let variety = variety
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VARIETY);
        self.plants.push(Placement {
            plant_id: plant_id.to_string(),
            variety: variety.to_string(),
            x,
            y,
        });
        self.plants.last()
    }

    /// [`Garden::place`] reporting only whether the plant went in.
    pub fn add_plant(&mut self, plant_id: &str, variety: Option<&str>, x: i32, y: i32) -> bool {
        self.place(plant_id, variety, x, y).is_some()
    }

    /// Returns true iff a placement at `(x, y)` was removed.
    pub fn remove_plant(&mut self, x: i32, y: i32) -> bool {
        let before = self.plants.len();
        self.plants.retain(|p| !p.at(x, y));
        self.plants.len() < before
    }

    pub fn plant_at(&self, x: i32, y: i32) -> Option<&Placement> {
        self.plants.iter().find(|p| p.at(x, y))
    }

    /// `"<columns>x<rows>"`
    pub fn dimensions_string(&self) -> String {
        format!("{}x{}", self.columns, self.rows)
    }

    pub fn placement_count(&self) -> usize {
        self.plants.len()
    }

    /// Row-major view of the bed: `grid()[y][x]`.
    pub fn grid(&self) -> Matrix<Option<&Placement>> {
        let mut cells: Matrix<Option<&Placement>> =
            vec![vec![None; self.columns as usize]; self.rows as usize];
        for placement in &self.plants {
            if self.in_bounds(placement.x, placement.y) {
                cells[placement.y as usize][placement.x as usize] = Some(placement);
            }
        }
        cells
    }

    /// Number of cells taken by each plant id.
    pub fn plant_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for placement in &self.plants {
            *counts.entry(placement.plant_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Full invariant check for gardens that did not come through `add_plant`,
    /// e.g. records read back from storage.
    pub fn validate(&self) -> Result<()> {
        if let Some(reason) = Self::dimensions_error(self.rows, self.columns) {
            return Err(PlannerError::invalid_record(&self.id, reason));
        }
        let mut seen = HashSet::with_capacity(self.plants.len());
        for placement in &self.plants {
            if !self.in_bounds(placement.x, placement.y) {
                return Err(PlannerError::invalid_record(
                    &self.id,
                    format!(
                        "placement '{}' at ({}, {}) is outside the {} grid",
                        placement.plant_id,
                        placement.x,
                        placement.y,
                        self.dimensions_string()
                    ),
                ));
            }
            if !seen.insert((placement.x, placement.y)) {
                return Err(PlannerError::invalid_record(
                    &self.id,
                    format!("cell ({}, {}) holds more than one placement", placement.x, placement.y),
                ));
            }
        }
        Ok(())
    }
}
