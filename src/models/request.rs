use std::collections::{BTreeMap, HashMap};

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::{
    logic::{
        calendar::{CalendarEntry, MonthSummary},
        timeline::Segment,
    },
    models::{
        garden::{Garden, Placement},
        plant::{ActivityType, Plant},
        Matrix,
    },
};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    PlantApiResponse = ApiResponse<Plant>,
    CategoriesApiResponse = ApiResponse<CategoriesResponse>,
    TimelineApiResponse = ApiResponse<TimelineResponse>,
    GardenApiResponse = ApiResponse<GardenDetail>,
    PlacementApiResponse = ApiResponse<Placement>,
    CalendarApiResponse = ApiResponse<CalendarResponse>,
    CalendarSummaryApiResponse = ApiResponse<CalendarSummaryResponse>,
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    PlantListResponse = PaginatedResponse<Plant>,
    GardenListResponse = PaginatedResponse<GardenSummary>,
)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

/// Body returned with every 4xx/5xx status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Catalogue listing parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlantQuery {
    /// Exact category, e.g. `alliums`.
    pub category: Option<String>,
    /// Case-insensitive search in name and description.
    pub q: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<usize>,
    /// Page size (default: everything on one page).
    pub per_page: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimelineQuery {
    /// Timeline length in months (default 12).
    pub months: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    /// Month index 0–11 (default: the current month).
    pub month: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub activity_type: ActivityType,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub plant_id: String,
    pub total_months: u32,
    pub segments: Vec<Segment>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewGardenRequest {
    pub name: String,
    pub rows: u32,
    pub columns: u32,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacePlantRequest {
    pub plant_id: String,
    /// Defaults to `"default"`.
    pub variety: Option<String>,
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenSummary {
    pub id: String,
    pub name: String,
    pub rows: u32,
    pub columns: u32,
    /// `"<columns>x<rows>"`
    pub dimensions: String,
    pub placement_count: usize,
}

impl From<&Garden> for GardenSummary {
    fn from(garden: &Garden) -> Self {
        Self {
            id: garden.id.clone(),
            name: garden.name.clone(),
            rows: garden.rows,
            columns: garden.columns,
            dimensions: garden.dimensions_string(),
            placement_count: garden.placement_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenDetail {
    #[serde(flatten)]
    pub garden: Garden,
    pub dimensions: String,
    /// Plant id per cell, `grid[y][x]`; `null` for empty cells.
    pub grid: Matrix<Option<String>>,
    pub plant_counts: BTreeMap<String, usize>,
}

impl From<Garden> for GardenDetail {
    fn from(garden: Garden) -> Self {
        let grid = garden
            .grid()
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.map(|p| p.plant_id.clone())).collect())
            .collect();
        Self {
            dimensions: garden.dimensions_string(),
            plant_counts: garden.plant_counts(),
            grid,
            garden,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalendarResponse {
    pub month: i32,
    pub entries: Vec<CalendarEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalendarSummaryResponse {
    pub months: Vec<MonthSummary>,
}
