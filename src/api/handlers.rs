pub mod calendar;
pub mod gardens;
pub mod plants;

use actix_web::{http::StatusCode, HttpResponse};

use crate::{error::PlannerError, models::request::Pagination};

pub use calendar::{calendar_summary, month_calendar};
pub use gardens::{
    create_garden, delete_garden, get_garden, get_placement, list_gardens, place_plant,
    remove_placement,
};
pub use plants::{
    create_plant, delete_plant, get_plant, list_categories, list_plants, plant_timeline,
    update_plant,
};

/// `{"error": message}` with the given status.
pub fn error_body(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": message.into() }))
}

/// Maps a planner error onto its HTTP status.
pub fn error_response(err: PlannerError) -> HttpResponse {
    let status = match &err {
        PlannerError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        PlannerError::NotFound { .. } => StatusCode::NOT_FOUND,
        PlannerError::Duplicate { .. } => StatusCode::CONFLICT,
        PlannerError::Io { .. }
        | PlannerError::Serialization { .. }
        | PlannerError::InvalidRecord { .. }
        | PlannerError::Configuration { .. }
        | PlannerError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        log::error!("{err}");
    }
    error_body(status, err.to_string())
}

/// Slices `items` to one page. Without `per_page` everything fits on page 1.
pub fn paginate<T>(items: Vec<T>, page: Option<usize>, per_page: Option<usize>) -> (Vec<T>, Pagination) {
    let total = items.len();
    let per_page = per_page.filter(|&n| n > 0).unwrap_or(total.max(1));
    let page = page.filter(|&n| n > 0).unwrap_or(1);
    let total_pages = total.div_ceil(per_page);
    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();
    (
        items,
        Pagination {
            page,
            per_page,
            total,
            total_pages,
        },
    )
}
