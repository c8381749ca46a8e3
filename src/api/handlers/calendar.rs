use std::collections::HashMap;

use actix_web::{get, http::Method, web, HttpResponse, Responder};
use chrono::{Datelike, Local};

use crate::{
    api::{handlers::error_response, state::AppState},
    error::PlannerError,
    logic::calendar::{activity_counts, month_overview},
    models::{
        request::{
            link, ApiResponse, CalendarQuery, CalendarResponse, CalendarSummaryResponse,
        },
        Month, MONTHS_PER_YEAR,
    },
};

/// GET /api/calendar
/// What to start, transplant, sow and harvest in one month.
#[utoipa::path(
    get,
    path = "/api/calendar",
    tag = "calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Plants active in the month", body = CalendarApiResponse),
        (status = 400, description = "Month outside 0–11", body = ErrorResponse),
    )
)]
#[get("/calendar")]
pub async fn month_calendar(
    state: web::Data<AppState>,
    query: web::Query<CalendarQuery>,
) -> impl Responder {
    let month = query
        .month
        .unwrap_or_else(|| Local::now().month0() as Month);
    if !(0..MONTHS_PER_YEAR).contains(&month) {
        return error_response(PlannerError::invalid_input(
            "month",
            format!("{month} is outside 0..=11"),
        ));
    }
    match state.plants().and_then(|repo| repo.all()) {
        Ok(plants) => {
            let mut links = HashMap::new();
            links.insert(
                "self".into(),
                link(format!("/api/calendar?month={month}"), Method::GET),
            );
            links.insert(
                "next".into(),
                link(
                    format!("/api/calendar?month={}", (month + 1) % MONTHS_PER_YEAR),
                    Method::GET,
                ),
            );
            links.insert("summary".into(), link("/api/calendar/summary", Method::GET));
            HttpResponse::Ok().json(ApiResponse::new(
                CalendarResponse {
                    month,
                    entries: month_overview(&plants, month),
                },
                links,
            ))
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/calendar/summary
/// Number of plants per activity for every month of the year.
#[utoipa::path(
    get,
    path = "/api/calendar/summary",
    tag = "calendar",
    responses((status = 200, description = "Twelve monthly tallies", body = CalendarSummaryApiResponse))
)]
#[get("/calendar/summary")]
pub async fn calendar_summary(state: web::Data<AppState>) -> impl Responder {
    match state.plants().and_then(|repo| repo.all()) {
        Ok(plants) => {
            let mut links = HashMap::new();
            links.insert("self".into(), link("/api/calendar/summary", Method::GET));
            links.insert("calendar".into(), link("/api/calendar", Method::GET));
            HttpResponse::Ok().json(ApiResponse::new(
                CalendarSummaryResponse {
                    months: activity_counts(&plants),
                },
                links,
            ))
        }
        Err(e) => error_response(e),
    }
}
