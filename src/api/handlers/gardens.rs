use std::collections::HashMap;

use actix_web::{
    delete, get,
    http::{Method, StatusCode},
    post, web, HttpResponse, Responder,
};
use chrono::Utc;

use crate::{
    api::{
        handlers::{error_body, error_response, paginate},
        state::AppState,
    },
    error::PlannerError,
    models::{
        garden::Garden,
        request::{
            link, ApiResponse, GardenDetail, GardenSummary, Links, NewGardenRequest,
            PaginatedResponse, PlacePlantRequest,
        },
    },
};

fn garden_links(id: &str) -> Links {
    let mut links = HashMap::new();
    links.insert("self".into(), link(format!("/api/gardens/{id}"), Method::GET));
    links.insert(
        "place".into(),
        link(format!("/api/gardens/{id}/plants"), Method::POST),
    );
    links.insert("collection".into(), link("/api/gardens", Method::GET));
    links
}

fn cell_links(id: &str, x: i32, y: i32) -> Links {
    let mut links = HashMap::new();
    let cell = format!("/api/gardens/{id}/plants/{x}/{y}");
    links.insert("self".into(), link(cell.clone(), Method::GET));
    links.insert("remove".into(), link(cell, Method::DELETE));
    links.insert("garden".into(), link(format!("/api/gardens/{id}"), Method::GET));
    links
}

/// Millisecond-stamped id, bumped until it is free.
fn next_garden_id(existing: &[Garden]) -> String {
    let mut stamp = Utc::now().timestamp_millis();
    loop {
        let id = format!("garden-{stamp}");
        if !existing.iter().any(|g| g.id == id) {
            return id;
        }
        stamp += 1;
    }
}

/// GET /api/gardens
#[utoipa::path(
    get,
    path = "/api/gardens",
    tag = "gardens",
    responses(
        (status = 200, description = "All gardens", body = GardenListResponse),
        (status = 500, description = "Stored gardens failed validation", body = ErrorResponse),
    )
)]
#[get("/gardens")]
pub async fn list_gardens(state: web::Data<AppState>) -> impl Responder {
    let gardens = match state.gardens().and_then(|repo| repo.all()) {
        Ok(gardens) => gardens,
        Err(e) => return error_response(e),
    };
    let summaries: Vec<GardenSummary> = gardens.iter().map(GardenSummary::from).collect();
    let (summaries, pagination) = paginate(summaries, None, None);
    let mut links = HashMap::new();
    links.insert("self".into(), link("/api/gardens", Method::GET));
    links.insert("create".into(), link("/api/gardens", Method::POST));
    HttpResponse::Ok().json(PaginatedResponse::new(summaries, links, pagination))
}

/// GET /api/gardens/{id}
/// The garden with its grid rendered row by row.
#[utoipa::path(
    get,
    path = "/api/gardens/{id}",
    tag = "gardens",
    params(("id" = String, Path, description = "Garden id")),
    responses(
        (status = 200, description = "The garden", body = GardenApiResponse),
        (status = 404, description = "Unknown garden", body = ErrorResponse),
    )
)]
#[get("/gardens/{id}")]
pub async fn get_garden(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.gardens().and_then(|repo| repo.get(&id)) {
        Ok(Some(garden)) => {
            HttpResponse::Ok().json(ApiResponse::new(GardenDetail::from(garden), garden_links(&id)))
        }
        Ok(None) => error_response(PlannerError::not_found("Garden", id)),
        Err(e) => error_response(e),
    }
}

/// POST /api/gardens
/// Creates an empty garden.
#[utoipa::path(
    post,
    path = "/api/gardens",
    tag = "gardens",
    request_body = NewGardenRequest,
    responses(
        (status = 201, description = "Garden created", body = GardenApiResponse),
        (status = 400, description = "Missing name, or size zero or too large", body = ErrorResponse),
    )
)]
#[post("/gardens")]
pub async fn create_garden(
    state: web::Data<AppState>,
    body: web::Json<NewGardenRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let name = request.name.trim();
    if name.is_empty() {
        return error_response(PlannerError::invalid_input("name", "must not be empty"));
    }
    if let Some(reason) = Garden::dimensions_error(request.rows, request.columns) {
        return error_response(PlannerError::invalid_input("rows/columns", reason));
    }

    let repo = match state.gardens_mut() {
        Ok(repo) => repo,
        Err(e) => return error_response(e),
    };
    let created = repo.all().and_then(|existing| {
        let garden = Garden::new(next_garden_id(&existing), name, request.rows, request.columns);
        repo.add(garden)
    });
    match created {
        Ok(garden) => {
            let links = garden_links(&garden.id);
            HttpResponse::Created().json(ApiResponse::new(GardenDetail::from(garden), links))
        }
        Err(e) => error_response(e),
    }
}

/// DELETE /api/gardens/{id}
#[utoipa::path(
    delete,
    path = "/api/gardens/{id}",
    tag = "gardens",
    params(("id" = String, Path, description = "Garden id")),
    responses(
        (status = 204, description = "Garden removed"),
        (status = 404, description = "Unknown garden", body = ErrorResponse),
    )
)]
#[delete("/gardens/{id}")]
pub async fn delete_garden(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.gardens_mut().and_then(|repo| repo.delete(&id)) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

/// POST /api/gardens/{id}/plants
/// Places a catalogue plant on one free cell.
#[utoipa::path(
    post,
    path = "/api/gardens/{id}/plants",
    tag = "gardens",
    params(("id" = String, Path, description = "Garden id")),
    request_body = PlacePlantRequest,
    responses(
        (status = 201, description = "Plant placed", body = PlacementApiResponse),
        (status = 400, description = "Cell outside the grid", body = ErrorResponse),
        (status = 404, description = "Unknown garden or plant", body = ErrorResponse),
        (status = 409, description = "Cell already occupied", body = ErrorResponse),
    )
)]
#[post("/gardens/{id}/plants")]
pub async fn place_plant(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PlacePlantRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let request = body.into_inner();

    match state.plants().and_then(|repo| repo.get(&request.plant_id)) {
        Ok(Some(_)) => {}
        Ok(None) => return error_response(PlannerError::not_found("Plant", request.plant_id)),
        Err(e) => return error_response(e),
    }

    let repo = match state.gardens_mut() {
        Ok(repo) => repo,
        Err(e) => return error_response(e),
    };
    let mut garden = match repo.get(&id) {
        Ok(Some(garden)) => garden,
        Ok(None) => return error_response(PlannerError::not_found("Garden", id)),
        Err(e) => return error_response(e),
    };

    let (x, y) = (request.x, request.y);
    let Some(placement) = garden
        .place(&request.plant_id, request.variety.as_deref(), x, y)
        .cloned()
    else {
        if !garden.in_bounds(x, y) {
            return error_body(
                StatusCode::BAD_REQUEST,
                format!(
                    "Cell ({x}, {y}) is outside the {} garden '{id}'.",
                    garden.dimensions_string()
                ),
            );
        }
        let occupant = garden
            .plant_at(x, y)
            .map(|p| p.plant_id.clone())
            .unwrap_or_default();
        return error_body(
            StatusCode::CONFLICT,
            format!("Cell ({x}, {y}) is already occupied by '{occupant}'."),
        );
    };
    match repo.update(garden) {
        Ok(_) => {
            log::debug!(
                "Placed '{}' ({}) at ({x}, {y}) in garden '{id}'",
                placement.plant_id,
                placement.variety
            );
            HttpResponse::Created().json(ApiResponse::new(placement, cell_links(&id, x, y)))
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/gardens/{id}/plants/{x}/{y}
#[utoipa::path(
    get,
    path = "/api/gardens/{id}/plants/{x}/{y}",
    tag = "gardens",
    params(
        ("id" = String, Path, description = "Garden id"),
        ("x" = i32, Path, description = "Column"),
        ("y" = i32, Path, description = "Row"),
    ),
    responses(
        (status = 200, description = "Placement at the cell", body = PlacementApiResponse),
        (status = 404, description = "Unknown garden or empty cell", body = ErrorResponse),
    )
)]
#[get("/gardens/{id}/plants/{x}/{y}")]
pub async fn get_placement(
    state: web::Data<AppState>,
    path: web::Path<(String, i32, i32)>,
) -> impl Responder {
    let (id, x, y) = path.into_inner();
    let garden = match state.gardens().and_then(|repo| repo.get(&id)) {
        Ok(Some(garden)) => garden,
        Ok(None) => return error_response(PlannerError::not_found("Garden", id)),
        Err(e) => return error_response(e),
    };
    match garden.plant_at(x, y) {
        Some(placement) => {
            HttpResponse::Ok().json(ApiResponse::new(placement.clone(), cell_links(&id, x, y)))
        }
        None => error_body(
            StatusCode::NOT_FOUND,
            format!("No plant at ({x}, {y}) in garden '{id}'."),
        ),
    }
}

/// DELETE /api/gardens/{id}/plants/{x}/{y}
#[utoipa::path(
    delete,
    path = "/api/gardens/{id}/plants/{x}/{y}",
    tag = "gardens",
    params(
        ("id" = String, Path, description = "Garden id"),
        ("x" = i32, Path, description = "Column"),
        ("y" = i32, Path, description = "Row"),
    ),
    responses(
        (status = 204, description = "Plant removed"),
        (status = 404, description = "Unknown garden or empty cell", body = ErrorResponse),
    )
)]
#[delete("/gardens/{id}/plants/{x}/{y}")]
pub async fn remove_placement(
    state: web::Data<AppState>,
    path: web::Path<(String, i32, i32)>,
) -> impl Responder {
    let (id, x, y) = path.into_inner();
    let repo = match state.gardens_mut() {
        Ok(repo) => repo,
        Err(e) => return error_response(e),
    };
    let mut garden = match repo.get(&id) {
        Ok(Some(garden)) => garden,
        Ok(None) => return error_response(PlannerError::not_found("Garden", id)),
        Err(e) => return error_response(e),
    };
    if !garden.remove_plant(x, y) {
        return error_body(
            StatusCode::NOT_FOUND,
            format!("No plant at ({x}, {y}) in garden '{id}'."),
        );
    }
    match repo.update(garden) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}
