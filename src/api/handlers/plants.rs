use std::collections::HashMap;

use actix_web::{
    delete, get,
    http::{Method, StatusCode},
    post, put, web, HttpResponse, Responder,
};

use crate::{
    api::{
        handlers::{error_body, error_response, paginate},
        state::AppState,
    },
    error::PlannerError,
    logic::{
        filter::{categories, filter_plants, PlantFilter},
        timeline::{compress, DEFAULT_TOTAL_MONTHS},
    },
    models::{
        plant::{ActivityType, Plant},
        request::{
            link, ApiResponse, CategoriesResponse, LegendEntry, Links, PaginatedResponse,
            PlantQuery, TimelineQuery, TimelineResponse,
        },
    },
};

fn plant_links(id: &str) -> Links {
    let mut links = HashMap::new();
    links.insert("self".into(), link(format!("/api/plants/{id}"), Method::GET));
    links.insert(
        "timeline".into(),
        link(format!("/api/plants/{id}/timeline"), Method::GET),
    );
    links.insert("collection".into(), link("/api/plants", Method::GET));
    links
}

/// GET /api/plants
/// Lists the catalogue, optionally filtered by category and search text.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    params(PlantQuery),
    responses(
        (status = 200, description = "Matching plants", body = PlantListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/plants")]
pub async fn list_plants(state: web::Data<AppState>, query: web::Query<PlantQuery>) -> impl Responder {
    let query = query.into_inner();
    let plants = match state.plants().and_then(|repo| repo.all()) {
        Ok(plants) => plants,
        Err(e) => return error_response(e),
    };
    let filter = PlantFilter {
        category: query.category,
        query: query.q,
    };
    let (page, pagination) = paginate(filter_plants(&plants, &filter), query.page, query.per_page);

    let mut links = HashMap::new();
    links.insert("self".into(), link("/api/plants", Method::GET));
    links.insert("create".into(), link("/api/plants", Method::POST));
    links.insert("categories".into(), link("/api/plants/categories", Method::GET));
    if pagination.page < pagination.total_pages {
        links.insert(
            "next".into(),
            link(
                format!("/api/plants?page={}&perPage={}", pagination.page + 1, pagination.per_page),
                Method::GET,
            ),
        );
    }
    HttpResponse::Ok().json(PaginatedResponse::new(page, links, pagination))
}

/// GET /api/plants/categories
#[utoipa::path(
    get,
    path = "/api/plants/categories",
    tag = "plants",
    responses((status = 200, description = "Distinct categories", body = CategoriesApiResponse))
)]
#[get("/plants/categories")]
pub async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    match state.plants().and_then(|repo| repo.all()) {
        Ok(plants) => {
            let mut links = HashMap::new();
            links.insert("self".into(), link("/api/plants/categories", Method::GET));
            links.insert("plants".into(), link("/api/plants", Method::GET));
            HttpResponse::Ok().json(ApiResponse::new(
                CategoriesResponse {
                    categories: categories(&plants),
                },
                links,
            ))
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/plants/{id}
#[utoipa::path(
    get,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id")),
    responses(
        (status = 200, description = "The plant", body = PlantApiResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{id}")]
pub async fn get_plant(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.plants().and_then(|repo| repo.get(&id)) {
        Ok(Some(plant)) => HttpResponse::Ok().json(ApiResponse::new(plant, plant_links(&id))),
        Ok(None) => error_response(PlannerError::not_found("Plant", id)),
        Err(e) => error_response(e),
    }
}

/// POST /api/plants
#[utoipa::path(
    post,
    path = "/api/plants",
    tag = "plants",
    request_body = Plant,
    responses(
        (status = 201, description = "Plant added", body = PlantApiResponse),
        (status = 400, description = "Invalid plant", body = ErrorResponse),
        (status = 409, description = "Id already taken", body = ErrorResponse),
    )
)]
#[post("/plants")]
pub async fn create_plant(state: web::Data<AppState>, body: web::Json<Plant>) -> impl Responder {
    let plant = body.into_inner();
    if let Err(e) = plant.validate() {
        return error_response(e);
    }
    match state.plants_mut().and_then(|repo| repo.add(plant)) {
        Ok(plant) => {
            let links = plant_links(&plant.id);
            HttpResponse::Created().json(ApiResponse::new(plant, links))
        }
        Err(e) => error_response(e),
    }
}

/// PUT /api/plants/{id}
#[utoipa::path(
    put,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id")),
    request_body = Plant,
    responses(
        (status = 200, description = "Plant replaced", body = PlantApiResponse),
        (status = 400, description = "Invalid plant or id mismatch", body = ErrorResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[put("/plants/{id}")]
pub async fn update_plant(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Plant>,
) -> impl Responder {
    let id = path.into_inner();
    let plant = body.into_inner();
    if plant.id != id {
        return error_body(
            StatusCode::BAD_REQUEST,
            format!("Body id '{}' does not match path id '{id}'.", plant.id),
        );
    }
    if let Err(e) = plant.validate() {
        return error_response(e);
    }
    match state.plants_mut().and_then(|repo| repo.update(plant)) {
        Ok(plant) => HttpResponse::Ok().json(ApiResponse::new(plant, plant_links(&id))),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/plants/{id}
#[utoipa::path(
    delete,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id")),
    responses(
        (status = 204, description = "Plant removed"),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[delete("/plants/{id}")]
pub async fn delete_plant(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.plants_mut().and_then(|repo| repo.delete(&id)) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

/// GET /api/plants/{id}/timeline
/// Calendar bands for one plant, one segment per run of consecutive months.
#[utoipa::path(
    get,
    path = "/api/plants/{id}/timeline",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id"), TimelineQuery),
    responses(
        (status = 200, description = "Timeline segments", body = TimelineApiResponse),
        (status = 400, description = "Zero-length timeline", body = ErrorResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{id}/timeline")]
pub async fn plant_timeline(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<TimelineQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let total_months = query.months.unwrap_or(DEFAULT_TOTAL_MONTHS);
    if total_months == 0 {
        return error_response(PlannerError::invalid_input("months", "must be at least 1"));
    }
    let plant = match state.plants().and_then(|repo| repo.get(&id)) {
        Ok(Some(plant)) => plant,
        Ok(None) => return error_response(PlannerError::not_found("Plant", id)),
        Err(e) => return error_response(e),
    };

    let segments = compress(&plant.growing_info, total_months).iter().collect();
    let legend = ActivityType::ALL
        .iter()
        .map(|&activity_type| LegendEntry {
            activity_type,
            color: activity_type.color().to_string(),
        })
        .collect();

    let mut links = HashMap::new();
    links.insert(
        "self".into(),
        link(format!("/api/plants/{id}/timeline"), Method::GET),
    );
    links.insert("plant".into(), link(format!("/api/plants/{id}"), Method::GET));
    HttpResponse::Ok().json(ApiResponse::new(
        TimelineResponse {
            plant_id: plant.id,
            total_months,
            segments,
            legend,
        },
        links,
    ))
}
