use actix_web::{error::InternalError, web, HttpResponse};

use crate::api::handlers::{
    calendar_summary, create_garden, create_plant, delete_garden, delete_plant, get_garden,
    get_placement, get_plant, list_categories, list_gardens, list_plants, month_calendar,
    place_plant, plant_timeline, remove_placement, update_plant,
};

/// Registers every `/api` route. `AppState` must be provided as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Before `/plants/{id}` so "categories" is not taken for an id.
            .service(list_categories)
            .service(list_plants)
            .service(create_plant)
            .service(get_plant)
            .service(update_plant)
            .service(delete_plant)
            .service(plant_timeline)
            .service(list_gardens)
            .service(create_garden)
            .service(get_garden)
            .service(delete_garden)
            .service(place_plant)
            .service(get_placement)
            .service(remove_placement)
            .service(calendar_summary)
            .service(month_calendar),
    );
}

/// JSON extractor settings: malformed bodies become `400 {"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    })
}
