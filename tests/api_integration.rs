use actix_web::{test, web, App};
use garden_planner::api::{
    routes::{configure, json_config},
    state::AppState,
};

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = AppState::seeded().expect("seeded state");
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .configure(configure)
}

// ---------------------------------------------------------------------------
// GET /api/plants
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_plants_returns_200() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_get_plants_items_have_required_fields() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let items = body["payload"].as_array().expect("payload must be an array");
    assert_eq!(items.len(), 5);
    for item in items {
        assert!(item.get("id").is_some(), "Each plant must have an 'id' field");
        assert!(item.get("name").is_some(), "Each plant must have a 'name' field");
        assert!(
            item["growingInfo"].get("harvestMonths").is_some(),
            "Each plant must have 'growingInfo.harvestMonths'"
        );
    }
    assert_eq!(body["pagination"]["total"], 5);
    assert!(body["_links"].get("self").is_some());
}

#[actix_web::test]
async fn test_get_plants_search_query() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants?q=onion").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = body["payload"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    // "onion" appears in the names or descriptions of these four.
    assert_eq!(ids, vec!["chives", "leeks", "onions", "shallots"]);
}

#[actix_web::test]
async fn test_get_plants_unknown_category_is_empty() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants?category=nightshades")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["payload"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_get_plants_paginated() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants?page=2&perPage=2")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = body["payload"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["leeks", "onions"]);
    assert_eq!(body["pagination"]["totalPages"], 3);
    assert!(body["_links"].get("next").is_some());
}

#[actix_web::test]
async fn test_get_categories() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants/categories")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["categories"], serde_json::json!(["alliums"]));
}

// ---------------------------------------------------------------------------
// /api/plants/{id}
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_plant_known_id() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants/garlic").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["name"], "Garlic");
    assert_eq!(body["payload"]["growingInfo"]["plantsPerSquare"], 9);
}

#[actix_web::test]
async fn test_get_plant_unknown_id_returns_404_with_message() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/plants/dragonfruit").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let error_msg = body.get("error").and_then(|v| v.as_str()).unwrap_or("");
    assert!(!error_msg.is_empty(), "An error message must be returned for an unknown id");
}

#[actix_web::test]
async fn test_create_update_delete_plant() {
    let app = test::init_service(build_app()).await;
    let mut plant = serde_json::json!({
        "id": "tomato",
        "name": "Tomato",
        "category": "nightshades",
        "growingInfo": {
            "startIndoorMonths": [1, 2],
            "transplantMonths": [4],
            "harvestMonths": [6, 7, 8]
        }
    });

    let req = test::TestRequest::post()
        .uri("/api/plants")
        .set_json(&plant)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/plants")
        .set_json(&plant)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409, "Same id twice must conflict");

    plant["name"] = serde_json::json!("Cherry tomato");
    let req = test::TestRequest::put()
        .uri("/api/plants/tomato")
        .set_json(&plant)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["name"], "Cherry tomato");

    let req = test::TestRequest::delete().uri("/api/plants/tomato").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get().uri("/api/plants/tomato").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_create_plant_with_out_of_range_month_returns_400() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "id": "odd",
        "name": "Odd",
        "category": "misc",
        "growingInfo": { "harvestMonths": [12] }
    });
    let req = test::TestRequest::post()
        .uri("/api/plants")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_update_plant_id_mismatch_returns_400() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({ "id": "leeks", "name": "Leeks", "category": "alliums" });
    let req = test::TestRequest::put()
        .uri("/api/plants/garlic")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_create_plant_malformed_json_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/plants")
        .insert_header(("content-type", "application/json"))
        .set_payload("{invalid json}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// GET /api/plants/{id}/timeline
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_timeline_for_leeks() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants/leeks/timeline")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let segments = body["payload"]["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 4, "One run per activity for leeks");
    assert_eq!(segments[0]["activityType"], "startIndoor");
    assert_eq!(segments[3]["activityType"], "harvest");
    assert_eq!(segments[3]["startMonth"], 7);
    assert_eq!(segments[3]["endMonth"], 11);
    assert_eq!(body["payload"]["totalMonths"], 12);
    assert_eq!(body["payload"]["legend"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_timeline_splits_shallot_sowing() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants/shallots/timeline")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let sow: Vec<(i64, i64)> = body["payload"]["segments"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["activityType"] == "sowOutdoor")
        .map(|s| (s["startMonth"].as_i64().unwrap(), s["endMonth"].as_i64().unwrap()))
        .collect();
    assert_eq!(sow, vec![(1, 3), (9, 10)]);
}

#[actix_web::test]
async fn test_timeline_zero_months_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/plants/leeks/timeline?months=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// /api/calendar
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_calendar_for_january() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/calendar?month=0").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = body["payload"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["plantId"].as_str())
        .collect();
    assert_eq!(ids, vec!["leeks", "onions"]);
}

#[actix_web::test]
async fn test_calendar_default_month_is_valid() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/calendar").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let month = body["payload"]["month"].as_i64().unwrap();
    assert!((0..12).contains(&month));
}

#[actix_web::test]
async fn test_calendar_invalid_month_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/calendar?month=12").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_calendar_summary_has_twelve_months() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/calendar/summary")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["months"].as_array().unwrap().len(), 12);
}
