use utoipa::OpenApi;

use crate::{
    logic::{
        calendar::{CalendarEntry, MonthSummary},
        timeline::Segment,
    },
    models::{
        garden::{Garden, Placement},
        plant::{ActivityType, GrowingInfo, MonthActivities, Plant},
        request::{
            CalendarApiResponse, CalendarResponse, CalendarSummaryApiResponse,
            CalendarSummaryResponse, CategoriesApiResponse, CategoriesResponse, ErrorResponse,
            GardenApiResponse, GardenDetail, GardenListResponse, GardenSummary, LegendEntry, Link,
            NewGardenRequest, Pagination, PlacePlantRequest, PlacementApiResponse,
            PlantApiResponse, PlantListResponse, TimelineApiResponse, TimelineResponse,
        },
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Planner API",
        description = "Plant catalogue, grid garden layouts and planting/harvest calendars.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::list_categories,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::plants::create_plant,
        crate::api::handlers::plants::update_plant,
        crate::api::handlers::plants::delete_plant,
        crate::api::handlers::plants::plant_timeline,
        crate::api::handlers::gardens::list_gardens,
        crate::api::handlers::gardens::get_garden,
        crate::api::handlers::gardens::create_garden,
        crate::api::handlers::gardens::delete_garden,
        crate::api::handlers::gardens::place_plant,
        crate::api::handlers::gardens::get_placement,
        crate::api::handlers::gardens::remove_placement,
        crate::api::handlers::calendar::month_calendar,
        crate::api::handlers::calendar::calendar_summary,
    ),
    components(
        schemas(
            // Catalogue
            ActivityType, GrowingInfo, MonthActivities, Plant, CategoriesResponse,
            // Timeline
            Segment, LegendEntry, TimelineResponse,
            // Gardens
            Garden, Placement, GardenSummary, GardenDetail, NewGardenRequest, PlacePlantRequest,
            // Calendar
            CalendarEntry, MonthSummary, CalendarResponse, CalendarSummaryResponse,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            PlantApiResponse,
            PlantListResponse,
            CategoriesApiResponse,
            TimelineApiResponse,
            GardenApiResponse,
            GardenListResponse,
            PlacementApiResponse,
            CalendarApiResponse,
            CalendarSummaryApiResponse,
        )
    ),
    tags(
        (name = "plants",   description = "Plant catalogue: list, detail, edit, growing timeline"),
        (name = "gardens",  description = "Grid gardens: create, inspect, place and remove plants"),
        (name = "calendar", description = "Monthly planting and harvest overview"),
    )
)]
pub struct ApiDoc;
