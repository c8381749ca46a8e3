use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use garden_planner::{
    api::{openapi::ApiDoc, routes, state::AppState},
    config::Config,
    storage::{self, FileStore, KeyValueStore, MemoryStore},
    PlannerError,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>, PlannerError> {
    let store: Arc<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => Arc::new(FileStore::open(dir)?),
        None => {
            log::warn!("GARDEN_DATA_DIR not set, data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };
    if config.seed {
        storage::initialize(store.as_ref())?;
    }
    Ok(store)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(std::io::Error::other)?;
    let store = open_store(&config).map_err(std::io::Error::other)?;
    let state = web::Data::new(AppState::new(store));

    let bind_addr = config.bind_addr.clone();
    log::info!("Garden planner API listening on http://{bind_addr}");
    log::info!("Swagger UI at http://{bind_addr}/swagger-ui/");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(routes::json_config())
            .configure(routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
