mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use sqlx::postgres::PgPoolOptions;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::services::{AccountService, ListingService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    handlers::mark_started();

    // Connect to PostgreSQL
    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(CONFIG.database_max_connections)
        .connect(&CONFIG.database_url)
        .await
        .expect("Failed to connect to PostgreSQL");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    info!("Connected to PostgreSQL and ran migrations");

    // Initialize services with the shared pool
    let account_service = web::Data::new(AccountService::new(pool.clone()));
    let listing_service = web::Data::new(ListingService::new(pool.clone()));
    let pool_data = web::Data::new(pool);

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(account_service.clone())
            .app_data(listing_service.clone())
            .app_data(pool_data.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
