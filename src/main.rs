use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use ml_service::config::Settings;
use ml_service::core::Recommender;
use ml_service::routes::{self, AppState};
use ml_service::services::CatalogClient;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    ml_service::telemetry::init_tracing(&settings.logging);

    info!("Starting ML recommendation service...");

    // Fail before binding if the backend URL is unusable
    let catalog = CatalogClient::from_settings(&settings.backend).map_err(|e| {
        error!("Invalid backend configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!(
        "Catalog client initialized ({}, timeout: {}s)",
        catalog.products_url(),
        settings.backend.timeout_secs
    );

    let recommender = Recommender::new(settings.recommendations.pick_count);
    info!("Recommender initialized ({} picks per request)", recommender.pick_count());

    let app_state = AppState::new(catalog, recommender);

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
