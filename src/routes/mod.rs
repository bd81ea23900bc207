// Route exports
pub mod errors;
pub mod health;
pub mod recommendations;

pub use recommendations::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::PathConfig::default().error_handler(errors::handle_path_error))
        .route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(health::metrics))
        .configure(recommendations::configure);
}
