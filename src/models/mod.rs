// Model exports
pub mod domain;
pub mod responses;

pub use domain::{CatalogEntry, Recommendation};
pub use responses::{ErrorResponse, GeneratedRecommendationsResponse, HealthResponse, UserRecommendationsResponse, SERVICE_NAME};
