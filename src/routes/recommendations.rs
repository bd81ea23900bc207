use actix_web::{web, HttpResponse, Responder};
use crate::core::Recommender;
use crate::models::{ErrorResponse, GeneratedRecommendationsResponse, Recommendation, UserRecommendationsResponse};
use crate::services::{CatalogClient, CatalogError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(catalog: CatalogClient, recommender: Recommender) -> Self {
        Self {
            catalog: Arc::new(catalog),
            recommender,
        }
    }

    /// Fetch the full catalog and sample it
    async fn recommend(&self) -> Result<Recommendation, CatalogError> {
        let products = self.catalog.fetch_products().await?;
        Ok(self.recommender.recommend(products))
    }
}

/// Recommendations for a single user
///
/// GET /recommendations/{user_id}
async fn user_recommendations(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> impl Responder {
    let user_id = path.into_inner();

    match state.recommend().await {
        Ok(result) => {
            tracing::debug!(
                "Returning {} recommendations for user {} (from {} products)",
                result.picks.len(),
                user_id,
                result.source_count
            );

            HttpResponse::Ok().json(UserRecommendationsResponse {
                user_id,
                recommendations: result.picks,
            })
        }
        Err(e) => upstream_failure(e),
    }
}

/// Recommendations without a user, annotated with the catalog size
///
/// GET /recommendations_gen
async fn generated_recommendations(state: web::Data<AppState>) -> impl Responder {
    match state.recommend().await {
        Ok(result) => HttpResponse::Ok().json(GeneratedRecommendationsResponse {
            recommendations: result.picks,
            source_count: result.source_count,
        }),
        Err(e) => upstream_failure(e),
    }
}

fn upstream_failure(e: CatalogError) -> HttpResponse {
    tracing::error!("Error fetching products from backend: {}", e);

    let body = ErrorResponse {
        error: e.code().to_string(),
        detail: e.to_string(),
    };

    if e.is_configuration() {
        HttpResponse::InternalServerError().json(body)
    } else {
        HttpResponse::BadGateway().json(body)
    }
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/recommendations/{user_id}", web::get().to(user_recommendations))
        .route("/recommendations_gen", web::get().to(generated_recommendations));
}
