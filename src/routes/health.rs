use actix_web::HttpResponse;
use crate::models::HealthResponse;

/// Placeholder exposition so scrapers get a valid response
pub const METRICS_BODY: &str = "shopmicro_ml_requests_total 1\n";
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Liveness probe. Never touches the backend.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

pub async fn metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(METRICS_CONTENT_TYPE)
        .body(METRICS_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_metrics_placeholder() {
        let resp = metrics().await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            METRICS_CONTENT_TYPE
        );

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, METRICS_BODY);
    }
}
