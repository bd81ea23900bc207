use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

pub const SERVICE_NAME: &str = "ml-service";

/// Response for the per-user recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecommendationsResponse {
    pub user_id: u64,
    pub recommendations: Vec<Option<String>>,
}

/// Response for the anonymous recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedRecommendationsResponse {
    pub recommendations: Vec<Option<String>>,
    pub source_count: usize,
}

/// Error response for failed upstream calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_payload() {
        let json = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok", "service": "ml-service"}));
    }

    #[test]
    fn test_null_names_serialize_as_null() {
        let response = GeneratedRecommendationsResponse {
            recommendations: vec![Some("A".to_string()), None],
            source_count: 2,
        };

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["recommendations"], serde_json::json!(["A", null]));
        assert_eq!(json["source_count"], 2);
    }
}
