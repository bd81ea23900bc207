//! ML Service - recommendation proxy for the ShopMicro product catalog
//!
//! Fetches the product catalog from the backend and returns a small random
//! selection of product names as recommendations.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{sample_names, Recommender};
pub use crate::models::{CatalogEntry, Recommendation};
pub use crate::routes::AppState;
pub use crate::services::{CatalogClient, CatalogError};
