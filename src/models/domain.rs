use serde::{Deserialize, Serialize};

/// Product record returned by the backend catalog
///
/// Only the display name is used. Other fields are ignored and a missing
/// name is carried as `None` instead of failing the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub name: Option<String>,
}

impl CatalogEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Names drawn from a catalog, along with the size of the catalog they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub picks: Vec<Option<String>>,
    pub source_count: usize,
}
