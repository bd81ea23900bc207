use crate::models::{CatalogEntry, Recommendation};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of names returned per recommendation
pub const DEFAULT_PICK_COUNT: usize = 3;

/// Draw `min(count, names.len())` names uniformly at random, without replacement.
///
/// Each catalog position is used at most once. Duplicate names in the catalog
/// can still appear more than once in the result.
pub fn sample_names<R>(names: &[Option<String>], count: usize, rng: &mut R) -> Vec<Option<String>>
where
    R: Rng + ?Sized,
{
    names
        .choose_multiple(rng, count.min(names.len()))
        .cloned()
        .collect()
}

/// Turns a product catalog into a handful of random picks
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    pick_count: usize,
}

impl Recommender {
    pub fn new(pick_count: usize) -> Self {
        Self { pick_count }
    }

    pub fn pick_count(&self) -> usize {
        self.pick_count
    }

    pub fn recommend(&self, catalog: Vec<CatalogEntry>) -> Recommendation {
        self.recommend_with_rng(catalog, &mut rand::thread_rng())
    }

    pub fn recommend_with_rng<R>(&self, catalog: Vec<CatalogEntry>, rng: &mut R) -> Recommendation
    where
        R: Rng + ?Sized,
    {
        let names: Vec<Option<String>> = catalog.into_iter().map(|entry| entry.name).collect();

        Recommendation {
            picks: sample_names(&names, self.pick_count, rng),
            source_count: names.len(),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(DEFAULT_PICK_COUNT)
    }
}
