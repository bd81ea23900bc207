// Unit tests for ML Service

use ml_service::core::{sample_names, Recommender};
use ml_service::models::CatalogEntry;
use ml_service::services::catalog::products_url_from_base;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn create_catalog(len: usize) -> Vec<CatalogEntry> {
    (0..len).map(|i| CatalogEntry::named(format!("Product {}", i))).collect()
}

#[test]
fn test_pick_length_is_min_of_three_and_catalog() {
    let recommender = Recommender::default();
    let mut rng = StdRng::seed_from_u64(2024);

    for len in 0..12 {
        let result = recommender.recommend_with_rng(create_catalog(len), &mut rng);
        assert_eq!(result.picks.len(), len.min(3), "catalog of {}", len);
        assert_eq!(result.source_count, len);
    }
}

#[test]
fn test_picks_come_from_catalog_without_repeats() {
    let recommender = Recommender::default();
    let mut rng = StdRng::seed_from_u64(99);
    let catalog = create_catalog(10);
    let names: HashSet<Option<String>> = catalog.iter().map(|e| e.name.clone()).collect();

    for _ in 0..100 {
        let result = recommender.recommend_with_rng(catalog.clone(), &mut rng);
        let unique: HashSet<_> = result.picks.iter().cloned().collect();

        assert_eq!(unique.len(), result.picks.len());
        assert!(unique.is_subset(&names));
    }
}

#[test]
fn test_sampling_is_roughly_uniform() {
    let names: Vec<Option<String>> = (0..4).map(|i| Some(i.to_string())).collect();
    let mut rng = StdRng::seed_from_u64(5);
    let mut counts = [0usize; 4];

    for _ in 0..4000 {
        for pick in sample_names(&names, 3, &mut rng) {
            let index: usize = pick.unwrap().parse().unwrap();
            counts[index] += 1;
        }
    }

    // Each name is expected 3000 times
    for count in counts {
        assert!((2700..3300).contains(&count), "Skewed counts: {:?}", counts);
    }
}

#[test]
fn test_duplicate_names_are_separate_positions() {
    let catalog = vec![CatalogEntry::named("Same"), CatalogEntry::named("Same")];
    let result = Recommender::default().recommend(catalog);

    assert_eq!(result.picks, vec![Some("Same".to_string()); 2]);
}

#[test]
fn test_products_url_construction() {
    assert_eq!(
        products_url_from_base("http://backend:8080").unwrap(),
        "http://backend:8080/products"
    );
    assert_eq!(
        products_url_from_base("\thttps://api.shop.test/v1/\n").unwrap(),
        "https://api.shop.test/v1/products"
    );
    assert!(products_url_from_base("backend:8080").is_err());
    assert!(products_url_from_base("   ").is_err());
}
