// Integration tests for cartrank
use cartrank::prelude::*;
use cartrank::{cosine_similarity, matched_terms, PriceNormalizer};
use serde_json::json;

/// Two-dimensional unit vector whose cosine with [1, 0] is `sim`
fn at_similarity(sim: f32) -> Vec<f32> {
    vec![sim, (1.0 - sim * sim).sqrt()]
}

fn query_vector() -> Vector {
    Vector::new(vec![1.0, 0.0])
}

fn red_shoes_catalog() -> Vec<Item> {
    vec![
        Item::new(1, "Red Running Shoes")
            .with_price(50.0)
            .with_rating(4.8)
            .with_availability("in_stock")
            .with_embedding(at_similarity(0.9)),
        Item::new(2, "Blue Jacket")
            .with_price(30.0)
            .with_rating(4.0)
            .with_availability("low_stock")
            .with_embedding(at_similarity(0.3)),
    ]
}

#[test]
fn test_red_shoes_end_to_end() {
    let results = search(
        "red shoes",
        &query_vector(),
        red_shoes_catalog(),
        &SearchOptions::default(),
    );

    assert_eq!(results.len(), 2);

    let a = &results[0];
    assert_eq!(a.product.id, 1);
    assert_eq!(a.rank, 1);
    assert_eq!(a.score_breakdown.matched_terms, vec!["red", "shoes"]);
    assert_eq!(a.score_breakdown.semantic_score, 1.0);
    assert_eq!(a.score_breakdown.rating_score, 0.96);
    assert_eq!(a.score_breakdown.price_score, 0.0);
    assert_eq!(a.score_breakdown.stock_score, 1.0);
    assert_eq!(a.score_breakdown.recency_score, 0.5);
    assert!((a.score_breakdown.final_score - 0.817).abs() < 1e-9);

    let b = &results[1];
    assert_eq!(b.product.id, 2);
    assert_eq!(b.rank, 2);
    assert!(b.score_breakdown.matched_terms.is_empty());
    assert!((b.score_breakdown.semantic_score - 0.3).abs() < 1e-9);
    assert_eq!(b.score_breakdown.rating_score, 0.8);
    assert_eq!(b.score_breakdown.price_score, 1.0);
    assert_eq!(b.score_breakdown.stock_score, 0.5);
    assert!((b.score_breakdown.final_score - 0.535).abs() < 1e-9);
}

#[test]
fn test_self_similarity() {
    for v in [vec![1.0f32], vec![0.2, 0.4, 0.9], vec![-3.0, 7.5, 0.001, 2.0]] {
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_degenerate_similarity() {
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
}

#[test]
fn test_semantic_never_exceeds_one() {
    let items: Vec<Item> = [0.0f32, 0.5, 0.8, 0.99, 1.0]
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Item::new(i as i64, "alpha bravo charlie delta echo")
                .with_embedding(at_similarity(*s))
        })
        .collect();
    let results = search(
        "alpha bravo charlie delta echo",
        &query_vector(),
        items,
        &SearchOptions::default(),
    );
    for r in &results {
        assert!(r.score_breakdown.semantic_score <= 1.0);
        assert_eq!(r.score_breakdown.matched_terms.len(), 5);
    }
    // no similarity, five terms: boost saturates at 0.5
    let zero = results.iter().find(|r| r.product.id == 0).unwrap();
    assert_eq!(zero.score_breakdown.semantic_score, 0.5);
}

#[test]
fn test_price_extremes() {
    let items = vec![
        Item::new(1, "a").with_price(12.0),
        Item::new(2, "b").with_price(99.0),
        Item::new(3, "c").with_price(45.0),
    ];
    let normalizer = PriceNormalizer::from_candidates(&items);
    assert_eq!(normalizer.score(&items[0]), 1.0);
    assert_eq!(normalizer.score(&items[1]), 0.0);

    let flat = vec![Item::new(1, "a").with_price(5.0), Item::new(2, "b").with_price(5.0)];
    let normalizer = PriceNormalizer::from_candidates(&flat);
    assert!(flat.iter().all(|i| normalizer.score(i) == 1.0));
}

#[test]
fn test_ranking_is_sorted_and_stable() {
    let items: Vec<Item> = (0..40)
        .map(|i| {
            Item::new(i, format!("product {}", i))
                .with_rating(f64::from((i % 3) as i32) + 3.0)
                .with_embedding(at_similarity(0.5))
        })
        .collect();
    let results = search("gadget", &query_vector(), items, &SearchOptions::default().with_limit(40));

    for pair in results.windows(2) {
        let (x, y) = (&pair[0], &pair[1]);
        assert!(x.score_breakdown.final_score >= y.score_breakdown.final_score);
        if x.score_breakdown.final_score == y.score_breakdown.final_score {
            assert!(x.product.id < y.product.id, "tie order broken");
        }
    }
    let ranks: Vec<usize> = results.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, (1..=40).collect::<Vec<usize>>());
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = search("red shoes", &query_vector(), red_shoes_catalog(), &SearchOptions::default());
    let second = search("red shoes", &query_vector(), red_shoes_catalog(), &SearchOptions::default());
    assert_eq!(first, second);
}

#[test]
fn test_category_and_price_filters() {
    let items = vec![
        Item::new(1, "Trail Shoes").with_category("Footwear").with_price(80.0),
        Item::new(2, "Sandals").with_category("Footwear").with_price(20.0),
        Item::new(3, "Slippers").with_category("Footwear"),
        Item::new(4, "Parka").with_category("Outerwear").with_price(60.0),
    ];
    let filter = CandidateFilter::from_options(Some("footwear"), Some(10.0), Some(100.0));
    let results = search(
        "shoes",
        &query_vector(),
        items,
        &SearchOptions::default().with_filter(filter),
    );
    let mut ids: Vec<i64> = results.iter().map(|r| r.product.id).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_custom_weights_change_order() {
    let price_only = Weights::new(0.0, 0.0, 1.0, 0.0, 0.0);
    let results = search(
        "red shoes",
        &query_vector(),
        red_shoes_catalog(),
        &SearchOptions::default().with_weights(price_only),
    );
    assert_eq!(results[0].product.id, 2);
    assert_eq!(results[0].score_breakdown.final_score, 1.0);
}

#[test]
fn test_matched_terms_order_follows_query() {
    let item = Item::new(1, "Shoes, red, for running");
    assert_eq!(matched_terms("running red shoes", &item), vec!["running", "red", "shoes"]);
}

#[test]
fn test_similarity_finder_ignores_weights() {
    let items = vec![
        Item::new(1, "Top rated but distant")
            .with_rating(5.0)
            .with_availability("in_stock")
            .with_embedding(at_similarity(0.1)),
        Item::new(2, "Unrated but close").with_embedding(at_similarity(0.95)),
    ];
    let results = SimilarityFinder::default().find(&query_vector(), items);
    assert_eq!(results[0].product.id, 2);
    assert_eq!(results[1].score_breakdown.rating_score, 1.0);
}

#[test]
fn test_service_round_trip_through_json() {
    let service = RankingService::new(ModelHandle::hashing(32));
    let request = serde_json::from_value(json!({
        "query": "red shoes",
        "products": [
            {"id": 1, "title": "Red Running Shoes", "price": 50.0, "rating": 4.8, "availability": "in_stock"},
            {"id": 2, "title": "Blue Jacket", "price": 30.0, "rating": 4.0, "availability": "low_stock"}
        ],
        "weights": {"alpha": 0.5}
    }))
    .unwrap();

    let response = service.search(request).unwrap();
    assert_eq!(response.total_results, 2);
    assert_eq!(response.query_embedding.dim(), 32);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["results"][0]["product"]["availability"], "in_stock");
    assert_eq!(value["results"][1]["score_breakdown"]["stock_score"], 0.5);
}
