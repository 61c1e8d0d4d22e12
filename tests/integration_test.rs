// Integration tests for simx
use ahash::AHashSet;
use serde_json::json;
use simx::{cosine_distance, euclidean_distance, Dataset, DatasetSchema, Error, FeatureVector};

fn player_schema() -> DatasetSchema {
    DatasetSchema::new(["pace", "shooting"], "name").unwrap()
}

/// The dataset from the metric-choice example: A and B are collinear,
/// C is closer to A in absolute terms.
fn abc_dataset() -> Dataset {
    Dataset::new(
        vec![
            json!({"name": "A", "pace": 100, "shooting": 100}),
            json!({"name": "B", "pace": 50, "shooting": 50}),
            json!({"name": "C", "pace": 90, "shooting": 40}),
        ],
        player_schema(),
    )
    .unwrap()
}

fn league_dataset() -> Dataset {
    Dataset::new(
        vec![
            json!({"name": "Cazorla", "pace": 68, "shooting": 71, "team": "Villarreal"}),
            json!({"name": "Pogba",   "pace": 76, "shooting": 79, "team": "Juventus"}),
            json!({"name": "Kante",   "pace": 78, "shooting": 54, "team": "Chelsea"}),
            json!({"name": "Modric",  "pace": 72, "shooting": 76, "team": "Real Madrid"}),
            json!({"name": "Verratti","pace": 69, "shooting": 58, "team": "PSG"}),
            json!({"name": "Kroos",   "pace": 54, "shooting": 81, "team": "Real Madrid"}),
        ],
        player_schema(),
    )
    .unwrap()
}

#[test]
fn test_metric_choice_divergence() {
    let dataset = abc_dataset();
    let exclude: AHashSet<String> = ["A".to_string()].into_iter().collect();

    // Collinear B wins under cosine even though its magnitude differs.
    let by_cosine = dataset
        .find_similar("A", cosine_distance, 2, &exclude)
        .unwrap();
    assert_eq!(by_cosine[0].name, "B");
    assert!(by_cosine[0].distance.abs() < 1e-9);

    // C wins under euclidean: 60.83 vs 70.71.
    let by_euclidean = dataset
        .find_similar("A", euclidean_distance, 2, &exclude)
        .unwrap();
    assert_eq!(by_euclidean[0].name, "C");
    assert!((by_euclidean[0].distance - 60.827_625).abs() < 1e-3);
    assert!((by_euclidean[1].distance - 70.710_678).abs() < 1e-3);
}

#[test]
fn test_ranking_is_sorted_and_bounded() {
    let dataset = league_dataset();

    for k in [0, 1, 3, 100] {
        let results = dataset
            .find_similar("Cazorla", euclidean_distance, k, &AHashSet::new())
            .unwrap();
        assert_eq!(results.len(), k.min(dataset.len()));
        assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    // The reference itself ranks first at distance zero.
    let all = dataset
        .find_similar("Cazorla", euclidean_distance, 10, &AHashSet::new())
        .unwrap();
    assert_eq!(all[0].name, "Cazorla");
    assert!(all[0].distance.abs() < 1e-12);
}

#[test]
fn test_exclusion_never_leaks() {
    let dataset = league_dataset();
    let exclude: AHashSet<String> = ["Cazorla".to_string(), "Pogba".to_string()]
        .into_iter()
        .collect();

    let results = dataset
        .find_similar("Cazorla", cosine_distance, 10, &exclude)
        .unwrap();
    assert_eq!(results.len(), dataset.len() - 2);
    assert!(results
        .iter()
        .all(|r| r.name != "Cazorla" && r.name != "Pogba"));
}

#[test]
fn test_blend_endpoints_match_source_vectors() {
    let dataset = league_dataset();
    let v1 = dataset.get_vector("Cazorla").unwrap().clone();
    let v2 = dataset.get_vector("Pogba").unwrap().clone();

    let at_one = dataset.blend("Cazorla", "Pogba", 1.0).unwrap();
    let at_zero = dataset.blend("Cazorla", "Pogba", 0.0).unwrap();
    for (got, want) in at_one.as_slice().iter().zip(v1.as_slice()) {
        assert!((got - want).abs() < 1e-12);
    }
    for (got, want) in at_zero.as_slice().iter().zip(v2.as_slice()) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn test_blended_vector_feeds_ranking() {
    let dataset = league_dataset();
    let blended = dataset.blend("Cazorla", "Kante", 0.5).unwrap();

    let results = dataset
        .find_similar(blended, euclidean_distance, 3, &AHashSet::new())
        .unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn test_path_properties() {
    let dataset = league_dataset();
    let walk = dataset
        .path("Cazorla", "Kroos", 10, cosine_distance)
        .unwrap();

    assert_eq!(walk.len(), 10);
    assert!(walk.iter().all(|n| n != "Cazorla" && n != "Kroos"));
    // Every sampled name is a real entity.
    for name in &walk {
        assert!(dataset.get_vector(name).is_ok());
    }
}

#[test]
fn test_path_rejects_degenerate_arguments() {
    let dataset = league_dataset();
    assert!(matches!(
        dataset.path("Cazorla", "Cazorla", 5, cosine_distance),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        dataset.path("Cazorla", "Nobody", 5, cosine_distance),
        Err(Error::EntityNotFound(_))
    ));
}

#[test]
fn test_malformed_numeric_field_fails_construction() {
    // WhoScored-style string-encoded numerics must fail loudly, not
    // flow into rankings as NaN.
    let err = Dataset::new(
        vec![
            json!({"name": "Cazorla", "pace": 68, "shooting": 71}),
            json!({"name": "Pogba", "pace": "4(2)", "shooting": 79}),
        ],
        player_schema(),
    )
    .unwrap_err();

    match err {
        Error::Conversion { row, field } => {
            assert_eq!(row, "Pogba");
            assert_eq!(field, "pace");
        }
        other => panic!("expected Conversion, got {other:?}"),
    }
}

#[test]
fn test_mismatched_reference_dimension_is_an_error() {
    let dataset = abc_dataset();
    let err = dataset
        .find_similar(
            FeatureVector::new(vec![1.0, 2.0, 3.0]),
            cosine_distance,
            1,
            &AHashSet::new(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
}

#[test]
fn test_custom_distance_function() {
    // Chebyshev distance supplied by the caller.
    let chebyshev = |a: &FeatureVector, b: &FeatureVector| -> simx::Result<f64> {
        Ok(a.as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max))
    };

    let dataset = abc_dataset();
    let exclude: AHashSet<String> = ["A".to_string()].into_iter().collect();
    let results = dataset.find_similar("A", chebyshev, 2, &exclude).unwrap();

    // B at max(50, 50) = 50 beats C at max(10, 60) = 60.
    assert_eq!(results[0].name, "B");
    assert!((results[0].distance - 50.0).abs() < 1e-12);
}

#[test]
fn test_metric_symmetry_on_random_pairs() {
    use rand::prelude::*;

    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = FeatureVector::new((0..8).map(|_| rng.random_range(-100.0..100.0)).collect());
        let b = FeatureVector::new((0..8).map(|_| rng.random_range(-100.0..100.0)).collect());

        let cos_ab = cosine_distance(&a, &b).unwrap();
        let cos_ba = cosine_distance(&b, &a).unwrap();
        assert!((cos_ab - cos_ba).abs() < 1e-12);
        let euc_ab = euclidean_distance(&a, &b).unwrap();
        let euc_ba = euclidean_distance(&b, &a).unwrap();
        assert!((euc_ab - euc_ba).abs() < 1e-12);
        assert!(euc_ab >= 0.0);
    }
}

#[test]
fn test_queries_do_not_mutate_the_dataset() {
    let dataset = league_dataset();
    let before: Vec<Vec<f64>> = dataset
        .rows()
        .map(|row| row.vector.as_slice().to_vec())
        .collect();

    let _ = dataset
        .find_similar("Cazorla", cosine_distance, 3, &AHashSet::new())
        .unwrap();
    let _ = dataset.path("Cazorla", "Kroos", 5, euclidean_distance).unwrap();

    let after: Vec<Vec<f64>> = dataset
        .rows()
        .map(|row| row.vector.as_slice().to_vec())
        .collect();
    assert_eq!(before, after);

    // Distances live on the result rows, never in the payloads.
    assert!(dataset.rows().all(|row| row.payload.get("distance").is_none()));
}
