//! Edge case integration tests.

use nearfit_knn::{Features, KnnConfig, Metric, classify, distance, nearest_neighbors, regress};

/// k > n_train: clamped to n_train, every row is a neighbor.
#[test]
fn k_greater_than_n_is_clamped() {
    let train = [1.0, 2.0, 3.0];
    let targets = [3.0, 6.0, 12.0];
    let config = KnnConfig::new(50);

    let n = nearest_neighbors(Features::column(&train), &[0.0], &config).unwrap();
    assert_eq!(n.len(), 3);
    assert_eq!(n.indices(), &[0, 1, 2]);

    let predicted = regress(
        Features::column(&train),
        &targets,
        Features::column(&[0.0, 100.0]),
        &config,
    )
    .unwrap();
    // Mean of all targets regardless of query
    assert_eq!(predicted, vec![7.0, 7.0]);

    let labels = [1, 0, 0];
    let predicted = classify(
        Features::column(&train),
        &labels,
        Features::column(&[0.0]),
        &config,
    )
    .unwrap();
    assert_eq!(predicted, vec![0]);
}

/// k = n_train: identical to the clamped case.
#[test]
fn k_equals_n() {
    let train = [1.0, 2.0, 3.0, 4.0, 5.0];
    let targets = [1.0, 1.0, 1.0, 1.0, 6.0];
    let exact = KnnConfig::new(5);
    let over = KnnConfig::new(500);
    let test = [3.0, -7.0];
    assert_eq!(
        regress(Features::column(&train), &targets, Features::column(&test), &exact).unwrap(),
        regress(Features::column(&train), &targets, Features::column(&test), &over).unwrap(),
    );
}

/// Single training row: always the prediction.
#[test]
fn single_training_row() {
    let config = KnnConfig::new(10);
    let predicted = classify(
        Features::new(&[4.0, 4.0], 2).unwrap(),
        &['x'],
        Features::new(&[0.0, 0.0, 9.0, 9.0, 4.0, 4.0], 2).unwrap(),
        &config,
    )
    .unwrap();
    assert_eq!(predicted, vec!['x', 'x', 'x']);
}

/// All identical training rows: ties resolved by training order.
#[test]
fn identical_training_rows() {
    let train = vec![5.0; 6];
    let labels = [3, 1, 1, 3, 2, 2];
    let n = nearest_neighbors(Features::column(&train), &[5.0], &KnnConfig::new(4)).unwrap();
    assert_eq!(n.indices(), &[0, 1, 2, 3]);
    for &d in n.distances() {
        assert_eq!(d, 0.0);
    }
    // Neighbors 0..4 carry labels [3, 1, 1, 3]: tie between 3 and 1, 3 seen first.
    let predicted = classify(
        Features::column(&train),
        &labels,
        Features::column(&[5.0]),
        &KnnConfig::new(4),
    )
    .unwrap();
    assert_eq!(predicted, vec![3]);
}

/// Query equals a training row exactly.
#[test]
fn query_equals_training_row() {
    let train = [1.0, 2.0, 3.0, 4.0, 5.0];
    let n = nearest_neighbors(Features::column(&train), &[3.0], &KnnConfig::new(1)).unwrap();
    assert_eq!(n.nearest(), 2);
    assert_eq!(n.distances()[0], 0.0);
}

/// Equidistant neighbors on both sides: the earlier training row is kept.
#[test]
fn equidistant_prefers_earlier_row() {
    let train = [4.0, 2.0, 6.0, 3.0];
    let n = nearest_neighbors(Features::column(&train), &[4.0], &KnnConfig::new(3)).unwrap();
    // distances: 0, 2, 2, 1
    assert_eq!(n.indices(), &[0, 3, 1]);
}

/// High-dimensional rows (exercises the generic distance path).
#[test]
fn five_dimensional() {
    let n_vars = 5;
    let train: Vec<f64> = (0..20 * n_vars).map(|i| i as f64).collect();
    let targets: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let query: Vec<f64> = (50..55).map(|i| i as f64).collect();
    let predicted = regress(
        Features::new(&train, n_vars).unwrap(),
        &targets,
        Features::new(&query, n_vars).unwrap(),
        &KnnConfig::new(1),
    )
    .unwrap();
    // Row 10 is exactly (50..55)
    assert_eq!(predicted, vec![10.0]);
}

/// Empty test set: empty predictions, not an error.
#[test]
fn empty_test_set() {
    let predicted = classify(
        Features::column(&[1.0]),
        &[0],
        Features::column(&[]),
        &KnnConfig::new(1),
    )
    .unwrap();
    assert!(predicted.is_empty());
}

/// Rows whose distances round to the same value tie, and the earlier row wins
/// even though its pre-root sum is larger.
#[test]
fn equal_rounded_distances_prefer_earlier_row() {
    let train = [f64::next_up(2.0), 2.0];
    let labels = [0, 1];
    let metric = Metric::LegacySqrtAbsSum;
    assert_eq!(
        distance(&train[..1], &[0.0], metric).unwrap(),
        distance(&train[1..], &[0.0], metric).unwrap()
    );

    for parallel in [true, false] {
        let config = KnnConfig::new(1)
            .with_metric(metric)
            .with_parallel(parallel);
        let predicted = classify(
            Features::column(&train),
            &labels,
            Features::column(&[0.0]),
            &config,
        )
        .unwrap();
        assert_eq!(predicted, vec![0]);

        let n = nearest_neighbors(Features::column(&train), &[0.0], &config).unwrap();
        assert_eq!(n.nearest(), 0);
    }
}
