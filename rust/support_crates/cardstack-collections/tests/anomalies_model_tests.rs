use cardstack_collections::{
    Anomalies, DirectionalView, ReverseIterable, compare_and_find_anomalies,
};

/// Straightforward reading of the classification rules: linear membership scans
/// and vectors for everything.
fn naive_anomalies(
    reference: &[i64],
    candidate: &[i64],
    predicate: impl Fn(i64) -> bool,
) -> Anomalies {
    fn push_unique(list: &mut Vec<i64>, value: i64) {
        if !list.contains(&value) {
            list.push(value);
        }
    }

    let mut result = Anomalies::default();
    let mut seen = Vec::new();
    for &v in candidate {
        if !predicate(v) {
            push_unique(&mut result.invalid, v);
        }
        if !seen.contains(&v) {
            if !reference.contains(&v) {
                push_unique(&mut result.not_found, v);
            }
            seen.push(v);
        } else {
            push_unique(&mut result.duplicates, v);
        }
    }
    result
}

fn random_values(len: usize, lo: i64, hi: i64) -> Vec<i64> {
    (0..len).map(|_| fastrand::i64(lo..hi)).collect()
}

#[test]
fn test_matches_naive_model() {
    fastrand::seed(3057710923);
    for _ in 0..500 {
        let reference = random_values(fastrand::usize(0..40), 0, 50);
        let candidate = random_values(fastrand::usize(0..60), -10, 60);
        let threshold = fastrand::i64(-5..20);
        let predicate = |v: i64| v >= threshold;

        let actual = compare_and_find_anomalies(&reference, &candidate, predicate);
        let expected = naive_anomalies(&reference, &candidate, predicate);
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_invariants_on_random_input() {
    fastrand::seed(99120);
    for _ in 0..500 {
        let reference = random_values(fastrand::usize(0..30), 0, 30);
        let candidate = random_values(fastrand::usize(0..50), -5, 40);

        let anomalies = compare_and_find_anomalies(&reference, &candidate, |v| v % 3 != 0);

        // invalid is exactly the set of failing candidate values
        for &v in &candidate {
            assert_eq!(v % 3 == 0, anomalies.invalid.contains(&v));
        }
        // duplicates are exactly the values occurring more than once
        for &v in &candidate {
            let occurrences = candidate.iter().filter(|&&c| c == v).count();
            assert_eq!(occurrences > 1, anomalies.duplicates.contains(&v));
        }
        // not found are exactly candidate values missing from the reference
        for &v in &candidate {
            assert_eq!(!reference.contains(&v), anomalies.not_found.contains(&v));
        }
        for list in [&anomalies.not_found, &anomalies.invalid, &anomalies.duplicates] {
            let mut sorted = list.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
        }
    }
}

#[test]
fn test_anomalies_json_shape() {
    let anomalies = compare_and_find_anomalies([1i64, 2], [-1i64, 3, 3], |v| v >= 0);
    let json = serde_json::to_value(&anomalies).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "not_found": [-1, 3],
            "invalid": [-1],
            "duplicates": [3],
        })
    );
}

#[test]
fn test_view_over_random_data() {
    fastrand::seed(4421);
    for _ in 0..100 {
        let data = random_values(fastrand::usize(0..64), -100, 100);
        let mut view = DirectionalView::new(&data);

        let forward = view.iter().copied().collect::<Vec<_>>();
        assert_eq!(forward, data);

        view.to_reverse_iterable();
        let backward = view.iter().copied().collect::<Vec<_>>();
        assert!(backward.iter().eq(data.iter().rev()));
        assert_eq!(view.iter().len(), data.len());
    }
}
