use stock_analysis::analysis::{compute_deltas, ResampledRow};

fn rows(closes: &[f64]) -> Vec<ResampledRow> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| ResampledRow {
            bucket_end: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(i as u64 * 7))
                .unwrap(),
            close: *close,
        })
        .collect()
}

#[test]
fn absolute_change_is_exact_consecutive_difference() {
    let input = rows(&[100.0, 103.5, 101.25, 110.0]);
    let deltas = compute_deltas(&input);
    assert_eq!(deltas.len(), input.len());
    for i in 1..deltas.len() {
        let expected = input[i].close - input[i - 1].close;
        assert!((deltas[i].increase.unwrap() - expected).abs() < 1e-12);
    }
}

#[test]
fn first_row_always_carries_the_undefined_marker() {
    for closes in [&[42.0][..], &[42.0, 43.0][..], &[0.0, 1.0, 2.0][..]] {
        let deltas = compute_deltas(&rows(closes));
        assert_eq!(deltas[0].increase, None);
        assert_eq!(deltas[0].increase_rate, None);
    }
}

#[test]
fn percent_change_matches_ratio_formula() {
    let deltas = compute_deltas(&rows(&[200.0, 250.0]));
    assert!((deltas[1].increase_rate.unwrap() - 25.0).abs() < 1e-12);
}

#[test]
fn zero_prior_close_never_faults() {
    let deltas = compute_deltas(&rows(&[0.0, 7.0, 0.0, 3.0]));
    assert_eq!(deltas[1].increase_rate, None);
    assert!((deltas[1].increase.unwrap() - 7.0).abs() < f64::EPSILON);
    // A later zero prior is guarded the same way.
    assert_eq!(deltas[3].increase_rate, None);
    assert!((deltas[3].increase.unwrap() - 3.0).abs() < f64::EPSILON);
}

#[test]
fn delta_row_serializes_undefined_as_null() {
    let deltas = compute_deltas(&rows(&[10.0]));
    let json = serde_json::to_value(deltas[0]).unwrap();
    assert!(json["increase"].is_null());
    assert!(json["increase_rate"].is_null());
}
