use ndarray::Array4;
use telesim_field::{Field, ReferenceSeries};
use telesim_select::{SelectError, Selection, month_indices, select, winter_indices};

/// Field and reference whose values encode the time index, so the
/// selected steps can be read back from the subset.
fn time_coded(n_times: usize) -> (Field, ReferenceSeries) {
    let data = Array4::from_shape_fn((n_times, 2, 3, 4), |(t, l, i, j)| {
        (t * 1000 + l * 100 + i * 10 + j) as f64
    });
    let reference: Vec<f64> = (0..n_times).map(|t| t as f64).collect();
    (
        Field::new(data).unwrap(),
        ReferenceSeries::new(reference).unwrap(),
    )
}

#[test]
fn winter_three_years() {
    assert_eq!(
        winter_indices(36).unwrap(),
        vec![0, 1, 11, 12, 13, 23, 24, 25, 35]
    );
}

#[test]
fn january_five_years() {
    assert_eq!(month_indices(60, 0).unwrap(), vec![0, 12, 24, 36, 48]);
}

#[test]
fn winter_subset_matches_indices() {
    let (field, reference) = time_coded(36);
    let subset = select(&field, &reference, Selection::WinterOnly).unwrap();

    let expected = [0, 1, 11, 12, 13, 23, 24, 25, 35];
    assert_eq!(subset.n_times(), expected.len());
    for (pos, &t) in expected.iter().enumerate() {
        assert_eq!(subset.reference()[pos], t as f64);
        assert_eq!(subset.field()[[pos, 1, 2, 3]], (t * 1000 + 123) as f64);
    }
}

#[test]
fn every_month_partitions_the_time_axis() {
    let (field, reference) = time_coded(48);
    let mut seen: Vec<usize> = Vec::new();
    for month in 0..12 {
        let subset = select(&field, &reference, Selection::PerMonth(month)).unwrap();
        assert_eq!(subset.n_times(), 4);
        seen.extend(subset.reference().iter().map(|&t| t as usize));
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..48).collect::<Vec<_>>());
}

#[test]
fn shift_by_one_truncates_both_sides() {
    let (field, reference) = time_coded(24);
    let subset = select(&field, &reference, Selection::Shift(1)).unwrap();

    assert_eq!(subset.n_times(), 23);
    assert_eq!(subset.field().shape(), &[23, 2, 3, 4]);
    // Reference step t is paired with field step t + 1.
    for t in 0..23 {
        assert_eq!(subset.reference()[t], t as f64);
        assert_eq!(subset.field()[[t, 0, 0, 0]], ((t + 1) * 1000) as f64);
    }
}

#[test]
fn negative_shift_pairs_later_reference() {
    let (field, reference) = time_coded(24);
    let subset = select(&field, &reference, Selection::Shift(-2)).unwrap();

    assert_eq!(subset.n_times(), 22);
    assert_eq!(subset.reference()[0], 2.0);
    assert_eq!(subset.field()[[0, 0, 0, 0]], 0.0);
}

#[test]
fn shift_zero_is_identity() {
    let (field, reference) = time_coded(24);
    let shifted = select(&field, &reference, Selection::Shift(0)).unwrap();
    let whole = select(&field, &reference, Selection::WholePeriod).unwrap();
    assert_eq!(shifted.field(), whole.field());
    assert_eq!(shifted.reference(), reference.view());
}

#[test]
fn invalid_selections() {
    let (field, reference) = time_coded(30);
    assert_eq!(
        select(&field, &reference, Selection::PerMonth(0)).unwrap_err(),
        SelectError::IncompleteYears { n_times: 30 }
    );
    assert_eq!(
        select(&field, &reference, Selection::WinterOnly).unwrap_err(),
        SelectError::IncompleteYears { n_times: 30 }
    );
    assert_eq!(
        select(&field, &reference, Selection::PerMonth(12)).unwrap_err(),
        SelectError::InvalidMonth { month: 12 }
    );
    assert_eq!(
        select(&field, &reference, Selection::Shift(30)).unwrap_err(),
        SelectError::ShiftTooLarge { shift: 30, len: 30 }
    );
    // Shifts and the whole period do not need whole years.
    assert!(select(&field, &reference, Selection::Shift(-29)).is_ok());
    assert!(select(&field, &reference, Selection::WholePeriod).is_ok());
}
