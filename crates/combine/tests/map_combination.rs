use approx::assert_relative_eq;
use telesim_combine::{
    CombinationFunction, CombineError, FnCombination, Mean, Product, combine, power_combination,
    sign_of_correlation_and_combined_strength,
};
use telesim_field::SimilarityMap;

fn map(shape: (usize, usize), values: Vec<f64>) -> SimilarityMap {
    SimilarityMap::from_shape_vec(shape, values).unwrap()
}

#[test]
fn cellwise_product() {
    let a = map((2, 2), vec![1.0, 2.0, 3.0, 4.0]);
    let b = map((2, 2), vec![0.5, 0.5, -1.0, 0.0]);
    let out = combine(&a, &b, &Product).unwrap();
    assert_eq!(out.iter().collect::<Vec<_>>(), vec![0.5, 1.0, -3.0, 0.0]);
}

#[test]
fn dyn_combination() {
    let f: Box<dyn CombinationFunction> = Box::new(Mean);
    let a = SimilarityMap::filled((3, 1), 0.2);
    let b = SimilarityMap::filled((3, 1), 0.6);
    let out = combine(&a, &b, f.as_ref()).unwrap();
    assert!(out.iter().all(|v| (v - 0.4).abs() < 1e-12));
}

#[test]
fn power_combination_uses_strength() {
    let pearson = map((1, 3), vec![-0.9, 0.0, 0.5]);
    let scaled = map((1, 3), vec![0.8, 0.8, 0.2]);
    let out = power_combination(&pearson, &scaled, Product).unwrap();
    let values: Vec<f64> = out.iter().collect();
    assert_relative_eq!(values[0], 0.72, epsilon = 1e-12);
    assert_eq!(values[1], 0.0);
    assert_relative_eq!(values[2], 0.1, epsilon = 1e-12);
}

#[test]
fn signed_strength_keeps_sign_and_propagates_nan() {
    let pearson = map((1, 4), vec![-0.9, 0.0, 0.5, f64::NAN]);
    let scaled = map((1, 4), vec![0.8, 0.8, -0.2, 0.3]);
    let out = sign_of_correlation_and_combined_strength(&pearson, &scaled, Product).unwrap();
    let values: Vec<f64> = out.iter().collect();
    assert_relative_eq!(values[0], -0.72, epsilon = 1e-12);
    assert_eq!(values[1], 0.0);
    assert_relative_eq!(values[2], 0.1, epsilon = 1e-12);
    assert!(values[3].is_nan());
}

#[test]
fn mismatched_shapes_rejected() {
    let a = SimilarityMap::filled((2, 3), 0.1);
    let b = SimilarityMap::filled((3, 2), 0.1);
    let expected = CombineError::ShapeMismatch {
        expected: (2, 3),
        got: (3, 2),
    };
    assert_eq!(combine(&a, &b, &Product).unwrap_err(), expected);
    assert_eq!(power_combination(&a, &b, Product).unwrap_err(), expected);
    assert_eq!(
        sign_of_correlation_and_combined_strength(&a, &b, FnCombination::new("sum", |x, y| x + y))
            .unwrap_err(),
        expected
    );
}
