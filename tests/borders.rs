//! Borders orchestrator and bin lookup tests.

use grid_creator::*;
use ndarray::Array2;

mod common;
use common::*;

#[test]
fn test_orchestrator_matches_builder() {
    let factory = CpuGridBuilderFactory::new();
    let values = create_skewed_feature(1000, 21);

    for kind in BorderSelectionType::ALL {
        let description = BinarizationDescription::new(kind, 20);
        let borders = BordersBuilder::new(&factory, &values)
            .build(&description)
            .unwrap();

        let mut builder = factory.create(kind).unwrap();
        builder.add_feature(&values, 20).unwrap();
        assert_eq!(&borders, &builder.borders()[0], "{}", kind);
    }
}

#[test]
fn test_orchestrator_does_not_modify_values() {
    let factory = CpuGridBuilderFactory::new();
    let values = create_rounded_feature(200, 4);
    let original = values.clone();

    BordersBuilder::new(&factory, &values)
        .build(&BinarizationDescription::new(BorderSelectionType::GreedyLogSum, 8))
        .unwrap();
    assert_eq!(values, original);
}

#[test]
fn test_orchestrator_rejects_zero_discretization() {
    let factory = CpuGridBuilderFactory::new();
    let err = BordersBuilder::new(&factory, &FIBONACCI)
        .build(&BinarizationDescription::new(BorderSelectionType::Median, 0))
        .unwrap_err();
    assert!(matches!(err, GridError::InvalidParameter { .. }));
}

#[test]
fn test_build_all_over_matrix() {
    let factory = CpuGridBuilderFactory::new();
    let num_samples = 500;
    let skewed = create_skewed_feature(num_samples, 1);
    let rounded = create_rounded_feature(num_samples, 2);
    let mut features = Array2::<f32>::zeros((num_samples, 2));
    for row in 0..num_samples {
        features[[row, 0]] = skewed[row];
        features[[row, 1]] = rounded[row];
    }

    let config = BinarizationConfig::new(BinarizationDescription::new(
        BorderSelectionType::MinEntropy,
        16,
    ))
    .with_feature(1, BinarizationDescription::new(BorderSelectionType::Uniform, 4));

    let borders = build_all(&factory, &config, features.view()).unwrap();
    assert_eq!(borders.len(), 2);
    assert_eq!(
        borders[0],
        BordersBuilder::new(&factory, &skewed)
            .build(&config.description_for(0))
            .unwrap()
    );
    assert_eq!(borders[1].len(), 4);
}

#[test]
fn test_borders_drive_bin_lookup() {
    let factory = CpuGridBuilderFactory::new();
    let values = create_skewed_feature(1000, 8);
    let borders = BordersBuilder::new(&factory, &values)
        .build(&BinarizationDescription::new(BorderSelectionType::Median, 9))
        .unwrap();

    let bins = binarize(&borders, &values);
    let max_bin = borders.len() as BinIndex;
    assert!(bins.iter().all(|&bin| bin <= max_bin));

    // Quantile borders spread samples evenly: every bin is populated.
    for bin in 0..=max_bin {
        assert!(bins.contains(&bin), "bin {} is empty", bin);
    }

    // Bin order follows value order.
    let order = sorted(&values);
    let sorted_bins = binarize(&borders, &order);
    assert!(sorted_bins.windows(2).all(|w| w[0] <= w[1]));
}
