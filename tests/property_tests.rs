use grid_creator::*;
use proptest::prelude::*;

fn kinds() -> impl Strategy<Value = BorderSelectionType> {
    prop::sample::select(BorderSelectionType::ALL.to_vec())
}

fn feature_values() -> impl Strategy<Value = Vec<f32>> {
    prop_oneof![
        prop::collection::vec(-1000.0f32..1000.0, 1..300),
        prop::collection::vec((0i32..20).prop_map(|v| v as f32 * 0.5), 1..300),
    ]
}

fn sorted(values: &[f32]) -> Vec<f32> {
    let mut copy = values.to_vec();
    copy.sort_by(|a, b| a.total_cmp(b));
    copy
}

proptest! {
    #[test]
    fn prop_borders_strictly_increasing_and_bounded(
        values in feature_values(),
        count in 1u32..64,
        kind in kinds()
    ) {
        let mut builder = CpuGridBuilderFactory::new().create(kind).unwrap();
        builder.add_feature(&values, count).unwrap();
        let borders = &builder.borders()[0];

        prop_assert!(is_valid_border_set(borders));
        prop_assert!(borders.len() <= count as usize);

        let sorted_values = sorted(&values);
        let (min, max) = (sorted_values[0], sorted_values[sorted_values.len() - 1]);
        prop_assert!(borders.iter().all(|&b| b >= min && b <= max));
    }

    #[test]
    fn prop_sorting_invariance(
        values in feature_values(),
        count in 1u32..32,
        kind in kinds()
    ) {
        let mut reversed = values.clone();
        reversed.reverse();

        let mut builder = CpuGridBuilderFactory::new().create(kind).unwrap();
        builder
            .add_feature(&values, count)
            .unwrap()
            .add_feature(&reversed, count)
            .unwrap()
            .add_feature(&sorted(&values), count)
            .unwrap();

        let borders = builder.borders();
        prop_assert_eq!(&borders[0], &borders[1]);
        prop_assert_eq!(&borders[0], &borders[2]);
    }

    #[test]
    fn prop_build_borders_matches_add_feature(
        values in feature_values(),
        count in 1u32..32,
        kind in kinds()
    ) {
        let mut builder = CpuGridBuilderFactory::new().create(kind).unwrap();
        let direct = builder.build_borders(&sorted(&values), count).unwrap();
        prop_assert!(builder.borders().is_empty());

        builder.add_feature(&values, count).unwrap();
        prop_assert_eq!(&builder.borders()[0], &direct);
    }

    #[test]
    fn prop_every_value_gets_a_bin(
        values in feature_values(),
        count in 1u32..32,
        kind in kinds()
    ) {
        let borders = BordersBuilder::new(&CpuGridBuilderFactory::new(), &values)
            .build(&BinarizationDescription::new(kind, count))
            .unwrap();
        for bin in binarize(&borders, &values) {
            prop_assert!(bin as usize <= borders.len());
        }
    }
}
