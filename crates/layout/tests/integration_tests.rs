//! Integration tests for gridpack-layout.

use gridpack_layout::{
    Arrangement, Dimensions, GapVector, PackingCalculator, PackingParameters, Settings,
};

mod container_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_invariants_hold_for_mixed_inputs() {
        let item = Dimensions::new(33.0, 47.0, 12.5);
        let arrangement = Arrangement::new(4, 6, 2);
        let container_gaps = GapVector::new(3.0, 7.0, 2.0);
        let item_gaps = GapVector::new(0.5, 1.5, 2.5);

        let calc = PackingCalculator::default();
        let result = calc.calculate_container(item, arrangement, container_gaps, item_gaps);
        let dims = &result.dimensions;

        assert_eq!(result.total_items, 4 * 6 * 2);

        // inner = (item + 2 * item gap) * count, per axis
        assert_relative_eq!(dims.inner.width, (33.0 + 1.0) * 6.0, epsilon = 1e-10);
        assert_relative_eq!(dims.inner.depth, (47.0 + 5.0) * 4.0, epsilon = 1e-10);
        assert_relative_eq!(dims.inner.height, (12.5 + 3.0) * 2.0, epsilon = 1e-10);

        // outer = inner + 2 * container gap, per axis
        assert_relative_eq!(dims.outer.width, dims.inner.width + 6.0, epsilon = 1e-10);
        assert_relative_eq!(dims.outer.depth, dims.inner.depth + 4.0, epsilon = 1e-10);
        assert_relative_eq!(dims.outer.height, dims.inner.height + 14.0, epsilon = 1e-10);
    }

    #[test]
    fn test_overflow_on_depth_only() {
        let calc = PackingCalculator::new(1000.0, 300.0);
        let result = calc.calculate_container(
            Dimensions::new(100.0, 200.0, 50.0),
            Arrangement::new(2, 2, 1),
            GapVector::zero(),
            GapVector::zero(),
        );

        // width 200 fits, depth 400 overflows
        assert!(result.exceeds_surface);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("1000mm x 300mm"));
    }

    #[test]
    fn test_boundary_equality_does_not_overflow() {
        // exceeds_surface is strictly greater-than
        let calc = PackingCalculator::new(200.0, 400.0);
        let result = calc.calculate_container(
            Dimensions::new(100.0, 200.0, 50.0),
            Arrangement::new(2, 2, 1),
            GapVector::zero(),
            GapVector::zero(),
        );

        assert_relative_eq!(result.dimensions.outer.width, 200.0, epsilon = 1e-10);
        assert_relative_eq!(result.dimensions.outer.depth, 400.0, epsilon = 1e-10);
        assert!(!result.exceeds_surface);
    }

    #[test]
    fn test_zero_counts_degrade_to_empty_geometry() {
        let calc = PackingCalculator::default();
        let result = calc.calculate_container(
            Dimensions::new(95.0, 160.0, 55.0),
            Arrangement::new(0, 0, 0),
            GapVector::uniform(5.0),
            GapVector::uniform(1.0),
        );

        assert_eq!(result.total_items, 0);
        assert_relative_eq!(result.dimensions.inner.width, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.dimensions.outer.width, 10.0, epsilon = 1e-10);
    }
}

mod position_tests {
    use super::*;

    #[test]
    fn test_positions_are_pairwise_distinct() {
        let calc = PackingCalculator::default();
        let positions = calc
            .calculate_item_positions(Dimensions::new(95.0, 160.0, 55.0), Arrangement::new(3, 3, 3));

        assert_eq!(positions.len(), 27);
        for (i, a) in positions.iter().enumerate() {
            for b in positions.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_index_formula() {
        let item = Dimensions::new(10.0, 20.0, 30.0);
        let arrangement = Arrangement::new(2, 3, 4);
        let calc = PackingCalculator::default();

        let positions = calc.calculate_item_positions(item, arrangement);

        for layer in 0..arrangement.layers {
            for row in 0..arrangement.rows {
                for col in 0..arrangement.columns {
                    let i = layer * arrangement.rows * arrangement.columns
                        + row * arrangement.columns
                        + col;
                    let p = positions[i];
                    assert_eq!(p.x, col as f64 * item.width);
                    assert_eq!(p.y, layer as f64 * item.height);
                    assert_eq!(p.z, row as f64 * item.depth);
                }
            }
        }
    }
}

mod parameter_tests {
    use super::*;

    #[test]
    fn test_validated_parameters_then_calculate() {
        let params = PackingParameters::new(
            Dimensions::new(95.0, 160.0, 55.0),
            Arrangement::new(3, 3, 3),
            GapVector::uniform(5.0),
            GapVector::uniform(1.0),
        );
        params.validate().unwrap();

        let settings = Settings::default();
        let calc = PackingCalculator::from_settings(&settings);
        let result = calc.calculate(&params);

        assert!(result.is_within_surface());
        assert_eq!(result.total_items, 27);
        assert_eq!(result.arrangement, params.arrangement);
        assert_eq!(result.container_gaps, params.container_gaps);
        assert_eq!(result.item_gaps, params.item_gaps);
    }

    #[test]
    fn test_boundary_rejects_what_calculator_accepts() {
        let params = PackingParameters::new(
            Dimensions::new(-5.0, 160.0, 55.0),
            Arrangement::new(3, 3, 3),
            GapVector::zero(),
            GapVector::zero(),
        );

        // The boundary check rejects it...
        assert!(params.validate().is_err());

        // ...but the calculator still computes the non-physical geometry.
        let calc = PackingCalculator::default();
        let result = calc.calculate(&params);
        assert!(result.dimensions.inner.width < 0.0);
    }
}

mod stats_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_statistics_through_calculator() {
        let calc = PackingCalculator::default();

        let stats = calc
            .compute_statistics(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
            .unwrap();
        assert_relative_eq!(stats.mean, 5.0, epsilon = 1e-10);
        assert_relative_eq!(stats.standard_deviation, 2.0, epsilon = 1e-10);

        assert!(calc.compute_statistics(&[]).is_err());
    }

    #[test]
    fn test_std_dev_validation_through_calculator() {
        let calc = PackingCalculator::default();
        let warnings = calc.validate_standard_deviations(
            GapVector::new(3.0, 1.0, 5.0),
            GapVector::new(2.0, 2.0, 5.0),
        );

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("X-axis"));
        assert!(warnings[0].contains("3.00"));
        assert!(warnings[0].contains("(2)"));
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use gridpack_layout::PackingResult;

    #[test]
    fn test_packing_result_round_trip() {
        let calc = PackingCalculator::default();
        let result = calc.calculate_container(
            Dimensions::new(95.0, 160.0, 55.0),
            Arrangement::new(3, 3, 3),
            GapVector::uniform(5.0),
            GapVector::uniform(1.0),
        );

        let json = serde_json::to_string(&result).unwrap();
        let restored: PackingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, restored);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings::default().with_surface(800.0, 600.0);
        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, restored);
    }
}
