use dashboard_charts::core::{AreaChartConfig, Sample, build_area_chart};
use proptest::prelude::*;

fn samples(values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Sample::new(format!("s{index}"), *value))
        .collect()
}

proptest! {
    #[test]
    fn area_points_stay_inside_plot_and_advance_left_to_right(
        values in proptest::collection::vec(-1_000_000.0f64..1_000_000.0, 2..64),
        height in 120.0f64..800.0
    ) {
        let config = AreaChartConfig::default().with_height(height);
        let layout = build_area_chart(&samples(&values), &config).expect("layout");

        prop_assert_eq!(layout.points.len(), values.len());
        for pair in layout.points.windows(2) {
            prop_assert!(pair[1].x > pair[0].x);
        }
        for point in &layout.points {
            prop_assert!(point.y >= config.padding - 1e-9);
            prop_assert!(point.y <= height - config.padding + 1e-9);
        }
    }

    #[test]
    fn larger_values_sit_higher(
        values in proptest::collection::vec(-10_000.0f64..10_000.0, 2..32)
    ) {
        let layout = build_area_chart(&samples(&values), &AreaChartConfig::default()).expect("layout");

        for a in &layout.points {
            for b in &layout.points {
                if a.value > b.value {
                    prop_assert!(a.y <= b.y);
                }
            }
        }
    }

    #[test]
    fn fill_path_extends_line_path_by_three_commands(
        values in proptest::collection::vec(0.0f64..1_000.0, 1..48)
    ) {
        let layout = build_area_chart(&samples(&values), &AreaChartConfig::default()).expect("layout");

        prop_assert_eq!(layout.line_path.len(), values.len());
        prop_assert_eq!(layout.fill_path.len(), values.len() + 3);
        prop_assert!(layout.fill_path.is_closed());
    }

    #[test]
    fn area_layout_is_deterministic(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 0..32)
    ) {
        let config = AreaChartConfig::default();
        let first = build_area_chart(&samples(&values), &config).expect("layout");
        let second = build_area_chart(&samples(&values), &config).expect("layout");
        prop_assert_eq!(first, second);
    }
}
