use dashboard_charts::core::{BarChartConfig, DEFAULT_PALETTE, Sample, build_bar_chart};
use proptest::prelude::*;

fn samples(values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Sample::new(format!("c{index}"), *value))
        .collect()
}

proptest! {
    #[test]
    fn one_bar_per_sample_with_heights_inside_plot(
        values in proptest::collection::vec(-500.0f64..10_000.0, 1..64),
        horizontal in any::<bool>()
    ) {
        let config = BarChartConfig::default().with_horizontal(horizontal);
        let layout = build_bar_chart(&samples(&values), &config).expect("layout");
        let extent = config.value_extent_px();

        prop_assert_eq!(layout.bars.len(), values.len());
        for bar in &layout.bars {
            let length = if horizontal { bar.width } else { bar.height };
            prop_assert!(length >= 0.0);
            prop_assert!(length <= extent + 1e-9);
            prop_assert_eq!(bar.color, DEFAULT_PALETTE[bar.index % DEFAULT_PALETTE.len()]);
        }
    }

    #[test]
    fn tallest_bar_fills_plot_height(
        values in proptest::collection::vec(0.0f64..10_000.0, 1..32),
        peak in 1.0f64..20_000.0
    ) {
        let mut values = values;
        values.push(peak.max(values.iter().copied().fold(0.0, f64::max)));
        let config = BarChartConfig::default();
        let layout = build_bar_chart(&samples(&values), &config).expect("layout");

        let tallest = layout.bars.iter().map(|bar| bar.height).fold(0.0, f64::max);
        prop_assert!((tallest - config.plot_height()).abs() <= 1e-9);
    }

    #[test]
    fn vertical_bars_share_bottom_edge_and_never_overlap(
        values in proptest::collection::vec(0.0f64..1_000.0, 1..24)
    ) {
        let layout = build_bar_chart(&samples(&values), &BarChartConfig::default()).expect("layout");

        for bar in &layout.bars {
            prop_assert!((bar.y + bar.height - layout.baseline).abs() <= 1e-9);
        }
        for pair in layout.bars.windows(2) {
            prop_assert!(pair[0].x + pair[0].width <= pair[1].x + 1e-9);
        }
    }

    #[test]
    fn bar_layout_is_deterministic_and_keeps_input_order(
        values in proptest::collection::vec(-1_000.0f64..10_000.0, 0..512),
        horizontal in any::<bool>()
    ) {
        let config = BarChartConfig::default().with_width(4_000.0).with_horizontal(horizontal);
        let input = samples(&values);
        let first = build_bar_chart(&input, &config).expect("layout");
        let second = build_bar_chart(&input, &config).expect("layout");

        prop_assert_eq!(&first, &second);
        for (position, (bar, sample)) in first.bars.iter().zip(&input).enumerate() {
            prop_assert_eq!(bar.index, position);
            prop_assert_eq!(&bar.label, &sample.label);
            prop_assert_eq!(bar.value.to_bits(), sample.value.to_bits());
        }
    }
}
