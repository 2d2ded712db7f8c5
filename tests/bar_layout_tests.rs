use approx::assert_relative_eq;
use dashboard_charts::ChartError;
use dashboard_charts::core::{BarChartConfig, Color, DEFAULT_PALETTE, Sample, build_bar_chart};

fn weekly_sales() -> Vec<Sample> {
    [
        ("Mon", 120.0),
        ("Tue", 190.0),
        ("Wed", 300.0),
        ("Thu", 500.0),
        ("Fri", 280.0),
        ("Sat", 450.0),
        ("Sun", 320.0),
    ]
    .into_iter()
    .map(|(label, value)| Sample::new(label, value))
    .collect()
}

#[test]
fn weekly_sales_bars_follow_slot_formula() {
    let config = BarChartConfig::default().with_height(250.0);
    let layout = build_bar_chart(&weekly_sales(), &config).expect("layout");

    assert_eq!(layout.bars.len(), 7);
    let bar_width = 320.0 / 7.0 - 10.0;
    for (index, bar) in layout.bars.iter().enumerate() {
        assert_eq!(bar.index, index);
        assert_relative_eq!(bar.width, bar_width, epsilon = 1e-9);
        assert_relative_eq!(
            bar.x,
            40.0 + index as f64 * (bar_width + 10.0),
            epsilon = 1e-9
        );
        assert_relative_eq!(bar.y + bar.height, 210.0, epsilon = 1e-9);
    }

    let thursday = &layout.bars[3];
    assert_eq!(thursday.label, "Thu");
    assert_relative_eq!(thursday.height, 170.0);
    assert_relative_eq!(thursday.y, 40.0);

    let monday = &layout.bars[0];
    assert_relative_eq!(monday.height, 120.0 / 500.0 * 170.0, epsilon = 1e-9);
    assert_relative_eq!(layout.max_value, 500.0);
}

#[test]
fn neighbouring_bars_never_overlap() {
    let layout = build_bar_chart(&weekly_sales(), &BarChartConfig::default()).expect("layout");

    for pair in layout.bars.windows(2) {
        assert!(pair[0].x + pair[0].width <= pair[1].x + 1e-9);
    }
}

#[test]
fn palette_cycles_past_eight_bars() {
    let samples: Vec<Sample> = (0..10)
        .map(|i| Sample::new(format!("c{i}"), f64::from(i + 1)))
        .collect();
    let layout = build_bar_chart(&samples, &BarChartConfig::default()).expect("layout");

    assert_eq!(layout.bars[0].color, DEFAULT_PALETTE[0]);
    assert_eq!(layout.bars[7].color, DEFAULT_PALETTE[7]);
    assert_eq!(layout.bars[8].color, DEFAULT_PALETTE[0]);
    assert_eq!(layout.bars[9].color, DEFAULT_PALETTE[1]);
}

#[test]
fn sample_color_overrides_palette() {
    let red = Color::from_hex("#ff0000").expect("color");
    let samples = vec![Sample::new("a", 1.0), Sample::new("b", 2.0).with_color(red)];
    let layout = build_bar_chart(&samples, &BarChartConfig::default()).expect("layout");

    assert_eq!(layout.bars[0].color, DEFAULT_PALETTE[0]);
    assert_eq!(layout.bars[1].color, red);
}

#[test]
fn all_zero_values_give_zero_height_bars() {
    let samples = vec![Sample::new("a", 0.0), Sample::new("b", 0.0)];
    let layout = build_bar_chart(&samples, &BarChartConfig::default()).expect("layout");

    for bar in &layout.bars {
        assert!(bar.height.is_finite());
        assert_eq!(bar.height, 0.0);
        assert_relative_eq!(bar.y, 260.0);
    }
    assert!(layout.axis_ticks.iter().all(|tick| tick.value == 0.0));
}

#[test]
fn negative_values_collapse_to_baseline() {
    let samples = vec![Sample::new("a", -5.0), Sample::new("b", 10.0)];
    let layout = build_bar_chart(&samples, &BarChartConfig::default()).expect("layout");

    assert_eq!(layout.bars[0].height, 0.0);
    assert_relative_eq!(layout.bars[1].height, 220.0);
}

#[test]
fn axis_ticks_round_quarter_values() {
    let layout = build_bar_chart(&weekly_sales(), &BarChartConfig::default().with_height(250.0))
        .expect("layout");

    let labels: Vec<&str> = layout
        .axis_ticks
        .iter()
        .map(|tick| tick.label.as_str())
        .collect();
    assert_eq!(labels, vec!["0", "125", "250", "375", "500"]);

    let ys: Vec<f64> = layout.axis_ticks.iter().map(|tick| tick.y).collect();
    assert_eq!(ys, vec![210.0, 167.5, 125.0, 82.5, 40.0]);
    assert!(layout.axis_ticks.iter().all(|tick| tick.x == 40.0));
}

#[test]
fn horizontal_layout_transposes_axes() {
    let config = BarChartConfig::default().with_horizontal(true);
    let layout = build_bar_chart(&weekly_sales(), &config).expect("layout");

    assert!(layout.horizontal);
    assert_relative_eq!(layout.baseline, 40.0);
    let thickness = 220.0 / 7.0 - 10.0;
    for (index, bar) in layout.bars.iter().enumerate() {
        assert_relative_eq!(bar.x, 40.0);
        assert_relative_eq!(bar.height, thickness, epsilon = 1e-9);
        assert_relative_eq!(
            bar.y,
            40.0 + index as f64 * (thickness + 10.0),
            epsilon = 1e-9
        );
    }
    assert_relative_eq!(layout.bars[3].width, 320.0);

    let last_tick = layout.axis_ticks.last().expect("ticks");
    assert_relative_eq!(last_tick.x, 360.0);
    assert_relative_eq!(last_tick.y, 260.0);
}

#[test]
fn empty_input_yields_empty_layout_with_zero_ticks() {
    let layout = build_bar_chart(&[], &BarChartConfig::default()).expect("layout");

    assert!(layout.is_empty());
    assert_eq!(layout.max_value, 0.0);
    assert_eq!(layout.axis_ticks.len(), 5);
}

#[test]
fn empty_palette_is_rejected() {
    let err = build_bar_chart(
        &weekly_sales(),
        &BarChartConfig::default().with_palette(Vec::new()),
    )
    .expect_err("empty palette");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn narrow_viewport_is_rejected() {
    let err = build_bar_chart(&weekly_sales(), &BarChartConfig::default().with_width(60.0))
        .expect_err("no plot width");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn crowded_categories_clamp_bar_width_to_zero() {
    let samples: Vec<Sample> = (0..64).map(|i| Sample::new(format!("{i}"), 1.0)).collect();
    let layout = build_bar_chart(&samples, &BarChartConfig::default()).expect("layout");

    assert!(layout.bars.iter().all(|bar| bar.width == 0.0));
}

#[test]
fn crowded_categories_stay_inside_the_plot() {
    let samples: Vec<Sample> = (0..100).map(|i| Sample::new(format!("{i}"), 1.0)).collect();

    let layout = build_bar_chart(&samples, &BarChartConfig::default()).expect("layout");
    let last = layout.bars.last().expect("bars");
    assert_relative_eq!(last.x, 40.0 + 99.0 * 3.2, epsilon = 1e-9);
    assert!(layout.bars.iter().all(|bar| bar.x + bar.width <= 360.0));

    let config = BarChartConfig::default().with_horizontal(true);
    let layout = build_bar_chart(&samples, &config).expect("layout");
    assert!(layout.bars.iter().all(|bar| bar.y + bar.height <= 260.0));
}

#[test]
fn hex_colors_accept_short_form_and_reject_garbage() {
    assert_eq!(
        Color::from_hex("#f00").expect("short"),
        Color::from_hex("#ff0000").expect("long")
    );
    assert_eq!(Color::from_hex("8b5cf6").expect("no hash").to_hex(), "#8b5cf6");
    assert!(matches!(
        Color::from_hex("#12345"),
        Err(ChartError::InvalidColor(_))
    ));
    assert!(matches!(
        Color::from_hex("#gg0000"),
        Err(ChartError::InvalidColor(_))
    ));
}
