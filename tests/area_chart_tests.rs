use approx::assert_relative_eq;
use dashboard_charts::ChartError;
use dashboard_charts::core::{
    AreaChartConfig, AreaFill, Color, PathCommand, Sample, build_area_chart,
};
use rust_decimal::Decimal;

fn revenue() -> Vec<Sample> {
    [
        ("Jan", 12000.0),
        ("Feb", 19000.0),
        ("Mar", 3000.0),
        ("Apr", 5000.0),
        ("May", 28000.0),
        ("Jun", 45000.0),
    ]
    .into_iter()
    .map(|(label, value)| Sample::new(label, value))
    .collect()
}

#[test]
fn revenue_series_spans_plot_edges() {
    let config = AreaChartConfig::default().with_height(250.0);
    let layout = build_area_chart(&revenue(), &config).expect("layout");

    assert_eq!(layout.points.len(), 6);
    let first = &layout.points[0];
    let last = &layout.points[5];
    assert_relative_eq!(first.x, 40.0);
    assert_relative_eq!(last.x, 360.0);
    assert_relative_eq!(last.y, 40.0);

    let march = &layout.points[2];
    assert_eq!(march.label, "Mar");
    assert_relative_eq!(march.y, 210.0);
    assert_relative_eq!(layout.baseline_y, 210.0);
}

#[test]
fn revenue_points_are_evenly_spaced() {
    let layout = build_area_chart(&revenue(), &AreaChartConfig::default()).expect("layout");

    let step = layout.points[1].x - layout.points[0].x;
    assert_relative_eq!(step, 64.0);
    for pair in layout.points.windows(2) {
        assert_relative_eq!(pair[1].x - pair[0].x, step, epsilon = 1e-9);
    }
}

#[test]
fn points_keep_sample_order_and_index() {
    let layout = build_area_chart(&revenue(), &AreaChartConfig::default()).expect("layout");

    for (index, (point, sample)) in layout.points.iter().zip(revenue()).enumerate() {
        assert_eq!(point.index, index);
        assert_eq!(point.label, sample.label);
        assert_eq!(point.value, sample.value);
    }
}

#[test]
fn flat_series_sits_on_baseline() {
    let samples = vec![
        Sample::new("a", 5.0),
        Sample::new("b", 5.0),
        Sample::new("c", 5.0),
    ];
    let layout = build_area_chart(&samples, &AreaChartConfig::default()).expect("layout");

    for point in &layout.points {
        assert!(point.y.is_finite());
        assert_relative_eq!(point.y, layout.baseline_y);
    }
}

#[test]
fn single_sample_is_placed_at_left_padding() {
    let samples = vec![Sample::new("only", 10.0)];
    let layout = build_area_chart(&samples, &AreaChartConfig::default()).expect("layout");

    assert_eq!(layout.points.len(), 1);
    assert_relative_eq!(layout.points[0].x, 40.0);
    assert!(layout.points[0].y.is_finite());
    assert_eq!(
        layout.line_path.commands(),
        &[PathCommand::MoveTo {
            x: 40.0,
            y: layout.points[0].y
        }]
    );
}

#[test]
fn two_samples_produce_one_move_and_one_line() {
    let samples = vec![Sample::new("a", 1.0), Sample::new("b", 2.0)];
    let layout = build_area_chart(&samples, &AreaChartConfig::default()).expect("layout");

    let commands = layout.line_path.commands();
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], PathCommand::MoveTo { .. }));
    assert!(matches!(commands[1], PathCommand::LineTo { .. }));
}

#[test]
fn empty_input_keeps_gridlines_only() {
    let layout = build_area_chart(&[], &AreaChartConfig::default()).expect("layout");

    assert!(layout.is_empty());
    assert!(layout.line_path.is_empty());
    assert!(layout.fill_path.is_empty());
    assert_eq!(layout.gridlines.len(), 5);
}

#[test]
fn fill_path_is_closed_against_baseline() {
    let layout = build_area_chart(&revenue(), &AreaChartConfig::default()).expect("layout");
    let fill = layout.fill_path.commands();
    let n = layout.points.len();

    assert_eq!(fill.len(), n + 3);
    assert_eq!(&fill[..n], layout.line_path.commands());
    assert_eq!(
        fill[n],
        PathCommand::LineTo {
            x: 360.0,
            y: layout.baseline_y
        }
    );
    assert_eq!(
        fill[n + 1],
        PathCommand::LineTo {
            x: 40.0,
            y: layout.baseline_y
        }
    );
    assert_eq!(fill[n + 2], PathCommand::Close);
    assert!(layout.fill_path.is_closed());
}

#[test]
fn line_path_serializes_as_svg_path_data() {
    let samples = vec![Sample::new("a", 0.0), Sample::new("b", 10.0)];
    let layout = build_area_chart(&samples, &AreaChartConfig::default()).expect("layout");

    assert_eq!(layout.line_path.to_svg_path_data(), "M 40 260 L 360 40");
}

#[test]
fn gridlines_split_plot_height_into_quarters() {
    let layout = build_area_chart(&revenue(), &AreaChartConfig::default()).expect("layout");
    let ys: Vec<f64> = layout.gridlines.iter().map(|line| line.y).collect();

    assert_eq!(ys, vec![40.0, 95.0, 150.0, 205.0, 260.0]);
    assert!(layout.gridlines.iter().all(|line| line.x1 == 40.0 && line.x2 == 360.0));
}

#[test]
fn gradient_flag_selects_fill_kind() {
    let color = Color::from_hex("#10b981").expect("color");
    let gradient = build_area_chart(&revenue(), &AreaChartConfig::default().with_color(color))
        .expect("layout");
    assert_eq!(
        gradient.fill,
        AreaFill::Gradient {
            color,
            top_opacity: 0.3,
            bottom_opacity: 0.0
        }
    );

    let flat = build_area_chart(
        &revenue(),
        &AreaChartConfig::default().with_gradient(false),
    )
    .expect("layout");
    assert!(matches!(flat.fill, AreaFill::Flat { opacity, .. } if opacity == 0.1));
}

#[test]
fn height_without_drawable_area_is_rejected() {
    let err = build_area_chart(&revenue(), &AreaChartConfig::default().with_height(80.0))
        .expect_err("no plot height");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn non_finite_sample_is_rejected() {
    let samples = vec![Sample::new("a", 1.0), Sample::new("b", f64::NAN)];
    let err = build_area_chart(&samples, &AreaChartConfig::default()).expect_err("nan value");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn decimal_samples_lay_out_like_float_samples() {
    let decimal = vec![
        Sample::from_decimal("Jan", Decimal::new(12000, 0)).expect("decimal"),
        Sample::from_decimal("Feb", Decimal::new(19000, 0)).expect("decimal"),
    ];
    let float = vec![Sample::new("Jan", 12000.0), Sample::new("Feb", 19000.0)];

    let from_decimal = build_area_chart(&decimal, &AreaChartConfig::default()).expect("layout");
    let from_float = build_area_chart(&float, &AreaChartConfig::default()).expect("layout");
    assert_eq!(from_decimal, from_float);

    let cents = Sample::from_decimal("Mar", Decimal::new(300075, 2)).expect("decimal");
    assert_relative_eq!(cents.value, 3000.75, epsilon = 1e-9);
}

#[test]
fn identical_input_yields_identical_layout() {
    let config = AreaChartConfig::default();
    let a = build_area_chart(&revenue(), &config).expect("layout");
    let b = build_area_chart(&revenue(), &config).expect("layout");
    assert_eq!(a, b);
}

#[test]
fn revenue_from_january_to_june_rises_on_screen() {
    let samples = vec![Sample::new("Jan", 12000.0), Sample::new("Jun", 45000.0)];
    let config = AreaChartConfig::default().with_height(250.0);
    let layout = build_area_chart(&samples, &config).expect("layout");

    assert!(layout.points[1].y < layout.points[0].y);
    assert_relative_eq!(layout.points[0].y, 210.0);
    assert_relative_eq!(layout.points[1].y, 40.0);

    let path = layout.line_path.to_string();
    assert!(path.starts_with('M'));
    assert_eq!(path.matches('L').count(), 1);
}

#[test]
fn extreme_finite_extent_keeps_points_finite() {
    let samples = vec![Sample::new("low", -f64::MAX), Sample::new("high", f64::MAX)];
    let layout = build_area_chart(&samples, &AreaChartConfig::default()).expect("layout");

    assert_relative_eq!(layout.points[0].y, 260.0);
    assert_relative_eq!(layout.points[1].y, 40.0);
    assert!(!layout.line_path.to_string().contains("NaN"));
    assert!(!layout.fill_path.to_string().contains("NaN"));
}
