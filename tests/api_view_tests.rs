use dashboard_charts::api::{ChartRequest, ChartView};
use dashboard_charts::core::{AreaChartConfig, DonutChartConfig, HoverEvent, Sample};
use dashboard_charts::render::{CanvasLayerKind, NullRenderer, SvgRenderer};

fn device_request() -> ChartRequest {
    ChartRequest::donut(
        vec![
            Sample::new("Desktop", 45.0),
            Sample::new("Mobile", 35.0),
            Sample::new("Tablet", 20.0),
        ],
        DonutChartConfig::default(),
    )
}

#[test]
fn hover_changes_frame_without_rebuilding_layout() {
    let mut view = ChartView::new(NullRenderer::default(), device_request()).expect("view");
    let layout_before = view.layout().clone();

    view.handle_hover(HoverEvent::Enter(2));
    let frame = view.build_frame();
    let overlay = frame.layer(CanvasLayerKind::Overlay).expect("overlay");
    assert_eq!(overlay.texts[0].text, "20");
    assert_eq!(overlay.texts[1].text, "Tablet");
    assert_eq!(view.layout(), &layout_before);

    view.handle_hover(HoverEvent::Leave(2));
    let frame = view.build_frame();
    let overlay = frame.layer(CanvasLayerKind::Overlay).expect("overlay");
    assert_eq!(overlay.texts[1].text, "Total");
}

#[test]
fn render_forwards_frames_to_renderer() {
    let mut view = ChartView::new(NullRenderer::default(), device_request()).expect("view");
    view.render().expect("render");
    view.handle_hover(HoverEvent::Enter(0));
    view.render().expect("render");

    let renderer = view.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_stats.paths, 3);
}

#[test]
fn new_data_drops_stale_hover_index() {
    let mut view = ChartView::new(NullRenderer::default(), device_request()).expect("view");
    view.handle_hover(HoverEvent::Enter(2));

    view.set_request(ChartRequest::donut(
        vec![Sample::new("Desktop", 60.0), Sample::new("Mobile", 40.0)],
        DonutChartConfig::default(),
    ))
    .expect("rebuild");
    assert_eq!(view.hover().active(), None);
    assert_eq!(view.layout().len(), 2);
}

#[test]
fn out_of_range_hover_is_ignored() {
    let mut view = ChartView::new(NullRenderer::default(), device_request()).expect("view");
    let hover = view.handle_hover(HoverEvent::Enter(9));
    assert_eq!(hover.active(), None);
}

#[test]
fn svg_view_keeps_last_document() {
    let request = ChartRequest::area(
        vec![Sample::new("Jan", 12000.0), Sample::new("Feb", 19000.0)],
        AreaChartConfig::default(),
    );
    let mut view = ChartView::new(SvgRenderer::new(), request).expect("view");
    view.render().expect("render");

    assert!(view.renderer().document().contains("<circle"));
}
