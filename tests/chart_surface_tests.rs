use approx::assert_relative_eq;
use price_chart::api::{ChartSurface, ChartSurfaceConfig, RejectReason, UpdateOutcome};
use price_chart::core::{DataPoint, Viewport, area_path};
use price_chart::render::{Color, NullRenderer};
use price_chart::transition::ColorSpec;
use price_chart::ChartError;

fn point(seconds: f64, price: f64) -> DataPoint {
    DataPoint::from_unix_seconds(seconds, price).expect("valid timestamp")
}

fn reference_data() -> Vec<DataPoint> {
    vec![point(0.0, 10.0), point(60.0, 20.0), point(120.0, 10.0)]
}

fn surface() -> ChartSurface<NullRenderer> {
    let config = ChartSurfaceConfig::new(Viewport::new(200, 100));
    ChartSurface::new(NullRenderer::default(), config).expect("surface init")
}

#[test]
fn set_data_starts_transition_and_settles() {
    let mut surface = surface();

    let outcome = surface.set_data(reference_data());
    assert!(outcome.is_accepted());
    assert!(surface.is_transitioning());

    assert!(surface.advance(16.0));
    assert!(!surface.advance(500.0));
    assert!(!surface.is_transitioning());

    let geometry = surface.geometry();
    assert_eq!(
        geometry.area,
        area_path(surface.chart_state().current_scaled_points(), 100.0)
    );
}

#[test]
fn render_hands_frame_to_renderer() {
    let mut surface = surface();
    surface.set_data(reference_data());
    surface.finish_transition();

    surface.render().expect("render");
    let renderer = surface.into_renderer();

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_area_vertex_count, 6);
    assert_eq!(renderer.last_line_vertex_count, 3);
    assert!(!renderer.last_cursor_visible);
}

#[test]
fn frame_uses_configured_line_width() {
    let config = ChartSurfaceConfig::new(Viewport::new(200, 100)).with_line_width(3.0);
    let mut surface = ChartSurface::new(NullRenderer::default(), config).expect("surface init");
    surface.set_data(reference_data());

    let frame = surface.frame();
    assert_eq!(frame.line.stroke_width, 3.0);
    assert_eq!(frame.viewport, Viewport::new(200, 100));
}

#[test]
fn hover_cursor_sits_on_the_curve() {
    let mut surface = surface();
    surface.set_data(reference_data());
    surface.finish_transition();

    let hover = surface.pointer_enter(100.0);
    assert!(hover.active);
    assert_eq!(hover.index, Some(1));
    assert_eq!(hover.value, Some(reference_data()[1]));
    assert_relative_eq!(hover.pixel_y, 20.0);

    let cursor = surface.frame().cursor.expect("cursor visible");
    assert_eq!(cursor.x, 100.0);
    assert_relative_eq!(cursor.y, 20.0);
    assert_eq!(cursor.height, 100.0);

    surface.render().expect("render");
    assert!(surface.renderer().last_cursor_visible);

    surface.pointer_leave();
    assert!(!surface.hover_state().active);
    assert!(surface.frame().cursor.is_none());
}

#[test]
fn hover_without_data_is_inactive() {
    let mut surface = surface();
    let hover = surface.pointer_move(50.0);
    assert!(!hover.active);
    assert!(surface.frame().cursor.is_none());
}

#[test]
fn hover_refreshes_after_accepted_update() {
    let mut surface = surface();
    surface.set_data(reference_data());
    surface.pointer_move(100.0);

    surface.set_data(vec![point(0.0, 20.0), point(60.0, 10.0), point(120.0, 20.0)]);

    let hover = surface.hover_state();
    assert!(hover.active);
    assert_relative_eq!(hover.pixel_y, 100.0);
}

#[test]
fn empty_data_keeps_last_rendering() {
    let mut surface = surface();
    surface.set_data(reference_data());
    surface.finish_transition();
    let before = surface.geometry();

    let outcome = surface.set_data(Vec::new());

    assert_eq!(outcome, UpdateOutcome::Rejected(RejectReason::EmptyInput));
    assert_eq!(surface.geometry(), before);
    assert_eq!(surface.data(), reference_data().as_slice());
}

#[test]
fn resize_relayouts_last_data_without_animation() {
    let mut surface = surface();
    surface.set_data(reference_data());
    surface.finish_transition();

    let outcome = surface.set_viewport(Viewport::new(400, 100));

    assert_eq!(
        outcome,
        UpdateOutcome::Accepted {
            skip_transition: true,
            duration_ms: 0.0
        }
    );
    assert_eq!(
        surface.geometry().line.to_string(),
        "M0,100L200,20L400,100"
    );
}

#[test]
fn combined_update_applies_data_and_viewport() {
    let mut surface = surface();
    let outcome = surface.update(reference_data(), Viewport::new(200, 50));

    assert!(matches!(
        outcome,
        UpdateOutcome::Accepted {
            skip_transition: false,
            ..
        }
    ));
    assert_eq!(surface.viewport(), Viewport::new(200, 50));
    assert_eq!(surface.chart_state().viewport(), Viewport::new(200, 50));
}

#[test]
fn staged_color_applies_with_next_accepted_update() {
    let mut surface = surface();
    surface.set_data(reference_data());
    surface.finish_transition();
    let original = surface.geometry().colors;

    surface
        .set_color(ColorSpec::new("#000000", "rgb(255, 0, 0)"))
        .expect("valid colors");
    assert_eq!(surface.geometry().colors, original);
    assert_eq!(
        surface.set_data(reference_data()),
        UpdateOutcome::Rejected(RejectReason::Unchanged)
    );

    surface.set_data(vec![point(0.0, 11.0), point(60.0, 20.0), point(120.0, 10.0)]);
    surface.finish_transition();

    let colors = surface.geometry().colors;
    assert_eq!(colors.fill, Color::rgb(0.0, 0.0, 0.0));
    assert_eq!(colors.stroke, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(surface.config().color.fill, "#000000");
}

#[test]
fn invalid_color_is_rejected_and_previous_kept() {
    let mut surface = surface();
    let err = surface
        .set_color(ColorSpec::new("not-a-color", "#fff"))
        .expect_err("invalid fill");
    assert!(matches!(err, ChartError::InvalidColor(_)));
    assert_eq!(surface.config().color, ColorSpec::default());
}

#[test]
fn invalid_config_fails_construction() {
    let config = ChartSurfaceConfig::new(Viewport::new(200, 100)).with_padding_top(-5.0);
    let err = ChartSurface::new(NullRenderer::default(), config)
        .err()
        .expect("negative padding");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let config = ChartSurfaceConfig::new(Viewport::new(200, 100))
        .with_color(ColorSpec::new("#GGGGGG", "#FFB119"));
    let err = ChartSurface::new(NullRenderer::default(), config)
        .err()
        .expect("invalid color");
    assert!(matches!(err, ChartError::InvalidColor(_)));
}
