use price_chart::ChartError;
use price_chart::api::{
    ChartSurface, ChartSurfaceConfig, SURFACE_SNAPSHOT_JSON_SCHEMA_V1, SurfaceSnapshot,
};
use price_chart::core::{DataPoint, Viewport};
use price_chart::render::NullRenderer;
use price_chart::transition::TransitionPhase;

fn point(seconds: f64, price: f64) -> DataPoint {
    DataPoint::from_unix_seconds(seconds, price).expect("valid timestamp")
}

fn settled_surface() -> ChartSurface<NullRenderer> {
    let mut surface = ChartSurface::new(
        NullRenderer::default(),
        ChartSurfaceConfig::new(Viewport::new(200, 100)),
    )
    .expect("surface init");
    surface.set_data(vec![point(0.0, 10.0), point(60.0, 20.0), point(120.0, 10.0)]);
    surface.finish_transition();
    surface
}

#[test]
fn snapshot_captures_displayed_geometry() {
    let mut surface = settled_surface();
    surface.pointer_move(100.0);

    let snapshot = surface.snapshot();

    assert_eq!(snapshot.viewport, Viewport::new(200, 100));
    assert_eq!(snapshot.points_len, 3);
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.phase, TransitionPhase::Idle);
    assert_eq!(
        snapshot.area_path,
        "M0,100L100,20L200,100L200,100L100,100L0,100Z"
    );
    assert_eq!(snapshot.line_path, "M0,100L100,20L200,100");
    assert_eq!(snapshot.fill, "rgb(255, 235, 197)");
    assert_eq!(snapshot.stroke, "rgb(255, 177, 25)");
    assert!(snapshot.hover.active);
    assert_eq!(snapshot.hover.index, Some(1));
}

#[test]
fn snapshot_json_uses_versioned_contract() {
    let surface = settled_surface();
    let json = surface.snapshot_json_pretty().expect("snapshot json");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"].as_u64(),
        Some(u64::from(SURFACE_SNAPSHOT_JSON_SCHEMA_V1))
    );
    assert_eq!(value["snapshot"]["points_len"].as_u64(), Some(3));

    let restored = SurfaceSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, surface.snapshot());
}

#[test]
fn compat_parser_accepts_bare_snapshot() {
    let surface = settled_surface();
    let bare = serde_json::to_string(&surface.snapshot()).expect("serialize bare");

    let restored = SurfaceSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(restored, surface.snapshot());
}

#[test]
fn compat_parser_rejects_unknown_schema_version() {
    let surface = settled_surface();
    let json = surface.snapshot_json_pretty().expect("snapshot json");
    let mut value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    value["schema_version"] = serde_json::json!(99);

    let err = SurfaceSnapshot::from_json_compat_str(&value.to_string())
        .expect_err("unsupported version");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = SurfaceSnapshot::from_json_compat_str("{\"nope\": true}").expect_err("garbage");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
