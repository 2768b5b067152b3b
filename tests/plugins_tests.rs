use std::cell::RefCell;
use std::rc::Rc;

use price_chart::ChartError;
use price_chart::api::{ChartSurface, ChartSurfaceConfig};
use price_chart::core::{DataPoint, Viewport};
use price_chart::extensions::{ChartPlugin, PluginContext, PluginEvent};
use price_chart::render::NullRenderer;
use price_chart::transition::{RejectReason, TransitionPhase};

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::DataAccepted { .. } => "accepted",
        PluginEvent::UpdateRejected { .. } => "rejected",
        PluginEvent::TransitionFinished => "finished",
        PluginEvent::HoverMoved { .. } => "hover_move",
        PluginEvent::HoverLeft => "hover_leave",
        PluginEvent::Rendered => "rendered",
    }
}

fn point(seconds: f64, price: f64) -> DataPoint {
    DataPoint::from_unix_seconds(seconds, price).expect("valid timestamp")
}

fn surface() -> ChartSurface<NullRenderer> {
    ChartSurface::new(
        NullRenderer::default(),
        ChartSurfaceConfig::new(Viewport::new(200, 100)),
    )
    .expect("surface init")
}

#[test]
fn plugin_registry_rejects_empty_and_duplicate_ids() {
    let mut surface = surface();
    let events = Rc::new(RefCell::new(Vec::new()));

    let err = surface
        .register_plugin(Box::new(RecordingPlugin::new("", events.clone())))
        .expect_err("empty id");
    assert!(matches!(err, ChartError::InvalidData(_)));

    surface
        .register_plugin(Box::new(RecordingPlugin::new("hover-readout", events.clone())))
        .expect("register");
    let err = surface
        .register_plugin(Box::new(RecordingPlugin::new("hover-readout", events)))
        .expect_err("duplicate id");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert_eq!(surface.plugin_count(), 1);
    assert!(surface.has_plugin("hover-readout"));
    assert!(surface.unregister_plugin("hover-readout"));
    assert!(!surface.unregister_plugin("hover-readout"));
    assert_eq!(surface.plugin_count(), 0);
}

#[test]
fn plugins_observe_update_hover_and_render_lifecycle() {
    let mut surface = surface();
    let events = Rc::new(RefCell::new(Vec::new()));
    surface
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register");

    surface.set_data(vec![point(0.0, 10.0), point(60.0, 20.0), point(120.0, 10.0)]);
    surface.set_data(Vec::new());
    surface.advance(300.0);
    surface.pointer_move(100.0);
    surface.pointer_leave();
    surface.render().expect("render");

    let recorded = events.borrow();
    let kinds: Vec<&str> = recorded.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "accepted",
            "rejected",
            "finished",
            "hover_move",
            "hover_leave",
            "rendered"
        ]
    );

    assert_eq!(
        recorded[0].0,
        PluginEvent::DataAccepted {
            points_len: 3,
            skip_transition: false
        }
    );
    assert!(matches!(
        recorded[0].1.phase,
        TransitionPhase::Transitioning { .. }
    ));
    assert_eq!(recorded[0].1.generation, 1);
    assert_eq!(
        recorded[1].0,
        PluginEvent::UpdateRejected {
            reason: RejectReason::EmptyInput
        }
    );
    assert_eq!(recorded[2].1.phase, TransitionPhase::Idle);

    match recorded[3].0 {
        PluginEvent::HoverMoved { index, pixel_y, .. } => {
            assert_eq!(index, 1);
            assert!((pixel_y - 20.0).abs() <= 1e-9);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(recorded[3].1.hover.active);
    assert!(!recorded[4].1.hover.active);
}

#[test]
fn plugins_receive_events_in_registration_order() {
    let mut surface = surface();
    let order = Rc::new(RefCell::new(Vec::new()));

    struct OrderPlugin {
        id: &'static str,
        order: Rc<RefCell<Vec<&'static str>>>,
    }

    impl ChartPlugin for OrderPlugin {
        fn id(&self) -> &str {
            self.id
        }

        fn on_event(&mut self, _event: PluginEvent, _context: PluginContext) {
            self.order.borrow_mut().push(self.id);
        }
    }

    for id in ["b", "a", "c"] {
        surface
            .register_plugin(Box::new(OrderPlugin {
                id,
                order: order.clone(),
            }))
            .expect("register");
    }
    assert_eq!(surface.plugin_ids(), vec!["b", "a", "c"]);

    surface.render().expect("render");
    assert_eq!(*order.borrow(), vec!["b", "a", "c"]);
}
