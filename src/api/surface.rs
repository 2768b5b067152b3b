use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{DataPoint, Viewport};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::{HoverMapper, HoverTracker};
use crate::render::{AreaPrimitive, CursorPrimitive, LinePathPrimitive, RenderFrame, Renderer};
use crate::transition::{
    ChartGeometry, ChartInput, ChartState, ColorSpec, RejectReason, SeriesColors,
    TransitionController, TransitionPhase, UpdateOutcome,
};

use super::{ChartSurfaceConfig, PluginEvent};

/// Composition root consumed by host applications.
///
/// `ChartSurface` feeds data/viewport/color updates into the transition
/// controller, maps pointer events through the hover mapper, and hands
/// finished frames to the renderer it owns.
pub struct ChartSurface<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartSurfaceConfig,
    pub(super) controller: TransitionController,
    pub(super) hover_mapper: HoverMapper,
    pub(super) hover: HoverTracker,
    pub(super) data: Vec<DataPoint>,
    pub(super) viewport: Viewport,
    pub(super) colors: SeriesColors,
    pub(super) plugins: IndexMap<String, Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartSurface<R> {
    pub fn new(renderer: R, config: ChartSurfaceConfig) -> ChartResult<Self> {
        let colors = config.validate()?;
        let controller = TransitionController::new(
            config.viewport,
            colors,
            config.padding_top_px,
            config.transition,
        )?;

        Ok(Self {
            renderer,
            hover_mapper: HoverMapper::new(config.padding_top_px),
            hover: HoverTracker::default(),
            data: Vec::new(),
            viewport: config.viewport,
            colors,
            controller,
            config,
            plugins: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartSurfaceConfig {
        &self.config
    }

    /// Latest viewport handed in by the host.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Latest non-empty data handed in by the host.
    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn chart_state(&self) -> &ChartState {
        self.controller.state()
    }

    #[must_use]
    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    #[must_use]
    pub fn transition_phase(&self) -> TransitionPhase {
        self.controller.phase()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.controller.is_transitioning()
    }

    /// Replaces the data series.
    ///
    /// An empty sequence is reported as rejected and does not replace the
    /// data that later viewport changes re-layout.
    pub fn set_data(&mut self, data: Vec<DataPoint>) -> UpdateOutcome {
        if data.is_empty() {
            return self.apply(ChartInput::new(data, self.viewport, self.colors));
        }
        self.data = data;
        self.apply_current()
    }

    /// Handles a container resize.
    pub fn set_viewport(&mut self, viewport: Viewport) -> UpdateOutcome {
        self.viewport = viewport;
        self.apply_current()
    }

    /// Replaces data and viewport in a single update.
    pub fn update(&mut self, data: Vec<DataPoint>, viewport: Viewport) -> UpdateOutcome {
        self.viewport = viewport;
        if data.is_empty() {
            return self.apply(ChartInput::new(data, viewport, self.colors));
        }
        self.data = data;
        self.apply_current()
    }

    /// Stages new series colors; they take effect with the next accepted update.
    pub fn set_color(&mut self, color: ColorSpec) -> ChartResult<()> {
        let colors = color.resolve()?;
        debug!(fill = %color.fill, stroke = %color.stroke, "stage series colors");
        self.colors = colors;
        self.config.color = color;
        Ok(())
    }

    /// Steps the running transition. Returns `true` while still animating.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        let was_transitioning = self.controller.is_transitioning();
        let still_transitioning = self.controller.advance(delta_ms);
        if was_transitioning && !still_transitioning {
            self.emit_plugin_event(PluginEvent::TransitionFinished);
        }
        still_transitioning
    }

    /// Completes the running transition immediately.
    pub fn finish_transition(&mut self) {
        if self.controller.is_transitioning() {
            self.controller.finish();
            self.emit_plugin_event(PluginEvent::TransitionFinished);
        }
    }

    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        self.controller.frame()
    }

    /// Materializes the current frame, including the hover cursor.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        let geometry = self.controller.frame();
        let viewport = self.controller.state().viewport();
        let hover = self.hover.state();
        let cursor = hover.active.then(|| CursorPrimitive {
            x: hover.pixel_x,
            y: hover.pixel_y,
            height: viewport.height_px(),
            color: geometry.colors.stroke,
        });

        RenderFrame {
            viewport,
            area: AreaPrimitive {
                path: geometry.area,
                fill_color: geometry.colors.fill,
            },
            line: LinePathPrimitive {
                path: geometry.line,
                stroke_width: self.config.line_width_px,
                stroke_color: geometry.colors.stroke,
            },
            cursor,
            progress: geometry.progress,
        }
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn apply_current(&mut self) -> UpdateOutcome {
        self.apply(ChartInput::new(self.data.clone(), self.viewport, self.colors))
    }

    fn apply(&mut self, input: ChartInput) -> UpdateOutcome {
        let outcome = self.controller.update(input);
        match outcome {
            UpdateOutcome::Accepted {
                skip_transition, ..
            } => {
                self.refresh_hover();
                self.emit_plugin_event(PluginEvent::DataAccepted {
                    points_len: self.controller.state().data().len(),
                    skip_transition,
                });
            }
            UpdateOutcome::Rejected(reason) => {
                if reason == RejectReason::InvalidGeometry {
                    warn!("surface keeps last good frame");
                }
                self.emit_plugin_event(PluginEvent::UpdateRejected { reason });
            }
        }
        outcome
    }
}
