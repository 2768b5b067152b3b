use crate::interaction::HoverState;
use crate::render::Renderer;

use super::{ChartSurface, PluginEvent};

impl<R: Renderer> ChartSurface<R> {
    /// Pointer entered the plot area.
    pub fn pointer_enter(&mut self, x: f64) -> HoverState {
        self.pointer_move(x)
    }

    /// Maps pointer X onto the committed data and updates the hover state.
    pub fn pointer_move(&mut self, x: f64) -> HoverState {
        let state = self.controller.state();
        let location = state.scales().and_then(|scales| {
            self.hover_mapper
                .locate_with_scales(x, state.data(), state.viewport(), scales)
        });
        self.hover.on_pointer_move(x, location);

        let hover = self.hover.state();
        if let (Some(index), Some(value)) = (hover.index, hover.value) {
            self.emit_plugin_event(PluginEvent::HoverMoved {
                pixel_x: hover.pixel_x,
                pixel_y: hover.pixel_y,
                index,
                value,
            });
        }
        hover
    }

    pub fn pointer_leave(&mut self) {
        let was_active = self.hover.state().active;
        self.hover.on_pointer_leave();
        if was_active {
            self.emit_plugin_event(PluginEvent::HoverLeft);
        }
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    /// Re-resolves the hovered sample after the committed data changed.
    pub(super) fn refresh_hover(&mut self) {
        if self.hover.is_pointer_inside() {
            let x = self.hover.state().pixel_x;
            self.pointer_move(x);
        }
    }
}
