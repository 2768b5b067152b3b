use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{ChartSurface, PluginEvent};

impl<R: Renderer> ChartSurface<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let state = self.controller.state();
        PluginContext {
            viewport: state.viewport(),
            points_len: state.data().len(),
            generation: self.controller.generation(),
            phase: self.controller.phase(),
            hover: self.hover.state(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
