//! Optional observer hooks.
//!
//! Keep extensions out of the core update and render paths.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
