//! Host-facing chart surface.
//!
//! `ChartSurface` is split across files by concern, each contributing an
//! `impl<R: Renderer> ChartSurface<R>` block.

mod interaction_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod surface;
mod surface_config;
mod surface_snapshot;

pub use json_contract::{SURFACE_SNAPSHOT_JSON_SCHEMA_V1, SurfaceSnapshotJsonContractV1};
pub use surface::ChartSurface;
pub use surface_config::{ChartSurfaceConfig, DEFAULT_LINE_WIDTH_PX};
pub use surface_snapshot::SurfaceSnapshot;

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
pub use crate::transition::{RejectReason, UpdateOutcome};
