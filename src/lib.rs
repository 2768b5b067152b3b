//! price-chart-rs: animated single-series price charts.
//!
//! The crate maps time/price samples onto a viewport, builds area and line
//! outlines, morphs between successive outlines with eased transitions, and
//! resolves hover positions back to samples. Rendering goes through the
//! `Renderer` trait so drawing backends stay isolated from chart logic.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;
pub mod transition;

pub use api::{ChartSurface, ChartSurfaceConfig};
pub use error::{ChartError, ChartResult};
