//! chart-canvas: headless chart canvas initialization.
//!
//! Measures a container element, derives a margin layout and a pair of
//! linear scales from its width, mounts an SVG drawing surface into the
//! host document and reports the chart dataset on a diagnostic channel.

pub mod api;
pub mod core;
pub mod dom;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{CanvasConfig, ChartCanvas, ChartCanvasInitializer, WidthPolicy};
pub use error::{ChartError, ChartResult};
