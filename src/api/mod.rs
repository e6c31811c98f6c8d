mod config;
mod diagnostics;
mod initializer;
mod json_contract;

pub use config::{CanvasConfig, WidthPolicy};
pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use initializer::{ChartCanvas, ChartCanvasInitializer, DATASET_DIAGNOSTIC_LABEL};
pub use json_contract::{
    CANVAS_SNAPSHOT_JSON_SCHEMA_V1, CanvasSnapshot, CanvasSnapshotJsonContractV1,
};
