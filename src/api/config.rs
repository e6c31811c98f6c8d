use serde::{Deserialize, Serialize};

use crate::core::LayoutTuning;
use crate::dom::Selector;
use crate::error::{ChartError, ChartResult};
use crate::render::SurfaceClasses;

/// What to do when the container width cannot be measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WidthPolicy {
    /// Return an error and leave the document untouched.
    #[default]
    FailFast,
    /// Log a warning and measure as if the container were `width_px` wide.
    Fallback { width_px: f64 },
}

/// Chart canvas bootstrap configuration.
///
/// Serializable so host pages can ship the setup next to the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_container_selector")]
    pub container_selector: String,
    #[serde(default)]
    pub layout: LayoutTuning,
    #[serde(default)]
    pub classes: SurfaceClasses,
    #[serde(default)]
    pub width_policy: WidthPolicy,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            container_selector: default_container_selector(),
            layout: LayoutTuning::default(),
            classes: SurfaceClasses::default(),
            width_policy: WidthPolicy::default(),
        }
    }
}

fn default_container_selector() -> String {
    ".main".to_owned()
}

impl CanvasConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutTuning) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_classes(mut self, classes: SurfaceClasses) -> Self {
        self.classes = classes;
        self
    }

    #[must_use]
    pub fn with_width_policy(mut self, policy: WidthPolicy) -> Self {
        self.width_policy = policy;
        self
    }

    /// Checks every field and returns the parsed container selector.
    pub fn validate(&self) -> ChartResult<Selector> {
        let selector = Selector::parse(&self.container_selector)?;
        self.layout.validate()?;
        self.classes.validate()?;
        if let WidthPolicy::Fallback { width_px } = self.width_policy {
            if !width_px.is_finite() || width_px <= 0.0 {
                return Err(ChartError::InvalidConfig(
                    "fallback width must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(selector)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }
}
