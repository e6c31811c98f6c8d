use serde::{Deserialize, Serialize};

use crate::core::types::Size;
use crate::error::{ChartError, ChartResult};

/// Padding reserved around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

/// Constants that turn a measured container width into a [`LayoutBox`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutTuning {
    /// Share of the container width used as content width.
    #[serde(default = "default_width_factor")]
    pub width_factor: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_margin_vertical")]
    pub margin_top: f64,
    #[serde(default = "default_margin_vertical")]
    pub margin_bottom: f64,
    /// Left and right margins, each as a share of the content width.
    #[serde(default = "default_margin_side_ratio")]
    pub margin_side_ratio: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            width_factor: default_width_factor(),
            height: default_height(),
            margin_top: default_margin_vertical(),
            margin_bottom: default_margin_vertical(),
            margin_side_ratio: default_margin_side_ratio(),
        }
    }
}

impl LayoutTuning {
    pub fn validate(self) -> ChartResult<()> {
        if !self.width_factor.is_finite() || self.width_factor <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "width factor must be finite and > 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "height must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("margin_top", self.margin_top),
            ("margin_bottom", self.margin_bottom),
            ("margin_side_ratio", self.margin_side_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

fn default_width_factor() -> f64 {
    0.9
}

fn default_height() -> f64 {
    200.0
}

fn default_margin_vertical() -> f64 {
    30.0
}

fn default_margin_side_ratio() -> f64 {
    0.01
}

/// Content dimensions plus the margin box around them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl LayoutBox {
    /// Derives the layout from the measured container width in pixels.
    pub fn from_container_width(container_px: f64, tuning: LayoutTuning) -> ChartResult<Self> {
        Self::from_content_width(container_px * tuning.width_factor, tuning)
    }

    /// Derives the layout from an already-scaled content width.
    pub fn from_content_width(width: f64, tuning: LayoutTuning) -> ChartResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidWidth { width });
        }
        let side = width * tuning.margin_side_ratio;
        let layout = Self {
            width,
            height: tuning.height,
            margin: Margin::new(tuning.margin_top, tuning.margin_bottom, side, side),
        };
        let outer = layout.outer_size();
        if !outer.is_valid() {
            return Err(ChartError::InvalidLayout {
                width: outer.width,
                height: outer.height,
            });
        }
        Ok(layout)
    }

    #[must_use]
    pub fn outer_width(self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    #[must_use]
    pub fn outer_height(self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }

    #[must_use]
    pub fn outer_size(self) -> Size {
        Size::new(self.outer_width(), self.outer_height())
    }

    #[must_use]
    pub fn content_size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Offset of the drawing group inside the surface.
    #[must_use]
    pub fn origin(self) -> (f64, f64) {
        (self.margin.left, self.margin.top)
    }
}
