mod number;

pub use number::{NumberDisplay, fmt_number, translate};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{LayoutBox, Size};
use crate::dom::{Document, NodeId};
use crate::error::{ChartError, ChartResult};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Class names tagged onto the surface elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceClasses {
    #[serde(default = "default_svg_class")]
    pub svg: String,
    #[serde(default = "default_group_class")]
    pub group: String,
}

impl Default for SurfaceClasses {
    fn default() -> Self {
        Self {
            svg: default_svg_class(),
            group: default_group_class(),
        }
    }
}

impl SurfaceClasses {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [("svg", &self.svg), ("group", &self.group)] {
            if value.trim().is_empty() || value.contains(char::is_whitespace) {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} class must be a single non-empty class name"
                )));
            }
        }
        Ok(())
    }
}

fn default_svg_class() -> String {
    "line_chart".to_owned()
}

fn default_group_class() -> String {
    "container".to_owned()
}

/// Handle to the drawing surface: the `svg` root and the translated group
/// that hosts every chart element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgSurface {
    svg: NodeId,
    group: NodeId,
    size: Size,
    origin: (f64, f64),
}

impl SvgSurface {
    /// Appends `<svg><g/></svg>` sized from `layout` under `container`.
    pub fn mount(
        document: &mut Document,
        container: NodeId,
        layout: LayoutBox,
        classes: &SurfaceClasses,
    ) -> ChartResult<Self> {
        let size = layout.outer_size();
        let origin = layout.origin();

        let svg = document.create_element(container, "svg")?;
        document.set_attr(svg, "xmlns", SVG_NAMESPACE)?;
        document.set_attr(svg, "width", fmt_number(size.width))?;
        document.set_attr(svg, "height", fmt_number(size.height))?;
        document.add_class(svg, &classes.svg)?;

        let group = document.create_element(svg, "g")?;
        document.add_class(group, &classes.group)?;
        document.set_attr(group, "transform", translate(origin.0, origin.1))?;

        trace!(
            width = size.width,
            height = size.height,
            origin_x = origin.0,
            origin_y = origin.1,
            "mounted svg surface"
        );
        Ok(Self {
            svg,
            group,
            size,
            origin,
        })
    }

    #[must_use]
    pub fn svg(self) -> NodeId {
        self.svg
    }

    #[must_use]
    pub fn group(self) -> NodeId {
        self.group
    }

    /// Outer surface size, content plus margins.
    #[must_use]
    pub fn size(self) -> Size {
        self.size
    }

    #[must_use]
    pub fn origin(self) -> (f64, f64) {
        self.origin
    }

    #[must_use]
    pub fn transform(self) -> String {
        translate(self.origin.0, self.origin.1)
    }

    /// Appends a chart element (axis, path, bar...) inside the drawing group.
    pub fn append(self, document: &mut Document, tag: &str) -> ChartResult<NodeId> {
        document.create_element(self.group, tag)
    }

    #[must_use]
    pub fn markup(self, document: &Document) -> String {
        document.outer_markup(self.svg)
    }
}
