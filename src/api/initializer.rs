use tracing::{debug, info, warn};

use crate::core::{Dataset, LayoutBox, ScalePair, parse_css_px};
use crate::dom::{Document, NodeId, Selector};
use crate::error::{ChartError, ChartResult};
use crate::render::SvgSurface;

use super::{CanvasConfig, DiagnosticSink, TracingSink, WidthPolicy};

/// Label attached to the dataset on the diagnostic channel.
pub const DATASET_DIAGNOSTIC_LABEL: &str = "dataset";

/// Everything one initialization produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartCanvas {
    pub layout: LayoutBox,
    pub scales: ScalePair,
    pub surface: SvgSurface,
}

/// Sets up one chart: measures the container, derives layout and scales,
/// mounts the SVG surface and reports the dataset.
#[derive(Debug, Clone)]
pub struct ChartCanvasInitializer {
    config: CanvasConfig,
    selector: Selector,
}

impl ChartCanvasInitializer {
    pub fn new(config: CanvasConfig) -> ChartResult<Self> {
        let selector = config.validate()?;
        Ok(Self { config, selector })
    }

    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Runs the full setup against `document`.
    ///
    /// On error nothing has been appended to the document. Every successful
    /// call appends a new, independent surface.
    pub fn initialize(
        &self,
        document: &mut Document,
        dataset: &Dataset,
        sink: &mut dyn DiagnosticSink,
    ) -> ChartResult<ChartCanvas> {
        let container = self.find_container(document)?;
        let layout = self.measure_layout(document, container)?;
        debug!(
            width = layout.width,
            height = layout.height,
            margin_left = layout.margin.left,
            margin_top = layout.margin.top,
            "computed chart layout"
        );

        let scales = ScalePair::for_content(layout.width, layout.height)?;
        let surface = SvgSurface::mount(document, container, layout, &self.config.classes)?;

        sink.emit(DATASET_DIAGNOSTIC_LABEL, dataset.raw());
        info!(
            selector = %self.config.container_selector,
            surface_width = surface.size().width,
            surface_height = surface.size().height,
            points = dataset.len(),
            "chart canvas initialized"
        );

        Ok(ChartCanvas {
            layout,
            scales,
            surface,
        })
    }

    /// [`initialize`](Self::initialize) reporting through [`TracingSink`].
    pub fn initialize_with_tracing(
        &self,
        document: &mut Document,
        dataset: &Dataset,
    ) -> ChartResult<ChartCanvas> {
        self.initialize(document, dataset, &mut TracingSink)
    }

    fn find_container(&self, document: &Document) -> ChartResult<NodeId> {
        let matches = document.select_all(&self.selector);
        let Some(&container) = matches.first() else {
            return Err(ChartError::ContainerNotFound {
                selector: self.config.container_selector.clone(),
            });
        };
        if matches.len() > 1 {
            debug!(
                selector = %self.config.container_selector,
                matches = matches.len(),
                "several containers match; using the first"
            );
        }
        Ok(container)
    }

    fn measure_layout(&self, document: &Document, container: NodeId) -> ChartResult<LayoutBox> {
        let tuning = self.config.layout;
        let measured = document
            .style(container, "width")
            .ok_or_else(|| ChartError::WidthUnset {
                selector: self.config.container_selector.clone(),
            })
            .and_then(parse_css_px)
            .and_then(|container_px| LayoutBox::from_container_width(container_px, tuning));

        match (measured, self.config.width_policy) {
            (Ok(layout), _) => Ok(layout),
            (Err(err), WidthPolicy::Fallback { width_px }) => {
                warn!(
                    error = %err,
                    fallback_width_px = width_px,
                    "container width unusable; using fallback width"
                );
                LayoutBox::from_container_width(width_px, tuning)
            }
            (Err(err), WidthPolicy::FailFast) => Err(err),
        }
    }
}
