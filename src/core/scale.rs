use serde::{Deserialize, Serialize};

use crate::core::dataset::Dataset;
use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from an input domain onto an output range.
///
/// Defaults to domain `[0, 1]` and range `[0, 1]`. A degenerate domain
/// (`start == end`) maps every input to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain_start: 0.0,
            domain_end: 1.0,
            range_start: 0.0,
            range_end: 1.0,
        }
    }
}

impl LinearScale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        self.domain_start = start;
        self.domain_end = end;
        Ok(self)
    }

    pub fn with_range(mut self, start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        self.range_start = start;
        self.range_end = end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to the output range. Values outside the domain
    /// extrapolate linearly.
    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Maps an output value back into the domain.
    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a scale with an empty range".to_owned(),
            ));
        }
        let normalized = (pixel - self.range_start) / span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Sets the domain to the extent of the finite `values`.
    pub fn fit_domain<I>(self, values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = extent(values).ok_or_else(|| {
            ChartError::InvalidData("cannot fit a scale domain without finite values".to_owned())
        })?;
        self.with_domain(min, max)
    }
}

pub(crate) fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

/// Horizontal and vertical scales of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePair {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ScalePair {
    /// `x` spans `[0, width]`; `y` spans `[height, 0]` so larger values sit
    /// higher on screen. Both domains keep the `[0, 1]` default.
    pub fn for_content(width: f64, height: f64) -> ChartResult<Self> {
        Ok(Self {
            x: LinearScale::new().with_range(0.0, width)?,
            y: LinearScale::new().with_range(height, 0.0)?,
        })
    }

    /// Fits both domains to the extents of `dataset`.
    pub fn fit_to_dataset(self, dataset: &Dataset) -> ChartResult<Self> {
        let points = dataset.points();
        Ok(Self {
            x: self.x.fit_domain(points.iter().map(|point| point.x))?,
            y: self.y.fit_domain(points.iter().map(|point| point.y))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_non_finite_values() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(extent([f64::INFINITY]), None);
        assert_eq!(extent(std::iter::empty()), None);
    }
}
