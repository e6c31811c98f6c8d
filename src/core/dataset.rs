use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::core::primitives::parse_date_to_unix_millis;
use crate::core::scale::extent;
use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Chart data handed to the initializer by the host page.
///
/// The raw JSON value is kept untouched for diagnostics, while `points` holds
/// the validated `(x, y)` view of it. Accepted item shapes:
///
/// - `{"x": 1, "y": 2}`
/// - `[1, 2]`
/// - two-field records such as `{"DATE": 946684800000, "MORTGAGE30US": 7.5}`,
///   where the first field is x and the second is y
///
/// x may be a number or an ISO-8601 date string (stored as epoch
/// milliseconds). Items with a `null` y are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    raw: Value,
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset json: {e}")))?;
        Self::from_value(raw)
    }

    pub fn from_value(raw: Value) -> ChartResult<Self> {
        let items = raw.as_array().ok_or_else(|| {
            ChartError::InvalidData("dataset must be a json array".to_owned())
        })?;

        let mut points = Vec::with_capacity(items.len());
        let mut skipped = 0usize;
        for (index, item) in items.iter().enumerate() {
            match parse_item(index, item)? {
                Some(point) => points.push(point),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "skipped dataset items with null y");
        }
        debug!(items = items.len(), points = points.len(), "dataset validated");
        Ok(Self { raw, points })
    }

    /// Builds a dataset whose raw value is the `{"x", "y"}` object form.
    pub fn from_points(points: Vec<DataPoint>) -> ChartResult<Self> {
        if let Some(index) = points
            .iter()
            .position(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(ChartError::InvalidData(format!(
                "dataset item {index}: coordinates must be finite"
            )));
        }
        let raw = serde_json::to_value(&points).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize dataset points: {e}"))
        })?;
        Ok(Self { raw, points })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            raw: Value::Array(Vec::new()),
            points: Vec::new(),
        }
    }

    /// The value exactly as supplied.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|point| point.x))
    }

    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|point| point.y))
    }
}

fn parse_item(index: usize, item: &Value) -> ChartResult<Option<DataPoint>> {
    let (x, y) = match item {
        Value::Object(fields) => object_pair(index, fields)?,
        Value::Array(pair) if pair.len() == 2 => (&pair[0], &pair[1]),
        _ => {
            return Err(item_error(
                index,
                "expected an {x, y} object, a two-field record or an [x, y] pair",
            ));
        }
    };

    if y.is_null() {
        return Ok(None);
    }
    let x = parse_x(index, x)?;
    let y = y
        .as_f64()
        .ok_or_else(|| item_error(index, "y must be a number"))?;
    Ok(Some(DataPoint::new(x, y)))
}

fn object_pair<'a>(
    index: usize,
    fields: &'a Map<String, Value>,
) -> ChartResult<(&'a Value, &'a Value)> {
    if let (Some(x), Some(y)) = (fields.get("x"), fields.get("y")) {
        return Ok((x, y));
    }
    let mut values = fields.values();
    match (values.next(), values.next(), values.next()) {
        (Some(x), Some(y), None) => Ok((x, y)),
        _ => Err(item_error(
            index,
            "record must have `x`/`y` keys or exactly two fields",
        )),
    }
}

fn parse_x(index: usize, value: &Value) -> ChartResult<f64> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| item_error(index, "x is not representable as f64")),
        Value::String(text) => parse_date_to_unix_millis(text)
            .map_err(|e| item_error(index, &format!("x: {e}"))),
        _ => Err(item_error(index, "x must be a number or a date string")),
    }
}

fn item_error(index: usize, message: &str) -> ChartError {
    ChartError::InvalidData(format!("dataset item {index}: {message}"))
}
