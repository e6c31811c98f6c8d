use std::fmt;

/// Formats a number the way JavaScript's `Number#toString` does: shortest
/// round-trip digits, exponent form (`1.79e+308`, `1e-7`) outside
/// `[1e-6, 1e21)`, and `-0` written as `0`.
#[must_use]
pub fn fmt_number(value: f64) -> String {
    NumberDisplay(value).to_string()
}

#[derive(Debug, Clone, Copy)]
pub struct NumberDisplay(pub f64);

impl fmt::Display for NumberDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if value == 0.0 {
            return f.write_str("0");
        }

        let magnitude = value.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{value}");
        }
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&scientific),
        }
    }
}

/// `translate(x,y)` transform attribute value.
#[must_use]
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", NumberDisplay(x), NumberDisplay(y))
}
