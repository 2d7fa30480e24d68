/// Parse a stringly-typed sensor state into a number.
///
/// Sensor states arrive as text ("1234.5", "unavailable", ""). Anything that
/// is not a finite number parses to `None`, so every caller shares the same
/// notion of an invalid reading.
pub fn parse_metric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// A metric is "present" when it exists and is neither zero nor NaN.
///
/// Formatters collapse every non-present metric to their zero rendering.
pub fn present_metric(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
