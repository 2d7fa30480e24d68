use crate::metric::present_metric;

const HASHRATE_UNITS: [&str; 7] = ["H/s", "KH/s", "MH/s", "GH/s", "TH/s", "PH/s", "EH/s"];

/// Format hashrate with appropriate unit (H/s through EH/s)
///
/// Values past 1000 EH/s stay in EH/s.
pub fn format_hashrate(hashrate: Option<f64>) -> String {
    let Some(mut value) = present_metric(hashrate) else {
        return "0 H/s".to_string();
    };

    let mut unit = 0;
    while value >= 1000.0 && unit < HASHRATE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{:.2} {}", value, HASHRATE_UNITS[unit])
}

/// Format a share difficulty with a K or M suffix
pub fn format_difficulty(difficulty: Option<f64>) -> String {
    match present_metric(difficulty) {
        None => "0".to_string(),
        Some(value) if value >= 1_000_000.0 => format!("{:.2}M", value / 1_000_000.0),
        Some(value) if value >= 1_000.0 => format!("{:.2}K", value / 1_000.0),
        Some(value) => format!("{:.2}", value),
    }
}

/// Format a number with `,` thousands separators and up to 3 fractional digits.
///
/// Matches the dashboard's default number display ("1,234,567.891").
pub fn format_grouped(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return "0".to_string();
    };

    let rounded = format!("{:.3}", value.abs());
    let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (integer != "0" || !fraction.is_empty());
    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}
