const SHORT_DECIMALS: usize = 4;
const FALLBACK_DECIMALS: usize = 6;
/// Relative error above which the short form is considered misleading.
const MAX_RELATIVE_ERROR: f64 = 0.10;

/// Formats a tooltip value with up to 4 decimals, trailing zeros trimmed.
///
/// Falls back to 6 decimals when 4 would print a non-zero value as `0` or
/// shift it by more than 10 %.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let short = trim_fixed(value, SHORT_DECIMALS);
    if value == 0.0 {
        return short;
    }

    let rounded = round_to(value, SHORT_DECIMALS);
    let relative_error = ((rounded - value) / value).abs();
    if rounded == 0.0 || relative_error > MAX_RELATIVE_ERROR {
        trim_fixed(value, FALLBACK_DECIMALS)
    } else {
        short
    }
}

/// Signed percentage: `+` for non-negative values, always a `%` suffix.
#[must_use]
pub fn format_change_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", format_value(value))
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn trim_fixed(value: f64, decimals: usize) -> String {
    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}
