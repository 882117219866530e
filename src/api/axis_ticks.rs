/// SI prefixes from `y` (10^-24) to `Y` (10^24), indexed by exponent / 3 + 8.
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];
const SI_SIGNIFICANT_DIGITS: i32 = 6;

/// Formats `value` with an SI prefix and trimmed trailing zeros
/// (`1500 → "1.5k"`, `0.02 → "20m"`).
#[must_use]
pub fn format_si(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let mut magnitude = value.abs().log10().floor() as i32;
    if 10f64.powi(magnitude + 1) <= value.abs() {
        magnitude += 1;
    }
    let group = magnitude.div_euclid(3).clamp(-8, 8);
    let mantissa = value / 10f64.powi(group * 3);
    let decimals = (SI_SIGNIFICANT_DIGITS - 1 - (magnitude - group * 3)).max(0) as usize;
    let mut text = format!("{mantissa:.decimals$}");
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    text.push_str(SI_PREFIXES[(group + 8) as usize]);
    text
}

/// Labels for log-axis `ticks`; crowded axes keep only the ticks whose
/// leading digit is small enough, the rest get an empty label.
#[must_use]
pub fn log_tick_labels(ticks: &[f64], count: usize) -> Vec<String> {
    if ticks.is_empty() {
        return Vec::new();
    }
    let keep_up_to = (10.0 * count.max(1) as f64 / ticks.len() as f64).max(1.0);
    ticks
        .iter()
        .map(|&tick| {
            let mut leading = tick / 10f64.powf(tick.log10().round());
            if leading * 10.0 < 10.0 - 0.5 {
                leading *= 10.0;
            }
            if leading <= keep_up_to {
                format_si(tick)
            } else {
                String::new()
            }
        })
        .collect()
}
