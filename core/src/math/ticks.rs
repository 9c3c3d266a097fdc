/// Upper bound on the requested interval count.
pub const MAX_TICKS: usize = 50;

/// Tick positions at `{1, 2, 5} * 10^k` steps covering `[min, max]`,
/// aiming for roughly `target` intervals (at most [`MAX_TICKS`]).
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let Some(step) = nice_step(min, max, target) else {
        return Vec::new();
    };
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Step chosen by [`nice_ticks`] for the same arguments.
pub fn nice_step(min: f64, max: f64, target: usize) -> Option<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return None;
    }
    let raw = span / target.min(MAX_TICKS) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    Some(factor * magnitude)
}

/// Formats a tick label with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    // avoid "-0"
    let value = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{value:.decimals$}")
}
