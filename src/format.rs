use crate::error::{ensure_finite, Result};
use crate::units::Unit;

/// Format milliseconds in the most significant unit, compactly: "10h", "-3m", "0.5ms".
pub fn format_short(ms: f64) -> Result<String> {
    ensure_finite(ms)?;
    let out = match Unit::for_magnitude(ms.abs()) {
        Unit::Millisecond => format!("{ms}ms"),
        unit => format!("{}{}", (ms / unit.millis()).round(), unit.short_suffix()),
    };
    Ok(out)
}

/// Format milliseconds in the most significant unit, spelled out: "10 hours", "1 minute", "1.01 ms".
pub fn format_long(ms: f64) -> Result<String> {
    ensure_finite(ms)?;
    let out = match Unit::for_magnitude(ms.abs()) {
        Unit::Millisecond => format!("{ms} ms"),
        unit => plural(ms, unit),
    };
    Ok(out)
}

/// Plural from 1.5 units up, judged on the unrounded magnitude.
fn plural(ms: f64, unit: Unit) -> String {
    let len = unit.millis();
    let count = (ms / len).round();
    if ms.abs() >= len * 1.5 {
        format!("{count} {}s", unit.long_name())
    } else {
        format!("{count} {}", unit.long_name())
    }
}
