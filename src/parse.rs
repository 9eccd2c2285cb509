use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{MsError, Result};
use crate::units::Unit;

/// Longest input, in bytes, the parser will look at.
pub const MAX_INPUT_LEN: usize = 100;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(-?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+))[ \t]*(milliseconds?|msecs?|ms|seconds?|secs?|s|minutes?|mins?|m|hours?|hrs?|h|days?|d|weeks?|w|years?|yrs?|y)?$",
    )
    .expect("duration pattern is valid")
});

/// Parse a duration string (e.g. "100", "1.5h", "-.5 hr", "2 days") into milliseconds.
///
/// A bare number is already milliseconds. Unit names are case-insensitive and
/// may be separated from the number by spaces or tabs.
pub fn parse(text: &str) -> Result<f64> {
    if text.len() > MAX_INPUT_LEN {
        debug!(len = text.len(), "duration input too long");
        return Err(MsError::InputTooLong);
    }

    let Some(caps) = DURATION_RE.captures(text) else {
        debug!(input = text, "duration input does not match grammar");
        return Err(MsError::InvalidFormat);
    };

    let value: f64 = caps[1].parse().map_err(|_| MsError::InvalidFormat)?;
    let token = caps.get(2).map_or("", |m| m.as_str());
    // Unicode case folding lets the pattern accept look-alikes such as 'ſ'.
    let unit = Unit::from_token(token).ok_or(MsError::InvalidFormat)?;

    let ms = value * unit.millis();
    trace!(input = text, ?unit, ms, "parsed duration");
    Ok(ms)
}

/// Like [`parse`], but panics when `text` is not a valid duration.
///
/// Meant for literals the caller knows are well formed.
pub fn parse_or_panic(text: &str) -> f64 {
    match parse(text) {
        Ok(ms) => ms,
        Err(err) => panic!("invalid duration {text:?}: {err}"),
    }
}
