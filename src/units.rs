pub const SECOND: f64 = 1_000.0;
pub const MINUTE: f64 = 60.0 * SECOND;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;
pub const WEEK: f64 = 7.0 * DAY;
/// Julian year of 365.25 days.
pub const YEAR: f64 = 365.25 * DAY;

/// A unit of time the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

/// Units the formatters pick from, largest first.
const FORMAT_BRACKETS: [Unit; 4] = [Unit::Day, Unit::Hour, Unit::Minute, Unit::Second];

impl Unit {
    /// Resolve a unit token (any case) to its unit, e.g. "hrs" -> `Hour`.
    /// An empty token means milliseconds.
    pub fn from_token(token: &str) -> Option<Unit> {
        let unit = match token.to_ascii_lowercase().as_str() {
            "" | "milliseconds" | "millisecond" | "msecs" | "msec" | "ms" => Unit::Millisecond,
            "seconds" | "second" | "secs" | "sec" | "s" => Unit::Second,
            "minutes" | "minute" | "mins" | "min" | "m" => Unit::Minute,
            "hours" | "hour" | "hrs" | "hr" | "h" => Unit::Hour,
            "days" | "day" | "d" => Unit::Day,
            "weeks" | "week" | "w" => Unit::Week,
            "years" | "year" | "yrs" | "yr" | "y" => Unit::Year,
            _ => return None,
        };
        Some(unit)
    }

    /// Length of one unit in milliseconds.
    pub const fn millis(self) -> f64 {
        match self {
            Unit::Millisecond => 1.0,
            Unit::Second => SECOND,
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => DAY,
            Unit::Week => WEEK,
            Unit::Year => YEAR,
        }
    }

    pub const fn short_suffix(self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Year => "y",
        }
    }

    /// Singular spelled-out name. Milliseconds keep their abbreviation.
    pub const fn long_name(self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Year => "year",
        }
    }

    /// The largest of day/hour/minute/second whose length `abs_ms` reaches,
    /// or `Millisecond` below one second.
    pub fn for_magnitude(abs_ms: f64) -> Unit {
        FORMAT_BRACKETS
            .into_iter()
            .find(|unit| abs_ms >= unit.millis())
            .unwrap_or(Unit::Millisecond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        assert_eq!(MINUTE, 60_000.0);
        assert_eq!(HOUR, 3_600_000.0);
        assert_eq!(DAY, 86_400_000.0);
        assert_eq!(WEEK, 604_800_000.0);
        assert_eq!(YEAR, 31_557_600_000.0);
    }

    #[test]
    fn synonyms_share_a_unit() {
        for token in ["years", "year", "yrs", "yr", "y", "YRS", "Year"] {
            assert_eq!(Unit::from_token(token), Some(Unit::Year), "{token}");
        }
        for token in ["milliseconds", "millisecond", "msecs", "msec", "ms", ""] {
            assert_eq!(Unit::from_token(token), Some(Unit::Millisecond), "{token}");
        }
        assert_eq!(Unit::from_token("HRS"), Some(Unit::Hour));
        assert_eq!(Unit::from_token("Mins"), Some(Unit::Minute));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(Unit::from_token("fortnight"), None);
        assert_eq!(Unit::from_token("hs"), None);
        assert_eq!(Unit::from_token("\u{17f}"), None);
    }

    #[test]
    fn brackets_stop_at_day() {
        assert_eq!(Unit::for_magnitude(YEAR * 3.0), Unit::Day);
        assert_eq!(Unit::for_magnitude(DAY), Unit::Day);
        assert_eq!(Unit::for_magnitude(DAY - 1.0), Unit::Hour);
        assert_eq!(Unit::for_magnitude(60_000.0), Unit::Minute);
        assert_eq!(Unit::for_magnitude(1_000.0), Unit::Second);
        assert_eq!(Unit::for_magnitude(999.999), Unit::Millisecond);
        assert_eq!(Unit::for_magnitude(0.0), Unit::Millisecond);
    }
}
