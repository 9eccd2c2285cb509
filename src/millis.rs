//! A millisecond count that reads and writes human-readable text.
//!
//! `Millis` deserializes from either a duration string (`"30s"`, `"1.5 hours"`)
//! or a bare number of milliseconds, so it can sit directly in a serde config
//! struct. It always serializes as the number of milliseconds.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ensure_finite, MsError, Result};
use crate::format::{format_long, format_short};
use crate::parse::parse;

/// A signed, possibly fractional, number of milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Millis(pub f64);

impl Millis {
    pub const fn as_f64(self) -> f64 {
        self.0
    }

    /// Convert to a [`Duration`]. Fails for NaN, infinite or negative values.
    pub fn to_std(self) -> Result<Duration> {
        ensure_finite(self.0)?;
        if self.0 < 0.0 {
            return Err(MsError::Negative);
        }
        // Whole milliseconds and the sub-millisecond remainder convert separately
        // so large values stay exact.
        let whole = self.0.trunc();
        if whole >= u64::MAX as f64 {
            return Err(MsError::Infinite);
        }
        let nanos = (self.0.fract() * 1_000_000.0).round() as u64;
        Duration::from_millis(whole as u64)
            .checked_add(Duration::from_nanos(nanos))
            .ok_or(MsError::Infinite)
    }
}

impl From<f64> for Millis {
    fn from(ms: f64) -> Self {
        Millis(ms)
    }
}

impl From<Millis> for f64 {
    fn from(ms: Millis) -> Self {
        ms.0
    }
}

impl From<Duration> for Millis {
    fn from(duration: Duration) -> Self {
        Millis(duration.as_secs_f64() * 1_000.0)
    }
}

impl FromStr for Millis {
    type Err = MsError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s).map(Millis)
    }
}

/// Long form by default ("2 hours"); the alternate flag `{:#}` gives the short form ("2h").
impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if f.alternate() {
            format_short(self.0)
        } else {
            format_long(self.0)
        };
        match text {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "<{err}>"),
        }
    }
}

impl Serialize for Millis {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ensure_finite(self.0).map_err(S::Error::custom)?;
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Millis {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MillisVisitor)
    }
}

struct MillisVisitor;

impl<'de> Visitor<'de> for MillisVisitor {
    type Value = Millis;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a duration string such as \"30s\" or a number of milliseconds")
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        value
            .parse::<Millis>()
            .map_err(|err| E::custom(format!("invalid duration {value:?}: {err}")))
    }

    fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Millis(value))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Millis(value as f64))
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Millis(value as f64))
    }
}
