//! Convert human-readable durations ("2 days", "1.5h", "100") to milliseconds and back.
//!
//! ```
//! assert_eq!(humanms::parse("2 days"), Ok(172_800_000.0));
//! assert_eq!(humanms::format_short(60_000.0).as_deref(), Ok("1m"));
//! assert_eq!(humanms::format_long(234_234_234.0).as_deref(), Ok("3 days"));
//! ```

pub mod error;
pub mod format;
pub mod millis;
pub mod parse;
pub mod units;

#[cfg(test)]
mod logging;

/// Re-export commonly used items
pub use error::{MsError, Result};
pub use format::{format_long, format_short};
pub use millis::Millis;
pub use parse::{parse, parse_or_panic, MAX_INPUT_LEN};
pub use units::Unit;
