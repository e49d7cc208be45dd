//! Human-readable elapsed times.

use std::fmt;
use std::string::{String, ToString};
use std::time::Duration;

/// Wall-clock duration rendered in the coarsest unit that keeps it >= 1:
/// nanoseconds below 1 ms, microseconds below 1 s, milliseconds below one
/// minute, seconds beyond. Values are truncated, not rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Elapsed(pub Duration);

impl Elapsed {
    /// Truncated count and unit name.
    pub fn scaled(self) -> (u128, &'static str) {
        let d = self.0;
        if d < Duration::from_millis(1) {
            (d.as_nanos(), "nanoseconds")
        } else if d < Duration::from_secs(1) {
            (d.as_micros(), "microseconds")
        } else if d < Duration::from_secs(60) {
            (d.as_millis(), "milliseconds")
        } else {
            (d.as_secs() as u128, "seconds")
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, unit) = self.scaled();
        write!(f, "{count}\t {unit}")
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    Elapsed(elapsed).to_string()
}
