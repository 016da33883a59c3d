//! Countdown formatting
//!
//! Renders a number of seconds as `"{d} Day {h} Hour {m} Min {s} Sec"`.
//! Every unit is always present, with no padding and no pluralisation.

use std::fmt;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// A countdown split into whole days, hours, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownParts {
    /// Split by successive integer division
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Reassemble the number of seconds this value was built from
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Day {} Hour {} Min {} Sec",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Format seconds as a human readable countdown
pub fn format_countdown(seconds: u64) -> String {
    CountdownParts::from_seconds(seconds).to_string()
}
