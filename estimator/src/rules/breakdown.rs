//! Time breakdown - greedy split of a minute count into calendar units

use std::fmt;

use serde::{Deserialize, Serialize};

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const MINUTES_PER_DAY: f64 = 24.0 * MINUTES_PER_HOUR;
pub const MINUTES_PER_WEEK: f64 = 7.0 * MINUTES_PER_DAY;
pub const MINUTES_PER_MONTH: f64 = 30.44 * MINUTES_PER_DAY;
pub const MINUTES_PER_YEAR: f64 = 365.25 * MINUTES_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

/// Split `total_minutes` into years, months, weeks, days, hours and minutes.
/// Each unit takes the floored quotient and passes the remainder down.
/// Negative and NaN totals count as zero.
pub fn breakdown(total_minutes: f64) -> TimeBreakdown {
    let mut rest = total_minutes.max(0.0);

    let years = take(&mut rest, MINUTES_PER_YEAR);
    let months = take(&mut rest, MINUTES_PER_MONTH);
    let weeks = take(&mut rest, MINUTES_PER_WEEK);
    let days = take(&mut rest, MINUTES_PER_DAY);
    let hours = take(&mut rest, MINUTES_PER_HOUR);

    TimeBreakdown {
        years,
        months,
        weeks,
        days,
        hours,
        minutes: rest.floor() as u64,
    }
}

fn take(rest: &mut f64, unit: f64) -> u64 {
    let count = (*rest / unit).floor();
    *rest %= unit;
    count as u64
}

impl TimeBreakdown {
    /// Minutes represented, using the same unit sizes
    pub fn total_minutes(&self) -> f64 {
        self.years as f64 * MINUTES_PER_YEAR
            + self.months as f64 * MINUTES_PER_MONTH
            + self.weeks as f64 * MINUTES_PER_WEEK
            + self.days as f64 * MINUTES_PER_DAY
            + self.hours as f64 * MINUTES_PER_HOUR
            + self.minutes as f64
    }

    /// One line per unit, largest first
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("{} years", self.years),
            format!("{} months", self.months),
            format!("{} weeks", self.weeks),
            format!("{} days", self.days),
            format!("{} hours", self.hours),
            format!("{} minutes", self.minutes),
        ]
    }
}

impl fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join(", "))
    }
}
