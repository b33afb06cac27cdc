//! Billing period model.
//!
//! A [`Period`] is one of the five nominal units a salary can be quoted in.
//! Every period maps to a fixed number of working hours; these are the
//! domain's own units, not calendar-accurate durations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Working hours in a day.
pub const HOURS_IN_DAY: f64 = 8.0;
/// Working hours in a week.
pub const HOURS_IN_WEEK: f64 = 40.0;
/// Working hours in a month.
pub const HOURS_IN_MONTH: f64 = 160.0;
/// Working hours in a year.
pub const HOURS_IN_YEAR: f64 = 1920.0;

/// The period a salary amount is quoted for.
///
/// # Example
///
/// ```
/// use salary_calculator::models::Period;
///
/// assert_eq!(Period::Month.hours(), 160.0);
/// assert_eq!(Period::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// A single working hour.
    Hour,
    /// A working day of 8 hours.
    Day,
    /// A working week of 40 hours.
    Week,
    /// A working month of 160 hours.
    Month,
    /// A working year of 1920 hours.
    Year,
}

impl Period {
    /// Every period, shortest first.
    pub const ALL: [Period; 5] = [
        Period::Hour,
        Period::Day,
        Period::Week,
        Period::Month,
        Period::Year,
    ];

    /// Returns the number of working hours in this period.
    pub fn hours(self) -> f64 {
        match self {
            Period::Hour => 1.0,
            Period::Day => HOURS_IN_DAY,
            Period::Week => HOURS_IN_WEEK,
            Period::Month => HOURS_IN_MONTH,
            Period::Year => HOURS_IN_YEAR,
        }
    }

    /// Returns the wire name of this period.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
