use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const WEEKS_PER_YEAR: u32 = 52;

/// A point on the simulated calendar, in whole weeks.
///
/// Weeks are 1-based within a year. The scheduler never normalizes the pair:
/// elapsed time is always `(year - start_year) * 52 + (week - start_week)`,
/// so a caller passing week 53 simply lands one week into the next year.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct SimWeek {
    pub year: u32,
    pub week: u32,
}

impl SimWeek {
    pub fn new(year: u32, week: u32) -> Self {
        Self { year, week }
    }

    /// Absolute week count since year 0, week 0.
    pub fn ordinal(self) -> i64 {
        i64::from(self.year) * i64::from(WEEKS_PER_YEAR) + i64::from(self.week)
    }

    /// Signed number of weeks from `earlier` to `self`.
    pub fn weeks_since(self, earlier: SimWeek) -> i64 {
        self.ordinal() - earlier.ordinal()
    }

    /// The calendar week `weeks` after this one, normalized to 1..=52.
    pub fn plus_weeks(self, weeks: u32) -> Self {
        let zero_based = i64::from(self.week.max(1) - 1) + i64::from(weeks);
        let per_year = i64::from(WEEKS_PER_YEAR);
        Self {
            year: self.year + (zero_based / per_year) as u32,
            week: (zero_based % per_year) as u32 + 1,
        }
    }
}

impl PartialEq for SimWeek {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal() == other.ordinal()
    }
}

impl Eq for SimWeek {}

impl PartialOrd for SimWeek {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimWeek {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for SimWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y{}.W{}", self.year, self.week)
    }
}
