//! Teaching days and timeslots.
//!
//! A timeslot is a half-open range of whole clock hours on a single
//! weekday. Two timeslots overlap iff they fall on the same day and
//! their `[start, start + duration)` hour ranges intersect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A teaching day (Monday through Friday).
///
/// Ordering follows weekday position, so sorting sessions by
/// `(day, start_hour)` yields a chronological weekly listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// All teaching days in weekday order.
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Short uppercase name as used in import/export records.
    pub fn code(self) -> &'static str {
        match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thu => "THU",
            Day::Fri => "FRI",
        }
    }
}

/// Error returned when a day name is not one of MON..FRI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day `{0}`")]
pub struct ParseDayError(pub String);

impl FromStr for Day {
    type Err = ParseDayError;

    /// Parses a day code case-insensitively (`"MON"`, `"tue"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MON" => Ok(Day::Mon),
            "TUE" => Ok(Day::Tue),
            "WED" => Ok(Day::Wed),
            "THU" => Ok(Day::Thu),
            "FRI" => Ok(Day::Fri),
            _ => Err(ParseDayError(s.to_string())),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A contiguous block of whole hours on one day.
///
/// `duration_hours` must be positive; boundary parsers enforce this
/// before a timeslot is ever constructed from external data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    /// Day of the week.
    pub day: Day,
    /// First occupied hour (24h clock, e.g. 9 = 09:00).
    pub start_hour: u32,
    /// Number of occupied hours (> 0).
    pub duration_hours: u32,
}

impl Timeslot {
    /// Creates a new timeslot.
    pub fn new(day: Day, start_hour: u32, duration_hours: u32) -> Self {
        Self {
            day,
            start_hour,
            duration_hours,
        }
    }

    /// First hour after the slot ends (exclusive bound).
    #[inline]
    pub fn end_hour(&self) -> u32 {
        self.start_hour + self.duration_hours
    }

    /// Whether two timeslots occupy any common hour.
    ///
    /// Slots on different days never overlap; on the same day the
    /// half-open hour ranges are intersected, so back-to-back slots
    /// (e.g. 9-10 and 10-11) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_hour < other.end_hour()
            && other.start_hour < self.end_hour()
    }
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:00-{:02}:00",
            self.day,
            self.start_hour,
            self.end_hour()
        )
    }
}
