use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// The date a questionnaire is scheduled for, as milliseconds since the Unix epoch.
///
/// Zero means "not scheduled yet".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ScheduledAt(i64);

impl ScheduledAt {
    /// No date chosen.
    pub const UNSET: Self = Self(0);

    /// Wrap a raw millisecond timestamp.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Local midnight on the given calendar date. `month` is 1-based.
    ///
    /// Returns `None` if the date is invalid or local midnight does not exist
    /// on that day (a DST gap). When midnight is ambiguous the earlier instant wins.
    pub fn local_midnight(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(0, 0, 0)?
            .and_local_timezone(Local)
            .earliest()
            .map(|midnight| Self(midnight.timestamp_millis()))
    }

    /// The raw millisecond timestamp.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Check if no date has been chosen.
    pub fn is_unset(self) -> bool {
        self == Self::UNSET
    }

    /// The calendar date this timestamp falls on in the local time zone.
    pub fn local_date(self) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(self.0).map(|utc| utc.with_timezone(&Local).date_naive())
    }
}
