//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a datetime of the current time.
pub fn now() -> DateTime {
    Utc::now()
}
