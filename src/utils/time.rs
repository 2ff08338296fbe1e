//! Time helpers

use chrono::Utc;

/// Current unix time in milliseconds
///
/// All persisted timestamps use this format.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
