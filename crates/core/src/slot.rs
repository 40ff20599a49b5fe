//! # Slot Keys
//!
//! Wall-clock time is divided into fixed buckets aligned to the hour
//! (5 minutes by default). Every instant inside a bucket maps to the same
//! key, formatted `YYYYMMDDHHMM` from the bucket's first minute, so keys sort
//! in time order.
//!
//! A key is only accepted while its bucket is current. There is no grace
//! period: a key from the previous bucket is rejected even one second after
//! the rollover.

use std::fmt;

use chrono::{Duration, NaiveDateTime, Timelike};
use tracing::warn;

use crate::errors::{AttendError, AttendResult};

/// Default bucket width in minutes
pub const DEFAULT_SLOT_MINUTES: u32 = 5;

const KEY_FORMAT: &str = "%Y%m%d%H%M";

/// Width of a key bucket. Always divides 60 so buckets never straddle an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotInterval(u32);

impl SlotInterval {
    pub fn new(minutes: u32) -> AttendResult<Self> {
        if minutes == 0 || 60 % minutes != 0 {
            return Err(AttendError::Configuration(format!(
                "slot interval must evenly divide 60 minutes, got {}",
                minutes
            )));
        }
        Ok(Self(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl Default for SlotInterval {
    fn default() -> Self {
        Self(DEFAULT_SLOT_MINUTES)
    }
}

/// Identifier of one bucket of wall-clock time
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey(String);

impl SlotKey {
    pub fn for_time(at: NaiveDateTime, interval: SlotInterval) -> Self {
        Self(slot_start(at, interval).format(KEY_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key for the default 5-minute bucket containing `at`
pub fn slot_key(at: NaiveDateTime) -> String {
    SlotKey::for_time(at, SlotInterval::default()).0
}

/// First instant of the bucket containing `at`
pub fn slot_start(at: NaiveDateTime, interval: SlotInterval) -> NaiveDateTime {
    let minute = at.minute();
    let into_slot = Duration::minutes(i64::from(minute % interval.minutes()))
        + Duration::seconds(i64::from(at.second()))
        + Duration::nanoseconds(i64::from(at.nanosecond()));
    at - into_slot
}

/// First instant of the bucket after the one containing `at`
pub fn slot_end(at: NaiveDateTime, interval: SlotInterval) -> NaiveDateTime {
    slot_start(at, interval) + Duration::minutes(i64::from(interval.minutes()))
}

/// Checks a key supplied by a client against the bucket containing `now`.
///
/// Comparison is exact string equality; an empty key counts as missing.
pub fn validate_key(
    supplied: Option<&str>,
    now: NaiveDateTime,
    interval: SlotInterval,
) -> AttendResult<SlotKey> {
    let current = SlotKey::for_time(now, interval);

    match supplied.filter(|key| !key.is_empty()) {
        None => {
            warn!("Attendance request without a key");
            Err(AttendError::Authorization(
                "Please scan the latest QR code to access the attendance form".to_string(),
            ))
        }
        Some(key) if key == current.as_str() => Ok(current),
        Some(key) => {
            warn!(supplied = key, current = %current, "Rejected outdated attendance key");
            Err(AttendError::Authorization(
                "This QR code has expired, please scan the latest one".to_string(),
            ))
        }
    }
}
