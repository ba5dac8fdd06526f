//! Timestamps and unit conversions.
//!
//! Tweens never read a clock. The host loop passes a monotonically
//! non-decreasing nanosecond timestamp into every `update` call.

use crate::error::{Result, TweenError};

/// Nanoseconds on the caller's clock.
pub type Timestamp = u64;

pub const MILLIS_AS_NANOS: u64 = 1_000_000;
pub const SECS_AS_NANOS: u64 = MILLIS_AS_NANOS * 1000;

pub const fn millis_to_nanos(ms: u64) -> Timestamp {
    ms * MILLIS_AS_NANOS
}

pub const fn secs_to_nanos(secs: u64) -> Timestamp {
    secs * SECS_AS_NANOS
}

pub const fn secs_to_millis(secs: u64) -> u64 {
    secs * 1000
}

pub fn nanos_to_millis(ns: Timestamp) -> f32 {
    ns as f32 / MILLIS_AS_NANOS as f32
}

pub fn nanos_to_secs(ns: Timestamp) -> f32 {
    ns as f32 / SECS_AS_NANOS as f32
}

/// Time elapsed from `since` to `now`. A clock that went backwards reads as
/// no elapsed time.
#[inline]
pub fn elapsed(since: Timestamp, now: Timestamp) -> Timestamp {
    now.saturating_sub(since)
}

/// Parse an amount with a separate unit (`s`, `ms` or `ns`, any case).
pub fn parse_nanos_with_unit(amount: &str, unit: &str) -> Result<Timestamp> {
    let value: u64 = amount
        .trim()
        .parse()
        .map_err(|_| TweenError::InvalidTimeValue(amount.to_string()))?;

    let scale = if unit.eq_ignore_ascii_case("s") {
        SECS_AS_NANOS
    } else if unit.eq_ignore_ascii_case("ms") {
        MILLIS_AS_NANOS
    } else if unit.eq_ignore_ascii_case("ns") {
        1
    } else {
        return Err(TweenError::InvalidTimeUnit(unit.to_string()));
    };

    value
        .checked_mul(scale)
        .ok_or_else(|| TweenError::InvalidTimeValue(amount.to_string()))
}

/// Parse a whitespace separated time such as `"3 s"` or `"10 ms"`.
pub fn parse_nanos(time: &str) -> Result<Timestamp> {
    let mut items = time.split_whitespace();
    match (items.next(), items.next(), items.next()) {
        (Some(amount), Some(unit), None) => parse_nanos_with_unit(amount, unit),
        _ => Err(TweenError::InvalidTimeValue(time.to_string())),
    }
}
