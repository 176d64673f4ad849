//! # Half-hour slot codec
//!
//! A day is split into 48 half-hour slots, `0` being 00:00 and `47` being
//! 23:30. Challenge windows are picked as a pair of slots and sent to the
//! server as timestamps pinned to UTC+09:00, whatever timezone the device
//! happens to be in. The server only accepts windows on a 30-minute boundary
//! in that offset.
//!
//! [`encode`] turns a slot pair into a [`BookingWindow`] anchored on a given
//! calendar day. [`decode`] goes the other way, keeping only the time of day.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike,
};
use serde::{Deserialize, Serialize};

use crate::errors::{BetError, BetResult};

/// Number of half-hour slots in a day.
pub const SLOTS_PER_DAY: u8 = 48;

/// Length of a single slot in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Offset every outgoing timestamp is written in (KST).
pub const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Wire format of an encoded timestamp: seconds and millis always zero.
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:00.000%:z";

/// The fixed UTC+09:00 offset.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).expect("UTC+09:00 is a valid offset")
}

/// Today's date in the device's local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A half-hour boundary within a day, always in `0..48`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// Create a slot index, rejecting anything outside `0..48`.
    pub fn new(idx: u8) -> BetResult<Self> {
        if idx < SLOTS_PER_DAY {
            Ok(Self(idx))
        } else {
            Err(BetError::Validation(format!(
                "Slot index {} is out of range (0-{})",
                idx,
                SLOTS_PER_DAY - 1
            )))
        }
    }

    /// Slot enclosing the given time of day, rounding down to the half hour.
    pub fn floor_of<T: Timelike>(time: &T) -> Self {
        let half = if time.minute() >= 30 { 1 } else { 0 };
        // hour() is always < 24, so the result stays below 48
        Self((time.hour() * 2 + half) as u8)
    }

    /// Every slot of the day, 00:00 first.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..SLOTS_PER_DAY).map(SlotIndex)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / 2)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % 2) * 30
    }

    /// Minutes from midnight to the start of this slot.
    pub fn minutes_from_midnight(self) -> i64 {
        i64::from(self.0) * SLOT_MINUTES
    }
}

impl TryFrom<u8> for SlotIndex {
    type Error = BetError;

    fn try_from(value: u8) -> BetResult<Self> {
        SlotIndex::new(value)
    }
}

impl From<SlotIndex> for u8 {
    fn from(slot: SlotIndex) -> u8 {
        slot.0
    }
}

/// Renders as `HH:mm`.
impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parses `HH:mm`, flooring the minutes to the half hour.
impl FromStr for SlotIndex {
    type Err = BetError;

    fn from_str(s: &str) -> BetResult<Self> {
        let invalid = || BetError::Validation(format!("Invalid time of day: {}", s));

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        SlotIndex::new(hour * 2 + u8::from(minute >= 30))
    }
}

/// Labels for all 48 slots, `"00:00"` through `"23:30"`.
pub fn half_hour_slots() -> Vec<String> {
    SlotIndex::all().map(|slot| slot.to_string()).collect()
}

/// A challenge's active period. `end` is always strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl BookingWindow {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> BetResult<Self> {
        if end <= start {
            return Err(BetError::Validation(format!(
                "Window end {} is not after start {}",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a window from the server's timestamp strings.
    pub fn parse(start: &str, end: &str) -> BetResult<Self> {
        Self::new(parse_timestamp(start)?, parse_timestamp(end)?)
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// `start` in the `YYYY-MM-DDTHH:mm:00.000+09:00` wire form.
    pub fn start_iso(&self) -> String {
        format_wire(&self.start)
    }

    /// `end` in the `YYYY-MM-DDTHH:mm:00.000+09:00` wire form.
    pub fn end_iso(&self) -> String {
        format_wire(&self.end)
    }

    /// Slot pair of this window; see [`decode`].
    pub fn slots(&self) -> (SlotIndex, SlotIndex) {
        decode(&self.start, &self.end)
    }

    /// `HH:mm ~ HH:mm`, each side in its own offset.
    pub fn format_range(&self) -> String {
        format!("{} ~ {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// Turn a slot pair into a window on `reference`'s calendar day.
///
/// Wall-clock times are computed from midnight of `reference` and pinned to
/// UTC+09:00. When `end` is not after `start` the end moves to the next
/// day, so a window is never empty.
///
/// # Panics
///
/// When the window falls outside chrono's representable range, which only
/// happens on the first or last day [`NaiveDate`] can hold. Use
/// [`try_encode`] for dates that are not known to be ordinary.
pub fn encode(start: SlotIndex, end: SlotIndex, reference: NaiveDate) -> BookingWindow {
    try_encode(start, end, reference).expect("reference date within chrono's range")
}

/// [`encode`], reporting an unrepresentable window as a validation error.
pub fn try_encode(
    start: SlotIndex,
    end: SlotIndex,
    reference: NaiveDate,
) -> BetResult<BookingWindow> {
    let midnight = midnight(reference);

    let start_at = midnight + Duration::minutes(start.minutes_from_midnight());
    let mut end_at = midnight + Duration::minutes(end.minutes_from_midnight());
    if end <= start {
        end_at = end_at
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| out_of_range(reference))?;
    }

    Ok(BookingWindow {
        start: at_kst(start_at).ok_or_else(|| out_of_range(reference))?,
        end: at_kst(end_at).ok_or_else(|| out_of_range(reference))?,
    })
}

/// [`encode`], rendered straight to the wire strings.
pub fn encode_iso(start: SlotIndex, end: SlotIndex, reference: NaiveDate) -> (String, String) {
    let window = encode(start, end, reference);
    (window.start_iso(), window.end_iso())
}

/// Slot pair of two timestamps, read in each timestamp's own offset.
///
/// The date is dropped and minutes are floored to the half hour, so
/// `22:15` lands in the `22:00` slot.
pub fn decode<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> (SlotIndex, SlotIndex) {
    (SlotIndex::floor_of(start), SlotIndex::floor_of(end))
}

/// [`decode`] for timestamp strings as the server sends them.
pub fn decode_iso(start: &str, end: &str) -> BetResult<(SlotIndex, SlotIndex)> {
    Ok(decode(&parse_timestamp(start)?, &parse_timestamp(end)?))
}

/// Parse an RFC 3339 timestamp, keeping its offset.
///
/// Timestamps without an offset are read as KST wall-clock time.
pub fn parse_timestamp(value: &str) -> BetResult<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| BetError::Validation(format!("Invalid timestamp {:?}: {}", value, e)))?;
    at_kst(naive)
        .ok_or_else(|| BetError::Validation(format!("Timestamp {:?} is out of range", value)))
}

/// Render a timestamp in the fixed wire form, converted to UTC+09:00.
pub fn format_wire<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&kst()).format(WIRE_FORMAT).to_string()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight exists on every date")
}

fn at_kst(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    kst().from_local_datetime(&naive).single()
}

fn out_of_range(reference: NaiveDate) -> BetError {
    BetError::Validation(format!("Date {} is out of range", reference))
}
