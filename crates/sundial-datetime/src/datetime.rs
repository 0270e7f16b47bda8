// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # UTC Instants
//!
//! The `UtcDateTime` value type: an immutable point in UTC time with
//! microsecond resolution, stored as whole seconds since the Unix epoch
//! plus a microsecond remainder in `[0, 999_999]`.
//!
//! ## Highlights
//!
//! - One named, fallible constructor per source representation: ISO-like
//!   strings, epoch timestamps, floats, microtime pairs, day-of-year,
//!   wire pairs, millisecond integers, condensed and hourly strings.
//! - Calendar arithmetic (hours/days/months) through a civil-calendar
//!   conversion, never through naive second arithmetic.
//! - Every emit format of the ecosystem: ISO 8601 with 0/3/6 fractional
//!   digits, condensed 14-digit, hourly/day/month/second truncations, the
//!   lossless `Timeval` pair and the lossy millisecond integer.

use crate::calendar::{self, CivilDateTime, SECS_PER_DAY};
use crate::error::{FormatError, RangeError};
use crate::offset::UtcOffset;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::SystemTime;

const MICROS_PER_SEC: i64 = 1_000_000;
const USEC_MAX: u32 = 999_999;

/// Documented upper bound for instants: `2^32` seconds past the epoch.
const MAX_SEC: i64 = 1 << 32;

static ISO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})(?:[ T](\d{2}):(\d{2})(?::(\d{2}))?(?:\.(\d*))?)?(Z|[+-]\d{2}:?\d{2})?$",
    )
    .expect("ISO pattern is a valid regex")
});

static HOURLY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}$").expect("hourly pattern is a valid regex")
});

static CONDENSED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{14}$").expect("condensed pattern is a valid regex"));

const ISO_EXPECTED: &str =
    "an ISO 8601 date time with at most one fractional part separated by a dot";
const HOURLY_EXPECTED: &str = "an hourly precision string (YYYY-MM-DD HH)";
const CONDENSED_EXPECTED: &str = "a condensed date time (YYYYMMDDHHMMSS)";

/// The legacy wire pair: independent seconds and microseconds fields.
///
/// Round-trips through this representation are lossless, unlike the
/// millisecond wire integer (see
/// [`UtcDateTime::to_epoch_millis`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timeval {
    /// Whole seconds since the Unix epoch.
    pub sec: i64,
    /// Microseconds within the second, `[0, 999_999]` for valid values.
    pub usec: u32,
}

impl Timeval {
    /// Creates a new wire pair. No validation happens here; feeding the
    /// pair back through [`UtcDateTime::from_timeval`] validates it.
    #[inline]
    pub const fn new(sec: i64, usec: u32) -> Self {
        Self { sec, usec }
    }
}

/// An immutable point in UTC time with microsecond resolution.
///
/// The represented value is `sec + usec / 1_000_000` seconds since the
/// Unix epoch, with `usec` always in `[0, 999_999]`. Values are totally
/// ordered by `sec`, then `usec`. Every transformation returns a new
/// instant; nothing is mutated in place, so values may be shared freely
/// across threads.
///
/// # Examples
///
/// ```rust
/// # use sundial_datetime::datetime::UtcDateTime;
///
/// let instant = UtcDateTime::from_string("2014-09-01T12:01:02Z")?;
/// assert_eq!(instant.to_iso8601(), "2014-09-01T12:01:02+0000");
/// assert_eq!(instant.to_api_format(), "20140901120102");
/// # Ok::<(), sundial_datetime::error::FormatError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime {
    sec: i64,
    usec: u32,
}

impl UtcDateTime {
    /// Creates an instant from raw parts. Callers must uphold the `usec`
    /// invariant; this is checked in debug builds only.
    #[inline]
    const fn from_parts(sec: i64, usec: u32) -> Self {
        debug_assert!(usec <= USEC_MAX);
        Self { sec, usec }
    }

    /// Normalizes a possibly overflowing microsecond count into the
    /// invariant representation.
    #[inline]
    fn carried(sec: i64, usec: i64) -> Self {
        Self::from_parts(
            sec + usec.div_euclid(MICROS_PER_SEC),
            usec.rem_euclid(MICROS_PER_SEC) as u32,
        )
    }

    /// The documented minimum instant: the Unix epoch itself.
    #[inline]
    pub const fn minimum() -> Self {
        Self::from_parts(0, 0)
    }

    /// The documented maximum instant: `2^32` seconds past the epoch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    ///
    /// assert_eq!(UtcDateTime::maximum().to_iso8601(), "2106-02-07T06:28:16+0000");
    /// ```
    #[inline]
    pub const fn maximum() -> Self {
        Self::from_parts(MAX_SEC, 0)
    }

    /// Creates an instant from a whole-second epoch timestamp.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    ///
    /// let epoch = UtcDateTime::from_timestamp(0);
    /// assert_eq!(epoch, UtcDateTime::from_string("1970-01-01").unwrap());
    /// ```
    #[inline]
    pub const fn from_timestamp(timestamp: i64) -> Self {
        Self::from_parts(timestamp, 0)
    }

    /// Creates an instant from fractional seconds since the epoch.
    ///
    /// The whole part becomes `sec` (floored, so pre-epoch values work),
    /// the remainder is rounded to the nearest microsecond.
    pub fn from_float(seconds: f64) -> Self {
        let whole = seconds.floor();
        let usec = ((seconds - whole) * 1e6).round() as i64;
        Self::carried(whole as i64, usec)
    }

    /// Creates an instant from a microtime pair: a fractional-seconds part
    /// in `[0, 1)` and a whole-seconds epoch timestamp.
    ///
    /// # Errors
    ///
    /// Fails with [`RangeError::FractionalOverflow`] if the fractional
    /// part does not lie in `[0, 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    ///
    /// let instant = UtcDateTime::from_microtime(0.123456, 1_000_000_000)?;
    /// assert_eq!(instant.usec(), 123_456);
    ///
    /// assert!(UtcDateTime::from_microtime(1.0, 1_000).is_err());
    /// # Ok::<(), sundial_datetime::error::RangeError>(())
    /// ```
    pub fn from_microtime(fractional: f64, sec: i64) -> Result<Self, RangeError> {
        if !(0.0..1.0).contains(&fractional) {
            return Err(RangeError::FractionalOverflow { got: fractional });
        }
        let usec = (fractional * 1e6).round() as i64;
        Ok(Self::carried(sec, usec))
    }

    /// Creates an instant from the legacy wire pair, validating the
    /// microseconds field into range.
    ///
    /// # Errors
    ///
    /// Fails with [`RangeError::UsecOutOfRange`] if `tv.usec` exceeds
    /// `999_999`.
    pub fn from_timeval(tv: Timeval) -> Result<Self, RangeError> {
        if tv.usec > USEC_MAX {
            return Err(RangeError::UsecOutOfRange {
                got: i64::from(tv.usec),
            });
        }
        Ok(Self::from_parts(tv.sec, tv.usec))
    }

    /// Creates an instant from a millisecond-since-epoch wire integer.
    ///
    /// This direction is lossless; the emitting direction
    /// ([`to_epoch_millis`](Self::to_epoch_millis)) rounds away
    /// sub-millisecond precision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    ///
    /// let instant = UtcDateTime::from_epoch_millis(1_466_170_836_123);
    /// assert_eq!(instant.sec(), 1_466_170_836);
    /// assert_eq!(instant.usec(), 123_000);
    /// ```
    #[inline]
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self::from_parts(
            millis.div_euclid(1_000),
            (millis.rem_euclid(1_000) * 1_000) as u32,
        )
    }

    /// Converts a [`SystemTime`] into an instant.
    ///
    /// This is a pure conversion: the one place that actually reads the
    /// operating-system clock is `sundial-clock`'s `SystemClock`.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(elapsed) => Self::from_parts(elapsed.as_secs() as i64, elapsed.subsec_micros()),
            Err(before) => {
                let elapsed = before.duration();
                let mut sec = -(elapsed.as_secs() as i64);
                let mut usec = elapsed.subsec_micros();
                if usec > 0 {
                    sec -= 1;
                    usec = 1_000_000 - usec;
                }
                Self::from_parts(sec, usec)
            }
        }
    }

    /// Parses an ISO-like string, interpreting it as UTC wall time unless
    /// the string carries its own offset suffix.
    ///
    /// Accepted shape: `YYYY-MM-DD[ T]HH:MM[:SS][.f{0,6}][Z|±HHMM|±HH:MM]`;
    /// the time of day and its seconds are optional and default to zero.
    /// At most one fractional group with at most six digits is allowed;
    /// shorter groups are right-padded with zeros to microseconds.
    ///
    /// # Errors
    ///
    /// Fails with [`FormatError`] on any other shape, on more than one
    /// dot, on more than six fractional digits, or on out-of-range
    /// calendar fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    ///
    /// let a = UtcDateTime::from_string("2016-07-18T12:53:21+0000")?;
    /// let b = UtcDateTime::from_string("2016-07-18T14:53:21+0200")?;
    /// assert_eq!(a, b);
    ///
    /// let fractional = UtcDateTime::from_string("2016-01-26 09:34:02.1")?;
    /// assert_eq!(fractional.usec(), 100_000);
    /// # Ok::<(), sundial_datetime::error::FormatError>(())
    /// ```
    #[inline]
    pub fn from_string(input: &str) -> Result<Self, FormatError> {
        Self::from_string_with_offset(input, UtcOffset::UTC)
    }

    /// Parses an ISO-like string as wall time in the given fixed offset
    /// and normalizes to UTC.
    ///
    /// An explicit suffix in the string takes precedence over `offset`.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`from_string`](Self::from_string).
    pub fn from_string_with_offset(input: &str, offset: UtcOffset) -> Result<Self, FormatError> {
        if input.matches('.').count() > 1 {
            return Err(FormatError::new(input, ISO_EXPECTED));
        }
        let caps = ISO_PATTERN
            .captures(input)
            .ok_or_else(|| FormatError::new(input, ISO_EXPECTED))?;

        let usec = match caps.get(7) {
            None => 0,
            Some(frac) => {
                let digits = frac.as_str();
                if digits.len() > 6 {
                    return Err(FormatError::new(input, ISO_EXPECTED));
                }
                let parsed = digits
                    .bytes()
                    .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
                parsed * 10u32.pow(6 - digits.len() as u32)
            }
        };

        let civil = civil_checked(
            captured(&caps, 1),
            captured(&caps, 2) as u32,
            captured(&caps, 3) as u32,
            captured(&caps, 4) as u32,
            captured(&caps, 5) as u32,
            captured(&caps, 6) as u32,
            input,
            ISO_EXPECTED,
        )?;

        let offset = match caps.get(8) {
            Some(suffix) => UtcOffset::from_iso_suffix(suffix.as_str())
                .ok_or_else(|| FormatError::new(input, ISO_EXPECTED))?,
            None => offset,
        };

        let sec = civil.to_epoch_sec() - i64::from(offset.whole_seconds());
        Ok(Self::from_parts(sec, usec))
    }

    /// Parses an hourly-precision string, strictly `YYYY-MM-DD HH`.
    ///
    /// # Errors
    ///
    /// Fails with [`FormatError`] on any other shape, including strings
    /// that carry minutes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    ///
    /// let instant = UtcDateTime::from_hourly_precision("2000-01-03 10")?;
    /// assert_eq!(instant.to_second_precision(), "2000-01-03 10:00:00");
    ///
    /// assert!(UtcDateTime::from_hourly_precision("2015-02-02 03:10").is_err());
    /// # Ok::<(), sundial_datetime::error::FormatError>(())
    /// ```
    pub fn from_hourly_precision(input: &str) -> Result<Self, FormatError> {
        if !HOURLY_PATTERN.is_match(input) {
            return Err(FormatError::new(input, HOURLY_EXPECTED));
        }
        Self::from_string(&format!("{input}:00"))
    }

    /// Parses the condensed 14-digit API form, strictly `YYYYMMDDHHMMSS`.
    ///
    /// # Errors
    ///
    /// Fails with [`FormatError`] on any other shape or on out-of-range
    /// calendar fields.
    pub fn from_api_format(input: &str) -> Result<Self, FormatError> {
        if !CONDENSED_PATTERN.is_match(input) {
            return Err(FormatError::new(input, CONDENSED_EXPECTED));
        }
        let field = |range: std::ops::Range<usize>| -> i64 {
            input[range]
                .parse()
                .expect("condensed fields are all digits")
        };
        let civil = civil_checked(
            field(0..4),
            field(4..6) as u32,
            field(6..8) as u32,
            field(8..10) as u32,
            field(10..12) as u32,
            field(12..14) as u32,
            input,
            CONDENSED_EXPECTED,
        )?;
        Ok(Self::from_parts(civil.to_epoch_sec(), 0))
    }

    /// Creates the start of the `days`-th day of `year`, zero-based:
    /// day 0 is January 1.
    pub fn from_zero_based_day_of_year(year: i64, days: i64) -> Self {
        Self::from_parts(
            (calendar::days_from_civil(year, 1, 1) + days) * SECS_PER_DAY,
            0,
        )
    }

    /// Creates the start of the `days`-th day of `year`, one-based:
    /// day 1 is January 1.
    #[inline]
    pub fn from_one_based_day_of_year(year: i64, days: i64) -> Self {
        Self::from_zero_based_day_of_year(year, days - 1)
    }

    /// Whole seconds since the Unix epoch.
    #[inline]
    pub const fn sec(&self) -> i64 {
        self.sec
    }

    /// Microseconds within the second, always in `[0, 999_999]`.
    #[inline]
    pub const fn usec(&self) -> u32 {
        self.usec
    }

    /// Returns a copy with the microseconds field replaced.
    ///
    /// # Errors
    ///
    /// Fails with [`RangeError::UsecOutOfRange`] if `usec` exceeds
    /// `999_999`.
    pub fn with_usec(&self, usec: u32) -> Result<Self, RangeError> {
        if usec > USEC_MAX {
            return Err(RangeError::UsecOutOfRange {
                got: i64::from(usec),
            });
        }
        Ok(Self::from_parts(self.sec, usec))
    }

    /// Adds whole seconds. Exact: the microseconds field is untouched.
    #[inline]
    pub fn add_seconds(&self, seconds: i64) -> Self {
        Self::from_parts(self.sec + seconds, self.usec)
    }

    /// Subtracts whole seconds. Exact: the microseconds field is untouched.
    #[inline]
    pub fn subtract_seconds(&self, seconds: i64) -> Self {
        self.add_seconds(-seconds)
    }

    /// Adds whole hours through the civil calendar.
    #[inline]
    pub fn add_hours(&self, hours: i64) -> Self {
        self.shift(0, 0, hours)
    }

    /// Subtracts whole hours through the civil calendar.
    #[inline]
    pub fn subtract_hours(&self, hours: i64) -> Self {
        self.shift(0, 0, -hours)
    }

    /// Adds whole days through the civil calendar.
    #[inline]
    pub fn add_days(&self, days: i64) -> Self {
        self.shift(0, days, 0)
    }

    /// Subtracts whole days through the civil calendar.
    #[inline]
    pub fn subtract_days(&self, days: i64) -> Self {
        self.shift(0, -days, 0)
    }

    /// Adds calendar months.
    ///
    /// The month field is shifted with year carry; a day past the end of
    /// the target month rolls forward (January 31 plus one month is
    /// March 3). Adding and subtracting the same month count round-trips
    /// for any day that exists in every month it passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    ///
    /// let date = UtcDateTime::from_string("2000-01-03 00:00:00")?;
    /// assert_eq!(date.add_months(13).subtract_months(13), date);
    ///
    /// let end_of_january = UtcDateTime::from_string("2015-01-31")?;
    /// assert_eq!(end_of_january.add_months(1).to_iso8601_day(), "2015-03-03");
    /// # Ok::<(), sundial_datetime::error::FormatError>(())
    /// ```
    #[inline]
    pub fn add_months(&self, months: i64) -> Self {
        self.shift(months, 0, 0)
    }

    /// Subtracts calendar months. See [`add_months`](Self::add_months).
    #[inline]
    pub fn subtract_months(&self, months: i64) -> Self {
        self.shift(-months, 0, 0)
    }

    fn shift(&self, months: i64, days: i64, hours: i64) -> Self {
        let civil = CivilDateTime::from_epoch_sec(self.sec);
        Self::from_parts(civil.shift(months, days, hours), self.usec)
    }

    fn truncated(&self, adjust: impl FnOnce(CivilDateTime) -> CivilDateTime) -> Self {
        let civil = adjust(CivilDateTime::from_epoch_sec(self.sec));
        Self::from_parts(civil.to_epoch_sec(), 0)
    }

    /// The midnight starting this instant's UTC day. Sub-second precision
    /// is dropped.
    pub fn start_of_day(&self) -> Self {
        self.truncated(|c| CivilDateTime {
            hour: 0,
            minute: 0,
            second: 0,
            ..c
        })
    }

    /// `23:59:59` of this instant's UTC day.
    ///
    /// The sub-second part is not preserved: this is a truncation to
    /// second precision, not the last representable microsecond of the
    /// day.
    pub fn end_of_day(&self) -> Self {
        self.truncated(|c| CivilDateTime {
            hour: 23,
            minute: 59,
            second: 59,
            ..c
        })
    }

    /// The top of this instant's UTC hour. Sub-second precision is
    /// dropped.
    pub fn start_of_hour(&self) -> Self {
        self.truncated(|c| CivilDateTime {
            minute: 0,
            second: 0,
            ..c
        })
    }

    /// The top of the following UTC hour.
    pub fn start_of_next_hour(&self) -> Self {
        self.add_hours(1).start_of_hour()
    }

    /// Midnight of the first day of this instant's UTC month.
    pub fn start_of_month(&self) -> Self {
        self.truncated(|c| CivilDateTime {
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            ..c
        })
    }

    /// Signed difference `self - other` in fractional seconds, exact to
    /// the microsecond.
    pub fn difference_in_seconds(&self, other: &Self) -> f64 {
        (self.sec - other.sec) as f64
            + (i64::from(self.usec) - i64::from(other.usec)) as f64 / 1e6
    }

    /// Three-way comparison usable directly as a sort key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    ///
    /// let mut dates = vec![
    ///     UtcDateTime::from_timestamp(300),
    ///     UtcDateTime::from_timestamp(100),
    ///     UtcDateTime::from_timestamp(200),
    /// ];
    /// dates.sort_by(UtcDateTime::compare);
    /// assert_eq!(dates[0], UtcDateTime::from_timestamp(100));
    /// ```
    #[inline]
    pub fn compare(a: &Self, b: &Self) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn civil(&self) -> CivilDateTime {
        CivilDateTime::from_epoch_sec(self.sec)
    }

    /// ISO 8601 without a fractional part: `2014-09-01T12:01:02+0000`.
    pub fn to_iso8601(&self) -> String {
        let c = self.civil();
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}+0000",
            c.year, c.month, c.day, c.hour, c.minute, c.second
        )
    }

    /// ISO 8601 with three fractional digits inserted before the offset
    /// sign, zero-filled for consistency.
    pub fn to_iso8601_with_milliseconds(&self) -> String {
        let c = self.civil();
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}+0000",
            c.year,
            c.month,
            c.day,
            c.hour,
            c.minute,
            c.second,
            self.usec / 1_000
        )
    }

    /// ISO 8601 with six fractional digits inserted before the offset
    /// sign. Parsing this back reproduces the instant exactly.
    pub fn to_iso8601_with_microseconds(&self) -> String {
        let c = self.civil();
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}+0000",
            c.year, c.month, c.day, c.hour, c.minute, c.second, self.usec
        )
    }

    /// The UTC day alone: `2014-09-01`.
    pub fn to_iso8601_day(&self) -> String {
        let c = self.civil();
        format!("{:04}-{:02}-{:02}", c.year, c.month, c.day)
    }

    /// The condensed 14-digit form, **rounded** to the nearest whole
    /// second before formatting.
    ///
    /// Rounding is half-up on the combined `sec + usec/1e6` value: a
    /// `usec` of exactly `500_000` bumps the seconds field, `499_999`
    /// does not. Two instants within half a second of a boundary can thus
    /// condense to different seconds than their truncated value would
    /// suggest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    ///
    /// let instant = UtcDateTime::from_timestamp(1_000_000_000);
    /// assert_eq!(instant.to_condensed_iso8601(), "20010909014640");
    /// assert_eq!(
    ///     instant.with_usec(500_000).unwrap().to_condensed_iso8601(),
    ///     "20010909014641"
    /// );
    /// ```
    pub fn to_condensed_iso8601(&self) -> String {
        let sec = if self.usec >= 500_000 {
            self.sec + 1
        } else {
            self.sec
        };
        let c = CivilDateTime::from_epoch_sec(sec);
        format!(
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            c.year, c.month, c.day, c.hour, c.minute, c.second
        )
    }

    /// Alias for [`to_condensed_iso8601`](Self::to_condensed_iso8601),
    /// the form the HTTP API speaks.
    #[inline]
    pub fn to_api_format(&self) -> String {
        self.to_condensed_iso8601()
    }

    /// Hourly precision: `2000-01-03 10`.
    pub fn to_hourly_precision(&self) -> String {
        let c = self.civil();
        format!("{:04}-{:02}-{:02} {:02}", c.year, c.month, c.day, c.hour)
    }

    /// The zero-padded hour alone: `10`.
    pub fn to_hour(&self) -> String {
        format!("{:02}", self.civil().hour)
    }

    /// Year and month: `2001-09`.
    pub fn to_year_month(&self) -> String {
        let c = self.civil();
        format!("{:04}-{:02}", c.year, c.month)
    }

    /// Second precision with a space separator: `2000-01-03 10:00:00`.
    pub fn to_second_precision(&self) -> String {
        let c = self.civil();
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            c.year, c.month, c.day, c.hour, c.minute, c.second
        )
    }

    /// The lossless legacy wire pair.
    #[inline]
    pub const fn to_timeval(&self) -> Timeval {
        Timeval::new(self.sec, self.usec)
    }

    /// Milliseconds since the epoch, rounding the microseconds to the
    /// nearest millisecond.
    ///
    /// This direction is lossy: sub-millisecond precision does not
    /// survive a round-trip through the millisecond wire integer. Use
    /// [`to_timeval`](Self::to_timeval) when precision must be preserved.
    #[inline]
    pub fn to_epoch_millis(&self) -> i64 {
        self.sec * 1_000 + i64::from((self.usec + 500) / 1_000)
    }
}

fn captured(caps: &regex::Captures<'_>, index: usize) -> i64 {
    caps.get(index).map_or(0, |m| {
        m.as_str()
            .parse()
            .expect("captured fields are all digits")
    })
}

#[allow(clippy::too_many_arguments)]
fn civil_checked(
    year: i64,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    input: &str,
    expected: &'static str,
) -> Result<CivilDateTime, FormatError> {
    if !(1..=12).contains(&month)
        || !(1..=calendar::days_in_month(year, month)).contains(&day)
        || hour > 23
        || minute > 59
        || second > 59
    {
        return Err(FormatError::new(input, expected));
    }
    Ok(CivilDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

impl FromStr for UtcDateTime {
    type Err = FormatError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl std::fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601_with_microseconds())
    }
}

impl std::fmt::Debug for UtcDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UtcDateTime({self})")
    }
}

impl From<UtcDateTime> for Timeval {
    #[inline]
    fn from(value: UtcDateTime) -> Self {
        value.to_timeval()
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601_with_microseconds())
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_string(&raw).map_err(serde::de::Error::custom)
    }
}
