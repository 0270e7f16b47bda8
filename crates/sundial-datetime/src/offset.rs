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

/// A fixed offset from UTC, in signed seconds east of the prime meridian.
///
/// Offsets exist only to interpret parsed wall-clock strings; every
/// [`UtcDateTime`](crate::datetime::UtcDateTime) is normalized to UTC the
/// moment it is constructed. There is no timezone database here; named
/// zones and daylight saving rules are out of scope.
///
/// # Examples
///
/// ```rust
/// # use sundial_datetime::offset::UtcOffset;
///
/// let rome_summer = UtcOffset::from_hours_minutes(2, 0);
/// assert_eq!(rome_summer.whole_seconds(), 7_200);
/// assert_eq!(format!("{rome_summer}"), "+0200");
/// assert!(UtcOffset::UTC.is_utc());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// The zero offset.
    pub const UTC: UtcOffset = UtcOffset(0);

    /// Creates an offset from a signed count of seconds east of UTC.
    #[inline]
    pub const fn from_whole_seconds(seconds: i32) -> Self {
        UtcOffset(seconds)
    }

    /// Creates an offset from signed hour and minute components.
    ///
    /// Both components carry their own sign: `(-2, -30)` is `-0230`.
    #[inline]
    pub const fn from_hours_minutes(hours: i32, minutes: i32) -> Self {
        UtcOffset(hours * 3_600 + minutes * 60)
    }

    /// Returns the offset as signed seconds east of UTC.
    #[inline]
    pub const fn whole_seconds(&self) -> i32 {
        self.0
    }

    /// Returns `true` for the zero offset.
    #[inline]
    pub const fn is_utc(&self) -> bool {
        self.0 == 0
    }

    /// Parses an ISO-style suffix: `Z`, `±HHMM`, or `±HH:MM`.
    ///
    /// Returns `None` for anything else; the caller decides whether that
    /// is an error.
    pub(crate) fn from_iso_suffix(suffix: &str) -> Option<Self> {
        if suffix == "Z" {
            return Some(Self::UTC);
        }
        let mut chars = suffix.chars();
        let sign = match chars.next()? {
            '+' => 1,
            '-' => -1,
            _ => return None,
        };
        let rest = chars.as_str();
        let digits = match rest.len() {
            4 => rest.to_owned(),
            5 if rest.as_bytes()[2] == b':' => format!("{}{}", &rest[..2], &rest[3..]),
            _ => return None,
        };
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hours: i32 = digits[..2].parse().ok()?;
        let minutes: i32 = digits[2..].parse().ok()?;
        if minutes >= 60 {
            return None;
        }
        Some(UtcOffset(sign * (hours * 3_600 + minutes * 60)))
    }
}

impl Default for UtcOffset {
    #[inline]
    fn default() -> Self {
        Self::UTC
    }
}

impl std::fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{:02}{:02}", abs / 3_600, abs % 3_600 / 60)
    }
}

impl std::fmt::Debug for UtcOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UtcOffset({self})")
    }
}
